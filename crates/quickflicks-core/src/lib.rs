//! QuickFlicks Core Library
//!
//! Fetches YouTube transcripts, summarizes them chunk by chunk with a
//! pretrained model and splits the result into flashcard sentences.

pub mod chunking;
pub mod compose;
pub mod config;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod provider;
pub mod summarizer;
pub mod transcript;
pub mod types;
pub mod video_id;

// Re-export commonly used items at crate root
pub use chunking::{WordChunks, chunk_words};
pub use compose::compose;
pub use config::{Config, PipelineConfig, default_config_path};
pub use error::{QuickflicksError, Result};
pub use format::format_flashcards;
pub use pipeline::Pipeline;
pub use provider::{Provider, ProviderConfig};
pub use summarizer::{
    ChatSummarizer, HuggingFaceSummarizer, ProviderSummarizer, SummarizationModel, SummarizerError,
};
pub use transcript::{TranscriptError, TranscriptSource, YoutubeTranscriptSource};
pub use types::{Flashcards, SummaryParams, TranscriptFragment, full_text};
pub use video_id::{VideoId, extract_video_id, require_video_id, thumbnail_url};
