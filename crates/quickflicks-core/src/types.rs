use serde::{Deserialize, Serialize};

use crate::video_id::{VideoId, thumbnail_url};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptFragment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Join fragment texts in order with single spaces.
pub fn full_text(fragments: &[TranscriptFragment]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryParams {
    pub max_length: u32,
    pub min_length: u32,
    /// Greedy decoding, no sampling
    pub deterministic: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            max_length: 100,
            min_length: 30,
            deterministic: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcards {
    pub video_id: VideoId,
    pub thumbnail_url: String,
    pub sentences: Vec<String>,
}

impl Flashcards {
    pub fn new(video_id: VideoId, sentences: Vec<String>) -> Self {
        Self {
            thumbnail_url: thumbnail_url(&video_id),
            video_id,
            sentences,
        }
    }
}
