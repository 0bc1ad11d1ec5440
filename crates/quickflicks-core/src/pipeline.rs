use crate::{
    chunking::chunk_words,
    compose::compose,
    config::PipelineConfig,
    error::{QuickflicksError, Result},
    summarizer::SummarizationModel,
    transcript::TranscriptSource,
    types::{Flashcards, TranscriptFragment, full_text},
    video_id::{VideoId, require_video_id},
};

/// Transcript-to-flashcards driver.
///
/// Holds its collaborators and no mutable state, so one instance can serve
/// independent calls.
#[derive(Debug)]
pub struct Pipeline<T, S>
where
    T: TranscriptSource,
    S: SummarizationModel,
{
    transcripts: T,
    summarizer: S,
    config: PipelineConfig,
}

impl<T, S> Pipeline<T, S>
where
    T: TranscriptSource,
    S: SummarizationModel,
{
    pub fn new(transcripts: T, summarizer: S, config: PipelineConfig) -> Self {
        Self {
            transcripts,
            summarizer,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch_transcript(&self, video_id: &VideoId) -> Result<Vec<TranscriptFragment>> {
        let fragments = self
            .transcripts
            .fetch(video_id)
            .await
            .map_err(|e| QuickflicksError::TranscriptUnavailable {
                video_id: video_id.to_string(),
                reason: e.to_string(),
            })?;

        tracing::info!(fragments = fragments.len(), "Fetched transcript");
        Ok(fragments)
    }

    /// Number of model calls [`Pipeline::summarize_text`] will make for `text`.
    pub fn chunk_count(&self, text: &str) -> usize {
        chunk_words(text, self.config.max_words).count()
    }

    /// Summarize `text` chunk by chunk, in order, and split the result into
    /// sentences. The first failing chunk aborts the whole run.
    #[tracing::instrument(skip_all, fields(max_words = self.config.max_words.get()))]
    pub async fn summarize_text(&self, text: &str) -> Result<Vec<String>> {
        let mut summaries = Vec::new();

        for (index, chunk) in chunk_words(text, self.config.max_words).enumerate() {
            tracing::debug!(
                chunk = index,
                words = chunk.split(' ').count(),
                "Summarizing chunk"
            );
            let summary = self
                .summarizer
                .summarize(&chunk, &self.config.summary)
                .await
                .inspect_err(|e| {
                    tracing::error!(chunk = index, error = %e, "Failed to summarize chunk")
                })
                .map_err(|e| QuickflicksError::Model {
                    reason: e.to_string(),
                })?;
            summaries.push(summary);
        }

        tracing::info!(chunks = summaries.len(), "Summarized transcript");
        Ok(compose(summaries))
    }

    /// URL in, flashcard sentences out.
    pub async fn summarize_video(&self, url: &str) -> Result<Vec<String>> {
        let video_id = require_video_id(url)?;
        let fragments = self.fetch_transcript(&video_id).await?;
        self.summarize_text(&full_text(&fragments)).await
    }

    /// Like [`Pipeline::summarize_video`], with the thumbnail for display.
    pub async fn flashcards(&self, url: &str) -> Result<Flashcards> {
        let video_id = require_video_id(url)?;
        let fragments = self.fetch_transcript(&video_id).await?;
        let sentences = self.summarize_text(&full_text(&fragments)).await?;

        Ok(Flashcards::new(video_id, sentences))
    }
}
