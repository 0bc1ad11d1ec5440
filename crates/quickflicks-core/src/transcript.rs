use std::{
    fmt::{self, Debug, Display},
    future::Future,
    time::Duration,
};

use reqwest::Client;
use yt_transcript_rs::{
    api::YouTubeTranscriptApi,
    errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason},
};

use crate::{config::TranscriptConfig, types::TranscriptFragment, video_id::VideoId};

/// Supplies the timestamped transcript of a video.
pub trait TranscriptSource {
    type Error: Display + Debug;

    fn fetch(
        &self,
        video_id: &VideoId,
    ) -> impl Future<Output = Result<Vec<TranscriptFragment>, Self::Error>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
    #[error("YouTube is blocking requests from this IP")]
    RequestBlocked,
    #[error("Video is unavailable")]
    VideoUnavailable,
    #[error("Transcripts are disabled for this video")]
    TranscriptsDisabled,
    #[error("No transcript found for languages {requested:?}")]
    NoTranscriptFound { requested: Vec<String> },
    #[error("{0}")]
    Fetch(String),
}

impl TranscriptError {
    fn from_retrieval(err: CouldNotRetrieveTranscript, languages: &[String]) -> Self {
        match &err.reason {
            Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled) => {
                Self::TranscriptsDisabled
            }
            Some(CouldNotRetrieveTranscriptReason::VideoUnavailable) => Self::VideoUnavailable,
            Some(CouldNotRetrieveTranscriptReason::NoTranscriptFound { .. }) => {
                Self::NoTranscriptFound {
                    requested: languages.to_vec(),
                }
            }
            Some(
                CouldNotRetrieveTranscriptReason::IpBlocked(_)
                | CouldNotRetrieveTranscriptReason::RequestBlocked(_),
            ) => Self::RequestBlocked,
            _ => Self::Fetch(err.to_string()),
        }
    }
}

/// Fetches captions with `yt-transcript-rs`.
///
/// Languages are tried in preference order; within a language manually
/// created captions win over auto-generated ones.
pub struct YoutubeTranscriptSource {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl Debug for YoutubeTranscriptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YoutubeTranscriptSource")
            .field("languages", &self.languages)
            .finish_non_exhaustive()
    }
}

impl YoutubeTranscriptSource {
    pub fn new(config: &TranscriptConfig, timeout: Duration) -> Result<Self, TranscriptError> {
        let mut builder = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .default_headers(Self::default_headers());
        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        let api = YouTubeTranscriptApi::new(None, None, Some(builder.build()?))
            .map_err(|e| TranscriptError::Fetch(e.to_string()))?;

        Ok(Self {
            api,
            languages: config.languages.clone(),
        })
    }

    fn default_headers() -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("en-US,en;q=0.9"),
        );
        headers
    }
}

impl TranscriptSource for YoutubeTranscriptSource {
    type Error = TranscriptError;

    #[tracing::instrument(skip(self), fields(languages = ?self.languages))]
    async fn fetch(&self, video_id: &VideoId) -> Result<Vec<TranscriptFragment>, Self::Error> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let transcript = self
            .api
            .fetch_transcript(video_id.as_str(), &languages, false)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch transcript"))
            .map_err(|e| TranscriptError::from_retrieval(e, &self.languages))?;

        tracing::info!(
            language = %transcript.language_code,
            generated = transcript.is_generated,
            "Fetched caption track"
        );

        Ok(transcript
            .snippets
            .iter()
            .filter_map(|s| fragment(&s.text, s.start, s.duration))
            .collect())
    }
}

/// Whitespace-normalised fragment, or `None` for a caption event with no text.
fn fragment(text: &str, start: f64, duration: f64) -> Option<TranscriptFragment> {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!text.is_empty()).then_some(TranscriptFragment {
        text,
        start,
        duration,
    })
}
