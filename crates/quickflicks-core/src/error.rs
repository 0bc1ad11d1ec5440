use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickflicksError {
    #[error("Invalid YouTube URL: {url}")]
    InvalidUrl { url: String },

    #[error("Transcript unavailable for video {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[error("Summarization failed: {reason}")]
    Model { reason: String },

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },
}

pub type Result<T> = std::result::Result<T, QuickflicksError>;
