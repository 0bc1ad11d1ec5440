use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::{
    error::{QuickflicksError, Result},
    provider::Provider,
    types::SummaryParams,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: Provider,
    pub chunking: ChunkingConfig,
    pub summary: SummaryParams,
    pub transcript: TranscriptConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Words per chunk handed to the model
    pub max_words: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS.get(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Caption languages in order of preference
    pub languages: Vec<String>,
    pub proxy: Option<String>,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
            proxy: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 60 }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

const DEFAULT_MAX_WORDS: NonZeroUsize = NonZeroUsize::new(500).unwrap();

/// What a single pipeline run needs beyond its collaborators.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub max_words: NonZeroUsize,
    pub summary: SummaryParams,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            summary: SummaryParams::default(),
        }
    }
}

/// `~/.config/quickflicks/config.toml` on Linux
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quickflicks").join("config.toml"))
}

impl Config {
    /// Load from `path`, or from the default location when it exists.
    ///
    /// An explicit path must exist; a missing default file means defaults.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => path,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::info!(path = %path.display(), "Loading config");
        let content = fs::read_to_string(&path)
            .await
            .map_err(|source| QuickflicksError::ConfigRead {
                path: path.clone(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| {
            Err(QuickflicksError::Config {
                reason: reason.to_string(),
            })
        };

        if self.chunking.max_words == 0 {
            return invalid("chunking.max_words must be greater than 0");
        }
        if self.summary.max_length == 0 {
            return invalid("summary.max_length must be greater than 0");
        }
        if self.summary.min_length > self.summary.max_length {
            return invalid("summary.min_length must not exceed summary.max_length");
        }
        if self.transcript.languages.is_empty() {
            return invalid("transcript.languages must list at least one language");
        }
        Ok(())
    }

    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let max_words =
            NonZeroUsize::new(self.chunking.max_words).ok_or_else(|| QuickflicksError::Config {
                reason: "chunking.max_words must be greater than 0".to_string(),
            })?;

        Ok(PipelineConfig {
            max_words,
            summary: self.summary.clone(),
        })
    }
}
