use std::fmt;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{QuickflicksError, Result};

/// A YouTube video identifier, e.g. `qYNweeDHiyU`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the id from an already parsed URL.
    ///
    /// Supported shapes:
    /// - `https://youtu.be/<id>`
    /// - `https://(www.)youtube.com/watch?v=<id>`
    /// - `https://(www.)youtube.com/embed/<id>` and `/v/<id>`
    pub fn from_url(url: &Url) -> Option<Self> {
        let id = match url.host_str()? {
            "youtu.be" => url.path().strip_prefix('/').map(str::to_string),
            "youtube.com" | "www.youtube.com" => {
                let path = url.path();
                if path == "/watch" {
                    url.query_pairs()
                        .filter(|(key, value)| key == "v" && !value.is_empty())
                        .map(|(_, value)| value.into_owned())
                        .next()
                } else if path.starts_with("/embed/") || path.starts_with("/v/") {
                    path.split('/').nth(2).map(str::to_string)
                } else {
                    None
                }
            }
            _ => None,
        }?;

        (!id.is_empty()).then_some(Self(id))
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse `url` and extract its video id.
///
/// A string that is not a URL at all is an [`QuickflicksError::InvalidUrl`];
/// a URL of an unsupported shape yields `Ok(None)`.
pub fn extract_video_id(url: &str) -> Result<Option<VideoId>> {
    let parsed = Url::parse(url.trim()).map_err(|_| QuickflicksError::InvalidUrl {
        url: url.to_string(),
    })?;
    Ok(VideoId::from_url(&parsed))
}

/// Like [`extract_video_id`], with an unsupported URL also an
/// [`QuickflicksError::InvalidUrl`].
pub fn require_video_id(url: &str) -> Result<VideoId> {
    extract_video_id(url)?.ok_or_else(|| QuickflicksError::InvalidUrl {
        url: url.to_string(),
    })
}

/// Thumbnail shown next to the flashcards
pub fn thumbnail_url(video_id: &VideoId) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}
