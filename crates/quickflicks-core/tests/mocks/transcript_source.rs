use std::sync::{Arc, Mutex};

use quickflicks_core::{TranscriptFragment, TranscriptSource, VideoId};

#[derive(Clone)]
pub struct MockTranscriptSource {
    pub fragments: Vec<TranscriptFragment>,
    pub calls: Arc<Mutex<Vec<VideoId>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriptSource {
    pub fn new(texts: &[&str]) -> Self {
        let fragments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptFragment {
                text: text.to_string(),
                start: i as f64,
                duration: 1.0,
            })
            .collect();

        Self {
            fragments,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fragments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl TranscriptSource for MockTranscriptSource {
    type Error = anyhow::Error;

    async fn fetch(&self, video_id: &VideoId) -> Result<Vec<TranscriptFragment>, Self::Error> {
        self.calls.lock().unwrap().push(video_id.clone());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.fragments.clone())
    }
}
