use std::sync::{Arc, Mutex};

use quickflicks_core::{SummarizationModel, SummaryParams};

/// Echoes every chunk back, or a fixed summary when one is set.
#[derive(Clone, Default)]
pub struct MockSummarizer {
    pub summary: Option<String>,
    pub calls: Arc<Mutex<Vec<(String, SummaryParams)>>>,
    /// Fail on the call with this index (0-based)
    pub fail_on_call: Option<usize>,
}

impl MockSummarizer {
    pub fn echo() -> Self {
        Self::default()
    }

    pub fn new(summary: &str) -> Self {
        Self {
            summary: Some(summary.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    pub fn chunks(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(chunk, _)| chunk.clone())
            .collect()
    }
}

impl SummarizationModel for MockSummarizer {
    type Error = anyhow::Error;

    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String, Self::Error> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push((text.to_string(), params.clone()));

        if self.fail_on_call == Some(index) {
            return Err(anyhow::anyhow!("model crashed on chunk {}", index));
        }
        Ok(self.summary.clone().unwrap_or_else(|| text.to_string()))
    }
}
