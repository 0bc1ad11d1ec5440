use std::{
    fmt::{Debug, Display},
    future::Future,
    time::Duration,
};

use reqwest::Client;
use serde::Deserialize;

use crate::{error::Result, provider::Provider, types::SummaryParams};

/// Turns a chunk of text into a shorter summary.
pub trait SummarizationModel {
    type Error: Display + Debug;

    fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> impl Future<Output = std::result::Result<String, Self::Error>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

static CHAT_SYSTEM_PROMPT: &str = "You summarize excerpts of video transcripts. \
Reply with a short plain-prose summary written in complete sentences that end with \
a period. Do not use lists, headings or quotes. Do not add information that is not \
in the excerpt.";

/// Summarization through the Hugging Face inference API.
#[derive(Debug, Clone)]
pub struct HuggingFaceSummarizer {
    client: Client,
    api_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct HfSummary {
    summary_text: String,
}

impl HuggingFaceSummarizer {
    pub fn new(client: Client, api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    fn request_body(text: &str, params: &SummaryParams) -> serde_json::Value {
        serde_json::json!({
            "inputs": text,
            "parameters": {
                "max_length": params.max_length,
                "min_length": params.min_length,
                "do_sample": !params.deterministic,
            },
        })
    }
}

impl SummarizationModel for HuggingFaceSummarizer {
    type Error = SummarizerError;

    async fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> std::result::Result<String, Self::Error> {
        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&Self::request_body(text, params))
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(SummarizerError::Api { status, message });
        }

        let body = resp.json::<serde_json::Value>().await?;
        parse_hf_summary(body)
    }
}

fn parse_hf_summary(body: serde_json::Value) -> std::result::Result<String, SummarizerError> {
    let summaries: Vec<HfSummary> = serde_json::from_value(body.clone())
        .map_err(|_| SummarizerError::InvalidResponse(body.to_string()))?;

    summaries
        .into_iter()
        .next()
        .map(|s| s.summary_text)
        .ok_or_else(|| SummarizerError::InvalidResponse(body.to_string()))
}

/// Summarization through an OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone)]
pub struct ChatSummarizer {
    client: Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl ChatSummarizer {
    pub fn new(
        client: Client,
        api_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    fn request_body(&self, text: &str, params: &SummaryParams) -> serde_json::Value {
        let user_prompt = format!(
            "Summarize this excerpt in at least {} and at most {} tokens:\n\n{}",
            params.min_length, params.max_length, text
        );
        let temperature = if params.deterministic { 0.0 } else { 0.3 };

        serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": CHAT_SYSTEM_PROMPT,
                },
                {
                    "role": "user",
                    "content": user_prompt,
                },
            ],
            "max_tokens": params.max_length,
            "temperature": temperature,
        })
    }
}

impl SummarizationModel for ChatSummarizer {
    type Error = SummarizerError;

    async fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> std::result::Result<String, Self::Error> {
        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(text, params))
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(SummarizerError::Api { status, message });
        }

        let response = resp.json::<serde_json::Value>().await?;
        parse_chat_summary(&response)
    }
}

fn parse_chat_summary(
    response: &serde_json::Value,
) -> std::result::Result<String, SummarizerError> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or_else(|| SummarizerError::InvalidResponse(format!("{:?}", response)))
}

/// The summarizer selected by [`Provider`].
#[derive(Debug, Clone)]
pub enum ProviderSummarizer {
    HuggingFace(HuggingFaceSummarizer),
    Chat(ChatSummarizer),
}

impl ProviderSummarizer {
    pub fn from_provider(provider: &Provider, timeout: Duration) -> Result<Self> {
        let config = provider.config();
        let api_key = provider.validate_api_key()?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(match provider {
            Provider::HuggingFace => Self::HuggingFace(HuggingFaceSummarizer::new(
                client,
                config.api_url,
                api_key,
            )),
            Provider::Openai | Provider::Grok | Provider::Gemini => Self::Chat(
                ChatSummarizer::new(client, config.api_url, config.model, api_key),
            ),
        })
    }
}

impl SummarizationModel for ProviderSummarizer {
    type Error = SummarizerError;

    async fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> std::result::Result<String, Self::Error> {
        match self {
            Self::HuggingFace(summarizer) => summarizer.summarize(text, params).await,
            Self::Chat(summarizer) => summarizer.summarize(text, params).await,
        }
    }
}
