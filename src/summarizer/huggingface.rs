use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::errors::{DigestError, DigestResult};
use crate::summarizer::traits::Summarizer;

/// Longest input (in characters) sent to the model
pub const MAX_INPUT_CHARS: usize = 1024;
pub const MIN_SUMMARY_LENGTH: u32 = 50;
pub const MAX_SUMMARY_LENGTH: u32 = 150;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct InferenceSummary {
    summary_text: String,
}

/// Hugging Face hosted inference for a summarization model
pub struct HuggingFaceSummarizer {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HuggingFaceSummarizer {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> DigestResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    fn build_request(text: &str) -> InferenceRequest<'_> {
        InferenceRequest {
            inputs: truncate_chars(text, MAX_INPUT_CHARS),
            parameters: InferenceParameters {
                max_length: MAX_SUMMARY_LENGTH,
                min_length: MIN_SUMMARY_LENGTH,
                do_sample: false,
            },
        }
    }

    fn parse_response(body: &str) -> DigestResult<String> {
        let summaries: Vec<InferenceSummary> = serde_json::from_str(body)
            .map_err(|e| DigestError::Summarization(format!("malformed response: {}", e)))?;

        summaries
            .into_iter()
            .next()
            .map(|s| s.summary_text.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DigestError::Summarization("response contained no summary".to_string()))
    }
}

impl Summarizer for HuggingFaceSummarizer {
    fn summarize(&self, text: &str) -> DigestResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&Self::build_request(text))
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if status != reqwest::StatusCode::OK {
            return Err(DigestError::Summarization(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        Self::parse_response(&body)
    }
}

/// Longest prefix of `s` holding at most `max_chars` characters
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
