//! Gemini `generateContent` client.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Google API key header; keeps the key out of request URLs.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Longest slice of an error body kept in [`GenerationError::UnexpectedStatus`].
const ERROR_BODY_LIMIT: usize = 512;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Client for the generative endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: Url,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidBaseUrl`] if `base_url` or `model`
    /// do not form a valid URL.
    pub fn new(
        client: reqwest::Client,
        api_key: &str,
        base_url: &str,
        model: &str,
    ) -> Result<Self, GenerationError> {
        let endpoint = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .and_then(|base| base.join(&format!("v1beta/models/{model}:generateContent")))
            .map_err(|e| GenerationError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            endpoint,
        })
    }

    /// Sends `prompt` as the sole content part and returns the first
    /// candidate's text exactly as received.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] on transport failure, a non-success
    /// status, an unparseable envelope, or an envelope without text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "generator returned an error status");
            return Err(GenerationError::UnexpectedStatus {
                status: status.as_u16(),
                body: truncate(&text, ERROR_BODY_LIMIT),
            });
        }

        let envelope: GenerateResponse =
            serde_json::from_str(&text).map_err(GenerationError::Deserialize)?;
        let generated = envelope
            .into_text()
            .filter(|t| !t.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        tracing::debug!(bytes = generated.len(), "generator responded");
        Ok(generated)
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
