//! Gemini `generateContent` client

use super::{CompletionClient, CompletionError, CompletionRequest, CompletionResponse};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the Gemini API.
///
/// One POST per request, no timeout and no retry: the call runs to
/// completion or to failure.
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| CompletionError::Unavailable(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Build a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, CompletionError> {
        Self::new(&config.api_base, &config.api_key, &config.model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    fn headers(&self) -> Result<HeaderMap, CompletionError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| CompletionError::Unavailable(format!("invalid api key header: {e}")))?,
        );
        Ok(headers)
    }
}

/// Request body for `generateContent`.
pub(crate) fn request_body(request: &CompletionRequest) -> Value {
    json!({
        "contents": [
            { "role": "user", "parts": [ { "text": request.prompt } ] }
        ],
        "generationConfig": {
            "responseMimeType": request.response_mime_type,
            "responseSchema": request.response_schema,
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Concatenate the text parts of the first candidate.
fn response_text(response: &GenerateContentResponse) -> Option<String> {
    let parts = &response.candidates.first()?.content.as_ref()?.parts;
    let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
    if texts.is_empty() {
        None
    } else {
        Some(texts.concat())
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let response = self
            .http
            .post(self.endpoint())
            .headers(self.headers()?)
            .json(&request_body(request))
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        let text = response_text(&parsed);
        debug!(
            model = %self.model,
            chars = text.as_ref().map(|t| t.len()).unwrap_or(0),
            "completion received"
        );
        Ok(CompletionResponse { text })
    }
}
