//! Completion client: the generative text service behind the fetcher
//!
//! Defines the client trait and request/response types for asking an LLM
//! to produce JSON under an output schema. Two implementations:
//! - `GeminiClient`: posts to the Gemini `generateContent` endpoint (production)
//! - `MockClient`: returns preconfigured replies and records requests (testing)
//!
//! Error texts mirror what the upstream HTTP client reports. The status code
//! only ever appears embedded in the message (`[429 Too Many Requests]`),
//! and callers classify failures by inspecting that text.

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// MIME type requesting raw JSON output.
pub const JSON_MIME_TYPE: &str = "application/json";

/// A single completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRequest {
    /// Natural-language instruction sent to the model
    pub prompt: String,
    /// Requested output MIME type
    pub response_mime_type: String,
    /// Output-shape constraint in the service's schema dialect
    pub response_schema: serde_json::Value,
}

impl CompletionRequest {
    /// Request JSON output constrained by `schema`.
    pub fn json(prompt: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_mime_type: JSON_MIME_TYPE.to_string(),
            response_schema: schema,
        }
    }
}

/// The model's reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompletionResponse {
    /// Textual payload; `None` when the service returned no text part
    #[serde(default)]
    pub text: Option<String>,
}

impl CompletionResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Errors from completion client operations.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum CompletionError {
    /// The request never produced an HTTP response (DNS, connect, TLS).
    #[error("fetch failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status. The body is kept
    /// for diagnostics but stays out of the message text.
    #[error("[{code} {reason}]")]
    Status {
        code: u16,
        reason: String,
        body: String,
    },
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
    #[error("completion service unavailable: {0}")]
    Unavailable(String),
}

/// Client trait for the generative text service.
///
/// Abstracts over transport (HTTP, mock) so the fetcher does not depend
/// on how the model is reached.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Check whether the client is configured to reach the service.
    async fn is_available(&self) -> bool;

    /// Send one request and await the single reply.
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;
}

/// Mock client for testing: returns a preconfigured reply.
pub struct MockClient {
    reply: Result<CompletionResponse, CompletionError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockClient {
    /// Reply with `text` to every request.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_response(CompletionResponse::text(text))
    }

    /// Reply with an arbitrary response (e.g. one without text).
    pub fn with_response(response: CompletionResponse) -> Self {
        Self {
            reply: Ok(response),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Fail every request with `error`.
    pub fn with_failure(error: CompletionError) -> Self {
        Self {
            reply: Err(error),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of `complete` calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    async fn is_available(&self) -> bool {
        !matches!(self.reply, Err(CompletionError::Unavailable(_)))
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.reply.clone()
    }
}
