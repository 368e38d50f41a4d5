//! Semantic data fetcher: one completion call per concept
//!
//! The fetcher:
//! 1. Builds the prompt and output schema for the query
//! 2. Invokes the completion client once (no timeout, no retry)
//! 3. Unwraps, parses and normalizes the reply
//! 4. Adds a central node when the graph came back empty
//! 5. Rejects replies without a real definition
//!
//! Every failure is logged with its raw cause and then reduced to a
//! [`FetchError`] carrying the user-facing message.

use super::error::FetchError;
use super::normalize::{ensure_central_node, has_definition, normalize_graph, normalize_profile, parse_payload};
use super::prompt::{build_prompt, response_schema};
use super::types::SemanticData;
use crate::llm::{CompletionClient, CompletionRequest};
use std::sync::Arc;
use tracing::{debug, error};

/// Fetches a semantic profile and concept graph for a query.
///
/// Holds no mutable state; concurrent fetches are independent.
#[derive(Clone)]
pub struct SemanticDataFetcher {
    client: Arc<dyn CompletionClient>,
}

impl SemanticDataFetcher {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Build the completion request for `query`.
    pub fn request_for(query: &str) -> CompletionRequest {
        CompletionRequest::json(build_prompt(query), response_schema())
    }

    /// Fetch the profile and graph for `query`.
    ///
    /// `query` is expected to be non-blank; trimming is the caller's job.
    pub async fn fetch(&self, query: &str) -> Result<SemanticData, FetchError> {
        let request = Self::request_for(query);

        let response = self.client.complete(&request).await.map_err(|e| {
            let raw = e.to_string();
            error!(query, error = %raw, detail = ?e, "semantic data request failed");
            FetchError::classify(&raw)
        })?;

        let Some(text) = response.text else {
            error!(query, "completion returned no text");
            return Err(FetchError::Unexpected);
        };

        let data = parse_payload(&text).map_err(|e| {
            error!(query, error = %e, response = %text, "failed to parse semantic data");
            FetchError::Unexpected
        })?;

        let profile = normalize_profile(&data);
        let mut graph = normalize_graph(&data);
        ensure_central_node(&mut graph, query);

        if !has_definition(&data) {
            error!(
                query,
                response = %text,
                "incomplete data received: definition is missing"
            );
            return Err(FetchError::DataIncomplete);
        }

        debug!(
            query,
            nodes = graph.nodes.len(),
            links = graph.links.len(),
            "semantic data fetched"
        );
        Ok(SemanticData { profile, graph })
    }
}
