//! Live round trip against the Gemini API.
//!
//! Run with: cargo test --test live_gemini -- --ignored
//! Requires: GEMINI_API_KEY (or API_KEY) and network access

use cognilexicon::{CompletionClient, Config, GeminiClient, SemanticDataFetcher};
use std::sync::Arc;

#[tokio::test]
#[ignore = "requires GEMINI_API_KEY and network access"]
async fn live_serendipity_profile() {
    let config = Config::from_env().expect("GEMINI_API_KEY must be set");
    let client = GeminiClient::from_config(&config).expect("client should build");
    assert!(client.is_available().await);

    let fetcher = SemanticDataFetcher::new(Arc::new(client));
    let data = fetcher
        .fetch("serendipity")
        .await
        .expect("live fetch should succeed");

    assert!(!data.profile.definition.is_empty());
    assert!(!data.graph.nodes.is_empty());
    assert!(
        data.graph.nodes.iter().any(|n| n.is_central()),
        "expected a central node, got {:?}",
        data.graph.nodes
    );
}
