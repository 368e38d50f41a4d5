//! cognilexicon: semantic profiles and concept graphs for words
//!
//! Asks a generative text service for a structured description of a
//! concept (definition, etymology, synonyms, antonyms, neighbors, example
//! sentences) together with a small relationship graph, then normalizes the
//! reply and classifies failures into user-facing messages.
//!
//! # Core Concepts
//!
//! - **Fetcher**: builds the prompt, makes one completion call, normalizes
//! - **Completion client**: transport to the model (Gemini or a mock)
//! - **Mirror tokens**: named shortcuts to concepts, persisted as one list
//!
//! # Example
//!
//! ```
//! use cognilexicon::{MockClient, SemanticDataFetcher};
//! use std::sync::Arc;
//!
//! let reply = r#"{"profile":{"definition":"A happy accident."},"graph":{"nodes":[],"links":[]}}"#;
//! let fetcher = SemanticDataFetcher::new(Arc::new(MockClient::with_text(reply)));
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let data = runtime.block_on(fetcher.fetch("serendipity")).unwrap();
//! assert_eq!(data.graph.nodes.len(), 1);
//! ```

pub mod config;
pub mod llm;
pub mod render;
pub mod semantic;
pub mod tokens;

pub use config::{Config, ConfigError};
pub use llm::{CompletionClient, CompletionError, CompletionRequest, CompletionResponse, GeminiClient, MockClient};
pub use render::View;
pub use semantic::{FetchError, Graph, GraphLink, GraphNode, SemanticData, SemanticDataFetcher, SemanticProfile};
pub use tokens::{
    KeyValueStore, MemoryStorage, MirrorToken, MirrorTokenStore, OpenStore, SqliteStorage, StorageError,
    StorageResult, TokenError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
