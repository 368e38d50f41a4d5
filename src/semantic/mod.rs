//! Semantic profiles and concept graphs fetched from the completion service

mod error;
mod fetcher;
pub mod normalize;
pub mod prompt;
mod types;

pub use error::FetchError;
pub use fetcher::SemanticDataFetcher;
pub use types::{Graph, GraphLink, GraphNode, SemanticData, SemanticProfile, CENTRAL_GROUP};
