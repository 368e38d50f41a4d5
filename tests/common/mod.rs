//! Shared fixtures for integration tests
//!
//! Builds upstream replies shaped like what the completion service returns.

use cognilexicon::{MockClient, SemanticDataFetcher};
use serde_json::{json, Value};
use std::sync::Arc;

/// A complete reply for "serendipity": four populated lists, three example
/// sentences, five nodes and four links whose endpoints are all declared.
pub fn serendipity_reply() -> Value {
    json!({
        "profile": {
            "definition": "The occurrence of events by chance in a happy or beneficial way.",
            "etymology": "Coined by Horace Walpole in 1754 after the Persian fairy tale The Three Princes of Serendip.",
            "domains": ["Language", "Psychology"],
            "synonyms": ["chance", "fluke", "luck"],
            "antonyms": ["misfortune", "design", "intention"],
            "conceptualNeighbors": ["discovery", "coincidence", "fortune"],
            "exampleSentences": [
                "Meeting her old friend in Paris was pure serendipity.",
                "Penicillin was discovered through serendipity.",
                "The band owes its name to a moment of serendipity."
            ]
        },
        "graph": {
            "nodes": [
                { "id": "serendipity", "group": 1 },
                { "id": "chance", "group": 2 },
                { "id": "fluke", "group": 2 },
                { "id": "misfortune", "group": 3 },
                { "id": "discovery", "group": 4 }
            ],
            "links": [
                { "source": "serendipity", "target": "chance", "value": 8 },
                { "source": "serendipity", "target": "fluke", "value": 7 },
                { "source": "serendipity", "target": "misfortune", "value": 2 },
                { "source": "serendipity", "target": "discovery", "value": 5 }
            ]
        }
    })
}

/// A fetcher whose client answers every request with `reply`.
pub fn fetcher_replying(reply: impl Into<String>) -> (SemanticDataFetcher, Arc<MockClient>) {
    let client = Arc::new(MockClient::with_text(reply));
    (SemanticDataFetcher::new(client.clone()), client)
}
