//! Fetch contract: what callers observe for each kind of upstream reply.

mod common;

use cognilexicon::semantic::normalize::DEFAULT_ETYMOLOGY;
use cognilexicon::{
    CompletionError, FetchError, GraphLink, GraphNode, MockClient, SemanticDataFetcher, SemanticProfile,
};
use common::{fetcher_replying, serendipity_reply};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn well_formed_reply_is_returned_unchanged() {
    let reply = serendipity_reply();
    let (fetcher, client) = fetcher_replying(reply.to_string());

    let data = fetcher.fetch("serendipity").await.unwrap();

    let expected_profile: SemanticProfile = serde_json::from_value(reply["profile"].clone()).unwrap();
    assert_eq!(data.profile, expected_profile);
    assert_eq!(serde_json::to_value(&data.graph).unwrap(), reply["graph"]);
    assert_eq!(data.graph.nodes.len(), 5);
    assert_eq!(data.graph.links.len(), 4);
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn fenced_reply_parses_like_bare_json() {
    let reply = serendipity_reply();
    let (bare, _) = fetcher_replying(reply.to_string());
    let (fenced, _) = fetcher_replying(format!("```json\n{}\n```", reply));
    let (untagged, _) = fetcher_replying(format!("  ```\n{}\n```  ", reply));

    let expected = bare.fetch("serendipity").await.unwrap();
    assert_eq!(fenced.fetch("serendipity").await.unwrap(), expected);
    assert_eq!(untagged.fetch("serendipity").await.unwrap(), expected);
}

#[tokio::test]
async fn sequence_fields_are_always_present() {
    let reply = json!({
        "profile": {
            "definition": "Something.",
            "domains": "Physics",
            "synonyms": null,
            "antonyms": 7,
            "exampleSentences": { "first": "x" }
        },
        "graph": { "nodes": "none", "links": false }
    });
    let (fetcher, _) = fetcher_replying(reply.to_string());

    let data = fetcher.fetch("thing").await.unwrap();
    let profile = serde_json::to_value(&data.profile).unwrap();
    for key in ["domains", "synonyms", "antonyms", "conceptualNeighbors", "exampleSentences"] {
        assert_eq!(profile[key], json!([]), "{key} should default to an empty array");
    }
    assert_eq!(data.profile.etymology, DEFAULT_ETYMOLOGY);
    assert_eq!(data.graph.nodes, vec![GraphNode::central("thing")]);
    assert!(data.graph.links.is_empty());
}

#[tokio::test]
async fn empty_node_list_keeps_upstream_links() {
    let mut reply = serendipity_reply();
    reply["graph"]["nodes"] = json!([]);
    let (fetcher, _) = fetcher_replying(reply.to_string());

    let data = fetcher.fetch("serendipity").await.unwrap();
    assert_eq!(data.graph.nodes, vec![GraphNode::new("serendipity", 1)]);
    assert_eq!(serde_json::to_value(&data.graph.links).unwrap(), reply["graph"]["links"]);
}

#[tokio::test]
async fn missing_or_empty_definition_fails_whatever_else_is_present() {
    for definition in [json!(null), json!(""), json!(false), json!(0)] {
        let mut reply = serendipity_reply();
        reply["profile"]["definition"] = definition.clone();
        let (fetcher, _) = fetcher_replying(reply.to_string());

        let err = fetcher.fetch("serendipity").await.unwrap_err();
        assert_eq!(err, FetchError::DataIncomplete, "definition {definition}");
    }

    let mut reply = serendipity_reply();
    reply["profile"].as_object_mut().unwrap().remove("definition");
    let (fetcher, _) = fetcher_replying(reply.to_string());
    assert_eq!(fetcher.fetch("serendipity").await.unwrap_err(), FetchError::DataIncomplete);
}

#[tokio::test]
async fn placeholder_definition_is_never_returned() {
    let reply = json!({ "profile": {}, "graph": {} });
    let (fetcher, _) = fetcher_replying(reply.to_string());

    assert_eq!(fetcher.fetch("void").await, Err(FetchError::DataIncomplete));
}

#[tokio::test]
async fn loosely_typed_nodes_are_kept_instead_of_replaced() {
    let reply = json!({
        "profile": { "definition": "Something." },
        "graph": {
            "nodes": [ { "id": "chance", "group": "2" }, { "id": "luck", "group": 2.0 } ],
            "links": []
        }
    });
    let (fetcher, _) = fetcher_replying(reply.to_string());

    let data = fetcher.fetch("x").await.unwrap();
    assert_eq!(data.graph.nodes, vec![GraphNode::new("chance", 2), GraphNode::new("luck", 2)]);
    assert!(data.graph.node("x").is_none());
}

#[tokio::test]
async fn link_values_and_endpoints_pass_through_unvalidated() {
    let reply = json!({
        "profile": { "definition": "Something." },
        "graph": {
            "nodes": [ { "id": "x", "group": 1 }, { "id": "y", "group": 2 } ],
            "links": [
                { "source": "x", "target": "y", "value": 7.5 },
                { "source": "y", "target": "x" },
                { "source": "x", "target": "ghost", "value": 42 }
            ]
        }
    });
    let (fetcher, _) = fetcher_replying(reply.to_string());

    let data = fetcher.fetch("x").await.unwrap();
    assert_eq!(
        data.graph.links,
        vec![
            GraphLink::new("x", "y", 8),
            GraphLink::new("y", "x", 0),
            GraphLink::new("x", "ghost", 42),
        ]
    );
}

async fn fetch_failing_with(error: CompletionError) -> FetchError {
    let fetcher = SemanticDataFetcher::new(Arc::new(MockClient::with_failure(error)));
    fetcher.fetch("test").await.unwrap_err()
}

fn status(code: u16, reason: &str, body: &str) -> CompletionError {
    CompletionError::Status {
        code,
        reason: reason.to_string(),
        body: body.to_string(),
    }
}

#[tokio::test]
async fn upstream_failures_map_to_user_messages() {
    assert_eq!(
        fetch_failing_with(CompletionError::Transport("error sending request".into())).await.to_string(),
        "Network error. Please check your internet connection and try again."
    );
    assert_eq!(
        fetch_failing_with(status(400, "Bad Request", "API key not valid")).await.to_string(),
        "Invalid request. The API could not process your query. Please try rephrasing it."
    );
    assert_eq!(
        fetch_failing_with(status(429, "Too Many Requests", "Rate limit exceeded")).await.to_string(),
        "API rate limit exceeded. Please wait a moment before trying again."
    );
    assert_eq!(
        fetch_failing_with(status(500, "Internal Server Error", "")).await.to_string(),
        "API server error. The service is temporarily unavailable. Please try again later."
    );
    assert_eq!(
        fetch_failing_with(CompletionError::Unavailable("Some other error".into())).await.to_string(),
        "An unexpected error occurred. Please try again."
    );
}

#[tokio::test]
async fn concurrent_fetches_are_independent() {
    let (fetcher, client) = fetcher_replying(serendipity_reply().to_string());

    let (a, b) = tokio::join!(fetcher.fetch("serendipity"), fetcher.fetch("chance"));
    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(client.call_count(), 2);
}
