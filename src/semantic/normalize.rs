//! Normalization of raw model output into profile and graph values
//!
//! The raw parsed JSON is never mutated. Normalized values are built next to
//! it so callers can still inspect what the model actually sent (the
//! definition check runs against the raw value, not the defaulted one).

use super::types::{Graph, GraphLink, GraphNode, SemanticProfile};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_DEFINITION: &str = "No definition provided.";
pub const DEFAULT_ETYMOLOGY: &str = "No etymology provided.";

/// Reasons a payload could not be read as a JSON document.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is JSON null")]
    Null,
}

/// Strip a markdown code fence from model output.
///
/// Finds the first ```` ``` ```` (optionally tagged `json`) and keeps the
/// content up to the next fence, trimmed. Text without a complete fence, or
/// with an empty one, is returned unchanged.
pub fn unwrap_fence(text: &str) -> &str {
    let Some(start) = text.find("```") else {
        return text;
    };
    let after = &text[start + 3..];
    let after = after.strip_prefix("json").unwrap_or(after).trim_start();

    match after.find("```") {
        Some(end) => {
            let inner = after[..end].trim_end();
            if inner.is_empty() {
                text
            } else {
                inner
            }
        }
        None => text,
    }
}

/// Trim, unwrap and parse a textual payload.
pub fn parse_payload(text: &str) -> Result<Value, PayloadError> {
    let json_text = unwrap_fence(text.trim());
    let value: Value = serde_json::from_str(json_text)?;
    if value.is_null() {
        return Err(PayloadError::Null);
    }
    Ok(value)
}

/// Loose truthiness: `null`, `false`, `0` and `""` are falsy, everything
/// else (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Truthy child `key` of `parent`, if any.
fn section<'a>(parent: &'a Value, key: &str) -> Option<&'a Value> {
    parent.get(key).filter(|v| is_truthy(v))
}

fn field<'a>(section: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    section.and_then(|s| s.get(key))
}

fn text_or(value: Option<&Value>, placeholder: &str) -> String {
    match value.filter(|v| is_truthy(v)) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => placeholder.to_string(),
    }
}

fn string_list(value: Option<&Value>, name: &str) -> Vec<String> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    let strings: Vec<String> = items
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();
    if strings.len() != items.len() {
        debug!(field = name, dropped = items.len() - strings.len(), "non-string list entries dropped");
    }
    strings
}

fn typed_list<T: DeserializeOwned>(value: Option<&Value>, name: &str) -> Vec<T> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    let parsed: Vec<T> = items
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect();
    if parsed.len() != items.len() {
        debug!(field = name, dropped = items.len() - parsed.len(), "malformed graph entries dropped");
    }
    parsed
}

/// Whether the raw payload carries a usable (truthy) `profile.definition`.
pub fn has_definition(data: &Value) -> bool {
    field(section(data, "profile"), "definition")
        .map(is_truthy)
        .unwrap_or(false)
}

/// Build a profile from raw data, defaulting every missing field.
pub fn normalize_profile(data: &Value) -> SemanticProfile {
    let profile = section(data, "profile");

    SemanticProfile {
        definition: text_or(field(profile, "definition"), DEFAULT_DEFINITION),
        etymology: text_or(field(profile, "etymology"), DEFAULT_ETYMOLOGY),
        domains: string_list(field(profile, "domains"), "domains"),
        synonyms: string_list(field(profile, "synonyms"), "synonyms"),
        antonyms: string_list(field(profile, "antonyms"), "antonyms"),
        conceptual_neighbors: string_list(field(profile, "conceptualNeighbors"), "conceptualNeighbors"),
        example_sentences: string_list(field(profile, "exampleSentences"), "exampleSentences"),
    }
}

/// Build a graph from raw data; missing lists become empty.
///
/// Only nodes without a string `id` and links without string endpoints are
/// dropped; `group` and `value` are read leniently. Link endpoints are taken
/// as given and not checked against node ids.
pub fn normalize_graph(data: &Value) -> Graph {
    let graph = section(data, "graph");

    Graph {
        nodes: typed_list::<GraphNode>(field(graph, "nodes"), "nodes"),
        links: typed_list::<GraphLink>(field(graph, "links"), "links"),
    }
}

/// Add a lone central node for `query` when the graph has no nodes.
pub fn ensure_central_node(graph: &mut Graph, query: &str) {
    if graph.nodes.is_empty() {
        graph.nodes.push(GraphNode::central(query));
    }
}
