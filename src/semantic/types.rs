//! Profile and graph types returned by the fetcher

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Group assigned to the queried concept in a graph.
pub const CENTRAL_GROUP: i64 = 1;

/// Structured lexical description of a concept.
///
/// Serializes with the same camelCase keys the service is asked to produce,
/// so a returned profile compares equal to the upstream JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticProfile {
    pub definition: String,
    pub etymology: String,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    /// Related but not synonymous concepts
    #[serde(default)]
    pub conceptual_neighbors: Vec<String>,
    #[serde(default)]
    pub example_sentences: Vec<String>,
}

/// A concept in the relationship graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphNode {
    /// Concept label, unique within a graph
    pub id: String,
    /// Missing or unreadable groups read as 0 (a related concept)
    #[serde(default, deserialize_with = "lenient_int")]
    pub group: i64,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, group: i64) -> Self {
        Self {
            id: id.into(),
            group,
        }
    }

    /// The node standing for the queried concept.
    pub fn central(id: impl Into<String>) -> Self {
        Self::new(id, CENTRAL_GROUP)
    }

    pub fn is_central(&self) -> bool {
        self.group == CENTRAL_GROUP
    }
}

/// A weighted relationship between two nodes.
///
/// `value` is a presentation weight (intended 1..=10) and is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    #[serde(default, deserialize_with = "lenient_int")]
    pub value: i64,
}

impl GraphLink {
    pub fn new(source: impl Into<String>, target: impl Into<String>, value: i64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            value,
        }
    }
}

/// Read an integer from any JSON number or numeric string.
///
/// Fractions are rounded; anything unreadable becomes 0 instead of failing
/// the whole entry.
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match &value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.round() as i64))
        }
        _ => None,
    };
    Ok(number.unwrap_or(0))
}

/// Node/link structure around a concept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub links: Vec<GraphLink>,
}

impl Graph {
    /// Links touching the node `id`, in either direction.
    pub fn links_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a GraphLink> + 'a {
        self.links
            .iter()
            .filter(move |l| l.source == id || l.target == id)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Result of a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticData {
    pub profile: SemanticProfile,
    pub graph: Graph,
}
