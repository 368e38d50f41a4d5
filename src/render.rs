//! Plain-text views of a fetched concept

use crate::semantic::{Graph, SemanticData, SemanticProfile};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Which view of a concept to show. A fresh search opens on the profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Profile,
    Graph,
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "profile" => Ok(View::Profile),
            "graph" => Ok(View::Graph),
            other => Err(format!("unknown view '{}': expected 'profile' or 'graph'", other)),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Profile => write!(f, "profile"),
            View::Graph => write!(f, "graph"),
        }
    }
}

fn section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}", title);
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

/// Render the profile of `concept`.
pub fn render_profile(concept: &str, profile: &SemanticProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", concept);
    let _ = writeln!(out, "{}", "=".repeat(concept.chars().count().max(1)));
    let _ = writeln!(out, "\nDefinition\n  {}", profile.definition);
    let _ = writeln!(out, "\nEtymology\n  {}", profile.etymology);
    section(&mut out, "Domains", &profile.domains);
    section(&mut out, "Synonyms", &profile.synonyms);
    section(&mut out, "Antonyms", &profile.antonyms);
    section(&mut out, "Conceptual neighbors", &profile.conceptual_neighbors);
    section(&mut out, "Examples", &profile.example_sentences);
    out
}

/// Render the graph as a node table followed by its links.
pub fn render_graph(graph: &Graph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<32}  {:>5}  {:>5}", "NODE", "GROUP", "LINKS");
    let _ = writeln!(out, "{}", "-".repeat(46));
    for node in &graph.nodes {
        let marker = if node.is_central() { "*" } else { " " };
        let _ = writeln!(
            out,
            "{}{:<31}  {:>5}  {:>5}",
            marker,
            node.id,
            node.group,
            graph.links_of(&node.id).count()
        );
    }

    if !graph.links.is_empty() {
        let _ = writeln!(out);
        for link in &graph.links {
            let _ = writeln!(out, "{} -> {} ({})", link.source, link.target, link.value);
        }
    }
    out
}

/// Render the selected view of a fetched concept.
pub fn render(concept: &str, data: &SemanticData, view: View) -> String {
    match view {
        View::Profile => render_profile(concept, &data.profile),
        View::Graph => render_graph(&data.graph),
    }
}
