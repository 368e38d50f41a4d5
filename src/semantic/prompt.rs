//! Prompt text and output schema sent with every fetch
//!
//! Both are advisory: the service is expected, not guaranteed, to honor them.

use serde_json::{json, Value};

/// Instruction asking for a profile and a graph centered on `query`.
pub fn build_prompt(query: &str) -> String {
    format!(
        r#"For the concept "{query}", generate a detailed semantic profile and a knowledge graph.

The semantic profile must include:
- A concise definition.
- The etymology or origin of the word/concept.
- Primary conceptual domains it belongs to (e.g., "Physics", "Philosophy", "Art").
- A list of 3-5 synonyms.
- A list of 3-5 antonyms.
- A list of 3-5 conceptual neighbors (related but not synonymous concepts).
- At least 3 example sentences demonstrating its usage.

The knowledge graph must represent the relationships between the core concept and its related terms.
- The central node must be the query concept "{query}" itself, assigned to group 1.
- Other nodes should be related concepts like synonyms, antonyms, and conceptual neighbors.
- Links must connect the central node to the related concepts. The 'value' of the link should represent the strength of the relationship (e.g., synonyms have a higher value).
- The graph must have at least 5 nodes (including the central one) and 4 links originating from the central node.
- All node 'id's in links must correspond to an 'id' in the nodes list.

The output MUST be a single valid JSON object.
This object must have two top-level keys: "profile" and "graph".
The "profile" key must contain an object with the semantic profile data.
The "graph" key must contain an object with the knowledge graph data.
Strictly adhere to the provided JSON schema. All specified fields are required.
All fields in the profile must be populated with data and not be empty arrays.
"#
    )
}

fn string_field(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

fn string_list(description: &str) -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" }, "description": description })
}

/// Output schema in the Gemini schema dialect.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "required": ["profile", "graph"],
        "properties": {
            "profile": {
                "type": "OBJECT",
                "required": [
                    "definition",
                    "etymology",
                    "domains",
                    "synonyms",
                    "antonyms",
                    "conceptualNeighbors",
                    "exampleSentences"
                ],
                "properties": {
                    "definition": string_field("A concise definition."),
                    "etymology": string_field("The etymology or origin of the word/concept."),
                    "domains": string_list("Primary conceptual domains."),
                    "synonyms": string_list("A list of 3-5 synonyms."),
                    "antonyms": string_list("A list of 3-5 antonyms."),
                    "conceptualNeighbors": string_list("Related but not synonymous concepts."),
                    "exampleSentences": string_list("Example sentences demonstrating usage.")
                }
            },
            "graph": {
                "type": "OBJECT",
                "required": ["nodes", "links"],
                "properties": {
                    "nodes": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "required": ["id", "group"],
                            "properties": {
                                "id": string_field("The name of the concept/node."),
                                "group": {
                                    "type": "INTEGER",
                                    "description": "A number representing the node's group. The main concept should be group 1."
                                }
                            }
                        }
                    },
                    "links": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "required": ["source", "target", "value"],
                            "properties": {
                                "source": string_field("The ID of the source node."),
                                "target": string_field("The ID of the target node."),
                                "value": {
                                    "type": "INTEGER",
                                    "description": "The strength of the link, from 1 to 10."
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
