//! Helpers for parsing `fragmark-dom::Node` JSON with improved diagnostics.
//!
//! Motivation: serde's default tagged-enum error is technically correct but
//! often unhelpful for users generating tree fixtures by hand. These helpers
//! keep strict validation behavior unchanged while providing actionable
//! messages about the fields each node shape requires.

use std::fmt;

use fragmark_dom::model::Node;
use serde::de::Error as _;
use serde_json::Value;

/// A structured error for parsing a tree JSON payload.
#[derive(Debug)]
pub enum TreeJsonError {
    /// The input was not valid JSON.
    InvalidJson(serde_json::Error),
    /// The input JSON was valid, but a node is missing required fields.
    MissingRequiredFields {
        missing: Vec<&'static str>,
        node_type: String,
    },
    /// JSON was valid, but did not match the Node schema/shape.
    InvalidTreeShape(serde_json::Error),
}

impl fmt::Display for TreeJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeJsonError::InvalidJson(e) => {
                write!(f, "Invalid JSON: {e}")
            }
            TreeJsonError::MissingRequiredFields { missing, node_type } => {
                write!(
                    f,
                    "Invalid tree JSON: node of type '{node_type}' is missing required field(s): {}. \
                     An element node requires 'tag', a text node requires 'data', every node requires 'type'.",
                    missing.join(", ")
                )
            }
            TreeJsonError::InvalidTreeShape(e) => {
                write!(
                    f,
                    "Invalid tree JSON shape: {e}. Expected a node object tagged by 'type' \
                     ('element' or 'text')."
                )
            }
        }
    }
}

impl std::error::Error for TreeJsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TreeJsonError::InvalidJson(e) => Some(e),
            TreeJsonError::InvalidTreeShape(e) => Some(e),
            TreeJsonError::MissingRequiredFields { .. } => None,
        }
    }
}

/// Parse a tree JSON string with improved diagnostics for missing required
/// fields.
///
/// Strictness is unchanged: missing required fields still fails.
pub fn parse_tree_json_str(s: &str) -> Result<Node, TreeJsonError> {
    let v: Value = serde_json::from_str(s).map_err(TreeJsonError::InvalidJson)?;
    check_node_fields(&v)?;
    serde_json::from_value(v).map_err(TreeJsonError::InvalidTreeShape)
}

fn check_node_fields(v: &Value) -> Result<(), TreeJsonError> {
    let obj = v.as_object().ok_or_else(|| {
        TreeJsonError::InvalidTreeShape(serde_json::Error::custom("expected a JSON object"))
    })?;

    let node_type = match obj.get("type").and_then(Value::as_str) {
        Some(t) => t.to_string(),
        None => {
            return Err(TreeJsonError::MissingRequiredFields {
                missing: vec!["type"],
                node_type: "unknown".to_string(),
            });
        }
    };

    let required: &[&'static str] = match node_type.as_str() {
        "element" => &["tag"],
        "text" => &["data"],
        // Let serde produce the unknown-variant error.
        _ => &[],
    };

    let missing: Vec<&'static str> = required
        .iter()
        .copied()
        .filter(|k| !obj.contains_key(*k))
        .collect();
    if !missing.is_empty() {
        return Err(TreeJsonError::MissingRequiredFields { missing, node_type });
    }

    if let Some(Value::Array(children)) = obj.get("nodes") {
        for child in children {
            check_node_fields(child)?;
        }
    }
    Ok(())
}
