//! Boundary operations.
//!
//! Atomic operations (markup -> tree, tree -> markup) and compound
//! operations (markup -> fragments, markup -> hashed/masked markup). Every
//! compound operation produces exactly what chaining the atomic ones would;
//! the compound entry points exist so callers get one call and one
//! size-limit check.
//!
//! Error posture: malformed markup is never an error (the decoder heals),
//! a reached depth bound is a reported boolean, and absent trees are empty
//! results. The only fatal condition at this layer is an oversized input,
//! rejected before decode.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use fragmark_codec::{decode, encode, encode_as_lines};
use fragmark_dom::model::{depth_limit_reached, max_depth, node_count, Node};
use fragmark_extract::{extract_fragments, ExtractOptions, FragmentMap};
use fragmark_rewrite::{apply_hash_mapping, mask_mapping};

use crate::limits::MAX_MARKUP_BYTES;
use crate::tree_json::TreeJsonError;

/// Failure at the boundary, before any core operation runs.
#[derive(Debug)]
pub enum BoundaryError {
    /// Markup input exceeded the size limit. Fatal for the request; never
    /// retried.
    SizeLimitExceeded { size: usize, limit: usize },
    /// A supplied tree JSON payload did not parse.
    InvalidTreeJson(TreeJsonError),
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryError::SizeLimitExceeded { size, limit } => {
                write!(
                    f,
                    "Markup input of {size} bytes exceeds the {limit} byte limit."
                )
            }
            BoundaryError::InvalidTreeJson(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for BoundaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoundaryError::SizeLimitExceeded { .. } => None,
            BoundaryError::InvalidTreeJson(e) => Some(e),
        }
    }
}

impl From<TreeJsonError> for BoundaryError {
    fn from(e: TreeJsonError) -> Self {
        BoundaryError::InvalidTreeJson(e)
    }
}

fn check_size(markup: &str) -> Result<(), BoundaryError> {
    if markup.len() > MAX_MARKUP_BYTES {
        return Err(BoundaryError::SizeLimitExceeded {
            size: markup.len(),
            limit: MAX_MARKUP_BYTES,
        });
    }
    Ok(())
}

/// Tree plus shape metrics, as reported to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeResponse {
    pub tree: Option<Node>,
    pub node_count: usize,
    pub max_depth: usize,
}

/// Extraction result plus depth reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentsResponse {
    pub fragments: FragmentMap,
    pub total_fragments: usize,
    pub max_depth_reached: bool,
}

// ---------------------------------------------------------------------------
// Atomic operations
// ---------------------------------------------------------------------------

/// Parse markup into a tree and report its shape.
pub fn markup_to_tree(markup: &str) -> Result<TreeResponse, BoundaryError> {
    check_size(markup)?;
    let tree = decode(markup);
    Ok(TreeResponse {
        node_count: node_count(tree.as_ref()),
        max_depth: max_depth(tree.as_ref()),
        tree,
    })
}

/// Serialize a tree back to markup.
pub fn tree_to_markup(root: &Node) -> String {
    encode(root)
}

/// Indented line listing of a tree, one node per line.
pub fn tree_to_lines(root: &Node) -> String {
    encode_as_lines(root).join("\n")
}

// ---------------------------------------------------------------------------
// Compound operations
// ---------------------------------------------------------------------------

/// Decode + encode round trip. Empty input yields an empty string.
pub fn markup_to_markup(markup: &str) -> Result<String, BoundaryError> {
    check_size(markup)?;
    Ok(decode(markup).as_ref().map(encode).unwrap_or_default())
}

/// Decode + line listing. Empty input yields an empty string.
pub fn markup_to_lines(markup: &str) -> Result<String, BoundaryError> {
    check_size(markup)?;
    Ok(decode(markup)
        .as_ref()
        .map(tree_to_lines)
        .unwrap_or_default())
}

/// Extract fragments from a tree handed over by value, returning the
/// hash-substituted tree together with the map.
pub fn tree_to_fragments(mut root: Node, max_depth_bound: usize) -> (Node, FragmentsResponse) {
    let opts = ExtractOptions {
        max_depth: max_depth_bound,
        ..Default::default()
    };
    let reached = depth_limit_reached(Some(&root), max_depth_bound);
    let fragments = extract_fragments(&mut root, &opts);
    let response = FragmentsResponse {
        total_fragments: fragments.len(),
        max_depth_reached: reached,
        fragments,
    };
    (root, response)
}

/// Decode + extract. The intermediate (hash-substituted) tree is dropped.
pub fn markup_to_fragments(
    markup: &str,
    max_depth_bound: usize,
) -> Result<FragmentsResponse, BoundaryError> {
    check_size(markup)?;
    match decode(markup) {
        Some(root) => {
            let (_, response) = tree_to_fragments(root, max_depth_bound);
            Ok(response)
        }
        None => Ok(FragmentsResponse {
            fragments: FragmentMap::default(),
            total_fragments: 0,
            max_depth_reached: false,
        }),
    }
}

/// Decode + extract + encode: markup with every captured fragment replaced
/// by its content hash.
pub fn markup_to_hashed_markup(
    markup: &str,
    max_depth_bound: usize,
) -> Result<String, BoundaryError> {
    check_size(markup)?;
    match decode(markup) {
        Some(root) => {
            let (hashed, _) = tree_to_fragments(root, max_depth_bound);
            Ok(encode(&hashed))
        }
        None => Ok(String::new()),
    }
}

/// Decode + extract + mask + reintegrate + encode: markup with every
/// captured fragment's non-space characters replaced by `mask_char`,
/// preserving spaces and fragment length.
pub fn markup_to_masked_markup(
    markup: &str,
    max_depth_bound: usize,
    mask_char: char,
) -> Result<String, BoundaryError> {
    check_size(markup)?;
    match decode(markup) {
        Some(root) => {
            let (hashed, response) = tree_to_fragments(root, max_depth_bound);
            let masked = apply_hash_mapping(&hashed, &mask_mapping(&response.fragments, mask_char));
            Ok(encode(&masked))
        }
        None => Ok(String::new()),
    }
}

/// Reintegrate an externally supplied hash -> replacement mapping and
/// serialize the result.
pub fn apply_hash_mapping_to_tree(root: &Node, mapping: &BTreeMap<String, String>) -> String {
    encode(&apply_hash_mapping(root, mapping))
}
