//! Depth-bounded text fragment extraction.

use fragmark_dom::hash::{fragment_hash, HashAlgorithm, DEFAULT_HASH_LEN};
use fragmark_dom::model::Node;
use fragmark_tags::is_extractable;

use crate::fragment::FragmentMap;

/// Default traversal depth bound.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    pub max_depth: usize,
    pub hash_len: usize,
    pub algorithm: HashAlgorithm,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            hash_len: DEFAULT_HASH_LEN,
            algorithm: HashAlgorithm::default(),
        }
    }
}

/// Walk the tree depth-first, replacing every captured text leaf with its
/// truncated content hash in place, and return the hash -> fragment map.
///
/// Capture rules, per frame (root at depth 0):
/// - a frame past the bound (`depth > max_depth`) returns without visiting
///   anything below it, so a branch that crosses the bound is abandoned
///   entirely; depth exactly `max_depth` is still processed
/// - a text leaf is captured when its TRIMMED text is non-empty and the
///   immediate parent tag is extractable (not `style`/`script`); the stored
///   text is the UNTRIMMED original
/// - the hash is computed over the untrimmed original text
/// - a text leaf outside any element (only possible in hand-built trees) has
///   no parent tag and is never captured
///
/// The caller hands over exclusive mutation of `root`: after this returns the
/// tree is the hash-substituted form.
pub fn extract_fragments(root: &mut Node, opts: &ExtractOptions) -> FragmentMap {
    let mut map = FragmentMap::default();
    traverse(root, 0, None, opts, &mut map);
    map
}

fn traverse(
    node: &mut Node,
    depth: usize,
    parent_tag: Option<&str>,
    opts: &ExtractOptions,
    map: &mut FragmentMap,
) {
    if depth > opts.max_depth {
        return;
    }

    match node {
        Node::Text { data } => {
            let Some(tag) = parent_tag else { return };
            if data.trim().is_empty() || !is_extractable(tag) {
                return;
            }
            let hash = fragment_hash(opts.algorithm, data, opts.hash_len);
            map.record(hash.clone(), std::mem::take(data), tag.to_string());
            *data = hash;
        }
        Node::Element { tag, nodes, .. } => {
            let tag = tag.clone();
            for child in nodes {
                traverse(child, depth + 1, Some(&tag), opts, map);
            }
        }
    }
}
