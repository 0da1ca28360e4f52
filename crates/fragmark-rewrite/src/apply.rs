//! Reintegration: apply an externally supplied hash -> replacement-text
//! mapping onto a tree.
//!
//! This is the structural strategy: a text node is rewritten only when its
//! content EXACTLY equals a mapping key. Substring replacement over the
//! serialized markup would over-replace when a hash value happens to occur
//! inside unrelated text, so it is deliberately not offered.

use std::collections::BTreeMap;

use fragmark_dom::model::Node;

/// Return a copy of the tree with every exact-match text node replaced.
///
/// Guarantees:
/// - mapping keys absent from the tree are silently ignored
/// - tree text absent from the mapping is left unchanged (a residual hash
///   stays literal hash text)
/// - replacement text is inserted verbatim: empty strings delete the visible
///   text, markup-special characters and arbitrary Unicode pass through
///   without re-escaping
pub fn apply_hash_mapping(root: &Node, mapping: &BTreeMap<String, String>) -> Node {
    match root {
        Node::Text { data } => {
            let data = mapping.get(data).unwrap_or(data).clone();
            Node::Text { data }
        }
        Node::Element { tag, attrs, nodes } => Node::Element {
            tag: tag.clone(),
            attrs: attrs.clone(),
            nodes: nodes
                .iter()
                .map(|child| apply_hash_mapping(child, mapping))
                .collect(),
        },
    }
}
