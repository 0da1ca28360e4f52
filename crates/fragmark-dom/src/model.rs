use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A node in a parsed markup tree.
///
/// Exactly two shapes exist: an element (tag name, attributes, ordered
/// children) and a text leaf. Text nodes never have children; only the shape
/// of the enum enforces this, no runtime checks are needed.
///
/// Wire format is tagged by `"type"`:
///
/// ```json
/// {"type":"element","tag":"p","nodes":[{"type":"text","data":"Hi"}]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        attrs: BTreeMap<String, String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        nodes: Vec<Node>,
    },
    Text {
        data: String,
    },
}

impl Node {
    /// New element with no attributes and no children.
    pub fn element(tag: impl Into<String>) -> Node {
        Node::Element {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            nodes: Vec::new(),
        }
    }

    /// New text leaf.
    pub fn text(data: impl Into<String>) -> Node {
        Node::Text { data: data.into() }
    }

    /// Add an attribute (builder style). No-op on text nodes.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Node {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.insert(key.into(), value.into());
        }
        self
    }

    /// Append a child (builder style). No-op on text nodes.
    pub fn with_child(mut self, child: Node) -> Node {
        self.push(child);
        self
    }

    /// Append a child. No-op on text nodes.
    pub fn push(&mut self, child: Node) {
        if let Node::Element { nodes, .. } = self {
            nodes.push(child);
        }
    }

    /// Tag name for elements, `None` for text leaves.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            Node::Text { .. } => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text { .. })
    }

    /// Count of all nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        node_count(Some(self))
    }
}

/// Count of all nodes (elements and text leaves) in a possibly-absent tree.
///
/// An absent tree counts 0. Iterative with an explicit work stack: the fold
/// must not grow the call stack with the tree's depth.
pub fn node_count(root: Option<&Node>) -> usize {
    let mut count = 0;
    let mut work: Vec<&Node> = root.into_iter().collect();
    while let Some(node) = work.pop() {
        count += 1;
        if let Node::Element { nodes, .. } = node {
            work.extend(nodes.iter());
        }
    }
    count
}

/// Length of the longest root-to-leaf path, root at depth 0.
///
/// Every level descended into adds one, text leaves included. An absent tree
/// has depth 0. Iterative, like [`node_count`].
pub fn max_depth(root: Option<&Node>) -> usize {
    let mut deepest = 0;
    let mut work: Vec<(&Node, usize)> = root.map(|node| (node, 0)).into_iter().collect();
    while let Some((node, depth)) = work.pop() {
        deepest = deepest.max(depth);
        if let Node::Element { nodes, .. } = node {
            work.extend(nodes.iter().map(|child| (child, depth + 1)));
        }
    }
    deepest
}

/// Whether a traversal bound of `bound` would be reached on this tree.
///
/// "Reached" means the actual depth is at least the bound.
pub fn depth_limit_reached(root: Option<&Node>, bound: usize) -> bool {
    max_depth(root) >= bound
}
