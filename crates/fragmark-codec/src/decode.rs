//! Markup string -> node tree, with structural healing.
//!
//! The decoder never fails. Malformed input (unclosed tags, mis-nesting,
//! stray end tags) produces a deterministic best-effort tree that preserves
//! every text run the tokenizer emits.

use fragmark_dom::model::Node;
use fragmark_tags::is_void;

use crate::tokenizer::{Token, Tokenizer};

/// Maximum element nesting depth a decoded tree can reach.
///
/// Elements opened past this bound are kept as childless siblings instead of
/// nesting further, so every later walk over a decoded tree (metrics,
/// encoding, extraction, reintegration, serde) recurses a bounded number of
/// frames no matter how deeply the input nests. Far beyond any real
/// document's depth; only adversarial input hits it.
pub const MAX_ELEMENT_DEPTH: usize = 512;

/// Parse markup into a tree.
///
/// Returns `None` when the input holds no content at all (empty string,
/// whitespace, or nothing but dropped constructs like comments). This is a
/// deliberate non-error terminal case.
///
/// Healing policy:
/// - an end tag with no matching open element is ignored
/// - an end tag for an outer element implicitly closes everything inside it
/// - elements still open at EOF are closed
/// - void elements never take children
/// - elements opened at [`MAX_ELEMENT_DEPTH`] stay childless: nesting
///   flattens at the cap, text content is preserved in the deepest open
///   element
/// - at the top level, whitespace-only text is dropped; a single remaining
///   element becomes the root, anything else is wrapped in an `html` root
pub fn decode(markup: &str) -> Option<Node> {
    let mut builder = TreeBuilder::default();
    for token in Tokenizer::new(markup) {
        match token {
            Token::StartTag {
                name,
                attrs,
                self_closing,
            } => builder.start_tag(name, attrs, self_closing),
            Token::EndTag { name } => builder.end_tag(&name),
            Token::Text(data) => builder.text(data),
        }
    }
    builder.finish()
}

#[derive(Default)]
struct TreeBuilder {
    /// Open elements, outermost first.
    stack: Vec<Node>,
    /// Completed top-level nodes.
    top: Vec<Node>,
    /// Elements opened past the depth cap, still awaiting their end tags.
    overflow: usize,
}

impl TreeBuilder {
    fn start_tag(
        &mut self,
        name: String,
        attrs: std::collections::BTreeMap<String, String>,
        self_closing: bool,
    ) {
        let element = Node::Element {
            tag: name.clone(),
            attrs,
            nodes: Vec::new(),
        };
        if self_closing || is_void(&name) {
            self.append(element);
        } else if self.stack.len() >= MAX_ELEMENT_DEPTH {
            // Flatten at the cap: the element is kept but never opened.
            self.overflow += 1;
            self.append(element);
        } else {
            self.stack.push(element);
        }
    }

    fn end_tag(&mut self, name: &str) {
        if self.overflow > 0 {
            self.overflow -= 1;
            return;
        }
        let matches_open = self
            .stack
            .iter()
            .any(|open| open.tag() == Some(name));
        if !matches_open {
            // Stray end tag.
            return;
        }
        // Implicitly close everything inside the matching element.
        loop {
            let closed = self.stack.pop().expect("matching element is on the stack");
            let done = closed.tag() == Some(name);
            self.append(closed);
            if done {
                break;
            }
        }
    }

    fn text(&mut self, data: String) {
        self.append(Node::Text { data });
    }

    /// Append a completed node to the innermost open element, or to the top
    /// level. Adjacent text nodes merge so that dropped constructs between
    /// two runs cannot split what reserializes as one run.
    fn append(&mut self, node: Node) {
        let siblings = match self.stack.last_mut() {
            Some(Node::Element { nodes, .. }) => nodes,
            Some(Node::Text { .. }) => unreachable!("only elements are pushed on the stack"),
            None => &mut self.top,
        };
        if let (Some(Node::Text { data: last, .. }), Node::Text { data }) =
            (siblings.last_mut(), &node)
        {
            last.push_str(data);
            return;
        }
        siblings.push(node);
    }

    fn finish(mut self) -> Option<Node> {
        while let Some(closed) = self.stack.pop() {
            self.append(closed);
        }

        let mut top: Vec<Node> = self
            .top
            .into_iter()
            .filter(|node| match node {
                Node::Text { data } => !data.trim().is_empty(),
                Node::Element { .. } => true,
            })
            .collect();

        match top.len() {
            0 => None,
            1 if top[0].is_element() => Some(top.remove(0)),
            _ => Some(Node::Element {
                tag: "html".to_string(),
                attrs: Default::default(),
                nodes: top,
            }),
        }
    }
}
