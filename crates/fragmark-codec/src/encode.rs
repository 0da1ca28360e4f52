//! Node tree -> markup string, plus an indented line listing for human
//! inspection.

use fragmark_dom::model::Node;
use fragmark_tags::is_void;

use crate::entities::escape_attribute;

/// Serialize a tree back to markup.
///
/// A root element tagged `html` gets a standard doctype line prepended. Text
/// is emitted verbatim (never escaped): reintegrated replacement text must
/// survive serialization byte for byte. Attribute values are double-quoted
/// with `&`/`"` escaped, which is exactly what the decoder reverses.
pub fn encode(root: &Node) -> String {
    let mut out = String::new();
    if root.tag() == Some("html") {
        out.push_str("<!DOCTYPE html>\n");
    }
    write_node(&mut out, root);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text { data } => out.push_str(data),
        Node::Element { tag, attrs, nodes } => {
            out.push('<');
            out.push_str(tag);
            for (key, value) in attrs {
                out.push(' ');
                out.push_str(key);
                if !value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&escape_attribute(value));
                    out.push('"');
                }
            }
            if is_void(tag) && nodes.is_empty() {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for child in nodes {
                write_node(out, child);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

/// One line per node, indentation proportional to depth.
///
/// The root renders as its bare tag; deeper nodes get a 4-space indent step
/// and a branch glyph. Text leaves render as `TEXT: <content>`.
pub fn encode_as_lines(root: &Node) -> Vec<String> {
    let mut lines = Vec::new();
    write_lines(&mut lines, root, 0);
    lines
}

fn write_lines(lines: &mut Vec<String>, node: &Node, depth: usize) {
    let label = match node {
        Node::Element { tag, .. } => tag.clone(),
        Node::Text { data } => format!("TEXT: {data}"),
    };
    if depth == 0 {
        lines.push(label);
    } else {
        lines.push(format!("{}├── {label}", "    ".repeat(depth - 1)));
    }
    if let Node::Element { nodes, .. } = node {
        for child in nodes {
            write_lines(lines, child, depth + 1);
        }
    }
}
