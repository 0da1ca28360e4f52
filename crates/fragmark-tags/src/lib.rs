//! Static classification of markup element names.
//!
//! Three concerns live here: void elements (no closing tag), raw-text
//! elements (content is a single uninterpreted text run), and the extraction
//! exclusion set (element text that is never human-visible content).
//!
//! All predicates are ASCII case-insensitive.

use core::fmt;

/// Whether text under a tag counts as human-visible content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Visible,
    Embedded,
}

impl TextRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            TextRole::Visible => "visible",
            TextRole::Embedded => "embedded",
        }
    }
}

impl fmt::Display for TextRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

pub mod sets {
    /// HTML void elements: no closing tag, never hold children.
    pub const VOID: &[&str] = &[
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ];

    /// Elements whose content is one raw text run up to the matching close tag.
    pub const RAW_TEXT: &[&str] = &["script", "style"];

    /// Elements whose text is never captured during extraction.
    pub const EXCLUDED: &[&str] = &["style", "script"];
}

fn contains_ignore_case(set: &[&str], tag: &str) -> bool {
    set.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

pub fn is_void(tag: &str) -> bool {
    contains_ignore_case(sets::VOID, tag)
}

pub fn is_raw_text(tag: &str) -> bool {
    contains_ignore_case(sets::RAW_TEXT, tag)
}

/// Whether text directly under `tag` is eligible for fragment capture.
pub fn is_extractable(tag: &str) -> bool {
    !contains_ignore_case(sets::EXCLUDED, tag)
}

pub fn text_role(tag: &str) -> TextRole {
    if is_extractable(tag) {
        TextRole::Visible
    } else {
        TextRole::Embedded
    }
}

pub fn description(role: TextRole) -> &'static str {
    match role {
        TextRole::Visible => "Human-visible text content",
        TextRole::Embedded => "Embedded style/script payload, not content",
    }
}
