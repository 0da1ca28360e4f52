//! Pull tokenizer for lenient markup parsing.
//!
//! Produces start tags, end tags, and text runs. Comments, doctypes,
//! processing instructions, CDATA, and bogus comments are consumed and
//! dropped. Never fails: anything that cannot be read as markup is either
//! text or discarded trailing markup.

use std::collections::BTreeMap;

use crate::entities::decode_entities;
use crate::scanner::Scanner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StartTag {
        name: String,
        attrs: BTreeMap<String, String>,
        self_closing: bool,
    },
    EndTag {
        name: String,
    },
    Text(String),
}

pub struct Tokenizer<'a> {
    scanner: Scanner<'a>,
    /// Set after a `script`/`style` start tag: the next token is one raw
    /// text run up to the matching close tag.
    raw_text_until: Option<String>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            scanner: Scanner::new(input.as_bytes()),
            raw_text_until: None,
        }
    }

    /// Whether the `<` at `at` opens a markup construct (tag, end tag,
    /// comment/doctype/bogus, or processing instruction) rather than being
    /// literal text.
    fn is_markup_start(&self, at: usize) -> bool {
        matches!(
            self.scanner.byte_at(at + 1),
            Some(b) if b.is_ascii_alphabetic() || b == b'/' || b == b'!' || b == b'?'
        )
    }

    fn next_raw_text(&mut self, element: &str) -> Option<Token> {
        let start = self.scanner.position();
        let close = format!("</{element}");
        let mut at = start;
        let end = loop {
            match self.scanner.find_tag_start_from(at) {
                Some(lt) if self.scanner.starts_with_ignore_case_at(lt, close.as_bytes()) => {
                    break lt;
                }
                Some(lt) => at = lt + 1,
                None => break self.scanner.len(),
            }
        };

        // Leave the close tag itself for normal tokenization.
        self.scanner.set_position(end);
        if end == start {
            return None;
        }
        let data = String::from_utf8_lossy(self.scanner.slice(start, end)).into_owned();
        Some(Token::Text(data))
    }

    fn next_text(&mut self) -> Token {
        let start = self.scanner.position();
        let mut at = start;
        let end = loop {
            match self.scanner.find_tag_start_from(at) {
                // The caller only enters a text run off a markup start, so a
                // `<` at `start` itself is always literal.
                Some(lt) if lt > start && self.is_markup_start(lt) => break lt,
                Some(lt) => at = lt + 1,
                None => break self.scanner.len(),
            }
        };
        self.scanner.set_position(end);
        let data = String::from_utf8_lossy(self.scanner.slice(start, end)).into_owned();
        Token::Text(data)
    }

    /// Skip a construct by advancing past the next occurrence of `close`,
    /// or to EOF when unterminated.
    fn skip_until(&mut self, close: &[u8]) {
        match self.scanner.find_seq(close) {
            Some(at) => self.scanner.set_position(at + close.len()),
            None => self.scanner.set_position(self.scanner.len()),
        }
    }

    fn next_end_tag(&mut self) -> Option<Token> {
        // Positioned at `</` with a letter following.
        let gt = match self.scanner.find_byte(b'>') {
            Some(gt) => gt,
            None => {
                // Unterminated trailing markup is discarded.
                self.scanner.set_position(self.scanner.len());
                return None;
            }
        };
        let inner = self.scanner.slice(self.scanner.position() + 2, gt);
        self.scanner.set_position(gt + 1);

        let inner = String::from_utf8_lossy(inner);
        let raw: String = inner
            .chars()
            .take_while(|c| !c.is_ascii_whitespace() && *c != '/')
            .collect();
        let name = clean_name(&raw);
        if name.is_empty() {
            return None;
        }
        Some(Token::EndTag { name })
    }

    fn next_start_tag(&mut self) -> Option<Token> {
        // Positioned at `<` with a letter following. An unbalanced quote
        // inside the tag would make the quote-aware scan run to EOF and
        // swallow following text content, so fall back to the first raw `>`
        // in that case. Only a tag with no `>` at all is discarded.
        let gt = match self
            .scanner
            .find_tag_end_quoted()
            .or_else(|| self.scanner.find_byte(b'>'))
        {
            Some(gt) => gt,
            None => {
                self.scanner.set_position(self.scanner.len());
                return None;
            }
        };
        let inner = self.scanner.slice(self.scanner.position() + 1, gt);
        self.scanner.set_position(gt + 1);

        let inner = String::from_utf8_lossy(inner).into_owned();
        let (inner, self_closing) = match inner.strip_suffix('/') {
            Some(stripped) => (stripped.to_string(), true),
            None => (inner, false),
        };

        let name_end = inner
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(inner.len());
        let name = clean_name(&inner[..name_end]);
        let attrs = parse_attributes(&inner[name_end..]);

        if !self_closing && fragmark_tags::is_raw_text(&name) {
            self.raw_text_until = Some(name.clone());
        }
        Some(Token::StartTag {
            name,
            attrs,
            self_closing,
        })
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(element) = self.raw_text_until.take() {
            if let Some(token) = self.next_raw_text(&element) {
                return Some(token);
            }
        }

        loop {
            if self.scanner.is_eof() {
                return None;
            }

            let at = self.scanner.position();
            if self.scanner.peek_at(0) != Some(b'<') || !self.is_markup_start(at) {
                return Some(self.next_text());
            }

            match self.scanner.peek_at(1) {
                Some(b'!') => {
                    if self.scanner.starts_with_ignore_case(b"<!--") {
                        self.skip_until(b"-->");
                    } else if self.scanner.starts_with_ignore_case(b"<!doctype") {
                        self.skip_until(b">");
                    } else if self.scanner.starts_with_ignore_case(b"<![cdata[") {
                        self.skip_until(b"]]>");
                    } else {
                        // Bogus comment.
                        self.skip_until(b">");
                    }
                }
                Some(b'?') => self.skip_until(b">"),
                Some(b'/') => {
                    if self
                        .scanner
                        .peek_at(2)
                        .is_some_and(|b| b.is_ascii_alphabetic())
                    {
                        match self.next_end_tag() {
                            Some(token) => return Some(token),
                            None => continue,
                        }
                    } else {
                        // `</` + non-letter: bogus comment.
                        self.skip_until(b">");
                    }
                }
                _ => match self.next_start_tag() {
                    Some(token) => return Some(token),
                    None => continue,
                },
            }
        }
    }
}

/// Lowercase a tag or attribute name and strip quote characters.
///
/// A quote inside a name would unbalance the quote-aware tag-end scan when
/// the tree is reserialized, so names never keep them.
fn clean_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '"' && *c != '\'')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Parse the attribute section of a start tag.
///
/// Values may be double-quoted, single-quoted, or unquoted; valueless
/// attributes store the empty string. The first occurrence of a duplicate
/// name wins. Character references are decoded in values.
fn parse_attributes(input: &str) -> BTreeMap<String, String> {
    let mut attrs = BTreeMap::new();
    let bytes = input.as_bytes();
    let mut pos = 0usize;

    while pos < bytes.len() {
        while pos < bytes.len() && (bytes[pos].is_ascii_whitespace() || bytes[pos] == b'/') {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }

        let name_start = pos;
        while pos < bytes.len()
            && !bytes[pos].is_ascii_whitespace()
            && bytes[pos] != b'='
            && bytes[pos] != b'/'
        {
            pos += 1;
        }
        let name = clean_name(&input[name_start..pos]);

        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }

        let value = if pos < bytes.len() && bytes[pos] == b'=' {
            pos += 1;
            while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            if pos < bytes.len() && (bytes[pos] == b'"' || bytes[pos] == b'\'') {
                let quote = bytes[pos];
                pos += 1;
                let value_start = pos;
                while pos < bytes.len() && bytes[pos] != quote {
                    pos += 1;
                }
                let raw = &input[value_start..pos];
                if pos < bytes.len() {
                    pos += 1; // closing quote
                }
                decode_entities(raw)
            } else {
                let value_start = pos;
                while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }
                decode_entities(&input[value_start..pos])
            }
        } else {
            String::new()
        };

        if !name.is_empty() {
            attrs.entry(name).or_insert(value);
        }
    }
    attrs
}
