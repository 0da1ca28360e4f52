//! Byte scanner for markup delimiter detection.
//!
//! Uses the `memchr` crate for fast byte searching (SIMD-accelerated on
//! x86_64 and aarch64).

use memchr::memchr;

pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Scanner { input, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    /// Peek at the byte at `offset` from the current position.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    /// Byte at an absolute position.
    #[inline]
    pub fn byte_at(&self, at: usize) -> Option<u8> {
        self.input.get(at).copied()
    }

    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.input[start..end]
    }

    /// Find the next `<` at or after `from`.
    #[inline]
    pub fn find_tag_start_from(&self, from: usize) -> Option<usize> {
        memchr(b'<', &self.input[from..]).map(|i| from + i)
    }

    /// Find the next occurrence of `byte` at or after the current position.
    #[inline]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        memchr(byte, &self.input[self.pos..]).map(|i| self.pos + i)
    }

    /// Find the position of the next `>` that is not inside a quoted
    /// attribute value.
    pub fn find_tag_end_quoted(&self) -> Option<usize> {
        let mut pos = self.pos;
        let mut in_single_quote = false;
        let mut in_double_quote = false;

        while pos < self.input.len() {
            match self.input[pos] {
                b'"' if !in_single_quote => in_double_quote = !in_double_quote,
                b'\'' if !in_double_quote => in_single_quote = !in_single_quote,
                b'>' if !in_single_quote && !in_double_quote => return Some(pos),
                _ => {}
            }
            pos += 1;
        }
        None
    }

    /// Find the next occurrence of `needle` at or after the current position.
    pub fn find_seq(&self, needle: &[u8]) -> Option<usize> {
        let first = *needle.first()?;
        let mut from = self.pos;
        while let Some(at) = memchr(first, &self.input[from..]).map(|i| from + i) {
            if self.input[at..].starts_with(needle) {
                return Some(at);
            }
            from = at + 1;
        }
        None
    }

    /// ASCII case-insensitive `starts_with` at an arbitrary position.
    pub fn starts_with_ignore_case_at(&self, at: usize, needle: &[u8]) -> bool {
        self.input
            .get(at..at + needle.len())
            .is_some_and(|window| window.eq_ignore_ascii_case(needle))
    }

    /// ASCII case-insensitive `starts_with` at the current position.
    #[inline]
    pub fn starts_with_ignore_case(&self, needle: &[u8]) -> bool {
        self.starts_with_ignore_case_at(self.pos, needle)
    }
}
