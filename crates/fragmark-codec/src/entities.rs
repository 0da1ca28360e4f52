//! Character reference handling for attribute values.
//!
//! Text content is stored and re-emitted verbatim, so only attribute values
//! are decoded here (and re-escaped by the encoder). Unknown references are
//! left literal.

/// Decode basic named and numeric character references.
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        match decode_one(rest) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode a single reference at the start of `s` (which begins with `&`).
/// Returns the character and the byte length consumed.
fn decode_one(s: &str) -> Option<(char, usize)> {
    const NAMED: &[(&str, char)] = &[
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&apos;", '\''),
    ];

    for &(name, ch) in NAMED {
        if s.starts_with(name) {
            return Some((ch, name.len()));
        }
    }

    let semi = s.find(';')?;
    let digits = s[1..semi].strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse().ok()?
    };
    char::from_u32(code).map(|ch| (ch, semi + 1))
}

/// Escape an attribute value for double-quoted serialization.
///
/// Exactly the inverse of what `decode_entities` guarantees to reverse:
/// `&` and `"` only.
pub fn escape_attribute(value: &str) -> String {
    if !value.contains(['&', '"']) {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
