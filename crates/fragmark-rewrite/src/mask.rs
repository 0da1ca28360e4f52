//! Privacy masking: replace a fragment's non-space characters with a fixed
//! mask character while preserving length and space positions, for sharing
//! document structure without content.

use std::collections::BTreeMap;

use fragmark_extract::FragmentMap;

pub const DEFAULT_MASK_CHAR: char = 'x';

/// Mask every non-space character, keeping spaces and character count
/// intact. Only `' '` survives: tabs and newlines are content too and are
/// masked like any other character.
pub fn mask_text(text: &str, mask_char: char) -> String {
    text.chars()
        .map(|c| if c == ' ' { c } else { mask_char })
        .collect()
}

/// Build a hash -> masked-text mapping from an extraction result, ready for
/// `apply_hash_mapping`.
pub fn mask_mapping(map: &FragmentMap, mask_char: char) -> BTreeMap<String, String> {
    map.raw_text
        .iter()
        .map(|(hash, text)| (hash.clone(), mask_text(text, mask_char)))
        .collect()
}
