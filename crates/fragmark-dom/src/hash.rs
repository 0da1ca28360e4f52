use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use xxhash_rust::xxh3::xxh3_64;

/// Default truncation length for fragment hash keys, in hex characters.
pub const DEFAULT_HASH_LEN: usize = 10;

/// Digest algorithm for fragment content hashes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Xxh64,
    Sha256,
}

impl HashAlgorithm {
    pub const fn as_str(self) -> &'static str {
        match self {
            HashAlgorithm::Xxh64 => "xxh64",
            HashAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xxh64" => Ok(HashAlgorithm::Xxh64),
            "sha256" => Ok(HashAlgorithm::Sha256),
            other => Err(format!(
                "unsupported hash algorithm '{other}' (supported: xxh64, sha256)"
            )),
        }
    }
}

/// Canonicalize fragment text for hashing.
///
/// Goals:
/// - Deterministic across platforms (normalize CRLF/CR -> LF)
/// - Deterministic across Unicode representations (NFC)
///
/// Notes:
/// - We do NOT trim, change whitespace, punctuation, or casing — the stored
///   fragment text is never altered, this shapes the hash input only.
pub fn canonicalize_fragment(input: &str) -> String {
    let normalized: String = input.nfc().collect();
    normalized.replace("\r\n", "\n").replace('\r', "\n")
}

/// Compute the full hex digest of `input` under `algo`.
///
/// Implementation detail:
/// - xxh64 uses xxh3_64 (from `xxhash-rust`) for speed and stability,
///   formatted as fixed-width 16-char lowercase hex.
/// - sha256 is 64-char lowercase hex.
pub fn hash_hex(algo: HashAlgorithm, input: &str) -> String {
    match algo {
        HashAlgorithm::Xxh64 => format!("{:016x}", xxh3_64(input.as_bytes())),
        HashAlgorithm::Sha256 => {
            use sha2::{Digest, Sha256};
            let mut hasher = Sha256::new();
            hasher.update(input.as_bytes());
            hex::encode(hasher.finalize())
        }
    }
}

/// Fragment hash key: digest of the canonicalized text, truncated to the
/// first `len` hex characters.
///
/// `len` is clamped to the digest length; same text always yields the same
/// key regardless of where in a tree it appears.
pub fn fragment_hash(algo: HashAlgorithm, text: &str, len: usize) -> String {
    let mut digest = hash_hex(algo, &canonicalize_fragment(text));
    digest.truncate(len.min(digest.len()));
    digest
}
