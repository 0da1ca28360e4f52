//! Boundary limits and version constants.

/// Maximum accepted markup input size in bytes (1 MiB).
///
/// Enforced before decode is attempted; the decoder itself is size-agnostic.
pub const MAX_MARKUP_BYTES: usize = 1_048_576;

/// Engine version reported by callers that surface service info.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub use fragmark_dom::hash::DEFAULT_HASH_LEN;
pub use fragmark_extract::DEFAULT_MAX_DEPTH;
