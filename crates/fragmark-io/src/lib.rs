//! `fragmark-io` is the single supported public entrypoint for the fragmark
//! engine: markup <-> tree codec, depth-bounded text fragment extraction,
//! and hash-mapping reintegration.
//!
//! This crate intentionally contains **no** HTTP, crawling, or AI logic.
//! Those belong in higher layers. `fragmark-io` focuses on:
//! - stable types
//! - boundary limits (input size, traversal depth)
//! - the atomic and compound operations external callers chain together

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `fragmark_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may
// change without notice.

// Re-export the canonical tree model and hashing.
#[doc(hidden)]
pub mod dom {
    pub use fragmark_dom::hash::{
        canonicalize_fragment, fragment_hash, hash_hex, HashAlgorithm, DEFAULT_HASH_LEN,
    };
    pub use fragmark_dom::model::{depth_limit_reached, max_depth, node_count, Node};
}

// Re-export tag classification.
#[doc(hidden)]
pub mod tags {
    pub use fragmark_tags::{description, is_extractable, is_raw_text, is_void, text_role, TextRole};
}

// Re-export the markup codec.
#[doc(hidden)]
pub mod codec {
    pub use fragmark_codec::{decode, encode, encode_as_lines};
}

// Re-export extraction types + helpers.
#[doc(hidden)]
pub mod extract {
    pub use fragmark_extract::serialize::{to_minified_json, to_pretty_json};
    pub use fragmark_extract::{
        extract_fragments, ExtractOptions, Fragment, FragmentMap, DEFAULT_MAX_DEPTH,
    };
}

// Re-export reintegration + masking.
#[doc(hidden)]
pub mod rewrite {
    pub use fragmark_rewrite::{apply_hash_mapping, mask_mapping, mask_text, DEFAULT_MASK_CHAR};
}

/// Boundary limits and version constants.
pub mod limits;

/// Boundary operations: atomic and compound entry points with limit
/// enforcement and shape reporting.
pub mod ops;

/// Helpers for parsing tree JSON with improved diagnostics.
pub mod tree_json;

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::dom::{HashAlgorithm, Node};
    pub use crate::extract::{ExtractOptions, Fragment, FragmentMap};
    pub use crate::limits::{DEFAULT_HASH_LEN, DEFAULT_MAX_DEPTH, MAX_MARKUP_BYTES};
    pub use crate::ops::{
        apply_hash_mapping_to_tree, markup_to_fragments, markup_to_hashed_markup,
        markup_to_lines, markup_to_markup, markup_to_masked_markup, markup_to_tree,
        tree_to_fragments, tree_to_lines, tree_to_markup, BoundaryError, FragmentsResponse,
        TreeResponse,
    };
    pub use crate::tree_json::{parse_tree_json_str, TreeJsonError};
}
