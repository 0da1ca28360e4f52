#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the fragmark project.

Do NOT depend on this crate directly.
Use `fragmark-io` instead.
"#]

pub mod fragment;
pub mod extract;
pub mod serialize;

pub use extract::{extract_fragments, ExtractOptions, DEFAULT_MAX_DEPTH};
pub use fragment::{Fragment, FragmentMap};
