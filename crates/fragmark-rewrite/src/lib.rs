#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the fragmark project.

Do NOT depend on this crate directly.
Use `fragmark-io` instead.
"#]

pub mod apply;
pub mod mask;

pub use apply::apply_hash_mapping;
pub use mask::{mask_mapping, mask_text, DEFAULT_MASK_CHAR};
