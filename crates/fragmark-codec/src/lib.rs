#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the fragmark project.

Do NOT depend on this crate directly.
Use `fragmark-io` instead.
"#]

mod scanner;
mod entities;
mod tokenizer;

pub mod decode;
pub mod encode;

pub use decode::{decode, MAX_ELEMENT_DEPTH};
pub use encode::{encode, encode_as_lines};
