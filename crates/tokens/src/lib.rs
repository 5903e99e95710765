//! # tokens
//!
//! Tag token model and tokenizer for the chipfield editing surface.
//!
//! This crate is the leaf of the pipeline: it maps raw surface text to an
//! ordered sequence of [`TagToken`]s and never looks at nodes, carets, or
//! the widget. It also carries the backend half of the round trip
//! ([`parse_submitted`]), which turns a flushed form value back into
//! canonical tag slugs.
//!
//! ## Design Principles
//!
//! - Pure functions over `&str`; no error states (tokenization always
//!   yields at least one token).
//! - Delimiter normalization is intentional: tokenization is lossy only
//!   with respect to delimiter run length and type.
//! - UI-agnostic: nothing here depends on the surface or widget crates.

mod slug;
mod token;
mod tokenize;

pub use slug::{parse_submitted, slugify};
pub use token::TagToken;
pub use tokenize::{is_delimiter, tokenize};
