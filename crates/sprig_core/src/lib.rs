//! Provide the canonical language vocabulary for the Sprig lexer, parser and tooling.
//!
//! This crate is intentionally tiny and dependency-free. It answers one question: which fixed
//! spellings exist in the language, and what stable id does each one carry?
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no syntax-tree types.
//! - The lexer builds its rule table from these registries, so a spelling is defined exactly once.

pub mod lang;
