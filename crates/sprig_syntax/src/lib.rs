//! Syntax frontend for the Sprig language: lexer, parser, AST, diagnostics.
//!
//! Data flows one way: source text → [`lexer`] → tokens → [`parser`] → [`ast::Program`].
//! The lexer knows nothing about the parser; the parser only sees tokens.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not check that identifiers are declared, infer types, or
//!   evaluate anything.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `sprig_core::lang` registries.
//! - Both stages are pure functions of their input; independent calls can run on any thread.
//!
//! ## Examples
//! ```rust
//! use sprig_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize("let x = 5;").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.len(), 1);
//! ```
//!
//! ## See also
//! - `sprig_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
