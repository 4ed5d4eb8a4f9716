#![forbid(unsafe_code)]
//! Sprig language front end
//!
//! Sprig is a minimal imperative language of `let` bindings, `if` blocks and comparison
//! expressions. This crate turns Sprig source text into an abstract syntax tree; evaluation, type
//! checking and code generation belong to downstream tools.
//!
//! The work happens in two crates this one re-exports:
//! - `sprig_core` - vocabulary registries (keywords, operators, punctuation)
//! - `sprig_syntax` - lexer, parser, AST and diagnostics
//!
//! This crate adds the pipeline entrypoints ([`frontend`]), caller-facing configuration
//! ([`config`]) and opt-in logging setup ([`logging`]).
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. Malformed input is always reported
//!   as a `LexError` / `ParseError`, never a panic.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a bug in a constant table, use `.expect("INVARIANT: reason")`.
//!
//! ## Examples
//! ```rust
//! use sprig::ast::{Expr, Statement};
//!
//! let program = sprig::frontend::parse_str("let x = 5;").unwrap();
//! assert_eq!(program.statements, vec![Statement::assign("x", Expr::int(5))]);
//! ```

pub mod config;
pub mod frontend;
pub mod logging;

pub use sprig_core::lang;
pub use sprig_syntax::ast;
pub use sprig_syntax::diagnostics;
pub use sprig_syntax::lexer;
pub use sprig_syntax::parser;

pub use config::FrontendConfig;
pub use frontend::{FrontendError, parse_source, parse_str};
