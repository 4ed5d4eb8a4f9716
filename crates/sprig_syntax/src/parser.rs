//! Parser for the Sprig programming language
//!
//! Recursive descent over the token sequence, one method per grammar rule:
//!
//! ```text
//! expr_term  ::= INTEGER_LITERAL | IDENTIFIER
//! expr       ::= expr_term (operator expr_term)*      # left-associative fold
//! operator   ::= '=' | '>'
//! assignment ::= 'let' IDENTIFIER '=' expr
//! statement  ::= assignment ';' | if_stmt
//! if_stmt    ::= 'if' '(' expr ')' '{' statement+ '}'
//! program    ::= statement* EOF
//! ```
//!
//! `=` and `>` share one precedence level, so `a = b > c` parses as `(a = b) > c`.
//!
//! ## Examples
//!
//! ```rust
//! use sprig_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize("if (x > 1) { let y = 2; }").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::ParseError;
use crate::lexer::Token;
use sprig_core::lang::keywords::KeywordId;
use sprig_core::lang::operators::OperatorId;
use sprig_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping
// each grammar layer in its own file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
