//! Lexer for the Sprig programming language
//!
//! Turns source text into a token sequence ending in exactly one `Eof` token.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, TokenValue, Token)
//! - `rules` - The ordered, anchored rule table and its process-wide instance
//!
//! ## Algorithm
//!
//! The lexer keeps a byte cursor into the immutable source. Each step skips whitespace, then asks
//! the rule table for the first rule matching at the cursor and advances by exactly the length of
//! that match. Patterns run against `&source[cursor..]` anchored at its start, so the whole scan is
//! a single linear pass with no per-step copying.

pub mod rules;
pub mod tokens;

pub use rules::{Boundary, Rule, RuleTable};
pub use tokens::{Token, TokenKind, TokenValue};

use std::num::IntErrorKind;

use crate::ast::Span;
use crate::diagnostics::LexError;

/// Lexer for Sprig source code.
pub struct Lexer<'a> {
    source: &'a str,
    rules: &'a RuleTable,
    cursor: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer using the standard rule table.
    pub fn new(source: &'a str) -> Self {
        Self::with_rules(source, RuleTable::standard())
    }

    /// Create a lexer driven by a caller-supplied rule table.
    pub fn with_rules(source: &'a str, rules: &'a RuleTable) -> Self {
        Self {
            source,
            rules,
            cursor: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// ## Errors
    /// Returns a [`LexError`] at the first position where no rule matches. Lexing does not resume
    /// past it.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }
            self.scan_token()?;
        }

        self.tokens.push(Token::eof(self.cursor));
        Ok(self.tokens)
    }

    // ========================================================================
    // Cursor handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.cursor >= self.source.len()
    }

    fn rest(&self) -> &'a str {
        &self.source[self.cursor..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.cursor += rest.len() - rest.trim_start().len();
    }

    // ========================================================================
    // Scanning
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), LexError> {
        let start = self.cursor;
        let rest = self.rest();

        let Some((kind, len)) = self.rules.match_at(rest) else {
            tracing::debug!(position = start, "no lexical rule matches");
            return Err(LexError::unrecognized(start, rest));
        };

        let lexeme = &rest[..len];
        let value = match kind {
            TokenKind::Identifier => Some(TokenValue::Str(lexeme.to_string())),
            TokenKind::IntegerLiteral => {
                let n = lexeme.parse::<u64>().map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow => LexError::overflow(start, lexeme, rest),
                    _ => LexError::unrecognized(start, rest),
                })?;
                Some(TokenValue::Int(n))
            }
            _ => None,
        };

        let token = Token::new(kind, value, Span::new(start, start + len));
        tracing::trace!(token = %token, start, len, "lexed token");
        self.tokens.push(token);
        self.cursor = start + len;
        Ok(())
    }
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
