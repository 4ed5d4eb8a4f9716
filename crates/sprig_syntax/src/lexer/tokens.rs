//! Token types for the Sprig lexer.
//!
//! [`TokenKind`] is a closed set; registry ids from `sprig_core::lang` convert into it, so the
//! lexer's rule table and the parser agree on vocabulary without comparing strings.
//!
//! ## Notes
//! - Only identifiers and integer literals carry a [`TokenValue`].
//! - `Display` on [`Token`] is the diagnostic rendering: `KEYWORD_LET`, `IDENTIFIER(x)`, `INTEGER_LITERAL(5)`.

use std::fmt;

use crate::ast::Span;
use sprig_core::lang::keywords::KeywordId;
use sprig_core::lang::operators::OperatorId;
use sprig_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keywords ==========
    KeywordLet,
    KeywordIf,

    // ========== Operators ==========
    AssignmentOperator,
    GreaterThanOperator,

    // ========== Identifiers and Literals ==========
    Identifier,
    IntegerLiteral,

    // ========== Punctuation ==========
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Semicolon,

    // ========== Special ==========
    Eof,
}

impl TokenKind {
    /// Diagnostic name of the kind, e.g. `KEYWORD_LET`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::KeywordLet => "KEYWORD_LET",
            TokenKind::KeywordIf => "KEYWORD_IF",
            TokenKind::AssignmentOperator => "ASSIGNMENT_OPERATOR",
            TokenKind::GreaterThanOperator => "GREATER_THAN_OPERATOR",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::OpenBracket => "OPEN_BRACKET",
            TokenKind::CloseBracket => "CLOSE_BRACKET",
            TokenKind::OpenBrace => "OPEN_BRACE",
            TokenKind::CloseBrace => "CLOSE_BRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<KeywordId> for TokenKind {
    fn from(id: KeywordId) -> Self {
        match id {
            KeywordId::Let => TokenKind::KeywordLet,
            KeywordId::If => TokenKind::KeywordIf,
        }
    }
}

impl From<OperatorId> for TokenKind {
    fn from(id: OperatorId) -> Self {
        match id {
            OperatorId::Eq => TokenKind::AssignmentOperator,
            OperatorId::Gt => TokenKind::GreaterThanOperator,
        }
    }
}

impl From<PunctuationId> for TokenKind {
    fn from(id: PunctuationId) -> Self {
        match id {
            PunctuationId::Semicolon => TokenKind::Semicolon,
            PunctuationId::LParen => TokenKind::OpenBracket,
            PunctuationId::RParen => TokenKind::CloseBracket,
            PunctuationId::LBrace => TokenKind::OpenBrace,
            PunctuationId::RBrace => TokenKind::CloseBrace,
        }
    }
}

/// Payload carried by identifier and integer-literal tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Int(u64),
    Str(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Int(n) => write!(f, "{}", n),
            TokenValue::Str(s) => f.write_str(s),
        }
    }
}

/// A token with its kind, optional payload and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, value: Option<TokenValue>, span: Span) -> Self {
        Self { kind, value, span }
    }

    /// Construct a payload-free token (keyword, operator, punctuation).
    pub fn simple(kind: TokenKind, span: Span) -> Self {
        Self::new(kind, None, span)
    }

    pub fn identifier(name: impl Into<String>, span: Span) -> Self {
        Self::new(TokenKind::Identifier, Some(TokenValue::Str(name.into())), span)
    }

    pub fn integer(value: u64, span: Span) -> Self {
        Self::new(TokenKind::IntegerLiteral, Some(TokenValue::Int(value)), span)
    }

    /// The end-of-input sentinel, positioned at byte `offset`.
    pub fn eof(offset: usize) -> Self {
        Self::simple(TokenKind::Eof, Span::new(offset, offset))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}({})", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}
