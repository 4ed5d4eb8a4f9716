//! Errors produced by the lexer and parser.
//!
//! Both are terminal: the failing call returns no tokens / no program at all. Each error carries
//! enough context to point at the source (`span`) and to describe what was left unconsumed.
//! They implement [`miette::Diagnostic`], so callers holding the source text can render them with
//! labels and help (see `sprig::frontend::FrontendError::into_report`).

use std::fmt;

use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::Token;

/// How many characters of unrecognized input to quote in messages.
const SNIPPET_CHARS: usize = 16;

/// How many remaining tokens to list in messages.
const PREVIEW_TOKENS: usize = 5;

// ============================================================================
// Lex errors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No rule matches at the cursor.
    UnrecognizedInput,
    /// A digit run does not fit in `u64`.
    IntegerOverflow,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnrecognizedInput => write!(f, "unrecognized input"),
            LexErrorKind::IntegerOverflow => write!(f, "integer literal out of range"),
        }
    }
}

/// Lexing stopped at `position` (a byte offset).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {position}: {snippet:?}", snippet = snippet(.unrecognized_text))]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: usize,
    /// Source text from `position` to the end of input.
    pub unrecognized_text: String,
    pub span: Span,
}

impl LexError {
    /// No rule matched at `position`; `rest` is the remaining source.
    pub fn unrecognized(position: usize, rest: &str) -> Self {
        let width = rest.chars().next().map_or(0, char::len_utf8);
        Self {
            kind: LexErrorKind::UnrecognizedInput,
            position,
            unrecognized_text: rest.to_string(),
            span: Span::new(position, position + width),
        }
    }

    /// The digit run `lexeme` at `position` overflowed; `rest` is the remaining source.
    pub fn overflow(position: usize, lexeme: &str, rest: &str) -> Self {
        Self {
            kind: LexErrorKind::IntegerOverflow,
            position,
            unrecognized_text: rest.to_string(),
            span: Span::new(position, position + lexeme.len()),
        }
    }
}

impl Diagnostic for LexError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.kind {
            LexErrorKind::UnrecognizedInput => "sprig::lex::unrecognized",
            LexErrorKind::IntegerOverflow => "sprig::lex::overflow",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.kind {
            LexErrorKind::UnrecognizedInput => {
                "tokens are `let`, `if`, `=`, `>`, `;`, `(`, `)`, `{`, `}`, identifiers and integers"
            }
            LexErrorKind::IntegerOverflow => "integer literals must fit in 64 bits",
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = match self.kind {
            LexErrorKind::UnrecognizedInput => "no token starts here",
            LexErrorKind::IntegerOverflow => "too large",
        };
        Some(Box::new(std::iter::once(LabeledSpan::at(self.span, label))))
    }
}

// ============================================================================
// Parse errors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No statement rule matches at the cursor.
    NoMatchingRule,
    /// An `if` block is nested deeper than the parser allows.
    NestingTooDeep { limit: usize },
    /// One expression chains more binary operators than the parser allows.
    ExpressionTooLong { limit: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::NoMatchingRule => write!(f, "expected a statement"),
            ParseErrorKind::NestingTooDeep { limit } => {
                write!(f, "`if` blocks nested more than {} deep", limit)
            }
            ParseErrorKind::ExpressionTooLong { limit } => {
                write!(f, "expression chains more than {} operators", limit)
            }
        }
    }
}

/// Parsing stopped at token index `position`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at token {position}, remaining: {preview}", preview = preview(.remaining_tokens))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
    /// Tokens from `position` to the end of the input sequence.
    pub remaining_tokens: Vec<Token>,
    /// Byte span of the token at `position`.
    pub span: Span,
}

impl ParseError {
    pub fn no_match(tokens: &[Token], position: usize) -> Self {
        Self::at(ParseErrorKind::NoMatchingRule, tokens, position)
    }

    pub fn too_deep(tokens: &[Token], position: usize, limit: usize) -> Self {
        Self::at(ParseErrorKind::NestingTooDeep { limit }, tokens, position)
    }

    pub fn too_long(tokens: &[Token], position: usize, limit: usize) -> Self {
        Self::at(ParseErrorKind::ExpressionTooLong { limit }, tokens, position)
    }

    fn at(kind: ParseErrorKind, tokens: &[Token], position: usize) -> Self {
        let span = match tokens.get(position) {
            Some(token) => token.span,
            None => tokens
                .last()
                .map_or(Span::default(), |last| Span::new(last.span.end, last.span.end)),
        };
        Self {
            kind,
            position,
            remaining_tokens: tokens.get(position..).unwrap_or_default().to_vec(),
            span,
        }
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.kind {
            ParseErrorKind::NoMatchingRule => "sprig::parse::no_match",
            ParseErrorKind::NestingTooDeep { .. } => "sprig::parse::too_deep",
            ParseErrorKind::ExpressionTooLong { .. } => "sprig::parse::too_long",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.kind {
            ParseErrorKind::NoMatchingRule => {
                "statements are `let <name> = <expr>;` or `if (<expr>) { <statements> }`"
            }
            ParseErrorKind::NestingTooDeep { .. } => "flatten the nested `if` blocks",
            ParseErrorKind::ExpressionTooLong { .. } => "split the expression across several `let` statements",
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = match self.remaining_tokens.first() {
            Some(token) => format!("unexpected {}", token),
            None => "unexpected end of input".to_string(),
        };
        Some(Box::new(std::iter::once(LabeledSpan::at(self.span, label))))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn snippet(text: &str) -> String {
    match text.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

fn preview(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return "<none>".to_string();
    }
    let mut shown: Vec<String> = tokens.iter().take(PREVIEW_TOKENS).map(Token::to_string).collect();
    if tokens.len() > PREVIEW_TOKENS {
        shown.push("…".to_string());
    }
    shown.join(" ")
}
