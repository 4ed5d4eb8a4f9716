//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to let the parser
//! speak in registry ids rather than raw kinds.

use crate::lexer::{Token, TokenKind, TokenValue};
use sprig_core::lang::keywords::KeywordId;
use sprig_core::lang::operators::OperatorId;
use sprig_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::KeywordLet => Some(KeywordId::Let),
            TokenKind::KeywordIf => Some(KeywordId::If),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.keyword_id() == Some(id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::AssignmentOperator => Some(OperatorId::Eq),
            TokenKind::GreaterThanOperator => Some(OperatorId::Gt),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.operator_id() == Some(id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Semicolon => Some(PunctuationId::Semicolon),
            TokenKind::OpenBracket => Some(PunctuationId::LParen),
            TokenKind::CloseBracket => Some(PunctuationId::RParen),
            TokenKind::OpenBrace => Some(PunctuationId::LBrace),
            TokenKind::CloseBrace => Some(PunctuationId::RBrace),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.punctuation_id() == Some(id)
    }

    /// Return `true` for kinds that carry a [`TokenValue`].
    pub fn carries_value(&self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::IntegerLiteral)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Identifier name, if this is a well-formed identifier token.
    pub fn identifier_name(&self) -> Option<&str> {
        match (self.kind, &self.value) {
            (TokenKind::Identifier, Some(TokenValue::Str(name))) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Integer value, if this is a well-formed integer-literal token.
    pub fn integer_value(&self) -> Option<u64> {
        match (self.kind, &self.value) {
            (TokenKind::IntegerLiteral, Some(TokenValue::Int(n))) => Some(*n),
            _ => None,
        }
    }
}
