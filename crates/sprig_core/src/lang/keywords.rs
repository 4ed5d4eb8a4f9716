//! Define the reserved keyword vocabulary for the Sprig language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! categories and a short description.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Let` is an identifier, `let` is a keyword.
//! - A reserved spelling can never be used as an identifier.
//!
//! ## Examples
//! ```rust
//! use sprig_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("let"), Some(KeywordId::Let));
//! assert_eq!(keywords::as_str(KeywordId::Let), "let");
//! assert!(!keywords::is_reserved("letx"));
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Let,
    If,
}

/// Broad grouping for keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Introduces a binding (`let`).
    Binding,
    /// Introduces a control-flow construct (`if`).
    ControlFlow,
}

/// Metadata for a reserved keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    KeywordInfo {
        id: KeywordId::Let,
        canonical: "let",
        category: KeywordCategory::Binding,
        description: "Bind the value of an expression to a name: `let x = 5;`",
    },
    KeywordInfo {
        id: KeywordId::If,
        canonical: "if",
        category: KeywordCategory::ControlFlow,
        description: "Run a block of statements when a condition holds: `if (x > 1) { ... }`",
    },
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a reserved spelling.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Return `true` if `s` is reserved and therefore cannot name a variable.
pub fn is_reserved(s: &str) -> bool {
    from_str(s).is_some()
}
