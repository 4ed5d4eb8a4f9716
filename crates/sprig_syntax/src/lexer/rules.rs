//! The ordered rule table driving the lexer.
//!
//! Each [`Rule`] pairs an anchored pattern with the [`TokenKind`] it produces. Rules are tried in
//! table order and the first one that matches at the cursor wins, so order encodes precedence:
//!
//! 1. punctuation (`;` `(` `)` `{` `}`)
//! 2. keywords (`let`, `if`), only when not followed by another identifier character
//! 3. operators (`=`, `>`)
//! 4. identifiers
//! 5. integer literals, only when not followed by a digit or identifier character
//!
//! The `regex` crate has no look-ahead, so the “not followed by” half of a rule is a [`Boundary`]
//! checked against the character after the match.
//!
//! ## Initialization
//! [`RuleTable::standard`] is built on first use from the `sprig_core::lang` registries and never
//! mutated afterwards. Any thread may call it; the first caller pays the compile cost.

use once_cell::sync::Lazy;
use regex::Regex;
use sprig_core::lang::{keywords, operators, punctuation};

use super::tokens::TokenKind;

/// Identifier spelling: an ASCII letter followed by ASCII letters or digits.
pub const IDENTIFIER_PATTERN: &str = "[A-Za-z][A-Za-z0-9]*";

/// Integer literal spelling: a run of ASCII decimal digits.
pub const INTEGER_PATTERN: &str = "[0-9]+";

static STANDARD: Lazy<RuleTable> = Lazy::new(RuleTable::build_standard);

/// What may immediately follow a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Anything.
    Any,
    /// Anything but an identifier character (ASCII letter or digit). Digits count, so this also
    /// keeps integer runs maximal.
    Word,
}

impl Boundary {
    fn allows(self, next: Option<char>) -> bool {
        match (self, next) {
            (Boundary::Any, _) | (_, None) => true,
            (Boundary::Word, Some(c)) => !is_ident_char(c),
        }
    }
}

/// One lexical rule: an anchored pattern plus the kind it yields.
#[derive(Debug, Clone)]
pub struct Rule {
    kind: TokenKind,
    pattern: Regex,
    boundary: Boundary,
}

impl Rule {
    /// Compile a rule from a regex pattern. The pattern is anchored at the cursor for you.
    ///
    /// ## Errors
    /// Returns the `regex` compile error if `pattern` is not a valid expression.
    pub fn new(kind: TokenKind, pattern: &str, boundary: Boundary) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!("^(?:{})", pattern))?;
        Ok(Self {
            kind,
            pattern,
            boundary,
        })
    }

    /// Rule matching exactly `spelling`.
    pub fn literal(kind: TokenKind, spelling: &str, boundary: Boundary) -> Self {
        Self::new(kind, &regex::escape(spelling), boundary).expect("INVARIANT: escaped literal is a valid regex")
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Length in bytes of this rule's match at the start of `rest`, if any.
    ///
    /// Empty matches never count: every accepted token consumes input.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        let found = self.pattern.find(rest)?;
        let len = found.end();
        if found.start() != 0 || len == 0 {
            return None;
        }
        self.boundary.allows(rest[len..].chars().next()).then_some(len)
    }
}

/// Ordered, read-only collection of [`Rule`]s.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Build a table from rules in precedence order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The process-wide table for the Sprig language.
    pub fn standard() -> &'static RuleTable {
        &STANDARD
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule matching at the start of `rest`, as `(kind, byte length)`.
    ///
    /// Rules producing [`TokenKind::Eof`] are skipped; the sentinel is appended by the lexer alone.
    pub fn match_at(&self, rest: &str) -> Option<(TokenKind, usize)> {
        self.rules
            .iter()
            .filter(|rule| rule.kind != TokenKind::Eof)
            .find_map(|rule| rule.match_len(rest).map(|len| (rule.kind, len)))
    }

    fn build_standard() -> RuleTable {
        let punctuation = punctuation::PUNCTUATION
            .iter()
            .map(|p| Rule::literal(p.id.into(), p.canonical, Boundary::Any));
        let keywords = keywords::KEYWORDS
            .iter()
            .map(|k| Rule::literal(k.id.into(), k.canonical, Boundary::Word));
        let operators = operators::OPERATORS
            .iter()
            .map(|o| Rule::literal(o.id.into(), o.canonical, Boundary::Any));

        let mut rules: Vec<Rule> = punctuation.chain(keywords).chain(operators).collect();
        rules.push(
            Rule::new(TokenKind::Identifier, IDENTIFIER_PATTERN, Boundary::Word)
                .expect("INVARIANT: identifier pattern is a valid regex"),
        );
        rules.push(
            Rule::new(TokenKind::IntegerLiteral, INTEGER_PATTERN, Boundary::Word)
                .expect("INVARIANT: integer pattern is a valid regex"),
        );
        RuleTable::new(rules)
    }
}

/// Check if a character can continue an identifier (ASCII-only).
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(table: &RuleTable) -> Vec<TokenKind> {
        table.rules().iter().map(Rule::kind).collect()
    }

    #[test]
    fn standard_table_order() {
        assert_eq!(
            kinds(RuleTable::standard()),
            vec![
                TokenKind::Semicolon,
                TokenKind::OpenBracket,
                TokenKind::CloseBracket,
                TokenKind::OpenBrace,
                TokenKind::CloseBrace,
                TokenKind::KeywordLet,
                TokenKind::KeywordIf,
                TokenKind::AssignmentOperator,
                TokenKind::GreaterThanOperator,
                TokenKind::Identifier,
                TokenKind::IntegerLiteral,
            ]
        );
    }

    #[test]
    fn standard_table_is_shared() {
        assert!(std::ptr::eq(RuleTable::standard(), RuleTable::standard()));
    }

    #[test]
    fn keyword_rule_respects_word_boundary() {
        let rule = Rule::literal(TokenKind::KeywordLet, "let", Boundary::Word);
        assert_eq!(rule.match_len("let x"), Some(3));
        assert_eq!(rule.match_len("let"), Some(3));
        assert_eq!(rule.match_len("let;"), Some(3));
        assert_eq!(rule.match_len("letx"), None);
        assert_eq!(rule.match_len("let9"), None);
        assert_eq!(rule.match_len(" let"), None);
    }

    #[test]
    fn integer_rule_rejects_trailing_letters() {
        let table = RuleTable::standard();
        assert_eq!(table.match_at("123;"), Some((TokenKind::IntegerLiteral, 3)));
        assert_eq!(table.match_at("123abc"), None);
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = RuleTable::standard();
        assert_eq!(table.match_at("if(x)"), Some((TokenKind::KeywordIf, 2)));
        assert_eq!(table.match_at("iffy"), Some((TokenKind::Identifier, 4)));
        assert_eq!(table.match_at("=5"), Some((TokenKind::AssignmentOperator, 1)));
    }

    #[test]
    fn empty_matches_are_ignored() {
        let rule = Rule::new(TokenKind::Identifier, "[a-z]*", Boundary::Any).unwrap();
        assert_eq!(rule.match_len("123"), None);
    }

    #[test]
    fn eof_rules_are_skipped() {
        let table = RuleTable::new(vec![Rule::literal(TokenKind::Eof, "$", Boundary::Any)]);
        assert_eq!(table.match_at("$"), None);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(Rule::new(TokenKind::Identifier, "(", Boundary::Any).is_err());
    }
}
