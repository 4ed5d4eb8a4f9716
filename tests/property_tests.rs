//! Property-based tests for the Sprig frontend
//!
//! These tests use proptest to check invariants across many generated programs: the EOF sentinel,
//! statement counting, parse idempotence and keyword exclusivity.

use proptest::prelude::*;
use sprig::frontend;
use sprig::lang::keywords;
use sprig::lexer::{self, TokenKind};
use sprig::parser;

// =============================================================================
// Strategies
// =============================================================================

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,8}".prop_filter("Not a keyword", |s| !keywords::is_reserved(s))
}

fn term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![ident_strategy(), any::<u32>().prop_map(|n| n.to_string())]
}

fn expr_strategy() -> impl Strategy<Value = String> {
    (
        term_strategy(),
        prop::collection::vec((prop_oneof![Just("="), Just(">")], term_strategy()), 0..4),
    )
        .prop_map(|(first, rest)| {
            rest.into_iter()
                .fold(first, |acc, (op, term)| format!("{acc} {op} {term}"))
        })
}

fn assignment_strategy() -> impl Strategy<Value = String> {
    (ident_strategy(), expr_strategy()).prop_map(|(name, expr)| format!("let {name} = {expr};"))
}

fn statement_strategy() -> impl Strategy<Value = String> {
    assignment_strategy().prop_recursive(3, 16, 4, |inner| {
        (expr_strategy(), prop::collection::vec(inner, 1..4))
            .prop_map(|(cond, body)| format!("if ({cond}) {{ {} }}", body.join(" ")))
    })
}

fn program_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(statement_strategy(), 0..6)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: every successful tokenization ends in exactly one EOF
    #[test]
    fn eof_is_last_and_unique(source in "[ a-z0-9=>;(){}\n]{0,64}") {
        if let Ok(tokens) = lexer::tokenize(&source) {
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        }
    }

    /// Property: the lexer and parser never panic, whatever the input
    #[test]
    fn arbitrary_input_never_panics(source in any::<String>()) {
        if let Ok(tokens) = lexer::tokenize(&source) {
            let _ = parser::parse(&tokens);
        }
    }

    /// Property: a generated program has one top-level node per generated statement
    #[test]
    fn statement_count_matches(statements in program_strategy()) {
        let source = statements.join("\n");
        let program = frontend::parse_str(&source).expect("generated program should parse");
        prop_assert_eq!(program.len(), statements.len());
    }

    /// Property: parsing the same tokens twice gives equal trees
    #[test]
    fn parse_is_idempotent(statements in program_strategy()) {
        let tokens = lexer::tokenize(&statements.join(" ")).expect("generated program should lex");
        let first = parser::parse(&tokens).expect("first parse");
        let second = parser::parse(&tokens).expect("second parse");
        prop_assert_eq!(first, second);
    }

    /// Property: an identifier that merely starts with a keyword stays one identifier
    #[test]
    fn keyword_prefixed_identifiers_stay_whole(
        keyword in prop_oneof![Just("let"), Just("if")],
        suffix in "[a-zA-Z0-9]{1,6}",
    ) {
        let name = format!("{keyword}{suffix}");
        let tokens = lexer::tokenize(&name).expect("identifier should lex");
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].identifier_name(), Some(name.as_str()));
    }

    /// Property: token spans tile the non-whitespace input exactly
    #[test]
    fn spans_reconstruct_source(statements in program_strategy()) {
        let source = statements.join(" ");
        let tokens = lexer::tokenize(&source).expect("generated program should lex");
        let rebuilt: String = tokens.iter().map(|t| &source[t.span.start..t.span.end]).collect();
        let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(rebuilt, expected);
    }
}
