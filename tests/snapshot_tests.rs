//! Snapshot tests for token renderings, trees and error messages.
//!
//! Inline snapshots keep the expected output next to the input that produced it.

use sprig::frontend;
use sprig::lexer::{self, Token};

fn render_tokens(source: &str) -> String {
    lexer::tokenize(source)
        .unwrap()
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn tokens_of_assignment() {
    insta::assert_snapshot!(render_tokens("let x = 5;"), @r"
    KEYWORD_LET
    IDENTIFIER(x)
    ASSIGNMENT_OPERATOR
    INTEGER_LITERAL(5)
    SEMICOLON
    EOF
    ");
}

#[test]
fn tokens_of_if_block() {
    insta::assert_snapshot!(render_tokens("if (count > 10) {\n  let big = 1;\n}"), @r"
    KEYWORD_IF
    OPEN_BRACKET
    IDENTIFIER(count)
    GREATER_THAN_OPERATOR
    INTEGER_LITERAL(10)
    CLOSE_BRACKET
    OPEN_BRACE
    KEYWORD_LET
    IDENTIFIER(big)
    ASSIGNMENT_OPERATOR
    INTEGER_LITERAL(1)
    SEMICOLON
    CLOSE_BRACE
    EOF
    ");
}

#[test]
fn tree_of_assignment() {
    let program = frontend::parse_str("let x = 5;").unwrap();
    insta::assert_debug_snapshot!(program, @r#"
    Program {
        statements: [
            Assignment(
                AssignmentStmt {
                    identifier: "x",
                    expr: IntLiteral(
                        5,
                    ),
                },
            ),
        ],
    }
    "#);
}

#[test]
fn tree_of_chained_comparison() {
    let program = frontend::parse_str("if (a = b > 1) { let c = a; }").unwrap();
    insta::assert_debug_snapshot!(program, @r#"
    Program {
        statements: [
            If(
                IfStmt {
                    condition: Binary {
                        lhs: Binary {
                            lhs: Identifier(
                                "a",
                            ),
                            op: Equals,
                            rhs: Identifier(
                                "b",
                            ),
                        },
                        op: GreaterThan,
                        rhs: IntLiteral(
                            1,
                        ),
                    },
                    body: [
                        Assignment(
                            AssignmentStmt {
                                identifier: "c",
                                expr: Identifier(
                                    "a",
                                ),
                            },
                        ),
                    ],
                },
            ),
        ],
    }
    "#);
}

#[test]
fn message_of_lex_error() {
    let err = frontend::parse_str("let total = 3 * 4;").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r#"unrecognized input at byte 14: "* 4;""#);
}

#[test]
fn message_of_parse_error() {
    let err = frontend::parse_str("let x 5;").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"expected a statement at token 0, remaining: KEYWORD_LET IDENTIFIER(x) INTEGER_LITERAL(5) SEMICOLON EOF"
    );
}

#[test]
fn message_of_long_parse_error_is_truncated() {
    let err = frontend::parse_str("let = 1; let a = 2; let b = 3;").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"expected a statement at token 0, remaining: KEYWORD_LET ASSIGNMENT_OPERATOR INTEGER_LITERAL(1) SEMICOLON KEYWORD_LET …"
    );
}
