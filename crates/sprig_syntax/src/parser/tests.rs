#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on the shape of the trees each grammar rule produces and on the parser
/// refusing, as a whole, any program containing a statement it cannot match.
mod tests {
    use super::*;
    use crate::ast::Span;
    use crate::diagnostics::ParseErrorKind;
    use crate::lexer::{self, TokenKind};

    fn parse_str(source: &str) -> Result<Program, ParseError> {
        let tokens = lexer::tokenize(source).expect("lexing should succeed");
        parse(&tokens)
    }

    fn gt(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(lhs, BinaryOp::GreaterThan, rhs)
    }

    fn eq(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(lhs, BinaryOp::Equals, rhs)
    }

    #[test]
    fn test_parse_assignment() {
        let program = parse_str("let x = 5;").unwrap();
        assert_eq!(program.statements, vec![Statement::assign("x", Expr::int(5))]);
    }

    #[test]
    fn test_parse_if() {
        let program = parse_str("if (x > 1) { let y = 2; }").unwrap();
        assert_eq!(
            program.statements,
            vec![Statement::if_block(
                gt(Expr::ident("x"), Expr::int(1)),
                vec![Statement::assign("y", Expr::int(2))],
            )]
        );
    }

    #[test]
    fn test_parse_empty_program() {
        assert!(parse_str("").unwrap().is_empty());
        assert!(parse(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_operators_fold_left() {
        let program = parse_str("let r = a = b > c;").unwrap();
        assert_eq!(
            program.statements,
            vec![Statement::assign(
                "r",
                gt(eq(Expr::ident("a"), Expr::ident("b")), Expr::ident("c")),
            )]
        );
    }

    #[test]
    fn test_statements_keep_source_order() {
        let program = parse_str("let a = 1; if (a) { let b = a; } let c = 3;").unwrap();
        let kinds: Vec<&str> = program
            .iter()
            .map(|s| match s {
                Statement::Assignment(a) => a.identifier.as_str(),
                Statement::If(_) => "if",
            })
            .collect();
        assert_eq!(kinds, vec!["a", "if", "c"]);
    }

    #[test]
    fn test_nested_if_blocks() {
        let program = parse_str("if (a) { if (b > 2) { let c = 3; let d = c; } let e = 4; }").unwrap();
        assert_eq!(
            program.statements,
            vec![Statement::if_block(
                Expr::ident("a"),
                vec![
                    Statement::if_block(
                        gt(Expr::ident("b"), Expr::int(2)),
                        vec![
                            Statement::assign("c", Expr::int(3)),
                            Statement::assign("d", Expr::ident("c")),
                        ],
                    ),
                    Statement::assign("e", Expr::int(4)),
                ],
            )]
        );
    }

    #[test]
    fn test_missing_assignment_operator_is_error() {
        let err = parse_str("let x 5;").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NoMatchingRule);
        assert_eq!(err.position, 0);
        assert_eq!(err.remaining_tokens.len(), 5);
    }

    #[test]
    fn test_missing_semicolon_is_error() {
        let err = parse_str("let x = 5").unwrap_err();
        assert_eq!(err.position, 0);
    }

    #[test]
    fn test_error_after_valid_statements_discards_them() {
        let err = parse_str("let a = 1; let b = 2; let = 3;").unwrap_err();
        assert_eq!(err.position, 10);
        assert_eq!(err.remaining_tokens[0].kind, TokenKind::KeywordLet);
        assert_eq!(err.span, Span::new(22, 25));
    }

    #[test]
    fn test_if_semicolon_after_block_is_error() {
        let err = parse_str("if (a) { let b = 1; };").unwrap_err();
        assert_eq!(err.remaining_tokens[0].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_if_with_empty_body_is_error() {
        let err = parse_str("if (a) { }").unwrap_err();
        assert_eq!(err.position, 0);
    }

    #[test]
    fn test_unclosed_if_is_error() {
        assert!(parse_str("if (a) { let b = 1;").is_err());
        assert!(parse_str("if (a { let b = 1; }").is_err());
        assert!(parse_str("if a { let b = 1; }").is_err());
    }

    #[test]
    fn test_trailing_operator_is_error() {
        assert!(parse_str("let x = 1 >;").is_err());
        assert!(parse_str("let x = >;").is_err());
    }

    #[test]
    fn test_bare_expression_is_not_a_statement() {
        assert!(parse_str("x;").is_err());
    }

    #[test]
    fn test_parse_is_repeatable() {
        let tokens = lexer::tokenize("let x = 1; if (x > 0) { let y = x; }").unwrap();
        let snapshot = tokens.clone();
        let parser = Parser::new(&tokens);
        let first = parser.parse().unwrap();
        let second = parser.parse().unwrap();
        assert_eq!(first, second);
        assert_eq!(tokens, snapshot);
    }

    #[test]
    fn test_missing_eof_is_tolerated() {
        let mut tokens = lexer::tokenize("let x = 1;").unwrap();
        tokens.pop();
        assert_eq!(parse(&tokens).unwrap().len(), 1);
    }

    #[test]
    fn test_tokens_after_eof_are_ignored() {
        let mut tokens = lexer::tokenize("let x = 1;").unwrap();
        tokens.push(Token::identifier("junk", Span::new(10, 14)));
        assert_eq!(parse(&tokens).unwrap().len(), 1);
    }

    #[test]
    fn test_nesting_limit() {
        let source = "if (a) { if (b) { let c = 1; } }";
        let tokens = lexer::tokenize(source).unwrap();

        assert!(parse_with_max_depth(&tokens, 2).is_ok());

        let err = parse_with_max_depth(&tokens, 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: 1 });
        assert_eq!(err.position, 5);
        assert_eq!(err.span, Span::new(9, 11));
    }

    #[test]
    fn test_default_nesting_limit_on_deep_input() {
        let depth = DEFAULT_MAX_DEPTH + 1;
        let source = format!("{}let x = 1;{}", "if (a) { ".repeat(depth), " }".repeat(depth));
        let err = parse_str(&source).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: DEFAULT_MAX_DEPTH });

        let ok = format!("{}let x = 1;{}", "if (a) { ".repeat(DEFAULT_MAX_DEPTH), " }".repeat(DEFAULT_MAX_DEPTH));
        assert_eq!(parse_str(&ok).unwrap().len(), 1);
    }

    fn chain(operators: usize) -> String {
        format!("let x = a{};", " = a".repeat(operators))
    }

    #[test]
    fn test_builder_limits() {
        let parser = Parser::new(&[]);
        assert_eq!(parser.max_depth(), DEFAULT_MAX_DEPTH);
        assert_eq!(parser.max_operators(), DEFAULT_MAX_OPERATORS);

        let parser = parser.with_max_depth(3).with_max_operators(5);
        assert_eq!(parser.max_depth(), 3);
        assert_eq!(parser.max_operators(), 5);
    }

    #[test]
    fn test_operator_limit() {
        let tokens = lexer::tokenize("let x = a > b > c;").unwrap();

        assert!(Parser::new(&tokens).with_max_operators(2).parse().is_ok());

        let err = Parser::new(&tokens).with_max_operators(1).parse().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpressionTooLong { limit: 1 });
        assert_eq!(err.position, 6);
        assert_eq!(err.span, Span::new(14, 15));
    }

    #[test]
    fn test_operator_limit_applies_to_if_condition() {
        let tokens = lexer::tokenize("if (a > b > c) { let d = 1; }").unwrap();
        let err = Parser::new(&tokens).with_max_operators(1).parse().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpressionTooLong { limit: 1 });
        assert_eq!(err.position, 5);
    }

    #[test]
    fn test_chain_at_default_limit_survives_drop_eq_and_walk() {
        let program = parse_str(&chain(DEFAULT_MAX_OPERATORS)).unwrap();
        let copy = program.clone();
        assert!(program == copy);

        struct Terms(usize);
        impl Visitor for Terms {
            fn visit_expr(&mut self, expr: &Expr) {
                if !matches!(expr, Expr::Binary { .. }) {
                    self.0 += 1;
                }
                walk_expr(self, expr);
            }
        }
        let mut terms = Terms(0);
        terms.visit_program(&program);
        assert_eq!(terms.0, DEFAULT_MAX_OPERATORS + 1);
    }

    #[test]
    fn test_very_long_chain_is_rejected_not_overflowed() {
        let err = parse_str(&chain(100_000)).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpressionTooLong { limit: DEFAULT_MAX_OPERATORS });
        assert_eq!(err.position, 4 + 2 * DEFAULT_MAX_OPERATORS);
    }

    #[test]
    fn test_rules_report_consumed_tokens() {
        let tokens = lexer::tokenize("let x = a > 1; if (x) { let y = 2; }").unwrap();
        let parser = Parser::new(&tokens);

        let assign = parser.statement(0, 0).unwrap().unwrap();
        assert_eq!(assign.consumed, 7);

        let if_stmt = parser.statement(7, 0).unwrap().unwrap();
        assert_eq!(if_stmt.consumed, 11);
        assert!(parser.is_at_end(18));
    }

    #[test]
    fn test_failed_rule_has_no_effect() {
        let tokens = lexer::tokenize("let x 5;").unwrap();
        let parser = Parser::new(&tokens);
        assert!(parser.assignment(0).unwrap().is_none());
        assert!(parser.statement(0, 0).unwrap().is_none());
        assert!(parser.assignment(0).unwrap().is_none());
    }

    #[test]
    fn test_hand_built_tokens_without_values_do_not_match() {
        let tokens = vec![
            Token::simple(TokenKind::KeywordLet, Span::new(0, 3)),
            Token::simple(TokenKind::Identifier, Span::new(4, 5)),
            Token::simple(TokenKind::AssignmentOperator, Span::new(6, 7)),
            Token::integer(1, Span::new(8, 9)),
            Token::simple(TokenKind::Semicolon, Span::new(9, 10)),
            Token::eof(10),
        ];
        assert!(parse(&tokens).is_err());
    }
}
