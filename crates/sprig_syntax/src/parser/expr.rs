/// Expression parsing.
///
/// Expressions are a flat chain of terms joined by binary operators, folded to the left:
/// `a = b > c` becomes `Binary(Binary(a, =, b), >, c)`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// `expr ::= expr_term (operator expr_term)*`
    ///
    /// A trailing operator with no term after it is left unconsumed for the caller to reject.
    /// Folding more than `max_operators` operators is a hard error at the first one over.
    fn expr(&self, pos: usize) -> RuleResult<Expr> {
        let Some(first) = self.expr_term(pos) else {
            return Ok(None);
        };
        let mut lhs = first.node;
        let mut consumed = first.consumed;
        let mut operators = 0;

        while let Some(op) = self.binary_operator(pos + consumed) {
            let Some(rhs) = self.expr_term(pos + consumed + 1) else {
                break;
            };
            if operators >= self.max_operators {
                return Err(ParseError::too_long(self.tokens, pos + consumed, self.max_operators));
            }
            operators += 1;
            lhs = Expr::binary(lhs, op, rhs.node);
            consumed += 1 + rhs.consumed;
        }

        Ok(Some(Matched::new(lhs, consumed)))
    }

    /// `expr_term ::= INTEGER_LITERAL | IDENTIFIER`
    fn expr_term(&self, pos: usize) -> Option<Matched<Expr>> {
        let token = self.token_at(pos)?;
        if let Some(value) = token.integer_value() {
            return Some(Matched::new(Expr::IntLiteral(value), 1));
        }
        let name = token.identifier_name()?;
        Some(Matched::new(Expr::Identifier(name.to_string()), 1))
    }

    /// `operator ::= '=' | '>'`
    fn binary_operator(&self, pos: usize) -> Option<BinaryOp> {
        let id = self.token_at(pos)?.operator_id()?;
        BinaryOp::from_operator(id)
    }
}
