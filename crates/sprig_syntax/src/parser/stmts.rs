/// Statement parsing.
///
/// This chunk implements `statement`, `assignment` and `if_stmt`. Only `if_stmt` can recurse, so
/// it alone carries the nesting depth. Any rule holding an expression can fail hard on the
/// operator limit.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// `statement ::= assignment ';' | if_stmt`
    ///
    /// `depth` is the number of `if` blocks enclosing `pos`.
    fn statement(&self, pos: usize, depth: usize) -> RuleResult<Statement> {
        if let Some(assign) = self.assignment(pos)? {
            if self.check_punct(pos + assign.consumed, PunctuationId::Semicolon) {
                return Ok(Some(Matched::new(Statement::Assignment(assign.node), assign.consumed + 1)));
            }
        }

        Ok(self.if_stmt(pos, depth)?.map(|m| m.map(Statement::If)))
    }

    /// `assignment ::= 'let' IDENTIFIER '=' expr`
    fn assignment(&self, pos: usize) -> RuleResult<AssignmentStmt> {
        if !self.check_keyword(pos, KeywordId::Let) {
            return Ok(None);
        }
        let Some(identifier) = self.identifier(pos + 1) else {
            return Ok(None);
        };
        if !self.check_op(pos + 2, OperatorId::Eq) {
            return Ok(None);
        }
        let Some(expr) = self.expr(pos + 3)? else {
            return Ok(None);
        };

        Ok(Some(Matched::new(
            AssignmentStmt {
                identifier,
                expr: expr.node,
            },
            3 + expr.consumed,
        )))
    }

    /// `if_stmt ::= 'if' '(' expr ')' '{' statement+ '}'`
    fn if_stmt(&self, pos: usize, depth: usize) -> RuleResult<IfStmt> {
        if !self.check_keyword(pos, KeywordId::If) {
            return Ok(None);
        }
        if depth >= self.max_depth {
            return Err(ParseError::too_deep(self.tokens, pos, self.max_depth));
        }

        let mut cursor = pos + 1;
        if !self.check_punct(cursor, PunctuationId::LParen) {
            return Ok(None);
        }
        cursor += 1;

        let Some(condition) = self.expr(cursor)? else {
            return Ok(None);
        };
        cursor += condition.consumed;

        if !self.check_punct(cursor, PunctuationId::RParen) || !self.check_punct(cursor + 1, PunctuationId::LBrace) {
            return Ok(None);
        }
        cursor += 2;

        let mut body = Vec::new();
        while let Some(stmt) = self.statement(cursor, depth + 1)? {
            cursor += stmt.consumed;
            body.push(stmt.node);
        }

        if body.is_empty() || !self.check_punct(cursor, PunctuationId::RBrace) {
            return Ok(None);
        }
        cursor += 1;

        Ok(Some(Matched::new(
            IfStmt {
                condition: condition.node,
                body,
            },
            cursor - pos,
        )))
    }
}
