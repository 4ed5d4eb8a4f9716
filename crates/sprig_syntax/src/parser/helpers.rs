/// Token-stream helpers.
///
/// Low-level primitives used by every grammar rule: looking at the token at an index and checking
/// it against a keyword, operator or punctuation id. Out-of-range indices simply fail to match.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn token_at(&self, pos: usize) -> Option<&'a Token> {
        self.tokens.get(pos)
    }

    /// Return `true` if `pos` is past the slice or on the `Eof` sentinel.
    fn is_at_end(&self, pos: usize) -> bool {
        self.token_at(pos).is_none_or(Token::is_eof)
    }

    fn check_keyword(&self, pos: usize, id: KeywordId) -> bool {
        self.token_at(pos).is_some_and(|t| t.kind.is_keyword(id))
    }

    fn check_punct(&self, pos: usize, id: PunctuationId) -> bool {
        self.token_at(pos).is_some_and(|t| t.kind.is_punctuation(id))
    }

    fn check_op(&self, pos: usize, id: OperatorId) -> bool {
        self.token_at(pos).is_some_and(|t| t.kind.is_operator(id))
    }

    fn identifier(&self, pos: usize) -> Option<Ident> {
        self.token_at(pos)?.identifier_name().map(str::to_string)
    }
}
