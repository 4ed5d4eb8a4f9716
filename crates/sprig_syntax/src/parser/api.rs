/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `sprig_syntax::lexer`.
///
/// ## Errors
/// Returns a [`ParseError`] if any statement fails to parse; no partial program is returned.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse()
}

/// Like [`parse`], with an explicit limit on nested `if` blocks.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), max_depth = max_depth))]
pub fn parse_with_max_depth(tokens: &[Token], max_depth: usize) -> Result<Program, ParseError> {
    Parser::new(tokens).with_max_depth(max_depth).parse()
}
