/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the [`Matched`] result of a successful rule, and the
/// top-level driver.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.
/// - Rules never move a shared cursor. Each takes the index it starts at and reports how many
///   tokens it consumed, so a failed attempt leaves nothing to undo.

/// Default limit on nested `if` blocks.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default limit on binary operators in a single expression.
///
/// Each operator adds one level to the folded [`Expr`] tree, and dropping, comparing or walking
/// that tree recurses once per level.
pub const DEFAULT_MAX_OPERATORS: usize = 1024;

/// A rule that matched: the node it built and the number of tokens it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched<T> {
    pub node: T,
    pub consumed: usize,
}

impl<T> Matched<T> {
    pub fn new(node: T, consumed: usize) -> Self {
        Self { node, consumed }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Matched<U> {
        Matched {
            node: f(self.node),
            consumed: self.consumed,
        }
    }
}

/// Outcome of a rule that may hit a size limit.
///
/// `Ok(None)` means “no match here”; `Err` aborts the whole parse.
pub type RuleResult<T> = Result<Option<Matched<T>>, ParseError>;

/// Parser over a borrowed token sequence.
///
/// ## Notes
/// - The parser holds no cursor and no error list; [`Parser::parse`] can be called any number of
///   times and always produces the same result.
/// - There is no error recovery: the first statement that fails to parse fails the program.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    tokens: &'a [Token],
    max_depth: usize,
    max_operators: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `sprig_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            max_depth: DEFAULT_MAX_DEPTH,
            max_operators: DEFAULT_MAX_OPERATORS,
        }
    }

    /// Limit how many `if` blocks may enclose one another.
    ///
    /// Parsing recurses once per enclosing block, so very large limits (thousands and up) let
    /// hostile input exhaust the thread's stack again.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Limit how many binary operators one expression may chain.
    ///
    /// The same stack caveat as [`Parser::with_max_depth`] applies: the limit is also the depth
    /// of the deepest expression tree the caller will later drop or walk.
    pub fn with_max_operators(mut self, max_operators: usize) -> Self {
        self.max_operators = max_operators;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn max_operators(&self) -> usize {
        self.max_operators
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// Stops at the first `Eof` token, or at the end of the slice if there is none.
    ///
    /// ## Errors
    /// Returns a [`ParseError`] positioned at the first statement that no rule matches, at the
    /// `if` that exceeds the nesting limit, or at the operator that exceeds the operator limit.
    pub fn parse(&self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        let mut pos = 0;

        while !self.is_at_end(pos) {
            let Some(matched) = self.statement(pos, 0)? else {
                tracing::debug!(position = pos, "no statement rule matches");
                return Err(ParseError::no_match(self.tokens, pos));
            };
            tracing::debug!(position = pos, consumed = matched.consumed, "parsed statement");
            pos += matched.consumed;
            statements.push(matched.node);
        }

        Ok(Program::new(statements))
    }
}
