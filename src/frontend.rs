//! Frontend pipeline: source text → tokens → [`Program`].
//!
//! ## Examples
//! ```rust
//! use sprig::{FrontendConfig, frontend};
//!
//! let config = FrontendConfig::new().with_source_name("demo.sprig");
//! let program = frontend::parse_source("if (x > 1) { let y = 2; }", &config).unwrap();
//! assert_eq!(program.len(), 1);
//! ```

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, Report};
use sprig_syntax::ast::{Program, Span};
use sprig_syntax::diagnostics::{LexError, ParseError};
use sprig_syntax::lexer;
use sprig_syntax::parser::Parser;
use thiserror::Error;

use crate::config::FrontendConfig;

/// Failure of either pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum FrontendError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl FrontendError {
    /// Byte span of the offending input.
    pub fn span(&self) -> Span {
        match self {
            FrontendError::Lex(err) => err.span,
            FrontendError::Parse(err) => err.span,
        }
    }

    /// Attach the source text so the error renders with a labelled snippet.
    pub fn into_report(self, name: impl AsRef<str>, source: impl Into<String>) -> Report {
        Report::new(self).with_source_code(NamedSource::new(name, source.into()))
    }

    /// Render the error against its source as plain (uncolored) text.
    pub fn render(&self, name: &str, source: &str) -> String {
        let report = self.clone().into_report(name, source);
        let mut out = String::new();
        let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
        if handler.render_report(&mut out, &*report).is_err() {
            return self.to_string();
        }
        out
    }
}

/// Tokenize and parse `source`.
///
/// ## Errors
/// Returns the lexer's or the parser's error; no partial program is ever returned.
#[tracing::instrument(skip_all, fields(source = %config.source_name, source_len = source.len()))]
pub fn parse_source(source: &str, config: &FrontendConfig) -> Result<Program, FrontendError> {
    let tokens = lexer::tokenize(source).inspect_err(|err| tracing::debug!(%err, "lexing failed"))?;
    let program = Parser::new(&tokens)
        .with_max_depth(config.max_nesting_depth)
        .with_max_operators(config.max_expression_operators)
        .parse()
        .inspect_err(|err| tracing::debug!(%err, "parsing failed"))?;
    tracing::debug!(tokens = tokens.len(), statements = program.len(), "parsed source");
    Ok(program)
}

/// [`parse_source`] with the default configuration.
pub fn parse_str(source: &str) -> Result<Program, FrontendError> {
    parse_source(source, &FrontendConfig::default())
}
