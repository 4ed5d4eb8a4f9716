//! Frontend configuration for Sprig

use sprig_syntax::parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_OPERATORS};

/// Name shown for sources that have no file name.
pub const DEFAULT_SOURCE_NAME: &str = "<input>";

/// Frontend configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Name used for the source in diagnostics and log spans
    pub source_name: String,
    /// Maximum number of `if` blocks that may enclose one another
    pub max_nesting_depth: usize,
    /// Maximum number of binary operators in one expression
    pub max_expression_operators: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            max_nesting_depth: DEFAULT_MAX_DEPTH,
            max_expression_operators: DEFAULT_MAX_OPERATORS,
        }
    }
}

impl FrontendConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source name used in diagnostics
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    /// Set the nesting limit for `if` blocks
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Set the operator limit for a single expression
    pub fn with_max_expression_operators(mut self, operators: usize) -> Self {
        self.max_expression_operators = operators;
        self
    }
}
