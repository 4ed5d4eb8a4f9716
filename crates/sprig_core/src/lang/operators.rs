//! Operator vocabulary.
//!
//! Sprig has two symbol operators. `=` doubles as the assignment marker in `let` statements and
//! as the equality comparison inside expressions; `>` is only a comparison.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (trivially, since all spellings are symbols).
//! - Binary operators share a single precedence level and associate to the left.
//!
//! ## Examples
//! ```rust
//! use sprig_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str(">"), Some(OperatorId::Gt));
//! assert!(operators::info_for(OperatorId::Eq).roles.assignment);
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    /// `=`
    Eq,
    /// `>`
    Gt,
}

/// Where an operator may appear in the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorRoles {
    /// Separates the name from the value in `let name = expr`.
    pub assignment: bool,
    /// Joins two terms in an expression.
    pub binary: bool,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    pub roles: OperatorRoles,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    OperatorInfo {
        id: OperatorId::Eq,
        canonical: "=",
        roles: OperatorRoles {
            assignment: true,
            binary: true,
        },
    },
    OperatorInfo {
        id: OperatorId::Gt,
        canonical: ">",
        roles: OperatorRoles {
            assignment: false,
            binary: true,
        },
    },
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == s).map(|o| o.id)
}

/// Return `true` if `id` may join two expression terms.
pub fn is_binary(id: OperatorId) -> bool {
    info_for(id).roles.binary
}
