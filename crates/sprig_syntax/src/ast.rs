//! Abstract Syntax Tree definitions for Sprig
//!
//! A [`Program`] is an ordered list of [`Statement`]s. Statements and expressions are closed sum
//! types: consumers `match` on them exhaustively (or implement [`Visitor`]), so adding a variant
//! is a compile error everywhere it matters.
//!
//! Trees are built once by the parser and never mutated. Each [`Expr::Binary`] owns its operands.

use std::fmt;

use sprig_core::lang::operators::{self, OperatorId};

/// Source location span (byte offsets, half-open)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// Identifier
pub type Ident = String;

/// A program is a sequence of statements, in source order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl IntoIterator for Program {
    type Item = Statement;
    type IntoIter = std::vec::IntoIter<Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let x = value;`
    Assignment(AssignmentStmt),
    /// `if (cond) { ... }`
    If(IfStmt),
}

impl Statement {
    pub fn assign(identifier: impl Into<Ident>, expr: Expr) -> Self {
        Statement::Assignment(AssignmentStmt {
            identifier: identifier.into(),
            expr,
        })
    }

    pub fn if_block(condition: Expr, body: Vec<Statement>) -> Self {
        Statement::If(IfStmt { condition, body })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentStmt {
    pub identifier: Ident,
    pub expr: Expr,
}

/// `body` is never empty when produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub condition: Expr,
    pub body: Vec<Statement>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Non-negative integer literal
    IntLiteral(u64),
    /// Identifier
    Identifier(Ident),
    /// Binary operation: `a > b`
    Binary {
        lhs: Box<Expr>,
        op: BinaryOp,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn int(value: u64) -> Self {
        Expr::IntLiteral(value)
    }

    pub fn ident(name: impl Into<Ident>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn binary(lhs: Expr, op: BinaryOp, rhs: Expr) -> Self {
        Expr::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Equals,
    GreaterThan,
}

impl BinaryOp {
    /// Binary operator for a registry operator, if it may join two terms.
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        if !operators::is_binary(id) {
            return None;
        }
        match id {
            OperatorId::Eq => Some(BinaryOp::Equals),
            OperatorId::Gt => Some(BinaryOp::GreaterThan),
        }
    }

    pub fn operator_id(self) -> OperatorId {
        match self {
            BinaryOp::Equals => OperatorId::Eq,
            BinaryOp::GreaterThan => OperatorId::Gt,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(operators::as_str(self.operator_id()))
    }
}

// ============================================================================
// Visitor trait for AST traversal
// ============================================================================

/// Read-only traversal. The default methods walk the whole tree; override the hooks you need and
/// call [`walk_statement`] / [`walk_expr`] to keep descending.
pub trait Visitor {
    fn visit_program(&mut self, program: &Program) {
        for stmt in &program.statements {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_statement<V: Visitor + ?Sized>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::Assignment(assign) => visitor.visit_expr(&assign.expr),
        Statement::If(if_stmt) => {
            visitor.visit_expr(&if_stmt.condition);
            for inner in &if_stmt.body {
                visitor.visit_statement(inner);
            }
        }
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::IntLiteral(_) | Expr::Identifier(_) => {}
        Expr::Binary { lhs, rhs, .. } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
    }
}
