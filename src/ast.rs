//! Untyped expression AST — the binder's input.
//!
//! Produced by a parser outside this crate. Nodes carry only syntactic
//! information: operator kinds, literal values, names, and children. The
//! binder borrows the tree read-only and never mutates it.

use exprbind_core::{BinaryOp, UnaryOp, Value};

/// An untyped expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal constant.
    Constant(Value),

    /// A bare identifier reference.
    Identifier(String),

    /// Member access: `operand.member`.
    Member { operand: Box<Expr>, member: String },

    /// Call: `operand(args...)`. The operand must be a bare identifier or a
    /// member access; anything else is a binding error.
    Call { operand: Box<Expr>, args: Vec<Expr> },

    /// Index access: `operand[args...]`.
    Index { operand: Box<Expr>, args: Vec<Expr> },

    /// Explicit cast of `operand` to the named type; `rank >= 1` casts to an
    /// array type of that rank.
    Cast {
        operand: Box<Expr>,
        type_name: String,
        rank: u8,
    },

    /// Unary operator application.
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// Binary operator application.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Convenience constructor for a boxed identifier.
    pub fn ident(name: impl Into<String>) -> Expr {
        Expr::Identifier(name.into())
    }

    /// Convenience constructor for a constant.
    pub fn constant(value: Value) -> Expr {
        Expr::Constant(value)
    }
}
