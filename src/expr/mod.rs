//! The binding visitor.
//!
//! [`Binder::bind`] walks the untyped AST depth-first, bottom-up: children
//! are bound first, then each node's own typing and resolution rule is
//! applied using the children's resolved types. The binder is a pure
//! function of (context, node); it touches no mutable state beyond the
//! read-only context, so independent passes may share one context freely.

mod binary;
mod calls;
mod cast;
mod identifiers;
mod index;
pub(crate) mod member;
mod unary;

use exprbind_core::BindError;

use crate::ast::Expr;
use crate::bound::{BoundExpr, ConstantExpr};
use crate::context::BindContext;

pub(crate) type Result<T> = std::result::Result<T, BindError>;

/// Binds untyped expressions against a [`BindContext`].
pub struct Binder<'a, 'ctx> {
    ctx: &'a BindContext<'ctx>,
}

impl<'a, 'ctx> Binder<'a, 'ctx> {
    pub fn new(ctx: &'a BindContext<'ctx>) -> Self {
        Self { ctx }
    }

    /// Bind one expression tree to a typed tree.
    ///
    /// Binding is all-or-nothing: the first unresolvable node aborts the
    /// pass. The input AST is never mutated; the output is a fresh tree.
    pub fn bind(&self, expr: &Expr) -> Result<BoundExpr> {
        match expr {
            Expr::Constant(value) => Ok(BoundExpr::Constant(ConstantExpr {
                data_type: value.data_type(),
                value: value.clone(),
            })),
            Expr::Identifier(name) => identifiers::bind_identifier(self, name),
            Expr::Member { operand, member } => member::bind_member(self, operand, member),
            Expr::Call { operand, args } => calls::bind_call(self, operand, args),
            Expr::Index { operand, args } => index::bind_index(self, operand, args),
            Expr::Cast {
                operand,
                type_name,
                rank,
            } => cast::bind_cast(self, operand, type_name, *rank),
            Expr::Unary { op, operand } => unary::bind_unary(self, *op, operand),
            Expr::Binary { op, left, right } => binary::bind_binary(self, *op, left, right),
        }
    }

    pub fn ctx(&self) -> &BindContext<'ctx> {
        self.ctx
    }
}

/// Bind an expression against a context. Convenience for one-off passes.
pub fn bind(expr: &Expr, ctx: &BindContext<'_>) -> Result<BoundExpr> {
    Binder::new(ctx).bind(expr)
}
