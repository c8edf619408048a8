//! Call binding.
//!
//! Arguments are bound first, left to right, so overload selection sees
//! fully typed arguments. The callee form decides the search:
//! a bare identifier searches the owner (static then instance view) and the
//! type imports; a member access searches the operand's type; anything else
//! is not callable.

use exprbind_core::BindError;

use super::{Binder, Result};
use crate::ast::Expr;
use crate::bound::{BoundExpr, OwnerExpr, TypeRefExpr};
use crate::context::Import;

pub(super) fn bind_call(
    binder: &Binder<'_, '_>,
    operand: &Expr,
    args: &[Expr],
) -> Result<BoundExpr> {
    let bound_args = args
        .iter()
        .map(|arg| binder.bind(arg))
        .collect::<Result<Vec<_>>>()?;

    match operand {
        Expr::Identifier(name) => bind_global_call(binder, name, bound_args),
        Expr::Member {
            operand: inner,
            member,
        } => {
            let receiver = binder.bind(inner)?;
            let ctx = binder.ctx();
            match ctx.overloads().resolve(ctx, &receiver, member, &bound_args) {
                Some(call) => Ok(BoundExpr::Call(call)),
                None => Err(no_matching_method(binder, member, &bound_args)),
            }
        }
        _ => Err(BindError::InvalidCallTarget),
    }
}

/// Resolve an unqualified call against the owner and the type imports.
fn bind_global_call(
    binder: &Binder<'_, '_>,
    name: &str,
    args: Vec<BoundExpr>,
) -> Result<BoundExpr> {
    let ctx = binder.ctx();

    if let Some(owner) = ctx.owner() {
        let static_view = BoundExpr::TypeRef(TypeRefExpr { data_type: owner });
        if let Some(call) = ctx.overloads().resolve(ctx, &static_view, name, &args) {
            return Ok(BoundExpr::Call(call));
        }
        let instance = BoundExpr::Owner(OwnerExpr { data_type: owner });
        if let Some(call) = ctx.overloads().resolve(ctx, &instance, name, &args) {
            return Ok(BoundExpr::Call(call));
        }
    }

    for import in ctx.imports() {
        if let Import::Type(data_type) = import {
            let view = BoundExpr::TypeRef(TypeRefExpr {
                data_type: *data_type,
            });
            if let Some(call) = ctx.overloads().resolve(ctx, &view, name, &args) {
                return Ok(BoundExpr::Call(call));
            }
        }
    }

    Err(no_matching_method(binder, name, &args))
}

fn no_matching_method(binder: &Binder<'_, '_>, name: &str, args: &[BoundExpr]) -> BindError {
    let ctx = binder.ctx();
    let args = args
        .iter()
        .map(|arg| ctx.type_name(arg.data_type()))
        .collect::<Vec<_>>()
        .join(", ");
    BindError::NoMatchingMethod {
        name: name.to_string(),
        args,
    }
}
