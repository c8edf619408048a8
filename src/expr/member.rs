//! Member access binding and the shared member-resolution routine.
//!
//! The property convention: a member named `X` on type `T` binds to a
//! no-argument call of the sole method named `get_X`. The scan matches by
//! name alone; two or more methods of that name is a hard ambiguity, and
//! only a complete absence of name matches falls through to field lookup.

use exprbind_core::BindError;

use super::{Binder, Result};
use crate::ast::Expr;
use crate::bound::{BoundExpr, CallExpr, ConstantExpr, FieldExpr, TypeRefExpr};

pub(super) fn bind_member(
    binder: &Binder<'_, '_>,
    operand_ast: &Expr,
    member: &str,
) -> Result<BoundExpr> {
    let operand = binder.bind(operand_ast)?;
    let ctx = binder.ctx();

    // Member access on a namespace context extends the path to a type name.
    if let BoundExpr::Namespace(ns) = &operand {
        let qualified = format!("{}.{}", ns.path, member);
        return match ctx.types().type_by_name(&qualified) {
            Some(data_type) => Ok(BoundExpr::TypeRef(TypeRefExpr { data_type })),
            None => Err(BindError::UnknownTypeName { name: qualified }),
        };
    }

    match resolve_member(binder, &operand, member)? {
        Some(found) => Ok(found),
        None => Err(BindError::UnresolvedMember {
            member: member.to_string(),
            type_name: ctx.type_name(operand.data_type()),
        }),
    }
}

/// Resolve `member` on a bound operand. `Ok(None)` means the operand's type
/// simply has no such member; the caller decides whether that is an error.
pub(crate) fn resolve_member(
    binder: &Binder<'_, '_>,
    operand: &BoundExpr,
    member: &str,
) -> Result<Option<BoundExpr>> {
    let ctx = binder.ctx();
    let is_static = operand.is_static_context();
    let data_type = operand.data_type();
    let filter = ctx.options().member_filter;

    let getter = format!("get_{member}");
    let mut getters = ctx
        .types()
        .methods(data_type, filter, is_static)
        .into_iter()
        .filter(|m| ctx.names_match(&m.name, &getter));

    if let Some(method) = getters.next() {
        if getters.next().is_some() {
            return Err(BindError::AmbiguousMember {
                member: member.to_string(),
                type_name: ctx.type_name(data_type),
            });
        }
        return Ok(Some(BoundExpr::Call(CallExpr {
            operand: (!is_static).then(|| Box::new(operand.clone())),
            method,
            args: Vec::new(),
        })));
    }

    let case_sensitive = ctx.options().case_sensitive;
    if let Some(field) = ctx
        .types()
        .field(data_type, member, case_sensitive, filter, is_static)
    {
        // Literal fields fold to their constant value at bind time.
        if let Some(value) = field.literal.clone() {
            return Ok(Some(BoundExpr::Constant(ConstantExpr {
                data_type: value.data_type(),
                value,
            })));
        }
        return Ok(Some(BoundExpr::Field(FieldExpr {
            operand: Box::new(operand.clone()),
            field,
        })));
    }

    Ok(None)
}
