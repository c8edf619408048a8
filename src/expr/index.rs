//! Index binding.
//!
//! Arrays index directly: the argument count must equal the rank and every
//! argument must widen implicitly to `int`. Rank-1 access is a dedicated
//! element-load node; higher ranks route through the array's `Get` overload.
//! Non-array types index through their single default member's getter.

use exprbind_core::{BindError, DataType};

use super::{Binder, Result};
use crate::ast::Expr;
use crate::bound::{BoundExpr, IndexExpr};
use crate::conversion;

pub(super) fn bind_index(
    binder: &Binder<'_, '_>,
    operand: &Expr,
    args: &[Expr],
) -> Result<BoundExpr> {
    let operand = binder.bind(operand)?;
    let bound_args = args
        .iter()
        .map(|arg| binder.bind(arg))
        .collect::<Result<Vec<_>>>()?;

    let ctx = binder.ctx();
    let data_type = operand.data_type();

    if data_type.is_array() {
        if bound_args.len() != data_type.rank as usize {
            return Err(BindError::RankMismatch {
                expected: data_type.rank,
                provided: bound_args.len(),
            });
        }
        for arg in &bound_args {
            if !conversion::implicitly_converts(arg.data_type(), DataType::int32(), ctx) {
                return Err(BindError::IndexTypeMismatch {
                    type_name: ctx.type_name(arg.data_type()),
                });
            }
        }

        if data_type.rank == 1 {
            let index = match bound_args.into_iter().next() {
                Some(index) => index,
                None => {
                    return Err(BindError::Internal {
                        message: "rank-1 index lost its argument".to_string(),
                    });
                }
            };
            return Ok(BoundExpr::Index(IndexExpr {
                operand: Box::new(operand),
                index: Box::new(index),
                data_type: data_type.element(),
            }));
        }

        return match ctx.overloads().resolve(ctx, &operand, "Get", &bound_args) {
            Some(call) => Ok(BoundExpr::Call(call)),
            None => Err(BindError::UnresolvedIndexer {
                type_name: ctx.type_name(data_type),
            }),
        };
    }

    let default_members = ctx.types().default_members(data_type);
    if default_members.len() != 1 {
        return Err(BindError::UnsupportedIndexing {
            type_name: ctx.type_name(data_type),
        });
    }

    let getter = format!("get_{}", default_members[0]);
    match ctx.overloads().resolve(ctx, &operand, &getter, &bound_args) {
        Some(call) => Ok(BoundExpr::Call(call)),
        None => Err(BindError::UnresolvedIndexer {
            type_name: ctx.type_name(data_type),
        }),
    }
}
