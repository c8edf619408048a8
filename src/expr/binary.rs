//! Binary operator binding.
//!
//! Logical operators demand bool operands outright, before any coercion is
//! attempted, so `true and 1` reports an operand-type error rather than a
//! missing conversion. Everything else promotes both sides to a common type
//! first; comparisons then yield bool while arithmetic keeps the common
//! type.

use exprbind_core::{BindError, BinaryOp, DataType};

use super::{Binder, Result};
use crate::ast::Expr;
use crate::bound::{BinaryExpr, BoundExpr};
use crate::conversion;

pub(super) fn bind_binary(
    binder: &Binder<'_, '_>,
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
) -> Result<BoundExpr> {
    let left = binder.bind(left)?;
    let right = binder.bind(right)?;
    let ctx = binder.ctx();
    let left_type = left.data_type();
    let right_type = right.data_type();

    let common = if op.is_logical() {
        for operand_type in [left_type, right_type] {
            if operand_type != DataType::boolean() {
                return Err(BindError::OperandTypeMismatch {
                    op: op.to_string(),
                    type_name: ctx.type_name(operand_type),
                });
            }
        }
        DataType::boolean()
    } else {
        conversion::common_type(left_type, right_type, op, ctx)?
    };

    let data_type = conversion::result_type(left_type, right_type, common, op, ctx)?;

    Ok(BoundExpr::Binary(BinaryExpr {
        op,
        left: Box::new(left),
        right: Box::new(right),
        common,
        data_type,
    }))
}
