//! Unary operator binding. Arithmetic sign operators require a numeric
//! operand and keep its type; logical not requires bool.

use exprbind_core::{BindError, DataType, UnaryOp};

use super::{Binder, Result};
use crate::ast::Expr;
use crate::bound::{BoundExpr, UnaryExpr};

pub(super) fn bind_unary(
    binder: &Binder<'_, '_>,
    op: UnaryOp,
    operand: &Expr,
) -> Result<BoundExpr> {
    let operand = binder.bind(operand)?;
    let ctx = binder.ctx();
    let operand_type = operand.data_type();

    let data_type = match op {
        UnaryOp::Plus | UnaryOp::Negate => {
            if !operand_type.is_numeric() {
                return Err(BindError::OperandTypeMismatch {
                    op: op.to_string(),
                    type_name: ctx.type_name(operand_type),
                });
            }
            operand_type
        }
        UnaryOp::Not => {
            if operand_type != DataType::boolean() {
                return Err(BindError::OperandTypeMismatch {
                    op: op.to_string(),
                    type_name: ctx.type_name(operand_type),
                });
            }
            DataType::boolean()
        }
    };

    Ok(BoundExpr::Unary(UnaryExpr {
        op,
        operand: Box::new(operand),
        data_type,
    }))
}
