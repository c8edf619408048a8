//! Operator result typing.

use exprbind_core::{BindError, BinaryOp, DataType};

use crate::context::BindContext;

/// Compute the result type of a binary operation given its operand types and
/// their common type.
///
/// Logical operators demand boolean operands and yield boolean. Comparisons
/// (including membership) always yield boolean; whether the two types are
/// actually comparable is not checked here. Everything else yields the
/// common type.
pub fn result_type(
    left: DataType,
    right: DataType,
    common: DataType,
    op: BinaryOp,
    ctx: &BindContext<'_>,
) -> Result<DataType, BindError> {
    if op.is_logical() {
        let boolean = DataType::boolean();
        for operand in [left, right] {
            if operand != boolean {
                return Err(BindError::OperandTypeMismatch {
                    op: op.to_string(),
                    type_name: ctx.type_name(operand),
                });
            }
        }
        return Ok(boolean);
    }

    if op.is_comparison() {
        return Ok(DataType::boolean());
    }

    Ok(common)
}
