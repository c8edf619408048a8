//! Implicit-conversion analysis: the common-type (coercion) resolver.
//!
//! [`common_type`] computes the type both operands of a binary operation are
//! promoted to before the operation is applied. It is a pure function of the
//! two operand types and the operator; widening knowledge comes from the
//! context's casting table.

mod operators;
mod table;

pub use operators::result_type;
pub use table::PrimitiveCastTable;

use exprbind_core::{BindError, BinaryOp, DataType};

use crate::context::BindContext;

type Result<T> = std::result::Result<T, BindError>;

/// Compute the common type of two operand types under an operator.
///
/// Rules, in priority order:
/// 1. identical types;
/// 2. addition with a string on either side concatenates, so string wins;
/// 3. the other side's exact type anywhere in one side's widening chain
///    (left chain checked first);
/// 4. otherwise, the shared chain type with the lowest index in the
///    *right-hand* chain. The right-hand bias is deliberate and kept for
///    compatibility; callers must not rely on symmetry here.
pub fn common_type(
    left: DataType,
    right: DataType,
    op: BinaryOp,
    ctx: &BindContext<'_>,
) -> Result<DataType> {
    if left == right {
        return Ok(left);
    }

    if op == BinaryOp::Add && (left == DataType::string() || right == DataType::string()) {
        return Ok(DataType::string());
    }

    let no_conversion = || BindError::NoImplicitConversion {
        left: ctx.type_name(left),
        right: ctx.type_name(right),
    };

    let left_chain = ctx.casts().widening_chain(left).ok_or_else(no_conversion)?;
    let right_chain = ctx.casts().widening_chain(right).ok_or_else(no_conversion)?;

    if left_chain.contains(&right) {
        return Ok(right);
    }
    if right_chain.contains(&left) {
        return Ok(left);
    }

    for candidate in right_chain {
        if left_chain.contains(candidate) {
            return Ok(*candidate);
        }
    }

    Err(no_conversion())
}

/// Whether `from` converts implicitly to `to` (identity or widening).
pub fn implicitly_converts(from: DataType, to: DataType, ctx: &BindContext<'_>) -> bool {
    from == to
        || ctx
            .casts()
            .widening_chain(from)
            .is_some_and(|chain| chain.contains(&to))
}

/// The cost of implicitly converting `from` to `to`: 0 for identity, the
/// chain index for a widening step, `None` when no implicit conversion
/// exists. Used by overload ranking.
pub fn widening_cost(from: DataType, to: DataType, ctx: &BindContext<'_>) -> Option<u32> {
    if from == to {
        return Some(0);
    }
    ctx.casts()
        .widening_chain(from)?
        .iter()
        .position(|t| *t == to)
        .map(|i| i as u32)
}
