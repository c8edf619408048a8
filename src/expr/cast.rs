//! Cast binding. Only the target type name is resolved here; whether the
//! operand's value actually converts is an execution-time concern.

use super::{Binder, Result};
use crate::ast::Expr;
use crate::bound::{BoundExpr, CastExpr};
use crate::type_resolver;

pub(super) fn bind_cast(
    binder: &Binder<'_, '_>,
    operand: &Expr,
    type_name: &str,
    rank: u8,
) -> Result<BoundExpr> {
    let operand = binder.bind(operand)?;
    let data_type = type_resolver::resolve_type(binder.ctx(), type_name, rank)?;
    Ok(BoundExpr::Cast(CastExpr {
        operand: Box::new(operand),
        data_type,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::BindContext;
    use crate::conversion::PrimitiveCastTable;
    use crate::expr::bind;
    use crate::overload::CostOverloadResolver;
    use crate::registry::TypeRegistry;
    use exprbind_core::{BindError, DataType, Value, primitives};

    #[test]
    fn cast_adopts_the_target_type() {
        let registry = TypeRegistry::with_primitives();
        let casts = PrimitiveCastTable;
        let overloads = CostOverloadResolver;
        let ctx = BindContext::new(&registry, &casts, &overloads);

        let expr = Expr::Cast {
            operand: Box::new(Expr::constant(Value::Int32(1))),
            type_name: "double".to_string(),
            rank: 0,
        };
        let bound = bind(&expr, &ctx).unwrap();
        assert_eq!(bound.data_type(), DataType::simple(primitives::DOUBLE));
    }

    #[test]
    fn narrowing_casts_bind_without_a_legality_check() {
        let registry = TypeRegistry::with_primitives();
        let casts = PrimitiveCastTable;
        let overloads = CostOverloadResolver;
        let ctx = BindContext::new(&registry, &casts, &overloads);

        // double -> int never widens implicitly, but an explicit cast binds.
        let expr = Expr::Cast {
            operand: Box::new(Expr::constant(Value::Double(1.5))),
            type_name: "int".to_string(),
            rank: 0,
        };
        assert_eq!(bind(&expr, &ctx).unwrap().data_type(), DataType::int32());
    }

    #[test]
    fn unknown_target_types_fail() {
        let registry = TypeRegistry::with_primitives();
        let casts = PrimitiveCastTable;
        let overloads = CostOverloadResolver;
        let ctx = BindContext::new(&registry, &casts, &overloads);

        let expr = Expr::Cast {
            operand: Box::new(Expr::constant(Value::Int32(1))),
            type_name: "Widget".to_string(),
            rank: 0,
        };
        assert!(matches!(
            bind(&expr, &ctx).unwrap_err(),
            BindError::UnknownTypeName { .. }
        ));
    }
}
