//! Method overload resolution.
//!
//! The binder consumes overload selection through the [`OverloadResolver`]
//! contract: given a bound operand, a method name, and bound arguments,
//! return the best-matching call or `None`. A `None` is a soft signal — the
//! caller tries the next candidate in its precedence chain and only reports
//! an error once every candidate is exhausted.
//!
//! [`CostOverloadResolver`] is the default implementation: it filters
//! candidates by name, static-ness, and visibility, keeps those whose
//! arity matches and whose every argument widens implicitly to the
//! parameter type, and ranks the survivors by summed widening cost. A tie
//! for the lowest cost is ambiguous and yields no match.

use exprbind_core::{DataType, MethodDef};

use crate::bound::{BoundExpr, CallExpr};
use crate::context::BindContext;
use crate::conversion;

/// Overload selection contract.
pub trait OverloadResolver: Sync {
    /// Select the best method named `name` on the operand's type for the
    /// given arguments. Static context is implied by a `TypeRef` operand.
    /// Returns `None` rather than failing when nothing applies.
    fn resolve(
        &self,
        ctx: &BindContext<'_>,
        operand: &BoundExpr,
        name: &str,
        args: &[BoundExpr],
    ) -> Option<CallExpr>;
}

/// Default cost-ranked overload resolver.
pub struct CostOverloadResolver;

impl OverloadResolver for CostOverloadResolver {
    fn resolve(
        &self,
        ctx: &BindContext<'_>,
        operand: &BoundExpr,
        name: &str,
        args: &[BoundExpr],
    ) -> Option<CallExpr> {
        let is_static = operand.is_static_context();
        let data_type = operand.data_type();

        let candidates = ctx
            .types()
            .methods(data_type, ctx.options().member_filter, is_static)
            .into_iter()
            .filter(|m| ctx.names_match(&m.name, name));

        let arg_types: Vec<DataType> = args.iter().map(BoundExpr::data_type).collect();

        let mut best: Option<(u32, MethodDef)> = None;
        let mut tied = false;
        for method in candidates {
            let Some(cost) = match_cost(&method, &arg_types, ctx) else {
                continue;
            };
            match &best {
                Some((best_cost, _)) if cost > *best_cost => {}
                Some((best_cost, _)) if cost == *best_cost => tied = true,
                _ => {
                    best = Some((cost, method));
                    tied = false;
                }
            }
        }

        let (_, method) = best?;
        if tied {
            return None;
        }

        Some(CallExpr {
            operand: (!is_static).then(|| Box::new(operand.clone())),
            method,
            args: args.to_vec(),
        })
    }
}

/// Total conversion cost of calling `method` with `arg_types`, or `None`
/// when the candidate is not viable.
fn match_cost(method: &MethodDef, arg_types: &[DataType], ctx: &BindContext<'_>) -> Option<u32> {
    if method.params.len() != arg_types.len() {
        return None;
    }
    let mut total = 0u32;
    for (arg, param) in arg_types.iter().zip(&method.params) {
        let cost = conversion::widening_cost(*arg, *param, ctx)?;
        total = total.saturating_add(cost);
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::{ConstantExpr, TypeRefExpr};
    use crate::conversion::PrimitiveCastTable;
    use crate::registry::{TypeEntry, TypeRegistry};
    use exprbind_core::{Value, primitives};

    fn int() -> DataType {
        DataType::int32()
    }

    fn long() -> DataType {
        DataType::simple(primitives::INT64)
    }

    fn double() -> DataType {
        DataType::simple(primitives::DOUBLE)
    }

    fn math_registry() -> TypeRegistry {
        let mut registry = TypeRegistry::with_primitives();
        registry.register(
            TypeEntry::new("Math")
                .with_method(MethodDef::new_static("Max", vec![int(), int()], int()))
                .with_method(MethodDef::new_static("Max", vec![long(), long()], long()))
                .with_method(MethodDef::new_static(
                    "Max",
                    vec![double(), double()],
                    double(),
                )),
        );
        registry
    }

    fn int_arg(v: i32) -> BoundExpr {
        BoundExpr::Constant(ConstantExpr {
            value: Value::Int32(v),
            data_type: int(),
        })
    }

    fn math_ref(registry: &TypeRegistry) -> BoundExpr {
        let data_type = registry.type_by_name("Math").unwrap();
        BoundExpr::TypeRef(TypeRefExpr { data_type })
    }

    #[test]
    fn exact_match_beats_widening() {
        let registry = math_registry();
        let casts = PrimitiveCastTable;
        let resolver = CostOverloadResolver;
        let ctx = BindContext::new(&registry, &casts, &resolver);

        let call = resolver
            .resolve(&ctx, &math_ref(&registry), "Max", &[int_arg(1), int_arg(2)])
            .unwrap();
        assert_eq!(call.method.params, vec![int(), int()]);
        // Static call carries no operand
        assert!(call.operand.is_none());
    }

    #[test]
    fn widening_selects_the_cheapest_candidate() {
        let registry = math_registry();
        let casts = PrimitiveCastTable;
        let resolver = CostOverloadResolver;
        let ctx = BindContext::new(&registry, &casts, &resolver);

        let long_arg = BoundExpr::Constant(ConstantExpr {
            value: Value::Int64(1),
            data_type: long(),
        });
        let call = resolver
            .resolve(
                &ctx,
                &math_ref(&registry),
                "Max",
                &[long_arg.clone(), long_arg],
            )
            .unwrap();
        assert_eq!(call.method.params, vec![long(), long()]);
    }

    #[test]
    fn arity_mismatch_is_no_match() {
        let registry = math_registry();
        let casts = PrimitiveCastTable;
        let resolver = CostOverloadResolver;
        let ctx = BindContext::new(&registry, &casts, &resolver);

        assert!(
            resolver
                .resolve(&ctx, &math_ref(&registry), "Max", &[int_arg(1)])
                .is_none()
        );
    }

    #[test]
    fn cost_tie_is_ambiguous() {
        let mut registry = TypeRegistry::with_primitives();
        // With args (short, int), both candidates cost two widening steps.
        registry.register(
            TypeEntry::new("Amb")
                .with_method(MethodDef::new_static("F", vec![int(), long()], int()))
                .with_method(MethodDef::new_static("F", vec![long(), int()], int())),
        );
        let casts = PrimitiveCastTable;
        let resolver = CostOverloadResolver;
        let ctx = BindContext::new(&registry, &casts, &resolver);

        let amb = BoundExpr::TypeRef(TypeRefExpr {
            data_type: registry.type_by_name("Amb").unwrap(),
        });
        let short_arg = BoundExpr::Constant(ConstantExpr {
            value: Value::Int16(1),
            data_type: DataType::simple(primitives::INT16),
        });
        assert!(
            resolver
                .resolve(&ctx, &amb, "F", &[short_arg, int_arg(2)])
                .is_none()
        );
    }

    #[test]
    fn instance_call_keeps_its_operand() {
        let mut registry = TypeRegistry::with_primitives();
        registry.register(
            TypeEntry::new("Counter").with_method(MethodDef::new("Next", vec![], int())),
        );
        let casts = PrimitiveCastTable;
        let resolver = CostOverloadResolver;
        let ctx = BindContext::new(&registry, &casts, &resolver);

        let counter = BoundExpr::Owner(crate::bound::OwnerExpr {
            data_type: registry.type_by_name("Counter").unwrap(),
        });
        let call = resolver.resolve(&ctx, &counter, "Next", &[]).unwrap();
        assert_eq!(call.operand.as_deref(), Some(&counter));
    }

    #[test]
    fn static_context_hides_instance_methods() {
        let mut registry = TypeRegistry::with_primitives();
        registry.register(
            TypeEntry::new("Counter").with_method(MethodDef::new("Next", vec![], int())),
        );
        let casts = PrimitiveCastTable;
        let resolver = CostOverloadResolver;
        let ctx = BindContext::new(&registry, &casts, &resolver);

        let type_ref = BoundExpr::TypeRef(TypeRefExpr {
            data_type: registry.type_by_name("Counter").unwrap(),
        });
        assert!(resolver.resolve(&ctx, &type_ref, "Next", &[]).is_none());
    }
}
