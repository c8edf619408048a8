//! Identifier binding.
//!
//! Resolution precedence is fixed and total: declared variables, then owner
//! members (instance view before static view), then namespace imports, then
//! members of type imports in import order. The first successful match wins;
//! exhausting every tier is an error.

use exprbind_core::BindError;

use super::{Binder, Result, member};
use crate::bound::{BoundExpr, NamespaceExpr, OwnerExpr, TypeRefExpr, VariableExpr};
use crate::context::Import;

pub(super) fn bind_identifier(binder: &Binder<'_, '_>, name: &str) -> Result<BoundExpr> {
    let ctx = binder.ctx();

    // (a) declared variables
    if let Some((slot, data_type)) = ctx.lookup_identifier(name) {
        return Ok(BoundExpr::Variable(VariableExpr { slot, data_type }));
    }

    // (b) owner members, instance view before static view
    if let Some(owner) = ctx.owner() {
        let instance = BoundExpr::Owner(OwnerExpr { data_type: owner });
        if let Some(found) = member::resolve_member(binder, &instance, name)? {
            return Ok(found);
        }
        let static_view = BoundExpr::TypeRef(TypeRefExpr { data_type: owner });
        if let Some(found) = member::resolve_member(binder, &static_view, name)? {
            return Ok(found);
        }
    }

    // (c) namespace imports: an exact namespace-name match binds to a
    // static namespace context, not a member
    for import in ctx.imports() {
        if let Import::Namespace(path) = import
            && ctx.names_match(path, name)
        {
            return Ok(BoundExpr::Namespace(NamespaceExpr { path: path.clone() }));
        }
    }

    // (d) members of type imports, in import order
    for import in ctx.imports() {
        if let Import::Type(data_type) = import {
            let view = BoundExpr::TypeRef(TypeRefExpr {
                data_type: *data_type,
            });
            if let Some(found) = member::resolve_member(binder, &view, name)? {
                return Ok(found);
            }
        }
    }

    Err(BindError::UnresolvedIdentifier {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;
    use crate::context::{BindContext, BindOptions};
    use crate::conversion::PrimitiveCastTable;
    use crate::expr::bind;
    use crate::overload::CostOverloadResolver;
    use crate::registry::{TypeEntry, TypeRegistry};
    use exprbind_core::{DataType, FieldDef, MethodDef, Value};

    fn player_registry() -> TypeRegistry {
        let mut registry = TypeRegistry::with_primitives();
        registry.register(
            TypeEntry::new("Player")
                .with_method(MethodDef::new("get_Score", vec![], DataType::int32()))
                .with_field(FieldDef::new("health", DataType::int32()))
                .with_field(FieldDef::literal("MaxLevel", Value::Int32(99))),
        );
        registry
    }

    #[test]
    fn variables_shadow_owner_members() {
        let registry = player_registry();
        let casts = PrimitiveCastTable;
        let overloads = CostOverloadResolver;
        let mut ctx = BindContext::new(&registry, &casts, &overloads);
        ctx.set_owner(registry.type_by_name("Player").unwrap());
        // "health" is both a variable and an owner field
        let slot = ctx.declare("health", Some(DataType::boolean()));

        let bound = bind(&Expr::ident("health"), &ctx).unwrap();
        match bound {
            BoundExpr::Variable(v) => {
                assert_eq!(v.slot, slot);
                assert_eq!(v.data_type, DataType::boolean());
            }
            other => panic!("expected variable binding, got {other:?}"),
        }
    }

    #[test]
    fn owner_members_resolve_without_a_variable() {
        let registry = player_registry();
        let casts = PrimitiveCastTable;
        let overloads = CostOverloadResolver;
        let mut ctx = BindContext::new(&registry, &casts, &overloads);
        ctx.set_owner(registry.type_by_name("Player").unwrap());

        // Property via the getter convention
        let bound = bind(&Expr::ident("Score"), &ctx).unwrap();
        match bound {
            BoundExpr::Call(call) => {
                assert_eq!(call.method.name, "get_Score");
                assert!(matches!(call.operand.as_deref(), Some(BoundExpr::Owner(_))));
            }
            other => panic!("expected property call, got {other:?}"),
        }

        // Plain field
        let bound = bind(&Expr::ident("health"), &ctx).unwrap();
        assert!(matches!(bound, BoundExpr::Field(_)));
    }

    #[test]
    fn untyped_slot_falls_through_to_owner() {
        let registry = player_registry();
        let casts = PrimitiveCastTable;
        let overloads = CostOverloadResolver;
        let mut ctx = BindContext::new(&registry, &casts, &overloads);
        ctx.set_owner(registry.type_by_name("Player").unwrap());
        ctx.declare("health", None);

        let bound = bind(&Expr::ident("health"), &ctx).unwrap();
        assert!(matches!(bound, BoundExpr::Field(_)));
    }

    #[test]
    fn namespace_import_match_binds_a_namespace_context() {
        let registry = player_registry();
        let casts = PrimitiveCastTable;
        let overloads = CostOverloadResolver;
        let mut ctx = BindContext::new(&registry, &casts, &overloads);
        ctx.import(Import::Namespace("Game".into()));

        let bound = bind(&Expr::ident("Game"), &ctx).unwrap();
        assert_eq!(
            bound,
            BoundExpr::Namespace(NamespaceExpr { path: "Game".into() })
        );
    }

    #[test]
    fn type_import_members_are_the_last_tier() {
        let registry = player_registry();
        let casts = PrimitiveCastTable;
        let overloads = CostOverloadResolver;
        let mut ctx = BindContext::new(&registry, &casts, &overloads);
        ctx.import(Import::Type(registry.type_by_name("Player").unwrap()));

        // MaxLevel is a literal static field; it folds to a constant
        let bound = bind(&Expr::ident("MaxLevel"), &ctx).unwrap();
        match bound {
            BoundExpr::Constant(c) => assert_eq!(c.value, Value::Int32(99)),
            other => panic!("expected folded constant, got {other:?}"),
        }
    }

    #[test]
    fn case_policy_governs_every_tier() {
        let registry = player_registry();
        let casts = PrimitiveCastTable;
        let overloads = CostOverloadResolver;
        let mut ctx = BindContext::new(&registry, &casts, &overloads);
        ctx.declare("Total", Some(DataType::int32()));

        assert!(bind(&Expr::ident("TOTAL"), &ctx).is_err());

        let mut relaxed = BindContext::new(&registry, &casts, &overloads);
        relaxed.set_options(BindOptions {
            case_sensitive: false,
            ..BindOptions::default()
        });
        relaxed.declare("Total", Some(DataType::int32()));

        for spelling in ["Total", "total", "TOTAL"] {
            let bound = bind(&Expr::ident(spelling), &relaxed).unwrap();
            assert!(matches!(bound, BoundExpr::Variable(_)), "{spelling}");
        }
    }

    #[test]
    fn exhausting_all_tiers_is_an_error() {
        let registry = player_registry();
        let casts = PrimitiveCastTable;
        let overloads = CostOverloadResolver;
        let ctx = BindContext::new(&registry, &casts, &overloads);

        assert!(matches!(
            bind(&Expr::ident("nothing"), &ctx).unwrap_err(),
            BindError::UnresolvedIdentifier { .. }
        ));
    }
}
