//! BindContext - the immutable resolution context for one expression.
//!
//! Created once per compiled expression, populated with that expression's
//! declared identifiers, owner type, and imports, then shared read-only for
//! the duration of the binding pass. All providers are `Sync`, so a single
//! context may serve several concurrent binding passes.

use exprbind_core::{CastingTable, DataType, MemberFilter, TypeIntrospection};

use crate::overload::OverloadResolver;

/// Name-resolution options.
#[derive(Debug, Clone, Copy)]
pub struct BindOptions {
    /// Whether identifier and member name comparison is case sensitive.
    pub case_sensitive: bool,
    /// Visibility filter applied to every introspection query.
    pub member_filter: MemberFilter,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            member_filter: MemberFilter::default(),
        }
    }
}

/// A namespace or type brought into scope for unqualified lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Import {
    /// A namespace marker; matching identifiers bind to a namespace context.
    Namespace(String),
    /// A type whose members are searched for unqualified identifiers.
    Type(DataType),
}

/// One declared identifier. A `None` type marks a name that is declared but
/// not variable-bound; such slots never resolve.
#[derive(Debug, Clone)]
struct Identifier {
    name: String,
    data_type: Option<DataType>,
}

/// The binding context: identifier table, owner type, imports, options, and
/// the three collaborator providers.
pub struct BindContext<'a> {
    identifiers: Vec<Identifier>,
    owner: Option<DataType>,
    imports: Vec<Import>,
    options: BindOptions,
    types: &'a dyn TypeIntrospection,
    casts: &'a dyn CastingTable,
    overloads: &'a dyn OverloadResolver,
}

impl<'a> BindContext<'a> {
    pub fn new(
        types: &'a dyn TypeIntrospection,
        casts: &'a dyn CastingTable,
        overloads: &'a dyn OverloadResolver,
    ) -> Self {
        Self {
            identifiers: Vec::new(),
            owner: None,
            imports: Vec::new(),
            options: BindOptions::default(),
            types,
            casts,
            overloads,
        }
    }

    pub fn set_options(&mut self, options: BindOptions) {
        self.options = options;
    }

    /// Set the implicit owner type searched after local variables.
    pub fn set_owner(&mut self, owner: DataType) {
        self.owner = Some(owner);
    }

    /// Declare an identifier and return its slot index. Slots are assigned
    /// in declaration order and index the evaluation-time variable array.
    pub fn declare(&mut self, name: impl Into<String>, data_type: Option<DataType>) -> usize {
        self.identifiers.push(Identifier {
            name: name.into(),
            data_type,
        });
        self.identifiers.len() - 1
    }

    /// Append an import. Imports are searched in insertion order.
    pub fn import(&mut self, import: Import) {
        self.imports.push(import);
    }

    pub fn options(&self) -> &BindOptions {
        &self.options
    }

    pub fn owner(&self) -> Option<DataType> {
        self.owner
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    pub fn types(&self) -> &dyn TypeIntrospection {
        self.types
    }

    pub fn casts(&self) -> &dyn CastingTable {
        self.casts
    }

    pub fn overloads(&self) -> &dyn OverloadResolver {
        self.overloads
    }

    /// Compare two names under the context's case policy.
    pub fn names_match(&self, a: &str, b: &str) -> bool {
        if self.options.case_sensitive {
            a == b
        } else {
            a.eq_ignore_ascii_case(b)
        }
    }

    /// Linear scan of the identifier table for a variable-bound slot whose
    /// name matches under the case policy.
    pub fn lookup_identifier(&self, name: &str) -> Option<(usize, DataType)> {
        self.identifiers
            .iter()
            .enumerate()
            .find_map(|(slot, ident)| match ident.data_type {
                Some(data_type) if self.names_match(&ident.name, name) => Some((slot, data_type)),
                _ => None,
            })
    }

    /// Human-readable type name for diagnostics.
    pub fn type_name(&self, data_type: DataType) -> String {
        self.types.type_name(data_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::PrimitiveCastTable;
    use crate::overload::CostOverloadResolver;
    use crate::registry::TypeRegistry;

    #[test]
    fn slots_follow_declaration_order() {
        let registry = TypeRegistry::with_primitives();
        let casts = PrimitiveCastTable;
        let overloads = CostOverloadResolver;
        let mut ctx = BindContext::new(&registry, &casts, &overloads);

        assert_eq!(ctx.declare("a", Some(DataType::int32())), 0);
        assert_eq!(ctx.declare("b", None), 1);
        assert_eq!(ctx.declare("c", Some(DataType::boolean())), 2);

        assert_eq!(ctx.lookup_identifier("c"), Some((2, DataType::boolean())));
        // Untyped slots never resolve
        assert_eq!(ctx.lookup_identifier("b"), None);
    }

    #[test]
    fn case_policy_applies_to_lookup() {
        let registry = TypeRegistry::with_primitives();
        let casts = PrimitiveCastTable;
        let overloads = CostOverloadResolver;
        let mut ctx = BindContext::new(&registry, &casts, &overloads);
        ctx.declare("Total", Some(DataType::int32()));

        assert!(ctx.lookup_identifier("total").is_none());

        ctx.set_options(BindOptions {
            case_sensitive: false,
            ..BindOptions::default()
        });
        assert_eq!(ctx.lookup_identifier("TOTAL"), Some((0, DataType::int32())));
    }

    #[test]
    fn context_is_shareable_across_threads() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<BindContext<'_>>();
    }
}
