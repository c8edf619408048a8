//! Collaborator contracts consumed by the binder.
//!
//! The binder never enumerates members or widening rules itself; it queries
//! these providers. Implementations must behave as pure, side-effect-free
//! queries; any caching they do must be safe for concurrent reads, since one
//! binding context may serve several binding passes in parallel.

use crate::data_type::DataType;
use crate::member::{FieldDef, MethodDef};
use crate::visibility::MemberFilter;

/// Runtime type introspection: enumerates a type's members and resolves
/// type names.
pub trait TypeIntrospection: Sync {
    /// All methods on `data_type` matching the static-context flag and the
    /// visibility filter. Name filtering is the caller's job.
    fn methods(&self, data_type: DataType, filter: MemberFilter, is_static: bool) -> Vec<MethodDef>;

    /// The field named `name` on `data_type`, honoring the case policy,
    /// static-context flag, and visibility filter.
    fn field(
        &self,
        data_type: DataType,
        name: &str,
        case_sensitive: bool,
        filter: MemberFilter,
        is_static: bool,
    ) -> Option<FieldDef>;

    /// Resolve a qualified type name to a type, if known.
    fn type_by_name(&self, name: &str) -> Option<DataType>;

    /// Default indexer member names declared on `data_type`.
    ///
    /// Indexing a non-array operand requires exactly one such declaration.
    fn default_members(&self, data_type: DataType) -> Vec<String>;

    /// Human-readable name for diagnostics.
    fn type_name(&self, data_type: DataType) -> String;
}

/// Casting table: the ordered implicit-widening chain of a numeric type.
pub trait CastingTable: Sync {
    /// The widening chain for `data_type`, starting at the type itself and
    /// ordered narrow to wide. `None` for types with no implicit widening
    /// (bool, string, user types).
    fn widening_chain(&self, data_type: DataType) -> Option<&[DataType]>;
}
