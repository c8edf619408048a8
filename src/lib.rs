//! Semantic binding for dynamic expressions.
//!
//! This crate turns an untyped expression AST into a typed tree: every
//! identifier resolved to a variable slot, owner member, or import; every
//! member access resolved to a getter call or field; every call bound to a
//! concrete method overload; every binary operation assigned its common and
//! result types. Binding is a pure pass over an immutable [`BindContext`];
//! evaluation and parsing live elsewhere.

pub mod ast;
pub mod bound;
pub mod context;
pub mod conversion;
pub mod expr;
pub mod overload;
pub mod registry;
pub mod type_resolver;

pub use exprbind_core::{
    BinaryOp, BindError, CastingTable, DataType, FieldDef, MemberFilter, MethodDef, TypeHash,
    TypeIntrospection, UnaryOp, Value, Visibility, primitives,
};

pub mod prelude {
    pub use crate::ast::Expr;
    pub use crate::bound::BoundExpr;
    pub use crate::context::{BindContext, BindOptions, Import};
    pub use crate::conversion::PrimitiveCastTable;
    pub use crate::expr::{Binder, bind};
    pub use crate::overload::{CostOverloadResolver, OverloadResolver};
    pub use crate::registry::{TypeEntry, TypeRegistry};
    pub use exprbind_core::{
        BinaryOp, BindError, DataType, FieldDef, MemberFilter, MethodDef, UnaryOp, Value,
        Visibility,
    };
}
