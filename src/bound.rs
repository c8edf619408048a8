//! Typed expression tree — the binder's output.
//!
//! A parallel structure to [`crate::ast::Expr`] where every node carries its
//! resolved semantic type. Types are assigned once during binding and never
//! recomputed. The tree is a fresh structure owned by the caller; it is
//! `Clone + PartialEq` so two passes over the same AST can be compared
//! structurally.

use exprbind_core::{BinaryOp, DataType, FieldDef, MethodDef, UnaryOp, Value, primitives};

/// A typed expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundExpr {
    Constant(ConstantExpr),
    Variable(VariableExpr),
    TypeRef(TypeRefExpr),
    Namespace(NamespaceExpr),
    Owner(OwnerExpr),
    Field(FieldExpr),
    Call(CallExpr),
    Index(IndexExpr),
    Cast(CastExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
}

/// A literal constant with its intrinsic type.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantExpr {
    pub value: Value,
    pub data_type: DataType,
}

/// A declared variable: a slot index into the evaluation-time variable array.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub slot: usize,
    pub data_type: DataType,
}

/// A static type context. Denotes a binding context, not a value.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRefExpr {
    pub data_type: DataType,
}

/// A namespace context produced by a namespace-import match. Member access
/// on it resolves `path.member` as a type name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceExpr {
    pub path: String,
}

/// The implicit owner receiver for instance members bound without an
/// explicit operand.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerExpr {
    pub data_type: DataType,
}

/// Field access on an operand (a `TypeRef` operand for static fields).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldExpr {
    pub operand: Box<BoundExpr>,
    pub field: FieldDef,
}

/// A resolved method call. `operand` is `None` for static calls.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub operand: Option<Box<BoundExpr>>,
    pub method: MethodDef,
    pub args: Vec<BoundExpr>,
}

/// Direct element access into a rank-1 array.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub operand: Box<BoundExpr>,
    pub index: Box<BoundExpr>,
    pub data_type: DataType,
}

/// An explicit cast. Legality against the operand type is checked at
/// execution, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub operand: Box<BoundExpr>,
    pub data_type: DataType,
}

/// A typed unary operation.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<BoundExpr>,
    pub data_type: DataType,
}

/// A typed binary operation. `common` is the type both operands are
/// promoted to before the operation; `data_type` is the operation's result.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<BoundExpr>,
    pub right: Box<BoundExpr>,
    pub common: DataType,
    pub data_type: DataType,
}

impl BoundExpr {
    /// The resolved semantic type of this node.
    ///
    /// Namespace contexts denote no value and report the void sentinel.
    pub fn data_type(&self) -> DataType {
        match self {
            BoundExpr::Constant(e) => e.data_type,
            BoundExpr::Variable(e) => e.data_type,
            BoundExpr::TypeRef(e) => e.data_type,
            BoundExpr::Namespace(_) => DataType::simple(primitives::VOID),
            BoundExpr::Owner(e) => e.data_type,
            BoundExpr::Field(e) => e.field.data_type,
            BoundExpr::Call(e) => e.method.return_type,
            BoundExpr::Index(e) => e.data_type,
            BoundExpr::Cast(e) => e.data_type,
            BoundExpr::Unary(e) => e.data_type,
            BoundExpr::Binary(e) => e.data_type,
        }
    }

    /// Whether this node denotes a static binding context.
    pub fn is_static_context(&self) -> bool {
        matches!(self, BoundExpr::TypeRef(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_types_propagate() {
        let constant = BoundExpr::Constant(ConstantExpr {
            value: Value::Int32(7),
            data_type: DataType::int32(),
        });
        assert_eq!(constant.data_type(), DataType::int32());

        let cast = BoundExpr::Cast(CastExpr {
            operand: Box::new(constant),
            data_type: DataType::simple(primitives::DOUBLE),
        });
        assert_eq!(cast.data_type(), DataType::simple(primitives::DOUBLE));
    }

    #[test]
    fn static_context_is_type_ref_only() {
        let type_ref = BoundExpr::TypeRef(TypeRefExpr {
            data_type: DataType::int32(),
        });
        assert!(type_ref.is_static_context());

        let owner = BoundExpr::Owner(OwnerExpr {
            data_type: DataType::int32(),
        });
        assert!(!owner.is_static_context());
    }
}
