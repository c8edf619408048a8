//! Binding errors.
//!
//! Binding is all-or-nothing per expression: the first unresolvable node
//! aborts the pass with one of these errors. Collaborator "not found"
//! results are not errors; they are `Option`/`Ok(None)` signals used to try
//! the next candidate, and only exhaustion of all candidates surfaces here.
//!
//! [`BindError::Internal`] is the fatal kind: it signals a defect in the AST
//! producer or a provider, not a user error, and callers must not catch and
//! retry it.

use thiserror::Error;

/// Errors produced by the binding pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    /// No resolution tier produced a binding for an identifier.
    #[error("unresolved identifier '{name}'")]
    UnresolvedIdentifier { name: String },

    /// Member access found neither a getter-convention method nor a field.
    #[error("could not resolve member '{member}' on type '{type_name}'")]
    UnresolvedMember { member: String, type_name: String },

    /// Two or more getter-convention methods matched the same member name.
    #[error("ambiguous member '{member}' on type '{type_name}'")]
    AmbiguousMember { member: String, type_name: String },

    /// Every overload candidate was exhausted without a match.
    #[error("could not resolve method '{name}({args})'")]
    NoMatchingMethod { name: String, args: String },

    /// A call's operand was neither a bare identifier nor a member access.
    #[error("expression is not callable")]
    InvalidCallTarget,

    /// Index argument count differs from the array rank.
    #[error("array of rank {expected} indexed with {provided} argument(s)")]
    RankMismatch { expected: u8, provided: usize },

    /// An array index argument is not implicitly convertible to int.
    #[error("index argument of type '{type_name}' is not convertible to int")]
    IndexTypeMismatch { type_name: String },

    /// The indexed type declares no (or more than one) default indexer member.
    #[error("type '{type_name}' does not support indexing")]
    UnsupportedIndexing { type_name: String },

    /// The default indexer (or array `Get`) did not resolve for the arguments.
    #[error("cannot resolve index method on type '{type_name}'")]
    UnresolvedIndexer { type_name: String },

    /// No implicit conversion exists between the operand types.
    #[error("cannot implicitly convert between '{left}' and '{right}'")]
    NoImplicitConversion { left: String, right: String },

    /// An operand has the wrong type for an operator.
    #[error("operand of type '{type_name}' is not valid for operator '{op}'")]
    OperandTypeMismatch { op: String, type_name: String },

    /// A type name matched neither a builtin nor the introspection provider.
    #[error("unknown type name '{name}'")]
    UnknownTypeName { name: String },

    /// Invariant violation: a defect in the AST producer or a provider.
    #[error("internal binder error: {message}")]
    Internal { message: String },
}

impl BindError {
    /// Whether this error signals a defect rather than a user-level failure.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BindError::Internal { .. })
    }
}
