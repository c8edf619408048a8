//! Core vocabulary types for the exprbind binder.
//!
//! This crate holds everything shared between the binder and its provider
//! implementations:
//!
//! - [`TypeHash`]: deterministic hash-based type identity
//! - [`DataType`]: a type hash plus array rank
//! - [`Value`]: literal constants with intrinsic types
//! - [`BinaryOp`] / [`UnaryOp`]: operator kinds
//! - [`MethodDef`] / [`FieldDef`]: member descriptors
//! - [`Visibility`] / [`MemberFilter`]: member visibility and query filters
//! - [`BindError`]: the binding-pass error type
//! - [`TypeIntrospection`] / [`CastingTable`]: collaborator contracts

mod data_type;
mod error;
mod member;
mod ops;
mod provider;
mod type_hash;
mod value;
mod visibility;

pub use data_type::DataType;
pub use error::BindError;
pub use member::{FieldDef, MethodDef};
pub use ops::{BinaryOp, UnaryOp};
pub use provider::{CastingTable, TypeIntrospection};
pub use type_hash::{TypeHash, hash_constants, primitives};
pub use value::Value;
pub use visibility::{MemberFilter, Visibility};
