//! Member descriptors returned by type introspection.

use crate::data_type::DataType;
use crate::value::Value;
use crate::visibility::Visibility;

/// A method exposed by a type.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDef {
    pub name: String,
    pub params: Vec<DataType>,
    pub return_type: DataType,
    pub is_static: bool,
    pub visibility: Visibility,
}

impl MethodDef {
    /// A public instance method.
    pub fn new(name: impl Into<String>, params: Vec<DataType>, return_type: DataType) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
            is_static: false,
            visibility: Visibility::Public,
        }
    }

    /// A public static method.
    pub fn new_static(name: impl Into<String>, params: Vec<DataType>, return_type: DataType) -> Self {
        Self {
            is_static: true,
            ..Self::new(name, params, return_type)
        }
    }
}

/// A field exposed by a type.
///
/// `literal` holds a compile-time-constant value; such fields fold to
/// constants during binding instead of producing a field access.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub data_type: DataType,
    pub is_static: bool,
    pub visibility: Visibility,
    pub literal: Option<Value>,
}

impl FieldDef {
    /// A public instance field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            is_static: false,
            visibility: Visibility::Public,
            literal: None,
        }
    }

    /// A public static compile-time-constant field.
    pub fn literal(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            data_type: value.data_type(),
            is_static: true,
            visibility: Visibility::Public,
            literal: Some(value),
        }
    }
}
