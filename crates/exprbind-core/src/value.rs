//! Literal constant values.

use std::fmt;

use crate::data_type::DataType;
use crate::type_hash::primitives;

/// A literal constant carried by the AST and folded into bound trees.
///
/// Every variant has an intrinsic [`DataType`]; binding a constant wraps the
/// value verbatim and assigns that type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Char(char),
    Float(f32),
    Double(f64),
    String(String),
}

impl Value {
    /// The intrinsic type of this literal.
    pub fn data_type(&self) -> DataType {
        DataType::simple(match self {
            Value::Bool(_) => primitives::BOOL,
            Value::SByte(_) => primitives::SBYTE,
            Value::Byte(_) => primitives::BYTE,
            Value::Int16(_) => primitives::INT16,
            Value::UInt16(_) => primitives::UINT16,
            Value::Int32(_) => primitives::INT32,
            Value::UInt32(_) => primitives::UINT32,
            Value::Int64(_) => primitives::INT64,
            Value::UInt64(_) => primitives::UINT64,
            Value::Char(_) => primitives::CHAR,
            Value::Float(_) => primitives::FLOAT,
            Value::Double(_) => primitives::DOUBLE,
            Value::String(_) => primitives::STRING,
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::SByte(v) => write!(f, "{v}"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Int16(v) => write!(f, "{v}"),
            Value::UInt16(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::UInt32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::UInt64(v) => write!(f, "{v}"),
            Value::Char(v) => write!(f, "'{v}'"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{v}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intrinsic_types() {
        assert_eq!(Value::Int32(3).data_type(), DataType::int32());
        assert_eq!(Value::Bool(true).data_type(), DataType::boolean());
        assert_eq!(Value::String("x".into()).data_type(), DataType::string());
        assert_eq!(
            Value::Double(1.5).data_type(),
            DataType::simple(primitives::DOUBLE)
        );
    }
}
