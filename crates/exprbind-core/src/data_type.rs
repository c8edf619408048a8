//! DataType - a semantic type with an optional array rank.

use crate::type_hash::{TypeHash, primitives};

/// A semantic type: an element type hash plus an array rank.
///
/// `rank == 0` is a scalar; `rank >= 1` is an array of that rank over the
/// element type. Multi-dimensional arrays are a single `DataType` with
/// `rank > 1`, not nested arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataType {
    pub type_hash: TypeHash,
    pub rank: u8,
}

impl DataType {
    /// A scalar type.
    #[inline]
    pub const fn simple(type_hash: TypeHash) -> Self {
        Self { type_hash, rank: 0 }
    }

    /// An array type of the given rank over an element type.
    #[inline]
    pub const fn array(element: TypeHash, rank: u8) -> Self {
        Self { type_hash: element, rank }
    }

    #[inline]
    pub const fn is_array(self) -> bool {
        self.rank > 0
    }

    /// The element type of an array; identity for scalars.
    #[inline]
    pub const fn element(self) -> DataType {
        DataType::simple(self.type_hash)
    }

    /// Whether this is a scalar numeric primitive (valid `+`/`-` operand).
    pub const fn is_numeric(self) -> bool {
        if self.rank != 0 {
            return false;
        }
        matches!(
            self.type_hash,
            primitives::SBYTE
                | primitives::BYTE
                | primitives::INT16
                | primitives::UINT16
                | primitives::INT32
                | primitives::UINT32
                | primitives::INT64
                | primitives::UINT64
                | primitives::CHAR
                | primitives::FLOAT
                | primitives::DOUBLE
        )
    }

    #[inline]
    pub const fn boolean() -> DataType {
        DataType::simple(primitives::BOOL)
    }

    #[inline]
    pub const fn string() -> DataType {
        DataType::simple(primitives::STRING)
    }

    #[inline]
    pub const fn int32() -> DataType {
        DataType::simple(primitives::INT32)
    }
}
