//! The builtin implicit-widening table.

use exprbind_core::{CastingTable, DataType, primitives};

/// Casting-table provider for the closed primitive universe.
///
/// Each chain starts at the type itself and is ordered narrow to wide.
/// Chain order is load-bearing: the coercion tie-break selects the shared
/// type with the lowest index in the right operand's chain.
pub struct PrimitiveCastTable;

const fn dt(hash: exprbind_core::TypeHash) -> DataType {
    DataType::simple(hash)
}

const SBYTE_CHAIN: &[DataType] = &[
    dt(primitives::SBYTE),
    dt(primitives::INT16),
    dt(primitives::INT32),
    dt(primitives::INT64),
    dt(primitives::FLOAT),
    dt(primitives::DOUBLE),
];

const BYTE_CHAIN: &[DataType] = &[
    dt(primitives::BYTE),
    dt(primitives::INT16),
    dt(primitives::UINT16),
    dt(primitives::INT32),
    dt(primitives::UINT32),
    dt(primitives::INT64),
    dt(primitives::UINT64),
    dt(primitives::FLOAT),
    dt(primitives::DOUBLE),
];

const INT16_CHAIN: &[DataType] = &[
    dt(primitives::INT16),
    dt(primitives::INT32),
    dt(primitives::INT64),
    dt(primitives::FLOAT),
    dt(primitives::DOUBLE),
];

const UINT16_CHAIN: &[DataType] = &[
    dt(primitives::UINT16),
    dt(primitives::INT32),
    dt(primitives::UINT32),
    dt(primitives::INT64),
    dt(primitives::UINT64),
    dt(primitives::FLOAT),
    dt(primitives::DOUBLE),
];

const INT32_CHAIN: &[DataType] = &[
    dt(primitives::INT32),
    dt(primitives::INT64),
    dt(primitives::FLOAT),
    dt(primitives::DOUBLE),
];

const UINT32_CHAIN: &[DataType] = &[
    dt(primitives::UINT32),
    dt(primitives::INT64),
    dt(primitives::UINT64),
    dt(primitives::FLOAT),
    dt(primitives::DOUBLE),
];

const INT64_CHAIN: &[DataType] = &[
    dt(primitives::INT64),
    dt(primitives::FLOAT),
    dt(primitives::DOUBLE),
];

const UINT64_CHAIN: &[DataType] = &[
    dt(primitives::UINT64),
    dt(primitives::FLOAT),
    dt(primitives::DOUBLE),
];

const CHAR_CHAIN: &[DataType] = &[
    dt(primitives::CHAR),
    dt(primitives::UINT16),
    dt(primitives::INT32),
    dt(primitives::UINT32),
    dt(primitives::INT64),
    dt(primitives::UINT64),
    dt(primitives::FLOAT),
    dt(primitives::DOUBLE),
];

const FLOAT_CHAIN: &[DataType] = &[dt(primitives::FLOAT), dt(primitives::DOUBLE)];

const DOUBLE_CHAIN: &[DataType] = &[dt(primitives::DOUBLE)];

impl CastingTable for PrimitiveCastTable {
    fn widening_chain(&self, data_type: DataType) -> Option<&[DataType]> {
        if data_type.is_array() {
            return None;
        }
        match data_type.type_hash {
            primitives::SBYTE => Some(SBYTE_CHAIN),
            primitives::BYTE => Some(BYTE_CHAIN),
            primitives::INT16 => Some(INT16_CHAIN),
            primitives::UINT16 => Some(UINT16_CHAIN),
            primitives::INT32 => Some(INT32_CHAIN),
            primitives::UINT32 => Some(UINT32_CHAIN),
            primitives::INT64 => Some(INT64_CHAIN),
            primitives::UINT64 => Some(UINT64_CHAIN),
            primitives::CHAR => Some(CHAR_CHAIN),
            primitives::FLOAT => Some(FLOAT_CHAIN),
            primitives::DOUBLE => Some(DOUBLE_CHAIN),
            _ => None,
        }
    }
}
