//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] is a 64-bit hash that uniquely identifies a semantic type.
//! Hashes are computed deterministically from qualified type names, so the
//! same name always yields the same identity regardless of registration
//! order, and forward references cost nothing.
//!
//! Builtin primitive types use fixed sentinel constants (see [`primitives`])
//! rather than name hashes; the builtin name table maps their spelled names
//! onto these constants.

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-mixing constants for hash computation.
///
/// Keeps type hashes from colliding with hashes of other entity kinds that
/// may share a name.
pub mod hash_constants {
    /// Domain marker for type hashes.
    pub const TYPE: u64 = 0x6c1f3a8e52d90b47;
}

/// A deterministic 64-bit hash identifying a semantic type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a qualified type name.
    ///
    /// The same name always produces the same hash.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Well-known hashes for the builtin primitive types.
///
/// These are fixed sentinel values, not computed from names: builtin type
/// names resolve to these constants through [`primitives::NAMES`], never
/// through [`TypeHash::from_name`].
pub mod primitives {
    use super::TypeHash;

    /// Sentinel for expressions that denote no value (namespace contexts).
    pub const VOID: TypeHash = TypeHash(0xd1c2b3a495867708);

    /// Hash for `bool`.
    pub const BOOL: TypeHash = TypeHash(0x11f09e2c8d7b6a53);

    /// Hash for `sbyte` (8-bit signed integer).
    pub const SBYTE: TypeHash = TypeHash(0x23a1b04d9c8e7f65);

    /// Hash for `byte` (8-bit unsigned integer).
    pub const BYTE: TypeHash = TypeHash(0x35b2c15eadf09a77);

    /// Hash for `short` (16-bit signed integer).
    pub const INT16: TypeHash = TypeHash(0x47c3d26fbe01ab89);

    /// Hash for `ushort` (16-bit unsigned integer).
    pub const UINT16: TypeHash = TypeHash(0x59d4e370cf12bc9b);

    /// Hash for `int` (32-bit signed integer).
    pub const INT32: TypeHash = TypeHash(0x6be5f481d023cdad);

    /// Hash for `uint` (32-bit unsigned integer).
    pub const UINT32: TypeHash = TypeHash(0x7df60592e134debf);

    /// Hash for `long` (64-bit signed integer).
    pub const INT64: TypeHash = TypeHash(0x8f0716a3f245efd1);

    /// Hash for `ulong` (64-bit unsigned integer).
    pub const UINT64: TypeHash = TypeHash(0x911827b40356f0e3);

    /// Hash for `char` (UTF-16 code unit in the source model).
    pub const CHAR: TypeHash = TypeHash(0xa32938c514670205);

    /// Hash for `float` (32-bit IEEE 754).
    pub const FLOAT: TypeHash = TypeHash(0xb53a49d625781317);

    /// Hash for `double` (64-bit IEEE 754).
    pub const DOUBLE: TypeHash = TypeHash(0xc74b5ae736892429);

    /// Hash for `string`.
    pub const STRING: TypeHash = TypeHash(0xd95c6bf8479a353b);

    /// The builtin type-name table, in resolution order.
    ///
    /// Name matching against this table follows the binding context's case
    /// policy; the table itself stores canonical lowercase spellings.
    pub const NAMES: &[(&str, TypeHash)] = &[
        ("bool", BOOL),
        ("sbyte", SBYTE),
        ("byte", BYTE),
        ("short", INT16),
        ("ushort", UINT16),
        ("int", INT32),
        ("uint", UINT32),
        ("long", INT64),
        ("ulong", UINT64),
        ("char", CHAR),
        ("float", FLOAT),
        ("double", DOUBLE),
        ("string", STRING),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_hash_determinism() {
        let hash1 = TypeHash::from_name("Player");
        let hash2 = TypeHash::from_name("Player");
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn type_hash_uniqueness() {
        let player = TypeHash::from_name("Player");
        let monster = TypeHash::from_name("Monster");
        assert_ne!(player, monster);
        assert!(!player.is_empty());
    }

    #[test]
    fn primitive_sentinels_are_distinct() {
        let all = [
            primitives::VOID,
            primitives::BOOL,
            primitives::SBYTE,
            primitives::BYTE,
            primitives::INT16,
            primitives::UINT16,
            primitives::INT32,
            primitives::UINT32,
            primitives::INT64,
            primitives::UINT64,
            primitives::CHAR,
            primitives::FLOAT,
            primitives::DOUBLE,
            primitives::STRING,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn builtin_names_cover_all_value_primitives() {
        assert_eq!(primitives::NAMES.len(), 13);
        assert!(primitives::NAMES.iter().any(|(n, h)| *n == "int" && *h == primitives::INT32));
    }
}
