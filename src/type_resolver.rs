//! Type-name resolution for casts.

use exprbind_core::{BindError, DataType, primitives};

use crate::context::BindContext;

/// Resolve a type name to a [`DataType`], wrapping it in an array type when
/// `rank >= 1`.
///
/// Builtin primitive names are matched first under the context's case
/// policy; anything else defers to the introspection provider's general
/// type-by-name lookup.
pub fn resolve_type(ctx: &BindContext<'_>, name: &str, rank: u8) -> Result<DataType, BindError> {
    for (builtin, hash) in primitives::NAMES {
        if ctx.names_match(builtin, name) {
            return Ok(DataType { type_hash: *hash, rank });
        }
    }

    match ctx.types().type_by_name(name) {
        Some(found) => Ok(DataType {
            type_hash: found.type_hash,
            rank,
        }),
        None => Err(BindError::UnknownTypeName {
            name: name.to_string(),
        }),
    }
}
