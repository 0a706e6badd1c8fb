//! FILENAME: core/codec/src/registry.rs
//! PURPOSE: Resolves header type tokens to field types.
//! CONTEXT: A fixed table built at compile time. Tokens are matched
//! case-insensitively after trimming.

use crate::field_type::FieldType;

static REGISTRY: &[(&str, FieldType)] = &[
    ("byte", FieldType::Byte),
    ("sbyte", FieldType::Byte),
    ("int8", FieldType::Byte),
    ("short", FieldType::Short),
    ("int16", FieldType::Short),
    ("int", FieldType::Int),
    ("int32", FieldType::Int),
    ("long", FieldType::Long),
    ("int64", FieldType::Long),
    ("string", FieldType::String),
    ("bool", FieldType::Bool),
    ("boolean", FieldType::Bool),
    ("float", FieldType::Float),
    ("single", FieldType::Float),
    ("double", FieldType::Double),
    ("char", FieldType::Char),
    ("int[]", FieldType::IntArray),
    ("int-array", FieldType::IntArray),
    ("int[][]", FieldType::IntArray2D),
    ("int-2d-array", FieldType::IntArray2D),
];

pub fn lookup(token: &str) -> Option<FieldType> {
    let token = token.trim();
    REGISTRY
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|(_, ty)| *ty)
}

/// Id columns must decode without a length prefix and must hash exactly,
/// which leaves the signed integer types.
pub fn is_legal_id(ty: FieldType) -> bool {
    ty.resolve_id_base_type().is_some()
}

/// Every accepted token, aliases included, for error messages.
pub fn known_tokens() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}
