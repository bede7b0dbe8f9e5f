use protobuf2pydantic_schema::{field_path, FieldDescriptor, FieldKind};

use crate::error::CodegenError;

pub const PY_FLOAT: &str = "float";
pub const PY_INT:   &str = "int";
pub const PY_BOOL:  &str = "bool";
pub const PY_STR:   &str = "str";

/// Maps a scalar field kind to its Python type name. The same name doubles
/// as the field's default factory. Returns `None` for enum, message and
/// group kinds, which are not scalars.
pub fn scalar_type_name(kind: FieldKind) -> Option<&'static str> {
    let name = match kind {
        FieldKind::Double | FieldKind::Float => PY_FLOAT,
        FieldKind::Int32
        | FieldKind::Int64
        | FieldKind::Uint32
        | FieldKind::Uint64
        | FieldKind::Sint32
        | FieldKind::Sint64
        | FieldKind::Fixed32
        | FieldKind::Fixed64
        | FieldKind::Sfixed32
        | FieldKind::Sfixed64 => PY_INT,
        FieldKind::Bool => PY_BOOL,
        FieldKind::String | FieldKind::Bytes => PY_STR,
        FieldKind::Enum | FieldKind::Message | FieldKind::Group => return None,
    };
    Some(name)
}

/// [`scalar_type_name`] for a field, failing with
/// [`CodegenError::UnsupportedFieldType`] when the field is not a scalar.
pub fn resolve_scalar(field: &FieldDescriptor) -> Result<&'static str, CodegenError> {
    let kind = FieldKind::of(field);
    scalar_type_name(kind).ok_or_else(|| CodegenError::UnsupportedFieldType {
        field: field_path(field),
        kind,
    })
}
