use prost_reflect::{FieldDescriptor, Kind};
use serde::Serialize;

/// The wire-level type tag of a field, one variant per
/// `FieldDescriptorProto.Type` value.
///
/// Unlike [`Kind`] this keeps proto2 groups apart from messages and carries
/// no referenced descriptor, so it can be matched on and serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    Double,
    Float,
    Int64,
    Uint64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Group,
    Message,
    Bytes,
    Uint32,
    Enum,
    Sfixed32,
    Sfixed64,
    Sint32,
    Sint64,
}

impl FieldKind {
    pub fn of(field: &FieldDescriptor) -> Self {
        if field.is_group() {
            return FieldKind::Group;
        }
        match field.kind() {
            Kind::Double     => FieldKind::Double,
            Kind::Float      => FieldKind::Float,
            Kind::Int64      => FieldKind::Int64,
            Kind::Uint64     => FieldKind::Uint64,
            Kind::Int32      => FieldKind::Int32,
            Kind::Fixed64    => FieldKind::Fixed64,
            Kind::Fixed32    => FieldKind::Fixed32,
            Kind::Bool       => FieldKind::Bool,
            Kind::String     => FieldKind::String,
            Kind::Message(_) => FieldKind::Message,
            Kind::Bytes      => FieldKind::Bytes,
            Kind::Uint32     => FieldKind::Uint32,
            Kind::Enum(_)    => FieldKind::Enum,
            Kind::Sfixed32   => FieldKind::Sfixed32,
            Kind::Sfixed64   => FieldKind::Sfixed64,
            Kind::Sint32     => FieldKind::Sint32,
            Kind::Sint64     => FieldKind::Sint64,
        }
    }
}

/// Field label. `Required` only appears in proto2 schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cardinality {
    Optional,
    Required,
    Repeated,
}

impl Cardinality {
    pub fn of(field: &FieldDescriptor) -> Self {
        match field.cardinality() {
            prost_reflect::Cardinality::Optional => Cardinality::Optional,
            prost_reflect::Cardinality::Required => Cardinality::Required,
            prost_reflect::Cardinality::Repeated => Cardinality::Repeated,
        }
    }
}

/// `pkg.Message.field`, for error messages.
pub fn field_path(field: &FieldDescriptor) -> String {
    format!("{}.{}", field.parent_message().full_name(), field.name())
}
