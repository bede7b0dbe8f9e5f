use protobuf2pydantic_schema::{
    field_path, Cardinality, FieldDescriptor, FieldKind, Kind, MessageDescriptor,
};
use tracing::debug;

use crate::{
    compiler::GeneratorOptions,
    error::CodegenError,
    resolver::{resolve_scalar, PY_INT, PY_STR},
    types::{
        ClassDef, ClassNameSet, EnumDef, EnumMember, FieldDecl, FieldStatement, Nested, TypeExpr,
    },
};

/// protoc represents `map<K, V>` as a repeated synthetic `<Field>Entry`
/// message holding a `key` and a `value` field.
pub const MAP_ENTRY_SUFFIX: &str = "Entry";

/// `google.protobuf.Struct`, a free-form JSON object.
pub const STRUCT_TYPE_NAME: &str = "Struct";

/// Separator between an ancestor path and a nested class name in the
/// [`ClassNameSet`].
pub const PREFIX_SEPARATOR: &str = "-";

const DICT_FACTORY: &str = "dict";
const LIST_FACTORY: &str = "list";

/// Walks message descriptors and builds [`ClassDef`] trees, recording every
/// class it emits in a shared [`ClassNameSet`].
pub struct Emitter<'a> {
    class_names: &'a mut ClassNameSet,
    options:     &'a GeneratorOptions,
    /// Full names of the messages currently being emitted, outermost first.
    active:      Vec<String>,
}

impl<'a> Emitter<'a> {
    pub fn new(class_names: &'a mut ClassNameSet, options: &'a GeneratorOptions) -> Self {
        Emitter {
            class_names,
            options,
            active: Vec::new(),
        }
    }

    /// Emit `message` as a class, together with every nested class or enum
    /// its fields introduce first.
    ///
    /// Returns `Ok(None)` when `prefix + name` was already emitted, unless
    /// `skip_name_check` is set.
    pub fn emit_message(
        &mut self,
        message: &MessageDescriptor,
        prefix: &str,
        skip_name_check: bool,
    ) -> Result<Option<ClassDef>, CodegenError> {
        let qualified = format!("{}{}", prefix, message.name());
        if !skip_name_check && self.class_names.contains(&qualified) {
            debug!(class = %qualified, "class already emitted");
            return Ok(None);
        }
        if self.active.iter().any(|name| name == message.full_name()) {
            return Err(CodegenError::RecursiveMessage(message.full_name().to_string()));
        }

        debug!(class = %qualified, fields = message.fields().len(), "emitting class");
        self.class_names.insert(qualified.clone());
        self.active.push(message.full_name().to_string());

        let child_prefix = format!("{}{}", qualified, PREFIX_SEPARATOR);
        let mut fields = Vec::with_capacity(message.fields().len());
        for field in message.fields() {
            fields.push(self.emit_field(&field, &child_prefix)?);
        }

        self.active.pop();

        Ok(Some(ClassDef {
            name: message.name().to_string(),
            fields,
            config: self.options.arbitrary_types_allowed,
        }))
    }

    /// Emit one field declaration. `prefix` is the qualified name of the
    /// enclosing class followed by [`PREFIX_SEPARATOR`].
    pub fn emit_field(
        &mut self,
        field: &FieldDescriptor,
        prefix: &str,
    ) -> Result<FieldStatement, CodegenError> {
        let mut nested = None;
        let mut is_map = false;

        let (mut ty, mut factory) = match field.kind() {
            _ if field.is_group() => return Err(unsupported(field)),
            Kind::Enum(enum_type) => {
                nested = Some(Nested::Enum(EnumDef {
                    name:    enum_type.name().to_string(),
                    members: enum_type
                        .values()
                        .enumerate()
                        .map(|(index, value)| EnumMember {
                            name:  value.name().to_string(),
                            value: index,
                        })
                        .collect(),
                }));
                (TypeExpr::named(enum_type.name()), PY_INT.to_string())
            }
            Kind::Message(message) => {
                if message.name().ends_with(MAP_ENTRY_SUFFIX) {
                    is_map = true;
                    let entry: Vec<_> = message.fields().collect();
                    let [key, value] = entry.as_slice() else {
                        return Err(CodegenError::MalformedMapEntry {
                            name:  message.full_name().to_string(),
                            count: entry.len(),
                        });
                    };
                    let ty = TypeExpr::Dict(
                        Box::new(TypeExpr::named(resolve_scalar(key)?)),
                        Box::new(TypeExpr::named(resolve_scalar(value)?)),
                    );
                    (ty, DICT_FACTORY.to_string())
                } else if message.name() == STRUCT_TYPE_NAME {
                    let ty = TypeExpr::Dict(
                        Box::new(TypeExpr::named(PY_STR)),
                        Box::new(TypeExpr::named("Any")),
                    );
                    (ty, DICT_FACTORY.to_string())
                } else {
                    // only classes emitted at the top level are recorded by
                    // their bare name
                    if !self.class_names.contains(message.name()) {
                        nested = self.emit_message(&message, prefix, false)?.map(Nested::Class);
                    }
                    (TypeExpr::named(message.name()), message.name().to_string())
                }
            }
            _ => {
                let name = resolve_scalar(field)?;
                (TypeExpr::named(name), name.to_string())
            }
        };

        let cardinality = Cardinality::of(field);
        if cardinality == Cardinality::Repeated && !is_map {
            ty = TypeExpr::List(Box::new(ty));
            factory = LIST_FACTORY.to_string();
        }

        let in_oneof = field.containing_oneof().is_some();
        let default_factory = if in_oneof || cardinality == Cardinality::Required {
            None
        } else {
            Some(factory)
        };
        if in_oneof {
            ty = TypeExpr::Optional(Box::new(ty));
        }

        Ok(FieldStatement {
            nested,
            decl: FieldDecl {
                name: field.name().to_string(),
                ty,
                default_factory,
            },
        })
    }
}

fn unsupported(field: &FieldDescriptor) -> CodegenError {
    CodegenError::UnsupportedFieldType {
        field: field_path(field),
        kind:  FieldKind::of(field),
    }
}
