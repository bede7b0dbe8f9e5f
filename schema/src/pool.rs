use prost::Message as _;
use prost_reflect::{FieldDescriptor, Kind, MessageDescriptor};
use prost_types::FileDescriptorSet;
use serde::Serialize;

use crate::{
    descriptor::{Cardinality, FieldKind},
    error::SchemaError,
};

/// A linked `FileDescriptorSet`: every type name resolved, every import
/// present.
///
/// Message, field and enum descriptors taken from the pool are cheap handles
/// that keep the pool alive on their own.
#[derive(Debug, Clone)]
pub struct DescriptorPool {
    inner: prost_reflect::DescriptorPool,
}

/// Serializable view of a pool, for the `describe` dump.
#[derive(Debug, Serialize)]
pub struct PoolSummary {
    pub files:    Vec<FileSummary>,
    pub messages: Vec<MessageSummary>,
    pub enums:    Vec<EnumSummary>,
}

#[derive(Debug, Serialize)]
pub struct FileSummary {
    pub name:         String,
    pub package:      Option<String>,
    pub dependencies: Vec<String>,
    pub messages:     Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageSummary {
    pub name:      String,
    pub full_name: String,
    pub fields:    Vec<FieldSummary>,
    pub nested:    Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FieldSummary {
    pub name:        String,
    pub number:      u32,
    pub kind:        FieldKind,
    pub cardinality: Cardinality,
    pub oneof:       Option<String>,
    pub type_name:   Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EnumSummary {
    pub name:      String,
    pub full_name: String,
    pub values:    Vec<EnumValue>,
}

/// A single enum entry.
///
/// `number` is the value declared in the schema, `index` is the entry's
/// position inside its enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    pub name:   String,
    pub number: i32,
    pub index:  usize,
}

impl DescriptorPool {
    /// Decode a binary `FileDescriptorSet`, as written by
    /// `protoc --include_imports --descriptor_set_out=...`.
    pub fn decode(bytes: &[u8]) -> Result<Self, SchemaError> {
        let set = FileDescriptorSet::decode(bytes)?;
        Self::from_file_descriptor_set(set)
    }

    pub fn from_file_descriptor_set(set: FileDescriptorSet) -> Result<Self, SchemaError> {
        let inner = prost_reflect::DescriptorPool::from_file_descriptor_set(set)?;
        Ok(DescriptorPool { inner })
    }

    /// File names in set order.
    pub fn files(&self) -> Vec<String> {
        self.inner.files().map(|f| f.name().to_string()).collect()
    }

    /// Files no other file in the set imports, in set order. For a set built
    /// with `--include_imports` these are the files protoc was asked to
    /// compile.
    pub fn root_files(&self) -> Vec<String> {
        let mut imported = Vec::new();
        for file in self.inner.files() {
            imported.extend(file.dependencies().map(|dep| dep.name().to_string()));
        }

        self.files()
            .into_iter()
            .filter(|name| !imported.contains(name))
            .collect()
    }

    /// The top-level messages of `file`, in declaration order.
    pub fn messages_in(&self, file: &str) -> Result<Vec<MessageDescriptor>, SchemaError> {
        let file = self
            .inner
            .get_file_by_name(file)
            .ok_or_else(|| SchemaError::UnknownFile(file.to_string()))?;
        Ok(file.messages().collect())
    }

    /// The top-level messages of each of `files`, file by file.
    pub fn top_level_messages<S: AsRef<str>>(
        &self,
        files: &[S],
    ) -> Result<Vec<MessageDescriptor>, SchemaError> {
        let mut out = Vec::new();
        for file in files {
            out.extend(self.messages_in(file.as_ref())?);
        }
        Ok(out)
    }

    /// Look a message up by its fully-qualified name, with or without the
    /// leading dot.
    pub fn get_message_by_name(&self, name: &str) -> Option<MessageDescriptor> {
        self.inner.get_message_by_name(name.strip_prefix('.').unwrap_or(name))
    }

    pub fn summary(&self) -> PoolSummary {
        let files = self
            .inner
            .files()
            .map(|file| FileSummary {
                name:         file.name().to_string(),
                package:      Some(file.package_name().to_string()).filter(|p| !p.is_empty()),
                dependencies: file.dependencies().map(|dep| dep.name().to_string()).collect(),
                messages:     file.messages().map(|m| m.full_name().to_string()).collect(),
            })
            .collect();

        let messages = self
            .inner
            .all_messages()
            .map(|message| MessageSummary {
                name:      message.name().to_string(),
                full_name: message.full_name().to_string(),
                fields:    message.fields().map(|field| summarize_field(&field)).collect(),
                nested:    message.child_messages().map(|m| m.full_name().to_string()).collect(),
            })
            .collect();

        let enums = self
            .inner
            .all_enums()
            .map(|def| EnumSummary {
                name:      def.name().to_string(),
                full_name: def.full_name().to_string(),
                values:    def
                    .values()
                    .enumerate()
                    .map(|(index, value)| EnumValue {
                        name: value.name().to_string(),
                        number: value.number(),
                        index,
                    })
                    .collect(),
            })
            .collect();

        PoolSummary { files, messages, enums }
    }
}

fn summarize_field(field: &FieldDescriptor) -> FieldSummary {
    let type_name = match field.kind() {
        Kind::Message(message) => Some(message.full_name().to_string()),
        Kind::Enum(def) => Some(def.full_name().to_string()),
        _ => None,
    };

    FieldSummary {
        name:        field.name().to_string(),
        number:      field.number(),
        kind:        FieldKind::of(field),
        cardinality: Cardinality::of(field),
        oneof:       field.containing_oneof().map(|o| o.name().to_string()),
        type_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    use prost_types::{
        field_descriptor_proto::{Label, Type},
        DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
        FileDescriptorProto,
    };

    fn field(name: &str, number: i32, ty: Type, type_name: Option<&str>) -> FieldDescriptorProto {
        FieldDescriptorProto {
            name:      Some(name.to_string()),
            number:    Some(number),
            label:     Some(Label::Optional as i32),
            r#type:    Some(ty as i32),
            type_name: type_name.map(str::to_string),
            ..Default::default()
        }
    }

    fn shop_set() -> FileDescriptorSet {
        let common = FileDescriptorProto {
            name:         Some("common.proto".to_string()),
            package:      Some("shop".to_string()),
            message_type: vec![DescriptorProto {
                name:  Some("Money".to_string()),
                field: vec![field("cents", 1, Type::Int64, None)],
                ..Default::default()
            }],
            ..Default::default()
        };

        let order = FileDescriptorProto {
            name:         Some("order.proto".to_string()),
            package:      Some("shop".to_string()),
            dependency:   vec!["common.proto".to_string()],
            message_type: vec![
                DescriptorProto {
                    name:        Some("Order".to_string()),
                    field:       vec![
                        field("total", 1, Type::Message, Some(".shop.Money")),
                        field("status", 2, Type::Enum, Some("Status")),
                        field("line", 3, Type::Message, Some("Line")),
                    ],
                    nested_type: vec![DescriptorProto {
                        name:  Some("Line".to_string()),
                        field: vec![field("sku", 1, Type::String, None)],
                        ..Default::default()
                    }],
                    enum_type:   vec![EnumDescriptorProto {
                        name:  Some("Status".to_string()),
                        value: vec![
                            EnumValueDescriptorProto {
                                name:   Some("NEW".to_string()),
                                number: Some(0),
                                ..Default::default()
                            },
                            EnumValueDescriptorProto {
                                name:   Some("PAID".to_string()),
                                number: Some(5),
                                ..Default::default()
                            },
                        ],
                        ..Default::default()
                    }],
                    ..Default::default()
                },
                DescriptorProto {
                    name: Some("Empty".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        FileDescriptorSet { file: vec![common, order] }
    }

    fn referenced_name(field: &FieldDescriptor) -> Option<String> {
        match field.kind() {
            Kind::Message(message) => Some(message.full_name().to_string()),
            Kind::Enum(def) => Some(def.full_name().to_string()),
            _ => None,
        }
    }

    #[test]
    fn resolves_absolute_and_scoped_type_names() {
        let pool = DescriptorPool::from_file_descriptor_set(shop_set()).expect("pool");
        let order = pool.get_message_by_name(".shop.Order").expect("Order");

        let fields: Vec<_> = order.fields().collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(referenced_name(&fields[0]).as_deref(), Some("shop.Money"));
        assert_eq!(referenced_name(&fields[1]).as_deref(), Some("shop.Order.Status"));
        assert_eq!(referenced_name(&fields[2]).as_deref(), Some("shop.Order.Line"));
        assert_eq!(FieldKind::of(&fields[1]), FieldKind::Enum);
        assert_eq!(Cardinality::of(&fields[1]), Cardinality::Optional);
    }

    #[test]
    fn root_files_skip_imported_files() {
        let pool = DescriptorPool::from_file_descriptor_set(shop_set()).expect("pool");
        assert_eq!(pool.root_files(), vec!["order.proto"]);

        let names: Vec<_> = pool
            .top_level_messages(&pool.root_files())
            .expect("messages")
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        assert_eq!(names, vec!["Order", "Empty"]);
    }

    #[test]
    fn unknown_file_is_an_error() {
        let pool = DescriptorPool::from_file_descriptor_set(shop_set()).expect("pool");
        assert!(matches!(
            pool.messages_in("missing.proto"),
            Err(SchemaError::UnknownFile(name)) if name == "missing.proto"
        ));
    }

    #[test]
    fn unresolved_type_is_an_error() {
        let set = FileDescriptorSet {
            file: vec![FileDescriptorProto {
                name:         Some("broken.proto".to_string()),
                message_type: vec![DescriptorProto {
                    name:  Some("Broken".to_string()),
                    field: vec![field("ghost", 1, Type::Message, Some(".Ghost"))],
                    ..Default::default()
                }],
                ..Default::default()
            }],
        };

        match DescriptorPool::from_file_descriptor_set(set) {
            Err(err @ SchemaError::Descriptor(_)) => {
                assert!(err.to_string().contains("Ghost"), "{}", err);
            }
            other => panic!("expected Descriptor error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn decodes_encoded_descriptor_set() {
        let bytes = shop_set().encode_to_vec();
        let pool = DescriptorPool::decode(&bytes).expect("decode");
        assert_eq!(pool.files(), vec!["common.proto", "order.proto"]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(
            DescriptorPool::decode(&[0xff, 0xff, 0xff]),
            Err(SchemaError::Decode(_))
        ));
    }

    #[test]
    fn summary_records_nesting_and_enum_positions() {
        let pool = DescriptorPool::from_file_descriptor_set(shop_set()).expect("pool");
        let summary = pool.summary();

        let order_file = summary.files.iter().find(|f| f.name == "order.proto").expect("file");
        assert_eq!(order_file.package.as_deref(), Some("shop"));
        assert_eq!(order_file.dependencies, vec!["common.proto"]);
        assert_eq!(order_file.messages, vec!["shop.Order", "shop.Empty"]);

        let order = summary
            .messages
            .iter()
            .find(|m| m.full_name == "shop.Order")
            .expect("Order");
        assert_eq!(order.nested, vec!["shop.Order.Line"]);
        assert_eq!(order.fields[1].number, 2);
        assert_eq!(order.fields[1].type_name.as_deref(), Some("shop.Order.Status"));

        let status = summary
            .enums
            .iter()
            .find(|e| e.full_name == "shop.Order.Status")
            .expect("Status");
        assert_eq!(
            status.values[1],
            EnumValue { name: "PAID".to_string(), number: 5, index: 1 }
        );
    }
}
