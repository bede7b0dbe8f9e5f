#![allow(dead_code)]

use prost_types::{
    field_descriptor_proto::{Label, Type},
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet, MessageOptions, OneofDescriptorProto,
};
use protobuf2pydantic_schema::DescriptorPool;

pub fn scalar(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name:   Some(name.to_string()),
        number: Some(number),
        label:  Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        ..Default::default()
    }
}

pub fn message_field(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..scalar(name, number, Type::Message)
    }
}

pub fn enum_field(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..scalar(name, number, Type::Enum)
    }
}

pub fn repeated(field: FieldDescriptorProto) -> FieldDescriptorProto {
    FieldDescriptorProto { label: Some(Label::Repeated as i32), ..field }
}

pub fn required(field: FieldDescriptorProto) -> FieldDescriptorProto {
    FieldDescriptorProto { label: Some(Label::Required as i32), ..field }
}

pub fn in_oneof(field: FieldDescriptorProto, oneof_index: i32) -> FieldDescriptorProto {
    FieldDescriptorProto { oneof_index: Some(oneof_index), ..field }
}

pub fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name:  Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

pub fn with_nested(mut parent: DescriptorProto, nested: Vec<DescriptorProto>) -> DescriptorProto {
    parent.nested_type.extend(nested);
    parent
}

pub fn with_enums(mut parent: DescriptorProto, enums: Vec<EnumDescriptorProto>) -> DescriptorProto {
    parent.enum_type.extend(enums);
    parent
}

pub fn with_oneofs(mut parent: DescriptorProto, names: &[&str]) -> DescriptorProto {
    parent.oneof_decl.extend(names.iter().map(|name| OneofDescriptorProto {
        name: Some(name.to_string()),
        ..Default::default()
    }));
    parent
}

/// The synthetic message protoc generates for `map<K, V> <field>`.
pub fn map_entry(name: &str, key: Type, value: Type) -> DescriptorProto {
    DescriptorProto {
        options: Some(MessageOptions { map_entry: Some(true), ..Default::default() }),
        ..message(name, vec![scalar("key", 1, key), scalar("value", 2, value)])
    }
}

pub fn enumeration(name: &str, values: &[(&str, i32)]) -> EnumDescriptorProto {
    EnumDescriptorProto {
        name:  Some(name.to_string()),
        value: values
            .iter()
            .map(|(value, number)| EnumValueDescriptorProto {
                name:   Some(value.to_string()),
                number: Some(*number),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

pub fn file(name: &str, messages: Vec<DescriptorProto>) -> FileDescriptorProto {
    FileDescriptorProto {
        name:         Some(name.to_string()),
        message_type: messages,
        ..Default::default()
    }
}

/// A one-file pool with no package.
pub fn pool(messages: Vec<DescriptorProto>) -> DescriptorPool {
    pool_of(vec![file("test.proto", messages)])
}

pub fn pool_of(files: Vec<FileDescriptorProto>) -> DescriptorPool {
    DescriptorPool::from_file_descriptor_set(FileDescriptorSet { file: files })
        .expect("fixture pool should resolve")
}
