//! protobuf2pydantic
//!
//! Turns compiled protobuf schemas into pydantic models.
//!
//! - `generate` / `generate_from_path` for the common case,
//! - the compiler and schema crates re-exported for finer control.

use std::path::Path;

pub use protobuf2pydantic_compiler::{
    build_module, compile_descriptor_set, compile_file, render_module, translate_module,
    CodegenError, GeneratorOptions,
};
pub use protobuf2pydantic_schema::{
    DescriptorPool, EnumDescriptor, FieldDescriptor, MessageDescriptor, SchemaError,
};

/// Generate pydantic source for the root files of a binary
/// `FileDescriptorSet`.
pub fn generate(bytes: &[u8], options: &GeneratorOptions) -> Result<String, CodegenError> {
    compile_descriptor_set::<&str>(bytes, &[], options)
}

/// Generate pydantic source for the root files of the descriptor set at
/// `path`.
pub fn generate_from_path(path: &Path, options: &GeneratorOptions) -> Result<String, CodegenError> {
    compile_file::<&str>(path, &[], options)
}

/// Decode a descriptor set into a pretty-printed JSON dump of its files,
/// messages and enums.
pub fn describe_to_json(bytes: &[u8]) -> Result<String, CodegenError> {
    let pool = DescriptorPool::decode(bytes)?;
    Ok(serde_json::to_string_pretty(&pool.summary())?)
}

pub mod compiler {
    pub use protobuf2pydantic_compiler::*;
}

pub mod schema {
    pub use protobuf2pydantic_schema::*;
}
