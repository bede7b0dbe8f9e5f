use std::path::PathBuf;

use protobuf2pydantic_schema::{FieldKind, SchemaError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field type the generator has no Python mapping for, e.g. a proto2
    /// group, or a message/enum where a scalar is required.
    #[error("Unsupported field type {kind:?} for field \"{field}\"")]
    UnsupportedFieldType {
        field: String,
        kind:  FieldKind,
    },

    #[error("Map entry \"{name}\" must have exactly two fields, found {count}")]
    MalformedMapEntry {
        name:  String,
        count: usize,
    },

    #[error("Recursive nesting of \"{0}\" cannot be emitted inline")]
    RecursiveMessage(String),

    #[error("Invalid input {}: {}", .path.display(), .reason)]
    InvalidInput {
        path:   PathBuf,
        reason: &'static str,
    },
}
