use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Descriptor set decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The set decoded but does not link: unknown type names, missing
    /// imports, duplicate names and the like.
    #[error("Invalid descriptor set: {0}")]
    Descriptor(#[from] prost_reflect::DescriptorError),

    #[error("File \"{0}\" is not part of the descriptor set")]
    UnknownFile(String),
}
