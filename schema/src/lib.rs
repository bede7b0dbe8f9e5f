//! Linked protobuf descriptors for the protobuf2pydantic compiler.
//!
//! A [`DescriptorPool`] is built from a `FileDescriptorSet`, the binary
//! output of `protoc --descriptor_set_out`. Linking (type name resolution,
//! import checks) is done by `prost-reflect`; this crate adds root-file
//! discovery, per-file message lists, the [`FieldKind`]/[`Cardinality`]
//! tags the compiler matches on and a serializable [`PoolSummary`].
//!
//! ```
//! use prost_types::{DescriptorProto, FileDescriptorProto, FileDescriptorSet};
//! use protobuf2pydantic_schema::DescriptorPool;
//!
//! let set = FileDescriptorSet {
//!     file: vec![FileDescriptorProto {
//!         name: Some("point.proto".to_owned()),
//!         message_type: vec![DescriptorProto {
//!             name: Some("Point".to_owned()),
//!             ..Default::default()
//!         }],
//!         ..Default::default()
//!     }],
//! };
//!
//! let pool = DescriptorPool::from_file_descriptor_set(set).unwrap();
//! let messages = pool.top_level_messages(&pool.root_files()).unwrap();
//! assert_eq!(messages[0].name(), "Point");
//! assert_eq!(messages[0].fields().len(), 0);
//! ```

pub mod descriptor;
pub mod error;
pub mod pool;

pub use descriptor::*;
pub use error::SchemaError;
pub use pool::{DescriptorPool, EnumValue, PoolSummary};
pub use prost_reflect::{EnumDescriptor, FieldDescriptor, Kind, MessageDescriptor};
