//! protobuf2pydantic-compiler
//!
//! This crate implements:
//!  1) Scalar type resolution (`resolver`),
//!  2) The descriptor walk that builds class/enum trees (`emitter`),
//!  3) Module assembly and the file/bytes entry points (`compiler`),
//!  4) Rendering of the tree to Python source (`gen_pydantic`),
//!  5) Error types (`CodegenError`).

pub mod error;
pub mod types;
pub mod resolver;
pub mod emitter;
pub mod compiler;
pub mod gen_pydantic;

pub use compiler::{
    build_module, check_input, compile_descriptor_set, compile_file, translate_module,
    GeneratorOptions,
};
pub use error::CodegenError;
pub use gen_pydantic::render_module;
