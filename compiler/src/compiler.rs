use std::fs;
use std::path::Path;

use protobuf2pydantic_schema::{DescriptorPool, MessageDescriptor};
use tracing::info;

use crate::{
    emitter::Emitter,
    error::CodegenError,
    gen_pydantic::render_module,
    types::{ClassNameSet, Module},
};

/// Knobs that change the generated text. The defaults produce plain
/// pydantic models.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Give every model an inner `Config` with `arbitrary_types_allowed = True`.
    pub arbitrary_types_allowed: bool,
}

/// Build the class tree for `descriptors`, in the order given.
///
/// Every descriptor is emitted at the top level even if an earlier message
/// already emitted it as a nested class. All emitted names share one
/// [`ClassNameSet`] that lives only for this call.
pub fn build_module(
    descriptors: &[MessageDescriptor],
    options: &GeneratorOptions,
) -> Result<Module, CodegenError> {
    let mut class_names = ClassNameSet::new();
    let mut emitter = Emitter::new(&mut class_names, options);

    let mut classes = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        if let Some(class) = emitter.emit_message(descriptor, "", true)? {
            classes.push(class);
        }
    }

    info!(messages = descriptors.len(), classes = classes.len(), "built module");
    Ok(Module { classes })
}

/// Translate top-level message descriptors into pydantic source text.
pub fn translate_module(
    descriptors: &[MessageDescriptor],
    options: &GeneratorOptions,
) -> Result<String, CodegenError> {
    let module = build_module(descriptors, options)?;
    Ok(render_module(&module))
}

/// Generate pydantic source for a binary `FileDescriptorSet`.
///
/// `files` selects which files' top-level messages become classes, in the
/// given order. When empty, the set's root files are used.
pub fn compile_descriptor_set<S: AsRef<str>>(
    bytes: &[u8],
    files: &[S],
    options: &GeneratorOptions,
) -> Result<String, CodegenError> {
    let pool = DescriptorPool::decode(bytes)?;
    let selected: Vec<String> = if files.is_empty() {
        pool.root_files()
    } else {
        files.iter().map(|f| f.as_ref().to_string()).collect()
    };

    info!(files = ?selected, "compiling descriptor set");
    let descriptors = pool.top_level_messages(&selected)?;
    translate_module(&descriptors, options)
}

/// Like [`compile_descriptor_set`], reading the set from `path`. The path
/// must name an existing file.
pub fn compile_file<S: AsRef<str>>(
    path: &Path,
    files: &[S],
    options: &GeneratorOptions,
) -> Result<String, CodegenError> {
    check_input(path)?;
    let bytes = fs::read(path)?;
    compile_descriptor_set(&bytes, files, options)
}

/// Fails with [`CodegenError::InvalidInput`] unless `path` is an existing
/// regular file.
pub fn check_input(path: &Path) -> Result<(), CodegenError> {
    if !path.exists() {
        return Err(CodegenError::InvalidInput {
            path:   path.to_path_buf(),
            reason: "does not exist",
        });
    }
    if path.is_dir() {
        return Err(CodegenError::InvalidInput {
            path:   path.to_path_buf(),
            reason: "is a directory",
        });
    }
    Ok(())
}
