use crate::types::{ClassDef, EnumDef, FieldDecl, FieldStatement, Module, Nested};

/// Imports every generated module starts with.
pub const HEADER: &str = "from typing import List, Dict, Any, Optional
from enum import IntEnum

from pydantic import BaseModel, Field


";

pub const INDENT: &str = "    ";

/// Two blank lines between top-level classes.
const CLASS_SEPARATOR: &str = "\n\n\n";

fn indent(level: usize) -> String {
    INDENT.repeat(level)
}

/// Renders a whole module: the import header followed by every class.
pub fn render_module(module: &Module) -> String {
    let classes: Vec<String> = module
        .classes
        .iter()
        .map(|class| render_class(0, class))
        .collect();

    format!("{}{}", HEADER, classes.join(CLASS_SEPARATOR))
}

/// Renders a model class with its header at `level`.
pub fn render_class(level: usize, class: &ClassDef) -> String {
    let mut lines = Vec::with_capacity(class.fields.len() + 2);
    lines.push(format!("{}class {}(BaseModel):", indent(level), class.name));

    for field in &class.fields {
        lines.push(render_field(level + 1, field));
    }
    if class.fields.is_empty() {
        lines.push(format!("{}pass", indent(level + 1)));
    }
    if class.config {
        lines.push(render_config(level + 1));
    }

    lines.join("\n")
}

pub fn render_enum(level: usize, def: &EnumDef) -> String {
    let mut lines = Vec::with_capacity(def.members.len() + 1);
    lines.push(format!("{}class {}(IntEnum):", indent(level), def.name));
    for member in &def.members {
        lines.push(format!("{}{} = {}", indent(level + 1), member.name, member.value));
    }
    lines.join("\n")
}

/// A field line, preceded by the definition it introduced (if any) and a
/// blank line.
fn render_field(level: usize, field: &FieldStatement) -> String {
    let decl = render_decl(level, &field.decl);
    match &field.nested {
        None => decl,
        Some(Nested::Class(class)) => format!("\n{}\n\n{}", render_class(level, class), decl),
        Some(Nested::Enum(def)) => format!("\n{}\n\n{}", render_enum(level, def), decl),
    }
}

fn render_decl(level: usize, decl: &FieldDecl) -> String {
    let mut line = format!("{}{}: {}", indent(level), decl.name, decl.ty);
    if let Some(factory) = &decl.default_factory {
        line.push_str(&format!(" = Field(default_factory={})", factory));
    }
    line
}

fn render_config(level: usize) -> String {
    format!(
        "\n{}class Config:\n{}arbitrary_types_allowed = True",
        indent(level),
        indent(level + 1)
    )
}
