use std::collections::HashSet;
use std::fmt;

/// A whole generated module: one class per top-level message that was not
/// already emitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    pub classes: Vec<ClassDef>,
}

/// A `BaseModel` subclass.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    pub name:   String,
    pub fields: Vec<FieldStatement>,
    /// Append `class Config: arbitrary_types_allowed = True`.
    pub config: bool,
}

/// An `IntEnum` subclass.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    pub name:    String,
    pub members: Vec<EnumMember>,
}

/// `value` is the member's position inside its enum, not the number
/// declared in the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name:  String,
    pub value: usize,
}

/// A definition emitted inline, right before the field that introduced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested {
    Class(ClassDef),
    Enum(EnumDef),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldStatement {
    pub nested: Option<Nested>,
    pub decl:   FieldDecl,
}

/// `name: ty` with an optional `= Field(default_factory=...)` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name:            String,
    pub ty:              TypeExpr,
    pub default_factory: Option<String>,
}

/// A Python type annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Named(String),
    List(Box<TypeExpr>),
    Dict(Box<TypeExpr>, Box<TypeExpr>),
    Optional(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(name)       => f.write_str(name),
            TypeExpr::List(inner)       => write!(f, "List[{}]", inner),
            TypeExpr::Dict(key, value)  => write!(f, "Dict[{}, {}]", key, value),
            TypeExpr::Optional(inner)   => write!(f, "Optional[{}]", inner),
        }
    }
}

/// Class names emitted during one generation run. Nested classes are
/// recorded with their ancestor path (`Outer-Inner`), top-level classes with
/// their bare name. Names are never removed.
#[derive(Debug, Clone, Default)]
pub struct ClassNameSet {
    names: HashSet<String>,
}

impl ClassNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns `false` if the name was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
