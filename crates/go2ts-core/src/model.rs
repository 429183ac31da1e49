//! Target type model: what a Go struct looks like on the TypeScript side.
//!
//! Values are built once during extraction and never mutated. Every wrapper
//! holds a fully resolved inner type.

use std::fmt;

use serde::Serialize;

use crate::naming::property_name;

/// Terminal TypeScript primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    String,
    Number,
}

impl PrimitiveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved TypeScript type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Primitive(PrimitiveKind),
    /// Go pointer: `base | null`.
    Nullable(Box<Type>),
    /// Go slice or array: `(base)[]`.
    Array(Box<Type>),
}

impl Type {
    pub const STRING: Type = Type::Primitive(PrimitiveKind::String);
    pub const NUMBER: Type = Type::Primitive(PrimitiveKind::Number);

    pub fn nullable(base: Type) -> Self {
        Type::Nullable(Box::new(base))
    }

    pub fn array(base: Type) -> Self {
        Type::Array(Box::new(base))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(kind) => write!(f, "{kind}"),
            Type::Nullable(base) => write!(f, "{base} | null"),
            Type::Array(base) => write!(f, "({base})[]"),
        }
    }
}

/// A record member. `name` is the serialized name taken from the struct tag,
/// never the Go identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", property_name(&self.name), self.ty)
    }
}

/// One Go struct declaration, ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StructRecord {
    pub name: String,
    pub fields: Vec<Field>,
    pub exported: bool,
}

impl StructRecord {
    pub fn new(name: impl Into<String>, fields: Vec<Field>, exported: bool) -> Self {
        Self {
            name: name.into(),
            fields,
            exported,
        }
    }
}

impl fmt::Display for StructRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exported {
            f.write_str("export ")?;
        }
        writeln!(f, "type {} = {{", self.name)?;
        for field in &self.fields {
            writeln!(f, "  {field}")?;
        }
        writeln!(f, "}};")
    }
}
