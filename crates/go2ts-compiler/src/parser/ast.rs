//! Declaration AST: the subset of a Go file that translation looks at.
//!
//! Only top-level declarations are kept. Function bodies, imports and
//! methods are dropped during lowering.

use std::fmt;

use crate::diagnostics::Span;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceFile {
    pub package: Option<String>,
    /// Type declarations in file order, grouped `type (...)` blocks flattened.
    pub types: Vec<TypeDecl>,
    /// Top-level functions, variables and constants.
    pub values: Vec<ValueDecl>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub name_span: Span,
    pub span: Span,
    /// Declared with type parameters (`type Page[T any] struct {...}`).
    pub generic: bool,
    pub body: DeclBody,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclBody {
    /// `type T struct { ... }`, fields in declaration order.
    Struct(Vec<FieldDecl>),
    /// `type T U` or `type T = U`.
    Alias(TypeExpr),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDecl {
    /// Go identifiers; empty for embedded fields.
    pub names: Vec<String>,
    pub ty: TypeExpr,
    pub tag: Option<Tag>,
    pub span: Span,
}

impl FieldDecl {
    pub fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }

    /// Human-readable field identity for error messages.
    pub fn label(&self) -> String {
        if self.is_embedded() {
            self.ty.to_string()
        } else {
            self.names.join(", ")
        }
    }
}

/// Struct tag literal with its quotes removed and escapes decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub value: String,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeExpr {
    pub kind: TypeExprKind,
    pub span: Span,
}

impl TypeExpr {
    pub fn new(kind: TypeExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExprKind {
    /// Builtin or locally declared type name.
    Ident(String),
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `[N]T`, length discarded.
    Array(Box<TypeExpr>),
    /// `pkg.T`, declared outside this file.
    Qualified { package: String, name: String },
    Unsupported(TypeShape),
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeExprKind::Ident(name) => f.write_str(name),
            TypeExprKind::Pointer(inner) => write!(f, "*{inner}"),
            TypeExprKind::Slice(inner) => write!(f, "[]{inner}"),
            TypeExprKind::Array(inner) => write!(f, "[...]{inner}"),
            TypeExprKind::Qualified { package, name } => write!(f, "{package}.{name}"),
            TypeExprKind::Unsupported(shape) => write!(f, "<{shape}>"),
        }
    }
}

/// Type expression shapes that have no TypeScript counterpart here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeShape {
    Struct,
    Interface,
    Map,
    Channel,
    Function,
    Generic,
    /// Alias chain longer than the resolver follows.
    DeepAliasChain,
    /// Any other grammar node, by tree-sitter kind.
    Other(String),
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeShape::Struct => f.write_str("struct type"),
            TypeShape::Interface => f.write_str("interface type"),
            TypeShape::Map => f.write_str("map type"),
            TypeShape::Channel => f.write_str("channel type"),
            TypeShape::Function => f.write_str("function type"),
            TypeShape::Generic => f.write_str("generic type"),
            TypeShape::DeepAliasChain => f.write_str("alias chain nested too deeply"),
            TypeShape::Other(kind) => write!(f, "`{kind}`"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueDecl {
    pub name: String,
    pub kind: ValueKind,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Func,
    Var,
    Const,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Func => f.write_str("function"),
            ValueKind::Var => f.write_str("variable"),
            ValueKind::Const => f.write_str("constant"),
        }
    }
}
