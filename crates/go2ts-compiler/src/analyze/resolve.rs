//! Type resolution: Go type expression to TypeScript [`Type`].
//!
//! Case analysis on the expression shape:
//! - identifier with a local declaration: dereference the alias and recurse
//! - identifier without one: look up the builtin primitive table
//! - `*T`: `Nullable(T)`
//! - `[]T`, `[N]T`: `Array(T)`
//! - `pkg.T`: opaque, treated as `string`
//! - anything else: error
//!
//! A local declaration always shadows a builtin of the same name.

use indexmap::IndexSet;

use go2ts_core::{PrimitiveKind, Type};

use super::symbol_table::{Symbol, SymbolTable};
use crate::diagnostics::{Error, ErrorKind, Site, Span};
use crate::parser::{DeclBody, TypeExpr, TypeExprKind, TypeShape};

/// Longest alias chain followed before giving up.
pub const MAX_ALIAS_DEPTH: usize = 256;

/// Closed mapping of Go builtin type names to TypeScript primitives.
///
/// Names missing here (`bool`, `complex64`, `any`, ...) never resolve.
pub fn builtin_primitive(name: &str) -> Option<PrimitiveKind> {
    match name {
        "string" => Some(PrimitiveKind::String),
        "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16" | "uint32"
        | "uint64" | "uintptr" | "byte" | "rune" | "float32" | "float64" => {
            Some(PrimitiveKind::Number)
        }
        _ => None,
    }
}

/// A resolution failure before it is tied to a field or declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveError {
    pub kind: ErrorKind,
    pub span: Span,
}

impl ResolveError {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn at(self, site: Site) -> Error {
        Error::new(self.kind, self.span, site)
    }
}

pub struct Resolver<'t, 'a> {
    symbols: &'t SymbolTable<'a>,
    /// Aliases currently being dereferenced, outermost first.
    in_progress: IndexSet<&'a str>,
}

impl<'t, 'a> Resolver<'t, 'a> {
    pub fn new(symbols: &'t SymbolTable<'a>) -> Self {
        Self {
            symbols,
            in_progress: IndexSet::new(),
        }
    }

    pub fn resolve(&mut self, expr: &TypeExpr) -> Result<Type, ResolveError> {
        match &expr.kind {
            TypeExprKind::Ident(name) => self.resolve_ident(name, expr.span),
            TypeExprKind::Pointer(inner) => Ok(Type::nullable(self.resolve(inner)?)),
            TypeExprKind::Slice(inner) | TypeExprKind::Array(inner) => {
                Ok(Type::array(self.resolve(inner)?))
            }
            TypeExprKind::Qualified { package, name } => {
                // Declared in another package: nothing to inspect.
                tracing::debug!(package, name, "treating external type as string");
                Ok(Type::STRING)
            }
            TypeExprKind::Unsupported(shape) => Err(ResolveError::new(
                ErrorKind::UnsupportedTypeShape(shape.clone()),
                expr.span,
            )),
        }
    }

    fn resolve_ident(&mut self, name: &str, span: Span) -> Result<Type, ResolveError> {
        let Some(symbol) = self.symbols.get(name) else {
            return builtin_primitive(name).map(Type::Primitive).ok_or_else(|| {
                ResolveError::new(ErrorKind::UnknownPrimitive(name.to_string()), span)
            });
        };

        let decl = match symbol {
            Symbol::Type(decl) => decl,
            Symbol::Value(value) => {
                tracing::debug!(name, kind = %value.kind, "identifier names a value");
                return Err(ResolveError::new(
                    ErrorKind::UnresolvableDeclaration(name.to_string()),
                    span,
                ));
            }
        };

        if decl.generic {
            return Err(ResolveError::new(
                ErrorKind::UnsupportedTypeShape(TypeShape::Generic),
                span,
            ));
        }

        let DeclBody::Alias(target) = &decl.body else {
            return Err(ResolveError::new(
                ErrorKind::UnsupportedTypeShape(TypeShape::Struct),
                span,
            ));
        };

        if self.in_progress.len() >= MAX_ALIAS_DEPTH {
            return Err(ResolveError::new(
                ErrorKind::UnsupportedTypeShape(TypeShape::DeepAliasChain),
                span,
            ));
        }
        if !self.in_progress.insert(decl.name.as_str()) {
            return Err(ResolveError::new(
                ErrorKind::CyclicAlias(self.cycle_through(name)),
                span,
            ));
        }

        tracing::trace!(alias = name, target = %target, "dereferencing alias");
        let resolved = self.resolve(target);
        self.in_progress.pop();
        resolved
    }

    /// The alias chain from `name` back to itself, e.g. `A -> B -> A`.
    fn cycle_through(&self, name: &str) -> Vec<String> {
        let start = self.in_progress.get_index_of(name).unwrap_or(0);
        self.in_progress
            .iter()
            .skip(start)
            .map(|alias| alias.to_string())
            .chain(std::iter::once(name.to_string()))
            .collect()
    }
}
