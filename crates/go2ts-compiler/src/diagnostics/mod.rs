//! Translation errors and their rendering.
//!
//! Every failure is fatal to the file being translated. An [`Error`] carries
//! what went wrong, where in the source, and which declaration or field was
//! being processed at the time.

mod printer;


use std::fmt;
use std::ops::Range;

use crate::parser::ast::{FieldDecl, TypeDecl, TypeShape};

pub use printer::ErrorPrinter;

/// Byte range into the Go source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// Identifier is neither a builtin primitive nor declared in the file.
    #[error("unknown primitive type `{0}`")]
    UnknownPrimitive(String),

    /// Identifier is declared, but not as a type.
    #[error("`{0}` does not refer to a type declaration")]
    UnresolvableDeclaration(String),

    /// Alias chain revisits a name that is still being resolved.
    #[error("cyclic type alias `{}`", .0.join(" -> "))]
    CyclicAlias(Vec<String>),

    #[error("unsupported type shape: {0}")]
    UnsupportedTypeShape(TypeShape),

    /// Struct tag missing or not a single naming key.
    #[error("malformed field metadata: {0}")]
    MalformedFieldMetadata(String),

    #[error("invalid Go syntax")]
    Syntax,
}

impl ErrorKind {
    /// Short label shown under the offending source text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UnknownPrimitive(_) => "not a builtin or declared type",
            Self::UnresolvableDeclaration(_) => "declared as a value, not a type",
            Self::CyclicAlias(_) => "cycle closes here",
            Self::UnsupportedTypeShape(_) => "cannot be translated",
            Self::MalformedFieldMetadata(_) => "expected a single naming tag",
            Self::Syntax => "syntax error",
        }
    }
}

/// What was being processed when an error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Site {
    File,
    Declaration {
        name: String,
        span: Span,
    },
    Field {
        record: String,
        field: String,
        span: Span,
    },
}

impl Site {
    pub fn declaration(decl: &TypeDecl) -> Self {
        Site::Declaration {
            name: decl.name.clone(),
            span: decl.span,
        }
    }

    pub fn field(decl: &TypeDecl, field: &FieldDecl) -> Self {
        Site::Field {
            record: decl.name.clone(),
            field: field.label(),
            span: field.span,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Site::File => None,
            Site::Declaration { span, .. } | Site::Field { span, .. } => Some(*span),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::File => write!(f, "in source file"),
            Site::Declaration { name, .. } => write!(f, "in declaration `{name}`"),
            Site::Field { record, field, .. } => write!(f, "in field `{field}` of `{record}`"),
        }
    }
}

/// A fatal translation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} {site}")]
pub struct Error {
    pub kind: ErrorKind,
    pub span: Span,
    pub site: Site,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span, site: Site) -> Self {
        Self { kind, span, site }
    }

    pub fn syntax(span: Span) -> Self {
        Self::new(ErrorKind::Syntax, span, Site::File)
    }

    pub fn printer<'s>(&self, source: &'s str) -> ErrorPrinter<'_, 's> {
        ErrorPrinter::new(self).source(source)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer(source).colored(colored).render()
    }
}
