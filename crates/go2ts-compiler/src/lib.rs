//! go2ts compiler: Go struct declarations in, TypeScript type declarations out.
//!
//! This crate provides the translation pipeline:
//! - `parser` - tree-sitter parsing and lowering to a declaration AST
//! - `analyze` - symbol table, struct tags, type resolution, struct extraction
//! - `typegen` - TypeScript rendering
//! - `diagnostics` - error types and source-annotated rendering
//! - `translate` - high-level Translator facade

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod diagnostics;
pub mod parser;
pub mod translate;
pub mod typegen;

#[cfg(test)]
pub mod test_utils;

pub use analyze::{ExportPolicy, ExtractConfig};
pub use diagnostics::{Error, ErrorKind, ErrorPrinter, Site, Span};
pub use translate::Translator;

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, Error>;
