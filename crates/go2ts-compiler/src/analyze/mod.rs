//! Semantic analysis: from declarations to struct records.
//!
//! Two passes over a parsed file:
//! 1. Build the symbol table from every top-level declaration
//! 2. Walk struct declarations in file order, naming each field from its tag
//!    and resolving its type through the symbol table

mod config;
mod extract;
mod resolve;
mod symbol_table;
mod tag;


pub use config::{ExportPolicy, ExtractConfig};
pub use extract::Extractor;
pub use resolve::{MAX_ALIAS_DEPTH, ResolveError, Resolver, builtin_primitive};
pub use symbol_table::{Symbol, SymbolTable};
pub use tag::{TagName, external_name, parse_tag};

use go2ts_core::StructRecord;

use crate::diagnostics::Error;
use crate::parser::SourceFile;

/// Extract every struct record of `file`, in declaration order.
pub fn analyze(file: &SourceFile, config: &ExtractConfig) -> Result<Vec<StructRecord>, Error> {
    let symbols = SymbolTable::build(file);
    Extractor::new(&symbols, config).extract(file)
}
