//! Symbol table: top-level name to declaration.
//!
//! Built in one pass before any resolution, so aliases may refer to types
//! declared later in the file.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::parser::{SourceFile, TypeDecl, ValueDecl};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol<'a> {
    Type(&'a TypeDecl),
    Value(&'a ValueDecl),
}

#[derive(Debug, Default)]
pub struct SymbolTable<'a> {
    symbols: IndexMap<&'a str, Symbol<'a>>,
}

impl<'a> SymbolTable<'a> {
    pub fn build(file: &'a SourceFile) -> Self {
        let mut table = Self::default();
        for decl in &file.types {
            table.insert(&decl.name, Symbol::Type(decl));
        }
        for value in &file.values {
            table.insert(&value.name, Symbol::Value(value));
        }
        table
    }

    /// First declaration wins; Go rejects redeclarations anyway.
    fn insert(&mut self, name: &'a str, symbol: Symbol<'a>) {
        // The blank identifier never binds.
        if name == "_" {
            return;
        }
        match self.symbols.entry(name) {
            Entry::Vacant(e) => {
                e.insert(symbol);
            }
            Entry::Occupied(_) => {
                tracing::warn!(name, "duplicate top-level declaration, keeping the first");
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Symbol<'a>> {
        self.symbols.get(name).copied()
    }
}
