//! Go source parsing.
//!
//! Tree-sitter builds the concrete syntax tree; [`lower`] walks it once and
//! keeps the top-level declarations as a [`SourceFile`]. A file with any
//! syntax error is rejected before lowering.

pub mod ast;
pub(crate) mod escape;
mod lower;

#[cfg(test)]
mod parser_tests;

use arborium_tree_sitter as tree_sitter;

pub use ast::{
    DeclBody, FieldDecl, SourceFile, Tag, TypeDecl, TypeExpr, TypeExprKind, TypeShape, ValueDecl,
    ValueKind,
};

use crate::diagnostics::{Error, Span};

/// Parse Go source text into its top-level declarations.
pub fn parse(source: &str) -> Result<SourceFile, Error> {
    let tree = parse_tree(source);
    let root = tree.root_node();

    if root.has_error() {
        let span = first_error(root).map_or_else(|| node_span(root), node_span);
        return Err(Error::syntax(span));
    }

    lower::Lowerer::new(source).lower_file(root)
}

fn parse_tree(source: &str) -> tree_sitter::Tree {
    let language: tree_sitter::Language = arborium_go::language().into();
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language)
        .expect("failed to set language");
    parser.parse(source, None).expect("failed to parse source")
}

/// Depth-first search for the first ERROR or MISSING node.
fn first_error(node: tree_sitter::Node<'_>) -> Option<tree_sitter::Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            if let Some(found) = first_error(cursor.node()) {
                return Some(found);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    None
}

pub(crate) fn node_span(node: tree_sitter::Node<'_>) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}
