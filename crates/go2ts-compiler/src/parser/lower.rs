//! CST to declaration AST lowering.

use arborium_tree_sitter::Node;

use super::ast::{
    DeclBody, FieldDecl, SourceFile, Tag, TypeDecl, TypeExpr, TypeExprKind, TypeShape, ValueDecl,
    ValueKind,
};
use super::{escape, node_span};
use crate::diagnostics::{Error, Span};

pub(super) struct Lowerer<'s> {
    source: &'s str,
}

impl<'s> Lowerer<'s> {
    pub(super) fn new(source: &'s str) -> Self {
        Self { source }
    }

    fn text(&self, node: Node<'_>) -> &'s str {
        &self.source[node.start_byte()..node.end_byte()]
    }

    pub(super) fn lower_file(&self, root: Node<'_>) -> Result<SourceFile, Error> {
        let mut file = SourceFile::default();

        for child in named_children(root) {
            match child.kind() {
                "package_clause" => {
                    file.package = named_children(child)
                        .first()
                        .map(|name| self.text(*name).to_string());
                }
                "type_declaration" => self.lower_type_declaration(child, &mut file.types)?,
                "function_declaration" => {
                    let name = required_field(child, "name")?;
                    file.values.push(ValueDecl {
                        name: self.text(name).to_string(),
                        kind: ValueKind::Func,
                        span: node_span(child),
                    });
                }
                "var_declaration" => {
                    self.lower_value_specs(child, "var_spec", ValueKind::Var, &mut file.values)
                }
                "const_declaration" => {
                    self.lower_value_specs(child, "const_spec", ValueKind::Const, &mut file.values)
                }
                _ => {}
            }
        }

        Ok(file)
    }

    fn lower_type_declaration(
        &self,
        node: Node<'_>,
        out: &mut Vec<TypeDecl>,
    ) -> Result<(), Error> {
        for spec in named_children(node) {
            if matches!(spec.kind(), "type_spec" | "type_alias") {
                out.push(self.lower_type_spec(spec)?);
            }
        }
        Ok(())
    }

    fn lower_type_spec(&self, node: Node<'_>) -> Result<TypeDecl, Error> {
        let name = required_field(node, "name")?;
        let ty = required_field(node, "type")?;

        let body = if ty.kind() == "struct_type" {
            DeclBody::Struct(self.lower_struct_fields(ty)?)
        } else {
            DeclBody::Alias(self.lower_type(ty)?)
        };

        Ok(TypeDecl {
            name: self.text(name).to_string(),
            name_span: node_span(name),
            span: node_span(node),
            generic: node.child_by_field_name("type_parameters").is_some(),
            body,
        })
    }

    fn lower_struct_fields(&self, struct_type: Node<'_>) -> Result<Vec<FieldDecl>, Error> {
        let mut fields = Vec::new();
        for list in named_children(struct_type) {
            if list.kind() != "field_declaration_list" {
                continue;
            }
            for decl in named_children(list) {
                if decl.kind() == "field_declaration" {
                    fields.push(self.lower_field(decl)?);
                }
            }
        }
        Ok(fields)
    }

    fn lower_field(&self, node: Node<'_>) -> Result<FieldDecl, Error> {
        let mut names = Vec::new();
        let mut ty = None;
        let mut tag = None;
        let mut embedded_pointer = false;

        let mut cursor = node.walk();
        if cursor.goto_first_child() {
            loop {
                let child = cursor.node();
                match cursor.field_name() {
                    Some("name") => names.push(self.text(child).to_string()),
                    Some("type") => ty = Some(child),
                    Some("tag") => tag = Some(child),
                    _ if child.kind() == "*" => embedded_pointer = true,
                    _ => {}
                }
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }

        let Some(ty) = ty else {
            return Err(Error::syntax(node_span(node)));
        };
        let mut ty = self.lower_type(ty)?;

        // Embedded `*T`: the star is a sibling of the type, not part of it.
        if embedded_pointer && names.is_empty() {
            let span = node_span(node);
            let end = ty.span.end;
            ty = TypeExpr::new(
                TypeExprKind::Pointer(Box::new(ty)),
                Span::new(span.start, end),
            );
        }

        Ok(FieldDecl {
            names,
            ty,
            tag: tag.map(|tag| self.lower_tag(tag)).transpose()?,
            span: node_span(node),
        })
    }

    fn lower_tag(&self, node: Node<'_>) -> Result<Tag, Error> {
        let text = self.text(node);
        let span = node_span(node);
        let value = if node.kind() == "raw_string_literal" {
            strip_delimiters(text, '`').to_string()
        } else {
            escape::unquote(strip_delimiters(text, '"')).map_err(|_| Error::syntax(span))?
        };
        Ok(Tag { value, span })
    }

    fn lower_type(&self, node: Node<'_>) -> Result<TypeExpr, Error> {
        let span = node_span(node);
        let kind = match node.kind() {
            "type_identifier" => TypeExprKind::Ident(self.text(node).to_string()),
            "qualified_type" => TypeExprKind::Qualified {
                package: self.text(required_field(node, "package")?).to_string(),
                name: self.text(required_field(node, "name")?).to_string(),
            },
            "pointer_type" => TypeExprKind::Pointer(Box::new(self.lower_inner(node)?)),
            "slice_type" => {
                TypeExprKind::Slice(Box::new(self.lower_type(required_field(node, "element")?)?))
            }
            "array_type" | "implicit_length_array_type" => {
                TypeExprKind::Array(Box::new(self.lower_type(required_field(node, "element")?)?))
            }
            "parenthesized_type" => return self.lower_inner(node),
            "struct_type" => TypeExprKind::Unsupported(TypeShape::Struct),
            "interface_type" => TypeExprKind::Unsupported(TypeShape::Interface),
            "map_type" => TypeExprKind::Unsupported(TypeShape::Map),
            "channel_type" => TypeExprKind::Unsupported(TypeShape::Channel),
            "function_type" => TypeExprKind::Unsupported(TypeShape::Function),
            "generic_type" => TypeExprKind::Unsupported(TypeShape::Generic),
            other => TypeExprKind::Unsupported(TypeShape::Other(other.to_string())),
        };
        Ok(TypeExpr::new(kind, span))
    }

    /// Lower the single type operand of `*T` or `(T)`.
    fn lower_inner(&self, node: Node<'_>) -> Result<TypeExpr, Error> {
        let Some(inner) = named_children(node).into_iter().next() else {
            return Err(Error::syntax(node_span(node)));
        };
        self.lower_type(inner)
    }

    fn lower_value_specs(
        &self,
        node: Node<'_>,
        spec_kind: &str,
        kind: ValueKind,
        out: &mut Vec<ValueDecl>,
    ) {
        for child in named_children(node) {
            if child.kind() == spec_kind {
                let mut cursor = child.walk();
                for name in child.children_by_field_name("name", &mut cursor) {
                    out.push(ValueDecl {
                        name: self.text(name).to_string(),
                        kind,
                        span: node_span(child),
                    });
                }
            } else if child.kind().ends_with("_list") {
                // Newer grammars wrap grouped specs in a `*_spec_list` node.
                self.lower_value_specs(child, spec_kind, kind, out);
            }
        }
    }
}

/// Named children, skipping comments and other extras.
fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect();
    children
}

fn required_field<'t>(node: Node<'t>, field: &str) -> Result<Node<'t>, Error> {
    node.child_by_field_name(field)
        .ok_or_else(|| Error::syntax(node_span(node)))
}

fn strip_delimiters(text: &str, delimiter: char) -> &str {
    let text = text.strip_prefix(delimiter).unwrap_or(text);
    text.strip_suffix(delimiter).unwrap_or(text)
}
