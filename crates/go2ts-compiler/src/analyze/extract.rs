//! Struct extraction: one [`StructRecord`] per struct declaration.

use indexmap::IndexSet;

use go2ts_core::{Field, StructRecord};

use super::config::ExtractConfig;
use super::resolve::{ResolveError, Resolver};
use super::symbol_table::SymbolTable;
use super::tag::{TagName, external_name};
use crate::diagnostics::{Error, ErrorKind, Site};
use crate::parser::{DeclBody, FieldDecl, SourceFile, TypeDecl, TypeShape};

pub struct Extractor<'t, 'a> {
    symbols: &'t SymbolTable<'a>,
    config: &'t ExtractConfig,
}

impl<'t, 'a> Extractor<'t, 'a> {
    pub fn new(symbols: &'t SymbolTable<'a>, config: &'t ExtractConfig) -> Self {
        Self { symbols, config }
    }

    /// Records in declaration order. The first failing field aborts the file.
    pub fn extract(&self, file: &SourceFile) -> Result<Vec<StructRecord>, Error> {
        file.types
            .iter()
            .filter_map(|decl| match &decl.body {
                DeclBody::Struct(fields) => Some(self.extract_struct(decl, fields)),
                DeclBody::Alias(_) => None,
            })
            .collect()
    }

    fn extract_struct(
        &self,
        decl: &TypeDecl,
        field_decls: &[FieldDecl],
    ) -> Result<StructRecord, Error> {
        if decl.generic {
            return Err(Error::new(
                ErrorKind::UnsupportedTypeShape(TypeShape::Generic),
                decl.name_span,
                Site::declaration(decl),
            ));
        }

        // Serialized names in emission order; a record cannot repeat one.
        let mut names = IndexSet::new();
        let mut fields = Vec::with_capacity(field_decls.len());
        for field in field_decls {
            self.extract_field(field, &mut names, &mut fields)
                .map_err(|e| e.at(Site::field(decl, field)))?;
        }

        let exported = self.config.export.is_exported(&decl.name);
        tracing::debug!(
            record = %decl.name,
            fields = fields.len(),
            exported,
            "extracted struct"
        );
        Ok(StructRecord::new(decl.name.clone(), fields, exported))
    }

    fn extract_field(
        &self,
        field: &FieldDecl,
        names: &mut IndexSet<String>,
        out: &mut Vec<Field>,
    ) -> Result<(), ResolveError> {
        let name = match external_name(field.tag.as_ref(), &self.config.tag_key, field.span)? {
            TagName::Name(name) => name,
            TagName::Skip => return Ok(()),
        };
        let ty = Resolver::new(self.symbols).resolve(&field.ty)?;

        // `A, B T \`json:"x"\`` shares one tag, so its second name always repeats the key.
        for _ in 0..field.names.len().max(1) {
            if !names.insert(name.clone()) {
                let span = field.tag.as_ref().map_or(field.span, |tag| tag.span);
                return Err(ResolveError::new(
                    ErrorKind::MalformedFieldMetadata(format!("duplicate field name `{name}`")),
                    span,
                ));
            }
            out.push(Field::new(name.clone(), ty.clone()));
        }
        Ok(())
    }
}
