//! Output rendering methods.

use go2ts_core::{Field, StructRecord, Type, property_name};

use super::Emitter;
use super::config::DeclStyle;

impl Emitter<'_> {
    pub(super) fn emit_record(&mut self, record: &StructRecord) {
        let c = self.c();

        if self.config.export && record.exported {
            self.output.push_str(&format!("{}export{} ", c.syntax, c.reset));
        }

        match self.config.style {
            // Header: type Name = {
            DeclStyle::TypeAlias => self.output.push_str(&format!(
                "{}type{} {}{}{} {}= {{{}\n",
                c.syntax, c.reset, c.record, record.name, c.reset, c.syntax, c.reset
            )),
            // Header: interface Name {
            DeclStyle::Interface => self.output.push_str(&format!(
                "{}interface{} {}{}{} {}{{{}\n",
                c.syntax, c.reset, c.record, record.name, c.reset, c.syntax, c.reset
            )),
        }

        for field in &record.fields {
            self.emit_field(field);
        }

        let close = match self.config.style {
            DeclStyle::TypeAlias => "};",
            DeclStyle::Interface => "}",
        };
        self.output.push_str(&format!("{}{}{}\n\n", c.syntax, close, c.reset));
    }

    fn emit_field(&mut self, field: &Field) {
        let c = self.c();
        let ts_type = self.type_to_ts(&field.ty);
        self.output.push_str(&format!(
            "  {}{}:{} {}{};{}\n",
            property_name(&field.name),
            c.syntax,
            c.reset,
            ts_type,
            c.syntax,
            c.reset
        ));
    }

    pub(super) fn type_to_ts(&self, ty: &Type) -> String {
        let c = self.c();
        match ty {
            Type::Primitive(kind) => format!("{}{}{}", c.primitive, kind, c.reset),
            Type::Nullable(inner) => format!(
                "{} {}| {}{}",
                self.type_to_ts(inner),
                c.syntax,
                self.config.null_type.as_str(),
                c.reset
            ),
            Type::Array(inner) => format!(
                "{}({}{}{})[]{}",
                c.syntax,
                c.reset,
                self.type_to_ts(inner),
                c.syntax,
                c.reset
            ),
        }
    }
}
