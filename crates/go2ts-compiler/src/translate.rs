//! High-level translation facade.

use go2ts_core::StructRecord;

use crate::Result;
use crate::analyze::{self, ExtractConfig};
use crate::parser;

/// Runs the pipeline on one Go source file: parse, then extract records.
///
/// ```ignore
/// let records = Translator::new().translate(source)?;
/// let ts = emit_typescript(&records, Config::new());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Translator {
    config: ExtractConfig,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Translate every struct declaration in `source`, in file order.
    ///
    /// Fails on the first problem; no partial output is produced.
    pub fn translate(&self, source: &str) -> Result<Vec<StructRecord>> {
        let file = parser::parse(source)?;
        tracing::debug!(
            package = file.package.as_deref().unwrap_or("<none>"),
            types = file.types.len(),
            values = file.values.len(),
            "parsed source"
        );
        analyze::analyze(&file, &self.config)
    }
}
