//! Core emitter struct and main emit logic.

use go2ts_core::{Colors, StructRecord};

use super::Config;

/// TypeScript emitter over extracted records.
pub struct Emitter<'a> {
    pub(super) records: &'a [StructRecord],
    pub(super) config: Config,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(records: &'a [StructRecord], config: Config) -> Self {
        Self {
            records,
            config,
            output: String::new(),
        }
    }

    pub(super) fn c(&self) -> Colors {
        self.config.colors
    }

    /// Emit every record, separated by blank lines.
    pub fn emit(mut self) -> String {
        if self.records.is_empty() {
            return self.output;
        }

        for record in self.records {
            self.emit_record(record);
        }

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }
}
