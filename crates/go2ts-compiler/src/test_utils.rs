//! Test helpers for the translation pipeline.

use go2ts_core::StructRecord;

use crate::Translator;
use crate::diagnostics::Error;
use crate::typegen::typescript::{Config, emit_typescript};

impl Translator {
    /// Translate `source`, panicking with the rendered diagnostic on failure.
    #[track_caller]
    pub fn expect_records(source: &str) -> Vec<StructRecord> {
        Self::new().expect_records_with(source)
    }

    #[track_caller]
    pub fn expect_records_with(&self, source: &str) -> Vec<StructRecord> {
        match self.translate(source) {
            Ok(records) => records,
            Err(e) => panic!("expected successful translation:\n{}", e.render(source)),
        }
    }

    /// Translate and render with the default TypeScript config, uncolored.
    #[track_caller]
    pub fn expect_types(source: &str) -> String {
        emit_typescript(&Self::expect_records(source), Config::new())
    }

    #[track_caller]
    pub fn expect_error(source: &str) -> Error {
        Self::new().expect_error_with(source)
    }

    #[track_caller]
    pub fn expect_error_with(&self, source: &str) -> Error {
        match self.translate(source) {
            Ok(records) => panic!("expected translation to fail, got {records:?}"),
            Err(e) => e,
        }
    }
}

/// Install a DEBUG-level subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
