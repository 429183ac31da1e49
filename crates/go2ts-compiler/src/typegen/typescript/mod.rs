//! TypeScript declaration emitter.
//!
//! Renders each [`StructRecord`] as an object type declaration, in the order
//! the records were extracted.

mod config;
mod emitter;
mod render;


pub use config::{Config, DeclStyle, NullType};
pub use emitter::Emitter;

use go2ts_core::StructRecord;

/// Render `records` as TypeScript source text.
pub fn emit_typescript(records: &[StructRecord], config: Config) -> String {
    Emitter::new(records, config).emit()
}
