//! Core data structures for go2ts.
//!
//! The target type model lives here so that both the compiler (which builds
//! it) and the CLI (which serializes it) can share one definition.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod colors;
pub mod model;
mod naming;

#[cfg(test)]
mod model_tests;

pub use colors::Colors;
pub use model::{Field, PrimitiveKind, StructRecord, Type};
pub use naming::property_name;
