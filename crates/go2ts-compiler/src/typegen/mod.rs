//! Output generation from extracted struct records.

pub mod typescript;
