//! Argument builders for the CLI.
//!
//! Each function returns a `clap::Arg` that `commands.rs` composes into the
//! command.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Go source file (positional, "-" for stdin).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Go source file (use \"-\" for stdin)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("typescript")
        .value_parser(["typescript", "ts", "json"])
        .help("Output format")
}

/// Emit interfaces instead of type aliases (--interface).
pub fn interface_arg() -> Arg {
    Arg::new("interface")
        .long("interface")
        .action(ArgAction::SetTrue)
        .help("Emit `interface` declarations instead of type aliases")
}

/// Absent value for pointer fields (--null-type).
pub fn null_type_arg() -> Arg {
    Arg::new("null_type")
        .long("null-type")
        .value_name("TYPE")
        .default_value("null")
        .value_parser(["null", "undefined"])
        .help("Type unioned into pointer fields")
}

/// Which records get `export` (--export).
pub fn export_arg() -> Arg {
    Arg::new("export")
        .long("export")
        .value_name("WHICH")
        .default_value("all")
        .value_parser(["all", "source", "none"])
        .help("Export all records, only Go-exported ones, or none")
}

/// Struct tag key holding field names (--tag-key).
pub fn tag_key_arg() -> Arg {
    Arg::new("tag_key")
        .long("tag-key")
        .value_name("KEY")
        .default_value("json")
        .help("Struct tag key that names fields")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for info, -vv for debug, -vvv for trace)")
}
