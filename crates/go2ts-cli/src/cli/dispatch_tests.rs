//! Tests for CLI dispatch logic: params extracted from ArgMatches.

use std::path::PathBuf;

use go2ts_compiler::ExportPolicy;
use go2ts_compiler::typegen::typescript::{DeclStyle, NullType};

use super::*;
use crate::commands::generate::{GenerateArgs, OutputFormat};

fn params(args: &[&str]) -> GenerateParams {
    let m = build_cli()
        .try_get_matches_from(args.iter().copied())
        .unwrap_or_else(|e| panic!("{args:?} should parse: {e}"));
    GenerateParams::from_matches(&m)
}

#[test]
fn defaults() {
    let p = params(&["go2ts", "types.go"]);

    assert_eq!(p.file, PathBuf::from("types.go"));
    assert_eq!(p.output, None);
    assert_eq!(p.format, OutputFormat::TypeScript);
    assert_eq!(p.style, DeclStyle::TypeAlias);
    assert_eq!(p.null_type, NullType::Null);
    assert_eq!(p.export, ExportPolicy::All);
    assert_eq!(p.tag_key, "json");
    assert_eq!(p.verbose, 0);
    assert_eq!(p.color, ColorChoice::Auto);
}

#[test]
fn all_options() {
    let p = params(&[
        "go2ts",
        "api.go",
        "-o",
        "api.ts",
        "--format",
        "json",
        "--interface",
        "--null-type",
        "undefined",
        "--export",
        "source",
        "--tag-key",
        "yaml",
        "--color",
        "never",
        "-vv",
    ]);

    assert_eq!(p.file, PathBuf::from("api.go"));
    assert_eq!(p.output, Some(PathBuf::from("api.ts")));
    assert_eq!(p.format, OutputFormat::Json);
    assert_eq!(p.style, DeclStyle::Interface);
    assert_eq!(p.null_type, NullType::Undefined);
    assert_eq!(p.export, ExportPolicy::SourceVisibility);
    assert_eq!(p.tag_key, "yaml");
    assert_eq!(p.verbose, 2);
    assert_eq!(p.color, ColorChoice::Never);
}

#[test]
fn ts_is_typescript() {
    let p = params(&["go2ts", "a.go", "--format", "ts"]);
    assert_eq!(p.format, OutputFormat::TypeScript);
}

#[test]
fn stdin_dash() {
    let p = params(&["go2ts", "-"]);
    assert_eq!(p.file, PathBuf::from("-"));
}

#[test]
fn export_none() {
    let p = params(&["go2ts", "a.go", "--export", "none"]);
    assert_eq!(p.export, ExportPolicy::None);
}

#[test]
fn missing_file_is_usage_error() {
    let err = build_cli().try_get_matches_from(["go2ts"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn rejects_unknown_values() {
    for args in [
        ["go2ts", "a.go", "--format", "rust"],
        ["go2ts", "a.go", "--null-type", "void"],
        ["go2ts", "a.go", "--export", "some"],
    ] {
        let err = build_cli().try_get_matches_from(args).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue, "{args:?}");
    }
}

#[test]
fn never_color_converts_to_plain() {
    let args: GenerateArgs = params(&["go2ts", "a.go", "--color", "never"]).into();
    assert!(!args.color);

    let args: GenerateArgs = params(&["go2ts", "a.go", "--color", "always"]).into();
    assert!(args.color);
}
