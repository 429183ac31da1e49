//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use go2ts_compiler::ExportPolicy;
use go2ts_compiler::typegen::typescript::{DeclStyle, NullType};

use super::ColorChoice;
use crate::commands::generate::{GenerateArgs, OutputFormat};

pub struct GenerateParams {
    pub file: PathBuf,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub style: DeclStyle,
    pub null_type: NullType,
    pub export: ExportPolicy,
    pub tag_key: String,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            // Input
            file: m
                .get_one::<PathBuf>("file")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),

            // Format options
            format: parse_format(m),
            style: if m.get_flag("interface") {
                DeclStyle::Interface
            } else {
                DeclStyle::TypeAlias
            },
            null_type: match m.get_one::<String>("null_type").map(|s| s.as_str()) {
                Some("undefined") => NullType::Undefined,
                _ => NullType::Null,
            },
            export: match m.get_one::<String>("export").map(|s| s.as_str()) {
                Some("source") => ExportPolicy::SourceVisibility,
                Some("none") => ExportPolicy::None,
                _ => ExportPolicy::All,
            },
            tag_key: m
                .get_one::<String>("tag_key")
                .cloned()
                .unwrap_or_else(|| "json".to_string()),

            // Output
            output: m.get_one::<PathBuf>("output").cloned(),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            file: p.file,
            output: p.output,
            format: p.format,
            style: p.style,
            null_type: p.null_type,
            export: p.export,
            tag_key: p.tag_key,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::TypeScript,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
