use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use go2ts_compiler::typegen::typescript::{Config, DeclStyle, NullType, emit_typescript};
use go2ts_compiler::{ExportPolicy, ExtractConfig, Translator};
use go2ts_core::StructRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    TypeScript,
    /// Extracted records as pretty-printed JSON.
    Json,
}

pub struct GenerateArgs {
    pub file: PathBuf,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub style: DeclStyle,
    pub null_type: NullType,
    pub export: ExportPolicy,
    pub tag_key: String,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {target}: {source}")]
    Write { target: String, source: io::Error },

    #[error("{error}")]
    Translate {
        error: go2ts_compiler::Error,
        text: String,
        path: PathBuf,
    },

    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Text for stderr; translation errors are annotated against the source.
    pub fn render(&self, colored: bool) -> String {
        match self {
            CliError::Translate { error, text, path } => {
                let path = path.display().to_string();
                error.printer(text).path(&path).colored(colored).render()
            }
            other => format!("error: {other}\n"),
        }
    }
}

pub fn run(args: GenerateArgs) -> Result<(), CliError> {
    let source = load_source(&args.file)?;

    let config = ExtractConfig::new()
        .tag_key(args.tag_key.as_str())
        .export(args.export);
    let records = Translator::with_config(config)
        .translate(&source)
        .map_err(|error| CliError::Translate {
            error,
            text: source.clone(),
            path: args.file.clone(),
        })?;
    tracing::info!(records = records.len(), file = %args.file.display(), "translated");

    // Never write escape codes into a file.
    let colored = args.color && args.output.is_none();
    let output = render(&records, &args, colored)?;

    write_output(args.output.as_deref(), &output)
}

fn render(
    records: &[StructRecord],
    args: &GenerateArgs,
    colored: bool,
) -> Result<String, CliError> {
    match args.format {
        OutputFormat::TypeScript => {
            let config = Config::new()
                .style(args.style)
                .null_type(args.null_type)
                .colored(colored);
            Ok(emit_typescript(records, config))
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(records)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn load_source(path: &Path) -> Result<String, CliError> {
    let read_error = |source| CliError::Read {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_error)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_error)
}

fn write_output(path: Option<&Path>, output: &str) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, output).map_err(|source| CliError::Write {
            target: path.display().to_string(),
            source,
        }),
        None => io::stdout()
            .write_all(output.as_bytes())
            .map_err(|source| CliError::Write {
                target: "stdout".to_string(),
                source,
            }),
    }
}
