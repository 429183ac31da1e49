//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("go2ts")
        .about("Generate TypeScript type definitions from Go struct declarations")
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(
            r#"EXAMPLES:
  go2ts api/types.go                      # print to stdout
  go2ts api/types.go -o web/src/api.ts    # write to file
  go2ts api/types.go --interface --null-type undefined
  cat types.go | go2ts -                  # read stdin
  go2ts api/types.go --format json        # dump extracted records"#,
        )
        .arg(file_arg())
        .arg(output_file_arg())
        .arg(format_arg())
        .arg(interface_arg())
        .arg(null_type_arg())
        .arg(export_arg())
        .arg(tag_key_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
