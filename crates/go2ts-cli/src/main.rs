mod cli;
mod commands;

use std::process::ExitCode;

use cli::{GenerateParams, build_cli, init_logging};

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    let params = GenerateParams::from_matches(&matches);

    init_logging(params.verbose);
    let colored = params.color.should_colorize();

    match commands::generate::run(params.into()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", e.render(colored));
            ExitCode::FAILURE
        }
    }
}
