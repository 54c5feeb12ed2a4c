mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, resolve};
use hostprobe_common::error;
use terminal::{logging, print};

fn main() -> ExitCode {
    let cli = CommandLine::parse_args();
    logging::init_logging(cli.quiet, cli.verbose);

    let cfg = cli.to_config();
    print::banner(cfg.quiet);

    match resolve::resolve(&cli, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
