// movprobe-cli/src/main.rs
//
// Entry point of the movprobe binary.
//
// Responsibilities include:
// - Parsing command-line arguments (clap exits with code 2 on usage errors).
// - Setting up logging on stderr.
// - Invoking the probe and printing results or the error.
// - Managing process exit codes based on success or failure.

use clap::Parser;
use log::debug;
use movprobe_cli::error::EXIT_FAILURE;
use movprobe_cli::{Cli, logging, output, run_probe};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    debug!("movprobe v{} starting", env!("CARGO_PKG_VERSION"));

    match run_probe(&cli) {
        Ok(result) => {
            if let Err(e) = output::print_result(&result, cli.json) {
                eprintln!("failed to write output: {e}");
                process::exit(EXIT_FAILURE);
            }
        }
        Err(err) => {
            debug!("Probe failed: {err:?}");
            output::print_error(&err, cli.json);
            process::exit(err.exit_code());
        }
    }
}
