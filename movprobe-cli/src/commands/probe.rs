// movprobe-cli/src/commands/probe.rs
//
// Glue between the parsed command line and movprobe-core: checks the
// invocation, runs ffprobe on the input and assembles the requested fields.

use crate::cli::Cli;
use crate::error::{CliError, CliErrorContext, CliResult};
use log::{debug, info};
use movprobe_core::{CommandFfprobeExecutor, FfprobeExecutor, ProbeResult, probe_file};
use std::fs;

const NO_FIELD_MESSAGE: &str = "need to set at least one of --start, --end, --duration, --fps, \
                                --resolution, --codec, --colorspace flag (or --all)";

/// Runs the probe with the real ffprobe named on the command line.
pub fn run_probe(cli: &Cli) -> CliResult<ProbeResult> {
    let executor = CommandFfprobeExecutor::new(&cli.ffprobe);
    run_probe_with(cli, &executor)
}

/// Runs the probe with a caller-supplied report source.
pub fn run_probe_with<E: FfprobeExecutor + ?Sized>(cli: &Cli, executor: &E) -> CliResult<ProbeResult> {
    let config = cli.probe_config();
    if config.validate().is_err() {
        return Err(CliError::Usage(NO_FIELD_MESSAGE.to_string()));
    }
    debug!(
        "Requested fields: {}",
        config.requested().map(|f| f.name()).collect::<Vec<_>>().join(", ")
    );

    let input = &cli.file;
    fs::metadata(input)
        .cli_with_context(|| format!("Invalid input path '{}'", input.display()))?;

    info!("Probing {}", input.display());
    let result = probe_file(executor, input, &config)?;
    Ok(result)
}
