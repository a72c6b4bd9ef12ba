//! FFprobe integration for producing stream reports.
//!
//! `ffprobe -show_streams` writes the human-readable overview (one
//! `Stream #0:N` line per stream) to stderr and the `[STREAM]` blocks to
//! stdout. The report handed to the parser is stderr followed by stdout, so
//! the overview always precedes the first `[STREAM]` marker.

use crate::config::DEFAULT_FFPROBE_PROGRAM;
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Source of raw `ffprobe -show_streams` reports.
pub trait FfprobeExecutor {
    /// Returns the combined report for `input`.
    fn show_streams(&self, input: &Path) -> CoreResult<String>;
}

/// Runs an ffprobe executable as a child process.
#[derive(Debug, Clone)]
pub struct CommandFfprobeExecutor {
    program: PathBuf,
}

impl CommandFfprobeExecutor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for CommandFfprobeExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_FFPROBE_PROGRAM)
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn show_streams(&self, input: &Path) -> CoreResult<String> {
        let program = self.program.display().to_string();
        log::debug!("Running {program} -show_streams {}", input.display());

        let output = Command::new(&self.program)
            .arg("-show_streams")
            .arg(input)
            .stdin(Stdio::null())
            .output()
            .map_err(|err| {
                if err.kind() == io::ErrorKind::NotFound {
                    log::warn!("Dependency '{program}' not found.");
                    CoreError::DependencyNotFound(program.clone())
                } else {
                    command_start_error(program.clone(), err)
                }
            })?;

        let mut report = String::from_utf8_lossy(&output.stderr).into_owned();
        report.push_str(&String::from_utf8_lossy(&output.stdout));

        if !output.status.success() {
            log::error!("{program} failed on {}: {}", input.display(), output.status);
            return Err(command_failed_error(program, output.status, report));
        }

        log::debug!("{program} produced {} bytes of report", report.len());
        Ok(report)
    }
}
