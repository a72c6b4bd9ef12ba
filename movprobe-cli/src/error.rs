// ============================================================================
// movprobe-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// Wraps the core error type with the failures that only exist at the command
// line (usage problems, context about the input path) and maps every error
// to a process exit code.
//
// KEY COMPONENTS:
// - CliError / CliResult
// - CliErrorContext: lazy context for fallible results

// ---- Internal crate imports ----
use movprobe_core::CoreError;

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::fmt;

/// Exit code for failures reported by the core or the probe process.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for invalid invocations, matching clap's own usage errors.
pub const EXIT_USAGE: i32 = 2;

// ============================================================================
// ERROR TYPE
// ============================================================================

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{0}")]
    Usage(String),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CliError {
    /// Machine-checkable error kind, as printed in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Core(err) => err.kind(),
            CliError::Usage(_) => "Usage",
            CliError::Context { .. } => "OperationFailed",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}

/// Type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// ERROR CONVERSION UTILITIES
// ============================================================================

/// Extension trait for adding context to errors in the CLI.
pub trait CliErrorContext<T> {
    /// Add context using a closure (for lazy evaluation).
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| CliError::Context {
            context: f().to_string(),
            source: Box::new(e),
        })
    }
}
