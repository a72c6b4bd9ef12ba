// ============================================================================
// movprobe-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for movprobe-core
//
// This module defines the error taxonomy of the library. Every failure is
// terminal for the invocation that produced it: errors are detected at the
// point of use and returned immediately, nothing is retried.
//
// KEY COMPONENTS:
// - CoreError: one variant per failure kind, each carrying its context
// - CoreResult: result alias used throughout the crate
// - Helper constructors for process-related errors

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;
use std::process::ExitStatus;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors produced while probing a file and assembling its metadata.
#[derive(Error, Debug)]
pub enum CoreError {
    // ---- Report structure ----
    #[error("cannot find [STREAM] lines in probe report")]
    NoStreamMarker,

    #[error("no video stream found in probe report")]
    NoVideoStream,

    #[error("unexpected stream line: {0}")]
    UnexpectedStreamLine(String),

    #[error("video stream #{index} has no matching [STREAM] block ({blocks} blocks in report)")]
    StreamIndexOutOfRange { index: usize, blocks: usize },

    #[error("invalid timecode tag: {0}")]
    InvalidTimecodeTag(String),

    #[error("invalid frame count: {0}")]
    InvalidFrameCount(String),

    // ---- Field assembly ----
    #[error("missing TAG:timecode information")]
    MissingTimecode,

    #[error("missing fps information")]
    MissingFps,

    #[error("missing nb_frames information")]
    MissingFrameCount,

    #[error("unsupported fps: {0}")]
    UnsupportedFps(String),

    #[error("missing width information")]
    MissingWidth,

    #[error("missing height information")]
    MissingHeight,

    #[error("no output field requested")]
    NoFieldsRequested,

    // ---- Timecode codec ----
    #[error("invalid timecode: {0}")]
    InvalidTimecode(String),

    #[error("unknown base for timecode: {0}")]
    UnsupportedBase(u32),

    // ---- External process ----
    #[error("required dependency '{0}' not found")]
    DependencyNotFound(String),

    #[error("failed to start {command}: {source}")]
    CommandStart {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{command} exited with {status}: {output}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        output: String,
    },
}

impl CoreError {
    /// Stable, machine-checkable name of the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::NoStreamMarker => "NoStreamMarker",
            CoreError::NoVideoStream => "NoVideoStream",
            CoreError::UnexpectedStreamLine(_) => "UnexpectedStreamLine",
            CoreError::StreamIndexOutOfRange { .. } => "StreamIndexOutOfRange",
            CoreError::InvalidTimecodeTag(_) => "InvalidTimecodeTag",
            CoreError::InvalidFrameCount(_) => "InvalidFrameCount",
            CoreError::MissingTimecode => "MissingTimecode",
            CoreError::MissingFps => "MissingFps",
            CoreError::MissingFrameCount => "MissingFrameCount",
            CoreError::UnsupportedFps(_) => "UnsupportedFps",
            CoreError::MissingWidth => "MissingWidth",
            CoreError::MissingHeight => "MissingHeight",
            CoreError::NoFieldsRequested => "NoFieldsRequested",
            CoreError::InvalidTimecode(_) => "InvalidTimecode",
            CoreError::UnsupportedBase(_) => "UnsupportedBase",
            CoreError::DependencyNotFound(_) => "DependencyNotFound",
            CoreError::CommandStart { .. } => "CommandStart",
            CoreError::CommandFailed { .. } => "CommandFailed",
        }
    }
}

/// Result type for movprobe-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

// ============================================================================
// HELPER CONSTRUCTORS
// ============================================================================

/// Builds the error for a process that could not be spawned.
pub fn command_start_error(command: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::CommandStart {
        command: command.into(),
        source,
    }
}

/// Builds the error for a process that ran but exited unsuccessfully.
pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    output: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        output: output.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_match_variants() {
        assert_eq!(CoreError::NoStreamMarker.kind(), "NoStreamMarker");
        assert_eq!(
            CoreError::StreamIndexOutOfRange { index: 3, blocks: 2 }.kind(),
            "StreamIndexOutOfRange"
        );
        assert_eq!(CoreError::UnsupportedBase(25).kind(), "UnsupportedBase");
    }

    #[test]
    fn test_messages_carry_context() {
        let err = CoreError::UnsupportedFps("59.94".to_string());
        assert_eq!(err.to_string(), "unsupported fps: 59.94");

        let err = CoreError::StreamIndexOutOfRange { index: 3, blocks: 2 };
        assert!(err.to_string().contains("#3"));
    }
}
