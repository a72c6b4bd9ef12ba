//! Core library for extracting timing and format metadata from ffprobe reports.
//!
//! This crate parses the text printed by `ffprobe -show_streams`, locates the
//! video stream, and derives start/end timecodes (drop-frame aware), frame
//! count duration, fps, resolution, codec and colorspace.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use movprobe_core::{CommandFfprobeExecutor, ProbeConfigBuilder, probe_file};
//! use std::path::Path;
//!
//! let config = ProbeConfigBuilder::new()
//!     .start(true)
//!     .end(true)
//!     .build();
//!
//! let executor = CommandFfprobeExecutor::default();
//! let result = probe_file(&executor, Path::new("clip.mov"), &config).unwrap();
//! for line in result.lines() {
//!     println!("{line}");
//! }
//! ```

pub mod assemble;
pub mod config;
pub mod error;
pub mod external;
pub mod report;
pub mod timecode;
pub mod utils;

// Re-exports for public API
pub use assemble::{ProbeResult, assemble, end_timecode};
pub use config::{Field, ProbeConfig, ProbeConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{CommandFfprobeExecutor, FfprobeExecutor};
pub use report::{StreamRecord, extract};
pub use timecode::{FrameRate, Timecode, TimecodeFormat};

use std::path::Path;

/// Parses a raw report and assembles the requested fields.
pub fn probe_report(report: &str, config: &ProbeConfig) -> CoreResult<ProbeResult> {
    let record = extract(report)?;
    assemble(config, &record)
}

/// Probes `input` with `executor` and assembles the requested fields.
pub fn probe_file<E: FfprobeExecutor + ?Sized>(
    executor: &E,
    input: &Path,
    config: &ProbeConfig,
) -> CoreResult<ProbeResult> {
    config.validate()?;
    let report = executor.show_streams(input)?;
    probe_report(&report, config)
}
