// ============================================================================
// movprobe-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffprobe Executable
//
// The parser works on text; this module is where the text comes from. The
// FfprobeExecutor trait keeps the process behind a seam so callers and tests
// can supply a report without running ffprobe.
//
// KEY COMPONENTS:
// - FfprobeExecutor: trait producing a raw `-show_streams` report
// - CommandFfprobeExecutor: implementation spawning the real ffprobe

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains traits and implementations for executing ffprobe commands
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::{CommandFfprobeExecutor, FfprobeExecutor};
