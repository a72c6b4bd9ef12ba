//! Command implementations for the CLI.

/// Probes one file and returns the requested fields.
pub mod probe;
