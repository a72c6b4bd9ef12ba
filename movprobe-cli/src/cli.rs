// movprobe-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use movprobe_core::config::DEFAULT_FFPROBE_PROGRAM;
use movprobe_core::{Field, ProbeConfig};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "movprobe: timecode and format metadata of a movie file",
    long_about = "Runs ffprobe on a movie file and prints the requested timecode and format fields.",
    after_help = "Results are printed in the following order regardless of the flag order:\n  \
                  start, end, duration, fps, resolution, codec, colorspace"
)]
pub struct Cli {
    /// Movie file to probe
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,

    // --- Field Selection ---
    /// Print the start frame timecode
    #[arg(long)]
    pub start: bool,

    /// Print the end (last displayed) frame timecode
    #[arg(long)]
    pub end: bool,

    /// Print the duration in frames
    #[arg(long)]
    pub duration: bool,

    /// Print the frame rate
    #[arg(long)]
    pub fps: bool,

    /// Print the resolution as WIDTH*HEIGHT
    #[arg(long)]
    pub resolution: bool,

    /// Print the codec, profile and pixel format
    #[arg(long)]
    pub codec: bool,

    /// Print the colorspace
    #[arg(long)]
    pub colorspace: bool,

    /// Print every field
    #[arg(long)]
    pub all: bool,

    // --- Output ---
    /// Print the result as a JSON object instead of one value per line
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// ffprobe executable to run.
    /// Can also be set via the MOVPROBE_FFPROBE environment variable.
    #[arg(long, value_name = "PATH", env = "MOVPROBE_FFPROBE", default_value = DEFAULT_FFPROBE_PROGRAM)]
    pub ffprobe: PathBuf,
}

impl Cli {
    /// The field selection expressed by the flags.
    pub fn probe_config(&self) -> ProbeConfig {
        if self.all {
            return ProbeConfig::all();
        }
        let mut config = ProbeConfig::default();
        for (field, requested) in [
            (Field::Start, self.start),
            (Field::End, self.end),
            (Field::Duration, self.duration),
            (Field::Fps, self.fps),
            (Field::Resolution, self.resolution),
            (Field::Codec, self.codec),
            (Field::Colorspace, self.colorspace),
        ] {
            config.set(field, requested);
        }
        config
    }
}
