// ============================================================================
// movprobe-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger initialisation for the CLI
//
// Logs go to stderr so stdout carries nothing but results.
// - default level: warn
// - --verbose: debug
// - RUST_LOG overrides both (e.g. RUST_LOG=movprobe_core=trace)

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::io::Write;

/// Initializes the global logger.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    init_with_level(level);
}

/// Initializes the global logger with a specific default level.
pub fn init_with_level(level: LevelFilter) {
    let env = Env::default().default_filter_or(level.as_str());
    let result = Builder::from_env(env)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                get_timestamp(),
                record.level(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized with level: {level}");
    }
}

/// Returns the current local time formatted as "HH:MM:SS%.3f".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S%.3f").to_string()
}
