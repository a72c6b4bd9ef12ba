//! Rendering of probe results and errors.
//!
//! Results go to stdout, either one non-empty value per line in canonical
//! field order or as a single JSON object. Errors go to stderr.

use crate::error::CliError;
use movprobe_core::ProbeResult;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Symbol printed in front of human-readable errors.
pub const ERROR_SYMBOL: &str = "✗";

/// Writes `result` to `out`.
pub fn write_result<W: Write>(out: &mut W, result: &ProbeResult, json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, result)?;
        writeln!(out)?;
    } else {
        for line in result.lines() {
            writeln!(out, "{line}")?;
        }
    }
    out.flush()
}

/// Prints `result` to stdout.
pub fn print_result(result: &ProbeResult, json: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_result(&mut handle, result, json)
}

/// Writes `err` to `out`, as JSON or as a plain message.
pub fn write_error<W: Write>(out: &mut W, err: &CliError, json: bool, color: bool) -> io::Result<()> {
    if json {
        let value = serde_json::json!({
            "error": err.kind(),
            "message": err.to_string(),
        });
        serde_json::to_writer(&mut *out, &value)?;
        writeln!(out)
    } else if color {
        writeln!(out, "{} {}", ERROR_SYMBOL.red().bold(), err.red())
    } else {
        writeln!(out, "{ERROR_SYMBOL} {err}")
    }
}

/// Prints `err` to stderr, colored when the terminal supports it.
pub fn print_error(err: &CliError, json: bool) {
    let color = supports_color::on(supports_color::Stream::Stderr).is_some();
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    // nothing left to report to if stderr is gone
    let _ = write_error(&mut handle, err, json, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use movprobe_core::CoreError;

    fn result() -> ProbeResult {
        ProbeResult {
            start: "01:00:00:00".to_string(),
            duration: "48".to_string(),
            resolution: "1920*1080".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_output_skips_empty_fields() {
        let mut out = Vec::new();
        write_result(&mut out, &result(), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "01:00:00:00\n48\n1920*1080\n");
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        write_result(&mut out, &result(), true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["start"], "01:00:00:00");
        assert_eq!(value["resolution"], "1920*1080");
        assert!(value.get("end").is_none());
    }

    #[test]
    fn test_error_output() {
        let err = CliError::from(CoreError::UnsupportedFps("59.94".to_string()));

        let mut out = Vec::new();
        write_error(&mut out, &err, false, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "✗ unsupported fps: 59.94\n");

        let mut out = Vec::new();
        write_error(&mut out, &err, true, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["error"], "UnsupportedFps");
    }
}
