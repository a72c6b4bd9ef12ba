//! Scanning of the free-text overview that precedes the `[STREAM]` blocks.
//!
//! ffprobe prints one summary line per stream, e.g.
//! `Stream #0:0(eng): Video: h264 (High), yuv420p, 1920x1080, 23.98 fps, 23.98 tbr`.
//! The first such line describing a video stream yields its ordinal and,
//! when present, the token preceding `fps`.

use crate::error::{CoreError, CoreResult};

const STREAM_LINE_PREFIX: &str = "Stream #0:";

/// What the overview says about the video stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoStreamLine {
    /// Ordinal of the stream, matched positionally against `[STREAM]` blocks.
    pub index: usize,
    /// Frame-rate token as printed, e.g. `29.97`.
    pub fps: Option<String>,
}

/// Finds the first video stream line in `overview`.
pub fn scan_overview(overview: &str) -> CoreResult<VideoStreamLine> {
    for line in overview.lines().map(str::trim) {
        let Some(rest) = line.strip_prefix(STREAM_LINE_PREFIX) else {
            continue;
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.get(2) != Some(&"Video:") {
            continue;
        }

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let index = rest[..digits_end]
            .parse::<usize>()
            .map_err(|_| CoreError::UnexpectedStreamLine(line.to_string()))?;

        let fps = tokens
            .iter()
            .position(|t| *t == "fps" || *t == "fps,")
            .and_then(|pos| pos.checked_sub(1))
            .map(|pos| tokens[pos].to_string());

        log::debug!("Video stream #{index} found in overview (fps: {fps:?})");
        return Ok(VideoStreamLine { index, fps });
    }

    Err(CoreError::NoVideoStream)
}
