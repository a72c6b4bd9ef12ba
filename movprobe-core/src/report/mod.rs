// ============================================================================
// movprobe-core/src/report/mod.rs
// ============================================================================
//
// PROBE REPORT PARSING: Video Stream Extraction from ffprobe Output
//
// The report produced by `ffprobe -show_streams` has two parts: a free-text
// overview (one `Stream #0:N` line per stream) followed by one
// `[STREAM]`...`[/STREAM]` key=value block per stream. The overview tells us
// which stream is the video and its frame rate; the matching block supplies
// frame count, dimensions, codec details and the timecode tag.
//
// KEY COMPONENTS:
// - extract(): full report -> StreamRecord
// - StreamRecord: the fields of the video stream, first-seen values only
//
// Blocks are matched to the overview ordinal by position. This assumes every
// declared stream produced exactly one block, in the same order.

mod overview;
mod stream;

pub use overview::{VideoStreamLine, scan_overview};

use crate::error::{CoreError, CoreResult};
use stream::{STREAM_START, scan_block, split_blocks};

/// Fields of the video stream pulled from one probe report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamRecord {
    /// Ordinal of the video stream in the overview
    pub index: usize,
    /// Frame-rate token from the overview, not from the block
    pub fps: Option<String>,
    /// `TAG:timecode` value, validated to have timecode shape
    pub timecode: Option<String>,
    /// `nb_frames` value
    pub nb_frames: Option<u64>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub codec_name: Option<String>,
    pub profile: Option<String>,
    pub pix_fmt: Option<String>,
    pub color_space: Option<String>,
}

impl StreamRecord {
    /// Frame count, treating zero as absent.
    #[must_use]
    pub fn frame_count(&self) -> Option<u64> {
        self.nb_frames.filter(|&n| n > 0)
    }
}

/// Extracts the video stream record from a raw `ffprobe -show_streams` report.
pub fn extract(report: &str) -> CoreResult<StreamRecord> {
    let marker = report.find(STREAM_START).ok_or(CoreError::NoStreamMarker)?;
    let (overview, section) = report.split_at(marker);

    let video = scan_overview(overview)?;

    let blocks = split_blocks(section);
    let block = blocks
        .get(video.index)
        .ok_or(CoreError::StreamIndexOutOfRange {
            index: video.index,
            blocks: blocks.len(),
        })?;
    log::debug!(
        "Using [STREAM] block {} of {} for the video stream",
        video.index,
        blocks.len()
    );

    let fields = scan_block(block, video.fps.is_some())?;

    Ok(StreamRecord {
        index: video.index,
        fps: video.fps,
        timecode: fields.timecode,
        nb_frames: fields.nb_frames,
        width: fields.width,
        height: fields.height,
        codec_name: fields.codec_name,
        profile: fields.profile,
        pix_fmt: fields.pix_fmt,
        color_space: fields.color_space,
    })
}
