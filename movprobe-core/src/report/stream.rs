//! `[STREAM]` ... `[/STREAM]` block handling.

use crate::error::{CoreError, CoreResult};
use crate::timecode::split_timecode;

pub(crate) const STREAM_START: &str = "[STREAM]";
const STREAM_END: &str = "[/STREAM]";

/// Splits the stream section into blocks, each keeping its closing marker.
///
/// Whitespace trailing the last closing marker is not a block.
pub(crate) fn split_blocks(section: &str) -> Vec<&str> {
    let mut blocks: Vec<&str> = section.split_inclusive(STREAM_END).collect();
    if blocks.last().is_some_and(|last| last.trim().is_empty()) {
        blocks.pop();
    }
    blocks
}

/// Values scanned out of one stream block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BlockFields {
    pub nb_frames: Option<u64>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub codec_name: Option<String>,
    pub profile: Option<String>,
    pub pix_fmt: Option<String>,
    pub color_space: Option<String>,
    pub timecode: Option<String>,
}

impl BlockFields {
    /// Whether everything the end timecode needs has been seen.
    fn timing_complete(&self, has_fps: bool) -> bool {
        has_fps && self.timecode.is_some() && self.nb_frames.is_some_and(|n| n != 0)
    }
}

/// Stores `value` unless the key was already seen.
fn first_seen(slot: &mut Option<String>, key: &str, value: &str) {
    if slot.is_none() {
        *slot = Some(value.to_string());
    } else {
        log::debug!("Ignoring repeated {key}{value}");
    }
}

/// Scans `block` line by line for the fields of interest.
///
/// The scan stops as soon as fps (from the overview), the timecode tag and a
/// non-zero frame count are all known, so fields appearing after that point
/// stay unset.
pub(crate) fn scan_block(block: &str, has_fps: bool) -> CoreResult<BlockFields> {
    let mut fields = BlockFields::default();

    for line in block.lines().map(str::trim_end) {
        if fields.timing_complete(has_fps) {
            log::debug!("Timing fields complete, stopping block scan");
            break;
        }

        if let Some(value) = line.strip_prefix("nb_frames=") {
            if fields.nb_frames.is_none() {
                let frames = value
                    .parse::<u64>()
                    .map_err(|_| CoreError::InvalidFrameCount(line.to_string()))?;
                fields.nb_frames = Some(frames);
            }
        } else if let Some(value) = line.strip_prefix("width=") {
            first_seen(&mut fields.width, "width=", value);
        } else if let Some(value) = line.strip_prefix("height=") {
            first_seen(&mut fields.height, "height=", value);
        } else if let Some(value) = line.strip_prefix("codec_name=") {
            first_seen(&mut fields.codec_name, "codec_name=", value);
        } else if let Some(value) = line.strip_prefix("profile=") {
            first_seen(&mut fields.profile, "profile=", value);
        } else if let Some(value) = line.strip_prefix("pix_fmt=") {
            first_seen(&mut fields.pix_fmt, "pix_fmt=", value);
        } else if let Some(value) = line.strip_prefix("color_space=") {
            first_seen(&mut fields.color_space, "color_space=", value);
        } else if let Some(value) = line.strip_prefix("TAG:timecode=") {
            if fields.timecode.is_none() {
                if split_timecode(value).is_none() {
                    return Err(CoreError::InvalidTimecodeTag(line.to_string()));
                }
                fields.timecode = Some(value.to_string());
            }
        }
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "[STREAM]
index=0
codec_name=prores
profile=HQ
codec_type=video
width=1920
height=1080
coded_width=1920
pix_fmt=yuv422p10le
color_space=bt709
nb_frames=102
TAG:timecode=00:00:00:00
[/STREAM]
";

    #[test]
    fn test_split_keeps_markers() {
        let section = "[STREAM]\nindex=0\n[/STREAM]\n[STREAM]\nindex=1\n[/STREAM]\n";
        let blocks = split_blocks(section);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].ends_with("[/STREAM]"));
        assert!(blocks[1].contains("index=1"));
    }

    #[test]
    fn test_split_keeps_unterminated_tail() {
        let blocks = split_blocks("[STREAM]\nindex=0\n[/STREAM]\n[STREAM]\nindex=1\n");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_scan_reads_all_fields() {
        let fields = scan_block(BLOCK, true).unwrap();
        assert_eq!(fields.nb_frames, Some(102));
        assert_eq!(fields.width.as_deref(), Some("1920"));
        assert_eq!(fields.height.as_deref(), Some("1080"));
        assert_eq!(fields.codec_name.as_deref(), Some("prores"));
        assert_eq!(fields.profile.as_deref(), Some("HQ"));
        assert_eq!(fields.pix_fmt.as_deref(), Some("yuv422p10le"));
        assert_eq!(fields.color_space.as_deref(), Some("bt709"));
        assert_eq!(fields.timecode.as_deref(), Some("00:00:00:00"));
    }

    #[test]
    fn test_first_seen_wins() {
        let block = "width=1920\nwidth=720\nTAG:timecode=01:00:00:00\nTAG:timecode=02:00:00:00\n";
        let fields = scan_block(block, false).unwrap();
        assert_eq!(fields.width.as_deref(), Some("1920"));
        assert_eq!(fields.timecode.as_deref(), Some("01:00:00:00"));
    }

    #[test]
    fn test_early_exit_leaves_later_fields_unset() {
        let block = "nb_frames=10\nTAG:timecode=00:00:00:00\nwidth=1920\nheight=1080\n";
        let fields = scan_block(block, true).unwrap();
        assert_eq!(fields.width, None);
        assert_eq!(fields.height, None);

        // without an fps the scan runs to the end of the block
        let fields = scan_block(block, false).unwrap();
        assert_eq!(fields.width.as_deref(), Some("1920"));
    }

    #[test]
    fn test_invalid_frame_count() {
        let err = scan_block("nb_frames=N/A\n", false).unwrap_err();
        assert!(matches!(err, CoreError::InvalidFrameCount(line) if line == "nb_frames=N/A"));
    }

    #[test]
    fn test_invalid_timecode_tag() {
        let err = scan_block("TAG:timecode=00:00:00\n", false).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTimecodeTag(_)));

        let err = scan_block("TAG:timecode=aa:bb:cc:dd\n", false).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTimecodeTag(_)));
    }

    #[test]
    fn test_crlf_lines() {
        let fields = scan_block("nb_frames=24\r\nwidth=640\r\n", false).unwrap();
        assert_eq!(fields.nb_frames, Some(24));
        assert_eq!(fields.width.as_deref(), Some("640"));
    }
}
