//! SMPTE timecode arithmetic with drop-frame support.
//!
//! A [`Timecode`] stores an absolute frame offset from `00:00:00:00` counted in
//! the non-drop timeline of its base rate. Parsing removes the frame codes that
//! drop-frame timecode skips; formatting puts them back.
//!
//! Drop-frame timecode (29.97 fps) skips the codes `:00` and `:01` at the start
//! of every minute except minutes divisible by ten. 23.976 fps material uses
//! base 24 and is never drop-frame.

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;

/// Length of a `HH:MM:SS:FF` timecode string.
pub const TIMECODE_LEN: usize = 11;

/// Frames in ten real minutes of 29.97 drop-frame timecode (18000 - 18 skipped codes).
const FRAMES_PER_TEN_MINUTES_DROP: u64 = 17_982;

/// Frames in one dropping minute of 29.97 drop-frame timecode.
const FRAMES_PER_MINUTE_DROP: u64 = 1_798;

/// Frames in 24 hours of 29.97 drop-frame timecode.
const FRAMES_PER_DAY_DROP: u64 = 144 * FRAMES_PER_TEN_MINUTES_DROP;

const SECONDS_PER_DAY: u64 = 86_400;

/// Frame rates recognised in an ffprobe overview line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRate {
    /// 24 fps film
    Fps24,
    /// 23.98 / 23.976 fps (base 24, non-drop)
    Fps23_976,
    /// 30 fps non-drop
    Fps30,
    /// 29.97 fps NTSC drop-frame
    Fps29_97Drop,
}

impl FrameRate {
    /// Nominal integer rate used for timecode arithmetic.
    #[must_use]
    pub fn base(self) -> u32 {
        match self {
            FrameRate::Fps24 | FrameRate::Fps23_976 => 24,
            FrameRate::Fps30 | FrameRate::Fps29_97Drop => 30,
        }
    }

    #[must_use]
    pub fn is_drop_frame(self) -> bool {
        matches!(self, FrameRate::Fps29_97Drop)
    }
}

impl FromStr for FrameRate {
    type Err = CoreError;

    fn from_str(fps: &str) -> CoreResult<Self> {
        match fps {
            "24" => Ok(FrameRate::Fps24),
            "23.98" | "23.976" => Ok(FrameRate::Fps23_976),
            "30" => Ok(FrameRate::Fps30),
            "29.97" => Ok(FrameRate::Fps29_97Drop),
            other => Err(CoreError::UnsupportedFps(other.to_string())),
        }
    }
}

/// Base rate and drop flag of a timecode.
///
/// Construction is the only place where the pair is validated: the base must
/// be 24 or 30, and a base of 24 never keeps the drop flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimecodeFormat {
    base: u32,
    drop_frame: bool,
}

impl TimecodeFormat {
    pub fn new(base: u32, drop_frame: bool) -> CoreResult<Self> {
        match base {
            24 => {
                if drop_frame {
                    log::debug!("24-based rates have no drop-frame variant, using non-drop");
                }
                Ok(Self {
                    base,
                    drop_frame: false,
                })
            }
            30 => Ok(Self { base, drop_frame }),
            other => Err(CoreError::UnsupportedBase(other)),
        }
    }

    #[must_use]
    pub fn base(self) -> u32 {
        self.base
    }

    #[must_use]
    pub fn is_drop_frame(self) -> bool {
        self.drop_frame
    }
}

impl From<FrameRate> for TimecodeFormat {
    fn from(rate: FrameRate) -> Self {
        Self {
            base: rate.base(),
            drop_frame: rate.is_drop_frame(),
        }
    }
}

/// Splits a timecode string into its hour, minute, second and frame groups.
///
/// Accepts `HH:MM:SS:FF` and the drop-frame spelling `HH:MM:SS;FF`. Returns
/// `None` for anything else.
#[must_use]
pub fn split_timecode(code: &str) -> Option<[u32; 4]> {
    let bytes = code.as_bytes();
    if bytes.len() != TIMECODE_LEN {
        return None;
    }
    if bytes[2] != b':' || bytes[5] != b':' || !matches!(bytes[8], b':' | b';') {
        return None;
    }

    let mut groups = [0u32; 4];
    for (slot, start) in groups.iter_mut().zip([0usize, 3, 6, 9]) {
        let (hi, lo) = (bytes[start], bytes[start + 1]);
        if !hi.is_ascii_digit() || !lo.is_ascii_digit() {
            return None;
        }
        *slot = u32::from(hi - b'0') * 10 + u32::from(lo - b'0');
    }
    Some(groups)
}

/// A point in a frame sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timecode {
    format: TimecodeFormat,
    frame: u64,
}

impl Timecode {
    /// Parses `code` for the given base rate (24 or 30).
    pub fn parse(code: &str, base: u32, drop_frame: bool) -> CoreResult<Self> {
        let format = TimecodeFormat::new(base, drop_frame)?;
        Self::with_format(code, format)
    }

    /// Parses `code` for an already validated format.
    pub fn with_format(code: &str, format: TimecodeFormat) -> CoreResult<Self> {
        let [h, m, s, f] =
            split_timecode(code).ok_or_else(|| CoreError::InvalidTimecode(code.to_string()))?;
        let (h, m, s, f) = (u64::from(h), u64::from(m), u64::from(s), u64::from(f));
        let base = u64::from(format.base);

        let mut frame = 3600 * h * base + 60 * m * base + s * base + f;
        if format.drop_frame {
            let total_minutes = 60 * h + m;
            frame -= 2 * (total_minutes - total_minutes / 10);
        }

        Ok(Self { format, frame })
    }

    /// Advances the timecode by `frames`.
    pub fn add(&mut self, frames: u64) {
        self.frame = self.frame.saturating_add(frames);
    }

    /// Absolute frame offset from `00:00:00:00` in the non-drop timeline.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn base(&self) -> u32 {
        self.format.base
    }

    #[must_use]
    pub fn is_drop_frame(&self) -> bool {
        self.format.drop_frame
    }

    /// Renders the canonical string, wrapping past 24 hours.
    #[must_use]
    pub fn format(&self) -> String {
        let base = u64::from(self.format.base);
        let mut frame = self.frame;
        if self.format.drop_frame {
            frame %= FRAMES_PER_DAY_DROP;
            let tens = frame / FRAMES_PER_TEN_MINUTES_DROP;
            let remainder = frame % FRAMES_PER_TEN_MINUTES_DROP;
            // the first minute of each ten-minute group keeps all its codes
            let minutes = remainder.saturating_sub(2) / FRAMES_PER_MINUTE_DROP;
            frame += 18 * tens + 2 * minutes;
        } else {
            frame %= base * SECONDS_PER_DAY;
        }

        let h = frame / base / 3600 % 24;
        let m = frame / base / 60 % 60;
        let s = frame / base % 60;
        let f = frame % base;
        let separator = if self.format.drop_frame { ';' } else { ':' };
        format!("{h:02}:{m:02}:{s:02}{separator}{f:02}")
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn df(code: &str) -> Timecode {
        Timecode::parse(code, 30, true).unwrap()
    }

    #[test]
    fn test_parse_non_drop_frame_count() {
        let tc = Timecode::parse("01:00:00:00", 24, false).unwrap();
        assert_eq!(tc.frame_count(), 86_400);

        let tc = Timecode::parse("00:01:02:03", 30, false).unwrap();
        assert_eq!(tc.frame_count(), 1800 + 60 + 3);
    }

    #[test]
    fn test_parse_drop_frame_removes_skipped_codes() {
        assert_eq!(df("00:01:00;02").frame_count(), 1800);
        assert_eq!(df("00:10:00;00").frame_count(), 17_982);
        assert_eq!(df("01:00:00;00").frame_count(), 107_892);
    }

    #[test]
    fn test_base_24_never_drops() {
        let tc = Timecode::parse("00:01:00:00", 24, true).unwrap();
        assert!(!tc.is_drop_frame());
        assert_eq!(tc.frame_count(), 1440);
        assert_eq!(tc.format(), "00:01:00:00");
    }

    #[test]
    fn test_unsupported_base() {
        let err = Timecode::parse("00:00:00:00", 25, false).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedBase(25)));
    }

    #[test]
    fn test_invalid_timecode_strings() {
        for code in ["", "00:00:00", "00:00:00:000", "0a:00:00:00", "00-00-00-00", "+1:00:00:00"] {
            let err = Timecode::parse(code, 30, false).unwrap_err();
            assert!(matches!(err, CoreError::InvalidTimecode(_)), "{code}");
        }
    }

    #[test]
    fn test_format_drop_frame_minute_rollover() {
        let mut tc = df("00:00:59;29");
        tc.add(1);
        assert_eq!(tc.format(), "00:01:00;02");

        let mut tc = df("00:09:59;29");
        tc.add(1);
        assert_eq!(tc.format(), "00:10:00;00");
    }

    #[test]
    fn test_format_wraps_after_24_hours() {
        let mut tc = Timecode::parse("23:59:59:23", 24, false).unwrap();
        tc.add(2);
        assert_eq!(tc.format(), "00:00:00:01");
    }

    #[test]
    fn test_format_drop_frame_wraps_after_24_hours() {
        let mut tc = df("23:59:59;29");
        tc.add(1);
        assert_eq!(tc.format(), "00:00:00;00");

        let mut tc = df("23:59:59;28");
        tc.add(3);
        assert_eq!(tc.format(), "00:00:00;02");
    }

    #[test]
    fn test_format_huge_frame_counts() {
        let cases = [
            (24, false, "17:17:30:15"),
            (30, false, "09:02:00:15"),
            (30, true, "20:44:31;29"),
        ];
        for (base, drop, expected) in cases {
            let mut tc = Timecode::parse("00:00:00:00", base, drop).unwrap();
            tc.add(u64::MAX);
            assert_eq!(tc.frame_count(), u64::MAX);
            assert_eq!(tc.format(), expected, "base {base} drop {drop}");
        }
    }

    #[test]
    fn test_display_matches_format() {
        let tc = df("20:51:01;20");
        assert_eq!(tc.to_string(), tc.format());
    }

    #[test]
    fn test_frame_rate_from_str() {
        assert_eq!("29.97".parse::<FrameRate>().unwrap(), FrameRate::Fps29_97Drop);
        assert_eq!("23.98".parse::<FrameRate>().unwrap(), FrameRate::Fps23_976);
        assert_eq!("23.976".parse::<FrameRate>().unwrap(), FrameRate::Fps23_976);
        assert_eq!("24".parse::<FrameRate>().unwrap().base(), 24);
        assert!(!"30".parse::<FrameRate>().unwrap().is_drop_frame());
        assert!(matches!(
            "59.94".parse::<FrameRate>(),
            Err(CoreError::UnsupportedFps(fps)) if fps == "59.94"
        ));
    }

    #[test]
    fn test_format_from_frame_rate() {
        let format = TimecodeFormat::from(FrameRate::Fps23_976);
        assert_eq!(format.base(), 24);
        assert!(!format.is_drop_frame());
        assert!(TimecodeFormat::from(FrameRate::Fps29_97Drop).is_drop_frame());
    }
}
