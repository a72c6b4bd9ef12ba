// ============================================================================
// movprobe-core/src/assemble.rs
// ============================================================================
//
// RESULT ASSEMBLY: Requested Fields from a StreamRecord
//
// Each output field has a recipe: a function from the stream record to the
// field's string value. Assembly runs the recipes of the requested fields in
// canonical order. The first failing recipe aborts the whole assembly and no
// partial result is returned.

use crate::config::{Field, ProbeConfig};
use crate::error::{CoreError, CoreResult};
use crate::report::StreamRecord;
use crate::timecode::{FrameRate, Timecode};
use crate::utils::title_case;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Computes one field from a stream record.
type Recipe = fn(&StreamRecord) -> CoreResult<String>;

fn recipe(field: Field) -> Recipe {
    match field {
        Field::Start => start,
        Field::End => end,
        Field::Duration => duration,
        Field::Fps => fps,
        Field::Resolution => resolution,
        Field::Codec => codec,
        Field::Colorspace => colorspace,
    }
}

fn start(record: &StreamRecord) -> CoreResult<String> {
    record.timecode.clone().ok_or(CoreError::MissingTimecode)
}

fn end(record: &StreamRecord) -> CoreResult<String> {
    let timecode = record.timecode.as_deref().ok_or(CoreError::MissingTimecode)?;
    let fps = record.fps.as_deref().ok_or(CoreError::MissingFps)?;
    let frames = record.frame_count().ok_or(CoreError::MissingFrameCount)?;
    end_timecode(timecode, fps, frames)
}

fn duration(record: &StreamRecord) -> CoreResult<String> {
    record
        .frame_count()
        .map(|frames| frames.to_string())
        .ok_or(CoreError::MissingFrameCount)
}

fn fps(record: &StreamRecord) -> CoreResult<String> {
    Ok(record.fps.clone().unwrap_or_default())
}

fn resolution(record: &StreamRecord) -> CoreResult<String> {
    let width = record.width.as_deref().ok_or(CoreError::MissingWidth)?;
    let height = record.height.as_deref().ok_or(CoreError::MissingHeight)?;
    Ok(format!("{width}*{height}"))
}

fn codec(record: &StreamRecord) -> CoreResult<String> {
    Ok(format!(
        "{} {} / {}",
        title_case(record.codec_name.as_deref().unwrap_or_default()),
        record.profile.as_deref().unwrap_or_default(),
        record.pix_fmt.as_deref().unwrap_or_default(),
    ))
}

fn colorspace(record: &StreamRecord) -> CoreResult<String> {
    Ok(record.color_space.clone().unwrap_or_default())
}

/// Timecode of the last displayed frame of a clip.
///
/// `start` is the clip's first timecode, `fps` the overview frame-rate token
/// and `frames` the clip length. The result is `start + (frames - 1)`.
pub fn end_timecode(start: &str, fps: &str, frames: u64) -> CoreResult<String> {
    let rate: FrameRate = fps.parse()?;
    let mut timecode = Timecode::with_format(start, rate.into())?;
    timecode.add(frames.saturating_sub(1));
    Ok(timecode.format())
}

/// Field values of one probe. Unrequested fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeResult {
    pub start: String,
    pub end: String,
    pub duration: String,
    pub fps: String,
    pub resolution: String,
    pub codec: String,
    pub colorspace: String,
}

impl ProbeResult {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Start => &self.start,
            Field::End => &self.end,
            Field::Duration => &self.duration,
            Field::Fps => &self.fps,
            Field::Resolution => &self.resolution,
            Field::Codec => &self.codec,
            Field::Colorspace => &self.colorspace,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Start => &mut self.start,
            Field::End => &mut self.end,
            Field::Duration => &mut self.duration,
            Field::Fps => &mut self.fps,
            Field::Resolution => &mut self.resolution,
            Field::Codec => &mut self.codec,
            Field::Colorspace => &mut self.colorspace,
        }
    }

    /// Non-empty fields in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .filter(|(_, value)| !value.is_empty())
    }

    /// Non-empty values in canonical order, one per output line.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries().map(|(_, value)| value)
    }
}

impl Serialize for ProbeResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (field, value) in self.entries() {
            map.serialize_entry(field.name(), value)?;
        }
        map.end()
    }
}

/// Computes the requested fields of `record`.
pub fn assemble(config: &ProbeConfig, record: &StreamRecord) -> CoreResult<ProbeResult> {
    let mut result = ProbeResult::default();
    for field in config.requested() {
        let value = recipe(field)(record)?;
        log::debug!("{field} = {value:?}");
        *result.slot(field) = value;
    }
    Ok(result)
}
