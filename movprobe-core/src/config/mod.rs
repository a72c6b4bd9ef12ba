//! Configuration structures and constants for the movprobe-core library.
//!
//! The probe configuration is a selection mask over the output fields. It
//! carries no ordering: results always come out in the canonical order of
//! [`Field::ALL`].

mod builder;

use crate::error::{CoreError, CoreResult};
use std::fmt;

pub use builder::ProbeConfigBuilder;

/// Default name of the ffprobe executable, looked up on `PATH`.
pub const DEFAULT_FFPROBE_PROGRAM: &str = "ffprobe";

/// An output field that can be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Start,
    End,
    Duration,
    Fps,
    Resolution,
    Codec,
    Colorspace,
}

impl Field {
    /// All fields in canonical output order.
    pub const ALL: [Field; 7] = [
        Field::Start,
        Field::End,
        Field::Duration,
        Field::Fps,
        Field::Resolution,
        Field::Codec,
        Field::Colorspace,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Start => "start",
            Field::End => "end",
            Field::Duration => "duration",
            Field::Fps => "fps",
            Field::Resolution => "resolution",
            Field::Codec => "codec",
            Field::Colorspace => "colorspace",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which output fields to compute.
///
/// # Examples
///
/// ```rust
/// use movprobe_core::config::{Field, ProbeConfigBuilder};
///
/// let config = ProbeConfigBuilder::new()
///     .end(true)
///     .start(true)
///     .build();
///
/// let fields: Vec<Field> = config.requested().collect();
/// assert_eq!(fields, vec![Field::Start, Field::End]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeConfig {
    pub start: bool,
    pub end: bool,
    pub duration: bool,
    pub fps: bool,
    pub resolution: bool,
    pub codec: bool,
    pub colorspace: bool,
}

impl ProbeConfig {
    /// A configuration requesting every field.
    #[must_use]
    pub fn all() -> Self {
        Self {
            start: true,
            end: true,
            duration: true,
            fps: true,
            resolution: true,
            codec: true,
            colorspace: true,
        }
    }

    #[must_use]
    pub fn is_requested(&self, field: Field) -> bool {
        match field {
            Field::Start => self.start,
            Field::End => self.end,
            Field::Duration => self.duration,
            Field::Fps => self.fps,
            Field::Resolution => self.resolution,
            Field::Codec => self.codec,
            Field::Colorspace => self.colorspace,
        }
    }

    pub fn set(&mut self, field: Field, requested: bool) {
        let slot = match field {
            Field::Start => &mut self.start,
            Field::End => &mut self.end,
            Field::Duration => &mut self.duration,
            Field::Fps => &mut self.fps,
            Field::Resolution => &mut self.resolution,
            Field::Codec => &mut self.codec,
            Field::Colorspace => &mut self.colorspace,
        };
        *slot = requested;
    }

    /// Requested fields in canonical order.
    pub fn requested(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(move |field| self.is_requested(*field))
    }

    /// Rejects a configuration that selects nothing.
    pub fn validate(&self) -> CoreResult<()> {
        if self.requested().next().is_none() {
            return Err(CoreError::NoFieldsRequested);
        }
        Ok(())
    }
}
