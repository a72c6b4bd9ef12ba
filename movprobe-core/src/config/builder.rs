// ============================================================================
// movprobe-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ProbeConfig
//
// Fluent API for selecting output fields. Every field starts unselected.

use super::{Field, ProbeConfig};

/// Builder for creating ProbeConfig instances.
///
/// # Examples
///
/// ```rust
/// use movprobe_core::config::ProbeConfigBuilder;
///
/// let config = ProbeConfigBuilder::new()
///     .start(true)
///     .end(true)
///     .duration(true)
///     .resolution(true)
///     .build();
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProbeConfigBuilder {
    config: ProbeConfig,
}

impl ProbeConfigBuilder {
    /// Creates a builder with no field selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects every field.
    pub fn all(mut self) -> Self {
        self.config = ProbeConfig::all();
        self
    }

    /// Sets whether `field` is requested.
    pub fn field(mut self, field: Field, requested: bool) -> Self {
        self.config.set(field, requested);
        self
    }

    /// Sets whether the start timecode is requested.
    pub fn start(self, requested: bool) -> Self {
        self.field(Field::Start, requested)
    }

    /// Sets whether the end timecode (last displayed frame) is requested.
    pub fn end(self, requested: bool) -> Self {
        self.field(Field::End, requested)
    }

    /// Sets whether the duration in frames is requested.
    pub fn duration(self, requested: bool) -> Self {
        self.field(Field::Duration, requested)
    }

    pub fn fps(self, requested: bool) -> Self {
        self.field(Field::Fps, requested)
    }

    pub fn resolution(self, requested: bool) -> Self {
        self.field(Field::Resolution, requested)
    }

    pub fn codec(self, requested: bool) -> Self {
        self.field(Field::Codec, requested)
    }

    pub fn colorspace(self, requested: bool) -> Self {
        self.field(Field::Colorspace, requested)
    }

    /// Builds the ProbeConfig. No validation happens here; call
    /// [`ProbeConfig::validate`] before probing.
    pub fn build(self) -> ProbeConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_nothing() {
        assert_eq!(ProbeConfigBuilder::new().build(), ProbeConfig::default());
    }

    #[test]
    fn test_builder_setters() {
        let config = ProbeConfigBuilder::new()
            .all()
            .codec(false)
            .field(Field::Fps, false)
            .build();
        assert!(config.start && config.end && config.colorspace);
        assert!(!config.codec);
        assert!(!config.fps);
    }
}
