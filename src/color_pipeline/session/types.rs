//! Editing session configuration types

use crate::color_pipeline::color::NormalizationMode;

/// What to do when a loaded color holds NaN or infinity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonFinitePolicy {
    /// Keep the stored bits as they are
    #[default]
    PassThrough,
    /// Refuse to load the file
    Reject,
}

/// Configuration for an editing session
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Preview mode the session starts in
    pub normalization: NormalizationMode,
    /// Handling of NaN/infinite channels at load time
    pub non_finite: NonFinitePolicy,
    /// Re-apply the current HDR scale to colors picked from the normalized
    /// preview, so picking a hue does not drop the intensity
    pub preserve_hdr_scale_on_pick: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationMode::Auto,
            non_finite: NonFinitePolicy::PassThrough,
            preserve_hdr_scale_on_pick: true,
        }
    }
}

impl EditorConfig {
    pub fn builder() -> EditorConfigBuilder {
        EditorConfigBuilder::default()
    }
}

/// Builder for EditorConfig
#[derive(Default)]
pub struct EditorConfigBuilder {
    normalization: Option<NormalizationMode>,
    non_finite: Option<NonFinitePolicy>,
    preserve_hdr_scale_on_pick: Option<bool>,
}

impl EditorConfigBuilder {
    pub fn normalization(mut self, mode: NormalizationMode) -> Self {
        self.normalization = Some(mode);
        self
    }

    pub fn non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = Some(policy);
        self
    }

    pub fn preserve_hdr_scale_on_pick(mut self, preserve: bool) -> Self {
        self.preserve_hdr_scale_on_pick = Some(preserve);
        self
    }

    pub fn build(self) -> EditorConfig {
        let default = EditorConfig::default();
        EditorConfig {
            normalization: self.normalization.unwrap_or(default.normalization),
            non_finite: self.non_finite.unwrap_or(default.non_finite),
            preserve_hdr_scale_on_pick: self
                .preserve_hdr_scale_on_pick
                .unwrap_or(default.preserve_hdr_scale_on_pick),
        }
    }
}
