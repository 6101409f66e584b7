//! Inversion parameters and their YAML form.
//!
//! ```yaml
//! # all keys optional
//! lightness_exponent: 2.0
//! saturation_scale: 0.3
//! hue_segments: plugin     # or: standard
//! ```
//!
//! The defaults reproduce the dark-mode plugin recolor exactly.
//! `hue_segments: standard` switches to the round-trip-exact boundaries.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use umbra_core::HueSegments;

use crate::{ColorError, ColorResult};

/// Default exponent applied to the inverted lightness.
pub const DEFAULT_LIGHTNESS_EXPONENT: f64 = 2.0;

/// Default saturation multiplier.
pub const DEFAULT_SATURATION_SCALE: f64 = 0.3;

/// Parameters of the luminance inversion.
///
/// # Example
///
/// ```rust
/// use umbra_color::InvertParams;
///
/// let params = InvertParams::new().with_saturation_scale(0.5);
/// assert!(params.validate().is_ok());
/// assert!(InvertParams::new().with_saturation_scale(1.5).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InvertParams {
    /// Exponent applied to `1 - l`. Must be finite and positive.
    pub lightness_exponent: f64,
    /// Multiplier applied to saturation. Must be in `[0, 1]`.
    pub saturation_scale: f64,
    /// Hue ramp boundaries used when converting back to RGB.
    pub hue_segments: HueSegments,
}

impl Default for InvertParams {
    fn default() -> Self {
        Self::new()
    }
}

impl InvertParams {
    /// Plugin defaults: square curve, 30% saturation, plugin hue segments.
    pub const fn new() -> Self {
        Self {
            lightness_exponent: DEFAULT_LIGHTNESS_EXPONENT,
            saturation_scale: DEFAULT_SATURATION_SCALE,
            hue_segments: HueSegments::Plugin,
        }
    }

    /// Sets the lightness exponent.
    pub fn with_lightness_exponent(mut self, exponent: f64) -> Self {
        self.lightness_exponent = exponent;
        self
    }

    /// Sets the saturation scale.
    pub fn with_saturation_scale(mut self, scale: f64) -> Self {
        self.saturation_scale = scale;
        self
    }

    /// Sets the hue segment boundaries.
    pub fn with_hue_segments(mut self, segments: HueSegments) -> Self {
        self.hue_segments = segments;
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> ColorResult<()> {
        if !(self.lightness_exponent.is_finite() && self.lightness_exponent > 0.0) {
            return Err(ColorError::InvalidParams {
                name: "lightness_exponent",
                value: self.lightness_exponent,
                reason: "must be finite and > 0",
            });
        }
        if !(0.0..=1.0).contains(&self.saturation_scale) {
            return Err(ColorError::InvalidParams {
                name: "saturation_scale",
                value: self.saturation_scale,
                reason: "must be in [0, 1]",
            });
        }
        Ok(())
    }

    /// Parses and validates parameters from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> ColorResult<Self> {
        let params: Self = if yaml.trim().is_empty() {
            Self::new()
        } else {
            serde_yaml::from_str(yaml)?
        };
        params.validate()?;
        Ok(params)
    }

    /// Reads, parses and validates a YAML parameter file.
    pub fn from_file(path: impl AsRef<Path>) -> ColorResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading inversion params");
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> ColorResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
