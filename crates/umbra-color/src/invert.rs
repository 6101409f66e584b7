//! The luminance inverter.
//!
//! # Algorithm
//!
//! ```text
//! (h, s, l) = rgb_to_hsl(color)
//! l' = clamp((1 - l) ^ exponent)     // exponent = 2
//! s' = s * saturation_scale          // scale = 0.3
//! out = hsl_to_rgb(h, s', l')        // clamped
//! ```
//!
//! The curve is not a linear invert. Black maps to white, white maps to
//! black, and mid grey (`l = 0.5`) lands at `0.25`, so light colors end up
//! only weakly dark.

use std::path::Path;

use tracing::trace;
use umbra_core::{clamp, hsl_to_rgb_with, Hsl, Rgb};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{ColorResult, InvertParams};

/// Recolors a single color with the default parameters.
///
/// Equivalent to `LuminanceInverter::new().transform(color)`.
///
/// ```rust
/// use umbra_color::transform_color;
/// use umbra_core::Rgb;
///
/// assert_eq!(transform_color(Rgb::WHITE), Rgb::BLACK);
/// ```
#[inline]
pub fn transform_color(color: Rgb) -> Rgb {
    LuminanceInverter::new().transform(color)
}

/// Applies the extreme luminance inversion.
///
/// Holds validated [`InvertParams`]; cheap to copy and safe to share across
/// threads.
///
/// # Example
///
/// ```rust
/// use umbra_color::LuminanceInverter;
/// use umbra_core::Rgb;
///
/// let inv = LuminanceInverter::new();
/// let out = inv.transform(Rgb::new(0.2, 0.4, 0.6));
/// assert!((out.to_hsl().l - 0.36).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LuminanceInverter {
    params: InvertParams,
}

impl LuminanceInverter {
    /// Inverter with the plugin defaults.
    pub const fn new() -> Self {
        Self {
            params: InvertParams::new(),
        }
    }

    /// Inverter with custom parameters, validated first.
    pub fn with_params(params: InvertParams) -> ColorResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Builds an inverter from a YAML parameter string.
    pub fn from_yaml(yaml: &str) -> ColorResult<Self> {
        Ok(Self {
            params: InvertParams::from_yaml(yaml)?,
        })
    }

    /// Builds an inverter from a YAML parameter file.
    pub fn from_file(path: impl AsRef<Path>) -> ColorResult<Self> {
        Ok(Self {
            params: InvertParams::from_file(path)?,
        })
    }

    /// Active parameters.
    #[inline]
    pub fn params(&self) -> &InvertParams {
        &self.params
    }

    /// Remaps lightness and saturation, leaving hue untouched.
    ///
    /// Lightness is clamped; saturation is not (validated scale keeps it in range
    /// for in-range input).
    #[inline]
    pub fn transform_hsl(&self, hsl: Hsl) -> Hsl {
        let inverted = 1.0 - hsl.l;
        // Exact square for the default curve; powf can be off by an ulp
        let faded = if self.params.lightness_exponent == 2.0 {
            inverted * inverted
        } else {
            inverted.powf(self.params.lightness_exponent)
        };

        Hsl::new(hsl.h, hsl.s * self.params.saturation_scale, clamp(faded))
    }

    /// Recolors `color`. Every output channel is in `[0, 1]`.
    #[inline]
    pub fn transform(&self, color: Rgb) -> Rgb {
        let hsl = self.transform_hsl(color.to_hsl());
        hsl_to_rgb_with(hsl, self.params.hue_segments)
    }

    /// Recolors every color of `colors` in place.
    pub fn transform_buffer(&self, colors: &mut [Rgb]) {
        trace!(len = colors.len(), "invert::transform_buffer");

        #[cfg(feature = "parallel")]
        colors.par_iter_mut().for_each(|c| *c = self.transform(*c));

        #[cfg(not(feature = "parallel"))]
        colors.iter_mut().for_each(|c| *c = self.transform(*c));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use umbra_core::HueSegments;

    const EPS: f64 = 1e-9;

    fn palette() -> Vec<Rgb> {
        let steps = 8;
        let mut out = Vec::new();
        for r in 0..=steps {
            for g in 0..=steps {
                for b in 0..=steps {
                    out.push(Rgb::new(
                        r as f64 / steps as f64,
                        g as f64 / steps as f64,
                        b as f64 / steps as f64,
                    ));
                }
            }
        }
        out
    }

    #[test]
    fn test_black_becomes_white() {
        let out = transform_color(Rgb::BLACK);
        assert_eq!(out, Rgb::WHITE);
        assert_eq!(out.to_hsl().l, 1.0);
    }

    #[test]
    fn test_white_becomes_black() {
        let out = transform_color(Rgb::WHITE);
        assert_eq!(out, Rgb::BLACK);
        assert_eq!(out.to_hsl().l, 0.0);
    }

    #[test]
    fn test_mid_grey_is_biased_dark() {
        let out = transform_color(Rgb::new(0.5, 0.5, 0.5));
        assert_abs_diff_eq!(out.r, 0.25, epsilon = EPS);
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
    }

    /// Inverter with round-trip-exact hue segments, so HSL of the output can
    /// be read back from RGB.
    fn standard() -> LuminanceInverter {
        LuminanceInverter::with_params(InvertParams::new().with_hue_segments(HueSegments::Standard)).unwrap()
    }

    /// Straight-line rendition of the dark-mode plugin recolor.
    fn plugin_recolor(c: Rgb) -> Rgb {
        let (r, g, b) = (c.r, c.g, c.b);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let (mut h, mut s) = (0.0, 0.0);
        if max != min {
            let d = max - min;
            s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
            h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            h /= 6.0;
        }

        let inverted = 1.0 - l;
        let l = (inverted * inverted).max(0.0).min(1.0);
        let s = s * 0.3;

        let ramp = |p: f64, q: f64, mut t: f64| {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 1.0 / 3.0 {
                q
            } else if t < 1.0 / 2.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        };
        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (ramp(p, q, h + 1.0 / 3.0), ramp(p, q, h), ramp(p, q, h - 1.0 / 3.0))
        };
        Rgb::new(clamp(r), clamp(g), clamp(b))
    }

    #[test]
    fn test_default_params_use_plugin_segments() {
        assert_eq!(LuminanceInverter::new().params().hue_segments, HueSegments::Plugin);
        assert_eq!(LuminanceInverter::default(), LuminanceInverter::new());
    }

    #[test]
    fn test_default_matches_plugin_recolor() {
        let inv = LuminanceInverter::new();
        let mut colors = palette();
        colors.extend([Rgb::new(0.2, 0.4, 0.6), Rgb::new(0.9, 0.3, 0.1), Rgb::new(0.123, 0.456, 0.789)]);
        for c in colors {
            assert_eq!(transform_color(c), plugin_recolor(c), "{c:?}");
            assert_eq!(inv.transform(c), plugin_recolor(c), "{c:?}");
        }
    }

    #[test]
    fn test_reference_color() {
        // (0.2, 0.4, 0.6): h = 7/12, s = 0.5, l = 0.4 -> l' = 0.36, s' = 0.15
        let inv = LuminanceInverter::new();
        let hsl = inv.transform_hsl(Rgb::new(0.2, 0.4, 0.6).to_hsl());
        assert_abs_diff_eq!(hsl.h, 7.0 / 12.0, epsilon = EPS);
        assert_abs_diff_eq!(hsl.s, 0.15, epsilon = EPS);
        assert_abs_diff_eq!(hsl.l, 0.36, epsilon = EPS);

        // Green lands on the floor of the plugin hue ramp
        let out = inv.transform(Rgb::new(0.2, 0.4, 0.6));
        assert_abs_diff_eq!(out.r, 0.306, epsilon = EPS);
        assert_abs_diff_eq!(out.g, 0.306, epsilon = EPS);
        assert_abs_diff_eq!(out.b, 0.414, epsilon = EPS);
    }

    #[test]
    fn test_reference_color_standard_segments() {
        let out = standard().transform(Rgb::new(0.2, 0.4, 0.6));
        assert_abs_diff_eq!(out.r, 0.306, epsilon = EPS);
        assert_abs_diff_eq!(out.g, 0.360, epsilon = EPS);
        assert_abs_diff_eq!(out.b, 0.414, epsilon = EPS);
    }

    #[test]
    fn test_saturation_dampening() {
        let (plugin, inv) = (LuminanceInverter::new(), standard());
        for c in palette() {
            let before = c.to_hsl();
            assert_abs_diff_eq!(plugin.transform_hsl(before).s, 0.3 * before.s, epsilon = EPS);

            let after = inv.transform(c).to_hsl();
            let l = after.l;
            // Saturation is undefined at the black/white poles
            if l <= 0.0 || l >= 1.0 {
                continue;
            }
            assert_abs_diff_eq!(after.s, 0.3 * before.s, epsilon = EPS);
            assert!(after.s <= before.s);
        }
    }

    #[test]
    fn test_lightness_curve() {
        let (plugin, inv) = (LuminanceInverter::new(), standard());
        for c in palette() {
            let l = c.to_hsl().l;
            assert_abs_diff_eq!(plugin.transform_hsl(c.to_hsl()).l, (1.0 - l) * (1.0 - l), epsilon = EPS);

            let after = inv.transform(c).to_hsl();
            assert_abs_diff_eq!(after.l, (1.0 - l) * (1.0 - l), epsilon = EPS);
        }
    }

    #[test]
    fn test_hue_preserved() {
        let c = Rgb::new(0.9, 0.3, 0.1);
        let before = c.to_hsl();
        assert_eq!(LuminanceInverter::new().transform_hsl(before).h, before.h);

        let after = standard().transform(c).to_hsl();
        assert_abs_diff_eq!(after.h, before.h, epsilon = EPS);
    }

    #[test]
    fn test_output_range_wild_input() {
        let inv = LuminanceInverter::new();
        let wild = [-5.0, -0.5, 0.0, 0.5, 1.0, 1.5, 9.0, f64::NAN, f64::INFINITY];
        for &r in &wild {
            for &g in &wild {
                for &b in &wild {
                    let out = inv.transform(Rgb::new(r, g, b));
                    assert!(out.is_normalized(), "({r}, {g}, {b}) -> {out:?}");
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let inv = LuminanceInverter::new();
        let c = Rgb::new(0.123, 0.456, 0.789);
        let first = inv.transform(c);
        for _ in 0..100 {
            assert_eq!(inv.transform(c).to_array().map(f64::to_bits), first.to_array().map(f64::to_bits));
        }
    }

    #[test]
    fn test_custom_exponent() {
        let params = InvertParams::new().with_lightness_exponent(1.0).with_saturation_scale(1.0);
        let inv = LuminanceInverter::with_params(params).unwrap();
        // Linear invert keeps mid grey in place
        let out = inv.transform(Rgb::new(0.5, 0.5, 0.5));
        assert_abs_diff_eq!(out.r, 0.5, epsilon = EPS);
    }

    #[test]
    fn test_with_params_validates() {
        let params = InvertParams::new().with_saturation_scale(3.0);
        assert!(LuminanceInverter::with_params(params).is_err());
    }

    #[test]
    fn test_transform_buffer_matches_single() {
        let inv = LuminanceInverter::new();
        let original = palette();
        let mut buf = original.clone();
        inv.transform_buffer(&mut buf);

        for (src, dst) in original.iter().zip(&buf) {
            assert_eq!(inv.transform(*src), *dst);
        }
    }
}
