//! RGB <-> HSL conversion.
//!
//! # Formulas
//!
//! ```text
//! // RGB -> HSL
//! l = (max + min) / 2
//! s = d / (2 - max - min)     if l > 0.5
//!     d / (max + min)         otherwise
//! h = six-sector hue from the max channel, divided by 6
//!
//! // HSL -> RGB
//! q = l * (1 + s)             if l < 0.5
//!     l + s - l * s           otherwise
//! p = 2l - q
//! r, g, b = hue_to_rgb(p, q, h + 1/3), hue_to_rgb(p, q, h), hue_to_rgb(p, q, h - 1/3)
//! ```
//!
//! Only the RGB side is clamped. [`rgb_to_hsl`] returns whatever the
//! formulas give, so out-of-range input yields out-of-range HSL; the clamp in
//! [`hsl_to_rgb`] restores the `[0, 1]` guarantee on the way back.

use serde::{Deserialize, Serialize};

use crate::color::{Hsl, Rgb};

/// Restricts `value` to `[0, 1]`.
///
/// NaN maps to `0.0`.
///
/// ```rust
/// use umbra_core::clamp;
///
/// assert_eq!(clamp(-0.5), 0.0);
/// assert_eq!(clamp(0.25), 0.25);
/// assert_eq!(clamp(7.0), 1.0);
/// ```
#[inline]
pub fn clamp(value: f64) -> f64 {
    // f64::max discards a NaN receiver, so NaN lands on 0.0
    value.max(0.0).min(1.0)
}

/// Converts RGB channels to HSL.
///
/// Achromatic input (`max == min`) gives `h = 0, s = 0` without dividing.
/// When several channels share the maximum, red wins over green over blue.
///
/// ```rust
/// use umbra_core::rgb_to_hsl;
///
/// let hsl = rgb_to_hsl(0.5, 0.5, 0.5);
/// assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 0.0, 0.5));
/// ```
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0, s, l)
}

/// Segment boundaries used by the hue ramp when rebuilding RGB.
///
/// The ramp is piecewise: rising from `p` to `q`, a plateau at `q`, falling
/// back to `p`, then a floor at `p`. The variants differ only in where the
/// plateau and the fall start.
///
/// The default is [`HueSegments::Plugin`], the boundaries the dark-mode
/// plugin recolors with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HueSegments {
    /// Boundaries at 1/6, 1/2, 2/3. Exact inverse of [`rgb_to_hsl`].
    Standard,
    /// Boundaries at 1/6, 1/3, 1/2, as in the Figma dark-mode plugin.
    ///
    /// Compresses the plateau, so chromatic colors with a hue in
    /// `[1/3, 2/3)` do not round-trip.
    #[default]
    Plugin,
}

impl HueSegments {
    /// `(plateau_start, fall_start, floor_start)`.
    #[inline]
    fn bounds(self) -> (f64, f64, f64) {
        match self {
            Self::Standard => (1.0 / 6.0, 1.0 / 2.0, 2.0 / 3.0),
            Self::Plugin => (1.0 / 6.0, 1.0 / 3.0, 1.0 / 2.0),
        }
    }
}

/// Converts HSL to RGB using the default [`HueSegments::Plugin`] boundaries.
///
/// Every output channel is clamped to `[0, 1]`. Use [`hsl_to_rgb_with`] and
/// [`HueSegments::Standard`] for an exact inverse of [`rgb_to_hsl`].
///
/// ```rust
/// use umbra_core::hsl_to_rgb;
///
/// let red = hsl_to_rgb(0.0, 1.0, 0.5);
/// assert_eq!((red.r, red.g, red.b), (1.0, 0.0, 0.0));
/// ```
#[inline]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    hsl_to_rgb_with(Hsl::new(h, s, l), HueSegments::default())
}

/// Converts HSL to RGB with explicit hue segment boundaries.
///
/// Every output channel is clamped to `[0, 1]`.
pub fn hsl_to_rgb_with(hsl: Hsl, segments: HueSegments) -> Rgb {
    let Hsl { h, s, l } = hsl;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0, segments),
            hue_to_rgb(p, q, h, segments),
            hue_to_rgb(p, q, h - 1.0 / 3.0, segments),
        )
    };

    Rgb::new(clamp(r), clamp(g), clamp(b))
}

#[inline]
fn hue_to_rgb(p: f64, q: f64, mut t: f64, segments: HueSegments) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    let (plateau, fall, floor) = segments.bounds();
    if t < plateau {
        p + (q - p) * 6.0 * t
    } else if t < fall {
        q
    } else if t < floor {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
