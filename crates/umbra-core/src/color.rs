//! Color value types.
//!
//! [`Rgb`] is the color carried by solid paints; [`Hsl`] only exists between
//! conversions. Both are small `Copy` values compared by value.
//!
//! # Text Forms
//!
//! [`Rgb`] implements [`FromStr`] for the forms accepted on the command line:
//!
//! | Form | Example |
//! |------|---------|
//! | 6-digit hex | `#3366cc`, `3366CC` |
//! | 3-digit hex | `#36c` |
//! | float triplet | `0.2,0.4,0.8` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert::{clamp, hsl_to_rgb, rgb_to_hsl};
use crate::error::{Error, Result};

/// RGB color with `f64` channels, conceptually in `[0, 1]`.
///
/// No alpha; opacity lives on the paint, not the color.
///
/// # Example
///
/// ```rust
/// use umbra_core::Rgb;
///
/// let c = Rgb::new(0.2, 0.4, 0.6);
/// assert_eq!(c.to_hex(), "#336699");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// Pure white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a color from its channels. Values are stored as given.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Returns `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Converts to HSL. See [`rgb_to_hsl`].
    #[inline]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Returns a copy with every channel clamped to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(clamp(self.r), clamp(self.g), clamp(self.b))
    }

    /// True when every channel lies in `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Formats as `#rrggbb`, clamping and rounding each channel to 8 bits.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.clamped().to_array().map(to_u8);
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Parses `#rrggbb` / `rrggbb` / `#rgb` / `rgb`.
    pub fn from_hex(input: &str) -> Result<Self> {
        let digits = input.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(Error::invalid_color(input, "hex color must be ASCII"));
        }

        let channels: Vec<u8> = match digits.len() {
            6 => (0..3)
                .map(|i| u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16))
                .collect::<std::result::Result<_, _>>(),
            3 => (0..3)
                .map(|i| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17))
                .collect::<std::result::Result<_, _>>(),
            n => return Err(Error::invalid_color(input, format!("expected 3 or 6 hex digits, got {n}"))),
        }
        .map_err(|e| Error::invalid_color(input, e.to_string()))?;

        Ok(Self::new(
            channels[0] as f64 / 255.0,
            channels[1] as f64 / 255.0,
            channels[2] as f64 / 255.0,
        ))
    }

    /// Parses a comma separated float triplet such as `0.2, 0.4, 0.6`.
    pub fn from_triplet(input: &str) -> Result<Self> {
        let values: Vec<f64> = input
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| Error::invalid_color(input, e.to_string()))?;

        match values.as_slice() {
            &[r, g, b] => Ok(Self::from([r, g, b])),
            _ => Err(Error::invalid_color(
                input,
                format!("expected 3 comma separated values, got {}", values.len()),
            )),
        }
    }
}

#[inline]
fn to_u8(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.contains(',') {
            Self::from_triplet(s)
        } else {
            Self::from_hex(s)
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({:.4}, {:.4}, {:.4})", self.r, self.g, self.b)
    }
}

/// HSL color.
///
/// - `h`: hue as a fraction of the full circle, `[0, 1)`
/// - `s`: saturation, `[0, 1]`
/// - `l`: lightness, `[0, 1]`
///
/// Hue is a fraction rather than degrees so it can be fed straight into
/// [`hsl_to_rgb`] offsets of `1/3`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue, fraction of the hue circle.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl Hsl {
    /// Creates an HSL value.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts back to RGB with the default hue segments. Output is clamped.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    /// Hue in degrees, `[0, 360)`.
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        self.h * 360.0
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSL({:.1}deg, {:.4}, {:.4})", self.hue_degrees(), self.s, self.l)
    }
}
