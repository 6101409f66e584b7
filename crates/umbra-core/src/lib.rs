//! # umbra-core
//!
//! Core color types and conversions for the umbra recoloring tools.
//!
//! This crate provides the foundational pieces every other umbra crate builds on:
//!
//! - [`Rgb`], [`Hsl`] - Plain `f64` color value types
//! - [`clamp`] - The single gate keeping converted channels inside `[0, 1]`
//! - [`rgb_to_hsl`], [`hsl_to_rgb`] - Bidirectional RGB/HSL conversion
//! - [`HueSegments`] - Piecewise boundaries used when rebuilding RGB from hue
//!
//! ## Output Range
//!
//! Values coming *out* of [`hsl_to_rgb`] are always clamped to `[0, 1]`.
//! Inputs are never clamped; [`rgb_to_hsl`] is total over all `f64` values
//! but only meaningful for channels inside the unit range.
//!
//! ```rust
//! use umbra_core::{HueSegments, hsl_to_rgb, hsl_to_rgb_with, rgb_to_hsl};
//!
//! let hsl = rgb_to_hsl(0.2, 0.4, 0.6);
//! assert!((hsl.l - 0.4).abs() < 1e-12);
//!
//! // Exact inverse
//! let back = hsl_to_rgb_with(hsl, HueSegments::Standard);
//! assert!((back.g - 0.4).abs() < 1e-9);
//!
//! // Plugin boundaries flatten the green channel onto the floor
//! let plugin = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
//! assert!((plugin.g - 0.2).abs() < 1e-9);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! umbra-core (this crate)
//!    ^
//!    |
//!    +-- umbra-color (luminance inversion)
//!    +-- umbra-scene (node tree, plugin protocol)
//!    +-- umbra-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod convert;
pub mod error;

pub use color::{Hsl, Rgb};
pub use convert::{clamp, hsl_to_rgb, hsl_to_rgb_with, rgb_to_hsl, HueSegments};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::color::{Hsl, Rgb};
    pub use crate::convert::{clamp, hsl_to_rgb, hsl_to_rgb_with, rgb_to_hsl, HueSegments};
    pub use crate::error::{Error, Result};
}
