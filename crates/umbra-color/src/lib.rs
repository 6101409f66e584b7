//! # umbra-color
//!
//! Extreme luminance inversion: the recolor applied to every solid fill when
//! a design is flipped to dark mode.
//!
//! ```text
//! Rgb -> rgb_to_hsl -> l' = clamp((1 - l)^2), s' = 0.3 s -> hsl_to_rgb -> Rgb
//! ```
//!
//! Squaring the inverted lightness is deliberate: dark colors come out
//! strongly light, light colors come out only weakly dark.
//!
//! # Quick Start
//!
//! ```rust
//! use umbra_color::{LuminanceInverter, transform_color};
//! use umbra_core::Rgb;
//!
//! // Pure black becomes pure white
//! assert_eq!(transform_color(Rgb::BLACK), Rgb::WHITE);
//!
//! // Tuned inverter, e.g. loaded from YAML
//! let inverter = LuminanceInverter::from_yaml("saturation_scale: 0.5").unwrap();
//! let out = inverter.transform(Rgb::new(0.2, 0.4, 0.6));
//! assert!(out.is_normalized());
//! ```
//!
//! # Dependencies
//!
//! - `umbra-core` - Color types and RGB/HSL conversion
//! - `serde_yaml` - Parameter files
//! - `rayon` - Parallel batch recoloring (`parallel` feature, on by default)
//!
//! # Used By
//!
//! - `umbra-scene` - Recoloring node fills
//! - `umbra` CLI

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod invert;
pub mod params;

pub use error::{ColorError, ColorResult};
pub use invert::{transform_color, LuminanceInverter};
pub use params::InvertParams;
