//! CLI command implementations

pub mod apply;
pub mod hsl;
pub mod invert;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use umbra_color::{InvertParams, LuminanceInverter};
use umbra_core::{HueSegments, Rgb};

/// Inversion parameters shared by every command.
#[derive(Args, Debug, Default)]
pub struct ParamArgs {
    /// YAML parameter file (lightness_exponent, saturation_scale, hue_segments)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Exponent applied to the inverted lightness (default: 2.0)
    #[arg(long, global = true)]
    pub exponent: Option<f64>,

    /// Saturation multiplier in [0, 1] (default: 0.3)
    #[arg(long, global = true)]
    pub saturation_scale: Option<f64>,

    /// Use round-trip-exact hue segment boundaries instead of the plugin's
    #[arg(long, global = true)]
    pub standard_hue: bool,
}

impl ParamArgs {
    /// Config file values, overridden by flags, validated.
    pub fn build_inverter(&self) -> Result<LuminanceInverter> {
        let mut params = match &self.config {
            Some(path) => InvertParams::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => InvertParams::new(),
        };

        if let Some(exponent) = self.exponent {
            params = params.with_lightness_exponent(exponent);
        }
        if let Some(scale) = self.saturation_scale {
            params = params.with_saturation_scale(scale);
        }
        if self.standard_hue {
            params = params.with_hue_segments(HueSegments::Standard);
        }

        debug!(?params, "Inversion params");
        LuminanceInverter::with_params(params).context("Invalid inversion parameters")
    }
}

/// Installs the stderr tracing subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parses every color argument, naming the first bad one.
pub fn parse_colors(inputs: &[String]) -> Result<Vec<Rgb>> {
    inputs
        .iter()
        .map(|s| s.parse::<Rgb>().with_context(|| format!("Bad color argument: {s}")))
        .collect()
}
