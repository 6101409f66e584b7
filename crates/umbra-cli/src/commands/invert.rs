//! Invert command.
//!
//! Recolors colors given on the command line.

use anyhow::Result;
use clap::Args;
use tracing::{debug, trace};
use umbra_color::LuminanceInverter;
use umbra_core::Rgb;

use super::parse_colors;

/// Arguments for the `invert` command.
#[derive(Args)]
pub struct InvertArgs {
    /// Colors: #rrggbb, #rgb or r,g,b floats
    #[arg(required = true)]
    pub colors: Vec<String>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    pub json: bool,
}

/// Run the invert command.
pub fn run(args: InvertArgs, inverter: &LuminanceInverter) -> Result<()> {
    trace!(count = args.colors.len(), "invert::run");

    let inputs = parse_colors(&args.colors)?;
    let mut outputs = inputs.clone();
    inverter.transform_buffer(&mut outputs);
    debug!(count = outputs.len(), "Recolored");

    for line in format_results(&args.colors, &inputs, &outputs, args.json) {
        println!("{line}");
    }
    Ok(())
}

fn format_results(labels: &[String], inputs: &[Rgb], outputs: &[Rgb], json: bool) -> Vec<String> {
    labels
        .iter()
        .zip(inputs.iter().zip(outputs))
        .map(|(label, (input, output))| {
            if json {
                serde_json::json!({
                    "input": label,
                    "rgb": input,
                    "result": output,
                    "hex": output.to_hex(),
                })
                .to_string()
            } else {
                format!("{label} -> {}  {output}", output.to_hex())
            }
        })
        .collect()
}
