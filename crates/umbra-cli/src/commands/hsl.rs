//! HSL inspection command.

use anyhow::Result;
use clap::Args;
use umbra_color::LuminanceInverter;
use umbra_core::Hsl;

use super::parse_colors;

/// Arguments for the `hsl` command.
#[derive(Args)]
pub struct HslArgs {
    /// Colors: #rrggbb, #rgb or r,g,b floats
    #[arg(required = true)]
    pub colors: Vec<String>,

    /// Also show the remapped HSL the inversion produces
    #[arg(long)]
    pub inverted: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    pub json: bool,
}

/// Run the hsl command.
pub fn run(args: HslArgs, inverter: &LuminanceInverter) -> Result<()> {
    let colors = parse_colors(&args.colors)?;

    for (label, color) in args.colors.iter().zip(colors) {
        let hsl = color.to_hsl();
        let remapped = args.inverted.then(|| inverter.transform_hsl(hsl));
        println!("{}", describe(label, hsl, remapped, args.json));
    }
    Ok(())
}

fn describe(label: &str, hsl: Hsl, remapped: Option<Hsl>, json: bool) -> String {
    match (json, remapped) {
        (true, _) => serde_json::json!({ "input": label, "hsl": hsl, "inverted": remapped }).to_string(),
        (false, Some(r)) => format!("{label}: {hsl} -> {r}"),
        (false, None) => format!("{label}: {hsl}"),
    }
}
