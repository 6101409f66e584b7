//! Apply command.
//!
//! Runs the `apply-dark-mode` plugin message against a scene document and
//! writes the recolored document back.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info, trace};
use umbra_color::LuminanceInverter;
use umbra_scene::{handle_message, Document, DocumentHost, Outcome, PluginMessage};

/// Arguments for the `apply` command.
#[derive(Args)]
pub struct ApplyArgs {
    /// Input scene document (JSON)
    pub input: PathBuf,

    /// Output document (default: overwrite input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Node id to select instead of the document's selection (repeatable)
    #[arg(short, long = "select")]
    pub select: Vec<String>,

    /// Plugin message to send, as JSON
    #[arg(long, default_value = r#"{"type":"apply-dark-mode"}"#)]
    pub message: String,

    /// Report what would change without writing
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Run the apply command.
pub fn run(args: ApplyArgs, inverter: &LuminanceInverter, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), "apply::run");

    let mut document = Document::load(&args.input)
        .with_context(|| format!("Failed to load: {}", args.input.display()))?;
    if !args.select.is_empty() {
        debug!(ids = ?args.select, "Overriding selection");
        document.selection = args.select.clone();
    }

    let message = PluginMessage::from_json(&args.message)
        .with_context(|| format!("Bad plugin message: {}", args.message))?;

    let mut host = DocumentHost::new(document);
    let outcome = handle_message(&mut host, &message, inverter).context("Failed to apply")?;

    for notice in host.notices() {
        println!("{notice}");
    }

    let Outcome::Applied(stats) = outcome else {
        info!(?outcome, "Document left unchanged");
        return Ok(());
    };

    if verbose > 0 {
        println!("  {} nodes visited, {} solid fills recolored", stats.nodes, stats.fills);
    }

    if args.dry_run {
        info!("Dry run, not writing");
        return Ok(());
    }

    let output = args.output.as_deref().unwrap_or(&args.input);
    save(host.document(), output)?;
    info!(path = %output.display(), "Saved");
    Ok(())
}

fn save(document: &Document, path: &Path) -> Result<()> {
    document
        .save(path)
        .with_context(|| format!("Failed to save: {}", path.display()))
}
