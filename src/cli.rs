//! CLI definition and entry point

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use crate::manifest::ManifestBuilder;

/// Quartogen - Quarto book manifest generator
///
/// Builds the `_quarto.yml` manifest for the package documentation book,
/// filling the reference chapter groups from the `.qmd` files found in the
/// docs tree. Output is deterministic: identical inputs produce
/// byte-identical manifests.
#[derive(Parser, Debug)]
#[command(name = "quartogen")]
#[command(
    version,
    about = "Generate the _quarto.yml manifest for the documentation book",
    after_help = "\
Examples:
  quartogen                       Generate docs/_quarto.yml for the current package
  quartogen /path/to/package      Generate for a specific package root
  quartogen -o _quarto.yaml       Write under a different filename"
)]
pub struct Cli {
    /// Package root containing DESCRIPTION and the docs directory
    #[arg(default_value = ".")]
    pub base_dir: PathBuf,

    /// Documentation source directory, relative to the package root
    #[arg(long, default_value = "docs")]
    pub docs_dir: String,

    /// Output filename, resolved against the docs directory unless absolute
    #[arg(long, short = 'o', default_value = "_quarto.yml")]
    pub output: PathBuf,
}

pub fn run(cli: Cli) -> Result<()> {
    let base_dir = cli
        .base_dir
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", cli.base_dir.display()))?;

    let mut builder = ManifestBuilder::new(&base_dir, &cli.docs_dir);
    builder.build();

    let output = if cli.output.is_absolute() {
        cli.output
    } else {
        base_dir.join(&cli.docs_dir).join(&cli.output)
    };
    builder
        .write(&output)
        .with_context(|| format!("Failed to write manifest to {}", output.display()))?;

    println!(
        "{} Wrote {}",
        style("✓").green(),
        style(output.display()).cyan()
    );
    Ok(())
}
