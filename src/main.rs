//! Quartogen - Quarto book manifest generator
//!
//! A small, deterministic tool that assembles the `_quarto.yml` book
//! manifest for the package documentation site.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = quartogen::cli::Cli::parse();
    quartogen::cli::run(cli)
}
