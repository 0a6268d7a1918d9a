//! Post-build hook binary, invoked by the docs generator after the site is
//! written.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cosim_docs_hook::{on_post_build, SiteConfig};

#[derive(Parser)]
#[command(name = "cosim-docs-hook")]
#[command(about = "Copies the cosimulation viewer pages into the built docs site")]
#[command(version)]
struct Cli {
    /// Path to the generator's config file
    #[arg(short, long, default_value = "mkdocs.yml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = SiteConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    on_post_build(&config)?;

    Ok(())
}
