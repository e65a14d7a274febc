use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kt_cli::commands::analyze;
use kt_cli::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_paths(cli.input.as_deref(), cli.output.as_deref());
    tracing::debug!(?config, "loaded configuration");

    analyze::run(&mut std::io::stdout().lock(), &config, cli.json)?;

    Ok(())
}
