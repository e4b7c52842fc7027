use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ours_cli::commands::convert;
use ours_cli::{Cli, Config};

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

    let mut config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(templates_dir) = cli.templates_dir {
        config.templates_dir = templates_dir;
    }
    tracing::debug!(?config, "loaded configuration");

    convert::run(&cli.input, &cli.output, &config)
}
