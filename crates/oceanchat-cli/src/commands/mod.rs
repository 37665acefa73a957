//! Command implementations

mod ask;
mod chat;
mod config;
mod floats;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use oceanchat_core::config::{CliConfigOverrides, LayeredConfig};
use oceanchat_core::ChatEngine;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Ask(args) => ask::execute(args, &config, &output),
        Commands::Chat(args) => chat::execute(args, &config, &output),
        Commands::Floats(args) => floats::execute(args, &output),
        Commands::Config(args) => config::execute(args, &config, &output),
    }
}

/// Layer configuration: defaults, then file, then env, then CLI flags
fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(ref path) = cli.config {
        config = config
            .load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
    }

    let mut config = config.load_from_env();

    config.update_from_cli(CliConfigOverrides {
        series_window: cli.window,
        seed: cli.seed,
        voice: None,
    });

    Ok(config)
}

/// Build the chat engine from the effective configuration
fn build_engine(config: &LayeredConfig) -> ChatEngine {
    match config.seed.value {
        Some(seed) => ChatEngine::seeded(seed, config.series_window.value),
        None => ChatEngine::new(config.series_window.value),
    }
}
