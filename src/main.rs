//! chatclean binary entry point.

mod commands;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatclean::cli::{Cli, Commands, ConfigCommands, ExtractArgs};
use chatclean::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        None => commands::extract::handle(&ExtractArgs::default(), &load_config(config_path)?),
        Some(Commands::Extract(args)) => {
            commands::extract::handle(&args, &load_config(config_path)?)
        }
        Some(Commands::Inspect(args)) => {
            commands::inspect::handle(&args, &load_config(config_path)?)
        }
        Some(Commands::Config(ConfigCommands::Show)) => {
            commands::config::handle_show(&load_config(config_path)?)
        }
        Some(Commands::Config(ConfigCommands::Init)) => commands::config::handle_init(config_path),
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "chatclean=debug"
    } else {
        "chatclean=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load `--config` if given, else the per-user file (or defaults).
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}
