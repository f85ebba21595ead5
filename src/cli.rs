//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render a man page from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Extract, redact and number messages from an exported chat log
#[derive(Debug, Parser)]
#[command(name = "chatclean", version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the per-user one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract numbered messages from a chat export (default)
    Extract(ExtractArgs),

    /// List the numbered messages in a cleaned file
    Inspect(InspectArgs),

    /// Show or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Default, Args)]
pub struct ExtractArgs {
    /// Chat export to read [default: whatsapp_chat.txt]
    pub input: Option<PathBuf>,

    /// File to write numbered messages to [default: cleaned_messages.txt]
    pub output: Option<PathBuf>,

    /// Split messages longer than this many characters
    #[arg(long, value_name = "CHARS")]
    pub max_length: Option<usize>,

    /// Chance (0.0 to 1.0) that a message gets the promotional block
    #[arg(long, value_name = "P")]
    pub insert_probability: Option<f64>,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Cleaned file to read [default: cleaned_messages.txt]
    pub file: Option<PathBuf>,

    /// Print the text of message N
    #[arg(long, value_name = "N")]
    pub show: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Write a default config file if none exists
    Init,
}
