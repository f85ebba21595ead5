//! Extraction errors.

use std::path::PathBuf;

/// Errors that abort an extraction run.
///
/// Every variant is fatal: the pipeline is a single pass and never retries.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to open input file {path}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output file in {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read chat log: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write numbered messages: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to replace output file {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors loading or validating the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("max_length must be at least 1")]
    ZeroMaxLength,

    #[error("insert_probability must be between 0.0 and 1.0, got {0}")]
    ProbabilityOutOfRange(f64),
}
