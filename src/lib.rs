//! chatclean - extract, redact and number messages from exported chat logs.
//!
//! The library exposes the extraction pipeline ([`extract`]), the reader for
//! its numbered output ([`numbered`]), user configuration and the CLI
//! definition shared with `xtask`.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod numbered;

pub use config::Config;
pub use error::{ConfigError, ExtractError};
pub use extract::{extract_file, ExtractionConfig, ExtractionStats, Extractor};
pub use numbered::{read_numbered, NumberedMessage};
