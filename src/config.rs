//! User configuration.
//!
//! Loaded from `<config_dir>/chatclean/config.toml` when present. Every field
//! is optional; missing fields take the built-in defaults, and command-line
//! flags override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::extract::{ExtractionConfig, INSERT_PROBABILITY, MAX_MESSAGE_LENGTH};

/// Default chat export to read.
pub const DEFAULT_INPUT: &str = "whatsapp_chat.txt";

/// Default cleaned file to write.
pub const DEFAULT_OUTPUT: &str = "cleaned_messages.txt";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub extract: ExtractSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractSection {
    pub max_length: usize,
    pub insert_probability: f64,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Default for ExtractSection {
    fn default() -> Self {
        Self {
            max_length: MAX_MESSAGE_LENGTH,
            insert_probability: INSERT_PROBABILITY,
        }
    }
}

impl Config {
    /// Path of the per-user config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("chatclean").join("config.toml"))
    }

    /// Load the per-user config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load a specific config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write this config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extract.max_length == 0 {
            return Err(ConfigError::ZeroMaxLength);
        }
        let p = self.extract.insert_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::ProbabilityOutOfRange(p));
        }
        Ok(())
    }

    /// Pipeline settings from the `[extract]` section.
    pub fn extraction(&self) -> ExtractionConfig {
        ExtractionConfig {
            max_length: self.extract.max_length,
            insert_probability: self.extract.insert_probability,
        }
    }
}
