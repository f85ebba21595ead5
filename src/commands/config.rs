//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use chatclean::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Write the default configuration unless a file is already there.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(explicit: Option<&Path>) -> Result<()> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }

    Config::default().save_to(&config_path)?;
    println!("Created {}", config_path.display());
    Ok(())
}
