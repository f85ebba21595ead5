//! Inspect subcommand handler

use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Context, Result};

use chatclean::cli::InspectArgs;
use chatclean::{read_numbered, Config};

/// Print the message count of a cleaned file, or one message with `--show`.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &InspectArgs, config: &Config) -> Result<()> {
    let path = args.file.as_ref().unwrap_or(&config.paths.output);
    let file = File::open(path).with_context(|| format!("File not found: {}", path.display()))?;
    let messages = read_numbered(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match args.show {
        Some(number) => {
            let Some(message) = messages.iter().find(|m| m.number == number) else {
                bail!(
                    "Message [{}] not found in {} ({} messages)",
                    number,
                    path.display(),
                    messages.len()
                );
            };
            println!("{}", message.text);
        }
        None => {
            println!("{} message(s) in {}", messages.len(), path.display());
        }
    }
    Ok(())
}
