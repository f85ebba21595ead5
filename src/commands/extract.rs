//! Extract subcommand handler

use anyhow::{Context, Result};

use chatclean::cli::ExtractArgs;
use chatclean::extract::{extract_file, RngSource};
use chatclean::Config;

/// Run the extraction pipeline with config values overridden by flags.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &ExtractArgs, config: &Config) -> Result<()> {
    let mut config = config.clone();
    if let Some(max_length) = args.max_length {
        config.extract.max_length = max_length;
    }
    if let Some(probability) = args.insert_probability {
        config.extract.insert_probability = probability;
    }
    config.validate()?;

    let input = args.input.as_ref().unwrap_or(&config.paths.input);
    let output = args.output.as_ref().unwrap_or(&config.paths.output);
    let extraction = config.extraction();

    let result = match args.seed {
        Some(seed) => extract_file(input, output, &extraction, RngSource::seeded(seed)),
        None => extract_file(input, output, &extraction, RngSource::from_os()),
    };
    let stats = result.with_context(|| {
        format!(
            "Failed to extract {} into {}",
            input.display(),
            output.display()
        )
    })?;

    println!(
        "Extraction complete. Total messages saved (including splits): {}",
        stats.chunks
    );
    Ok(())
}
