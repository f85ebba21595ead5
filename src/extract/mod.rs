//! Message extraction pipeline for exported chat logs.
//!
//! The pipeline reads an export top to bottom in a single pass:
//! - **Segmenting**: boundary lines (`D/M/YY, H:MM - Sender: text`) open a new
//!   message; other lines extend the open one
//! - **Transforming**: each finished message has phone numbers, links and
//!   names redacted, then may receive the promotional block
//! - **Splitting**: messages over the length limit are cut on line boundaries
//! - **Writing**: every chunk is numbered `[n]` across the whole output
//!
//! # Module Structure
//!
//! - [`config`] - Pipeline configuration
//! - [`segment`] - Boundary detection and message accumulation
//! - [`transforms`] - Content rewrites
//! - [`split`] - Length-bounded splitting
//! - [`writer`] - Numbered serialization

mod config;
mod random;
mod segment;
mod split;
mod transforms;
mod types;
mod writer;

pub use config::{ExtractionConfig, INSERT_PROBABILITY};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use segment::{parse_boundary, Boundary, Segmenter};
pub use split::{split_long_message, MAX_MESSAGE_LENGTH};
pub use transforms::{
    ContentTransformer, InsertPromo, RedactLinks, RedactPhoneNumbers, SubstituteNames, Transform,
    CANONICAL_CHANNEL_URL, CANONICAL_PHONE, PROMO_BLOCK,
};
pub use types::ExtractionStats;
pub use writer::NumberedWriter;

use std::fs::{self, File, Permissions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::ExtractError;

/// Runs the segment, transform, split and write stages over one input.
pub struct Extractor<R> {
    transformer: ContentTransformer<R>,
    max_length: usize,
}

impl<R: RandomSource> Extractor<R> {
    pub fn new(config: &ExtractionConfig, random: R) -> Self {
        Self {
            transformer: ContentTransformer::new(config.insert_probability, random),
            max_length: config.max_length,
        }
    }

    /// Extract every message from `input` and write numbered chunks to `output`.
    ///
    /// Any read or write failure aborts the run.
    pub fn run<I: BufRead, W: Write>(
        &mut self,
        input: I,
        output: W,
    ) -> Result<ExtractionStats, ExtractError> {
        let mut segmenter = Segmenter::new();
        let mut writer = NumberedWriter::new(output);
        let mut stats = ExtractionStats::default();

        for line in input.lines() {
            let line = line.map_err(ExtractError::Read)?;
            if let Some(message) = segmenter.push_line(&line) {
                self.flush(message, &mut writer, &mut stats)?;
            }
        }
        if let Some(message) = segmenter.finish() {
            self.flush(message, &mut writer, &mut stats)?;
        }

        stats.chunks = writer.count();
        writer.finish().map_err(ExtractError::Write)?;

        stats.promos_inserted = self.transformer.promos_inserted();
        stats.ignored_lines = segmenter.ignored_lines();
        Ok(stats)
    }

    fn flush<W: Write>(
        &mut self,
        message: String,
        writer: &mut NumberedWriter<W>,
        stats: &mut ExtractionStats,
    ) -> Result<(), ExtractError> {
        let transformed = self.transformer.apply(message);
        let parts = split_long_message(&transformed, self.max_length);

        stats.messages += 1;
        if parts.len() > 1 {
            stats.split_messages += 1;
            debug!(
                message = stats.messages,
                parts = parts.len(),
                "Split oversized message"
            );
        }

        for part in &parts {
            writer.write_chunk(part).map_err(ExtractError::Write)?;
        }
        Ok(())
    }
}

/// Extract `input` into `output` on disk.
///
/// The output is written to a temporary file next to `output` and renamed
/// over it only once the whole run succeeded.
pub fn extract_file<R: RandomSource>(
    input: &Path,
    output: &Path,
    config: &ExtractionConfig,
    random: R,
) -> Result<ExtractionStats, ExtractError> {
    let reader = File::open(input)
        .map(BufReader::new)
        .map_err(|source| ExtractError::InputOpen {
            path: input.to_path_buf(),
            source,
        })?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(|source| ExtractError::OutputCreate {
        path: dir.to_path_buf(),
        source,
    })?;

    debug!(input = %input.display(), temp = %temp.path().display(), "Extracting");
    let stats = Extractor::new(config, random).run(reader, BufWriter::new(&mut temp))?;

    if let Some(permissions) = output_permissions(output) {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|source| ExtractError::Persist {
                path: output.to_path_buf(),
                source,
            })?;
    }
    temp.persist(output)
        .map_err(|e| ExtractError::Persist {
            path: output.to_path_buf(),
            source: e.error,
        })?;

    info!(
        messages = stats.messages,
        chunks = stats.chunks,
        split = stats.split_messages,
        promos = stats.promos_inserted,
        ignored = stats.ignored_lines,
        output = %output.display(),
        "Extraction complete"
    );
    Ok(stats)
}

/// Mode the replaced output should carry: the existing file's, else 0644.
fn output_permissions(output: &Path) -> Option<Permissions> {
    if let Ok(metadata) = fs::metadata(output) {
        return Some(metadata.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}
