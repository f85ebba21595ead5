//! Configuration for the extraction pipeline.

use super::split::MAX_MESSAGE_LENGTH;

/// Chance that a message receives the promotional block.
pub const INSERT_PROBABILITY: f64 = 0.4;

/// Configuration for the extraction pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Maximum characters per written chunk
    pub max_length: usize,
    /// Probability in `[0, 1]` of inserting the promotional block
    pub insert_probability: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_length: MAX_MESSAGE_LENGTH,
            insert_probability: INSERT_PROBABILITY,
        }
    }
}
