//! Run statistics.

/// Counters collected over one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Messages segmented from the input
    pub messages: usize,
    /// Numbered chunks written (the final message number)
    pub chunks: usize,
    /// Messages that needed more than one chunk
    pub split_messages: usize,
    /// Messages that received the promotional block
    pub promos_inserted: usize,
    /// Lines before the first boundary that were dropped
    pub ignored_lines: usize,
}
