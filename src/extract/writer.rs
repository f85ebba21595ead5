//! Numbered output serialization.

use std::io::{self, Write};

/// Writes chunks as `[<n>] <chunk>` blocks separated by a blank line.
///
/// The counter is shared across every message written through one writer,
/// so numbering runs 1, 2, 3... over the whole output.
pub struct NumberedWriter<W: Write> {
    inner: W,
    count: usize,
}

impl<W: Write> NumberedWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }

    /// Write one chunk and return the number it was given.
    pub fn write_chunk(&mut self, chunk: &str) -> io::Result<usize> {
        self.count += 1;
        write!(self.inner, "[{}] {}\n\n", self.count, chunk)?;
        Ok(self.count)
    }

    /// Chunks written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
