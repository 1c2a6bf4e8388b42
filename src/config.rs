//! Chunking configuration and its builder.
//!
//! A [`ChunkConfig`] is constructed once, validated up front, and shared by
//! reference with the splitters. Invalid combinations (`chunk_size == 0`,
//! `chunk_overlap >= chunk_size`) are rejected at build time so the splitting
//! and merging passes never have to surface errors mid-flight.

use serde::{Deserialize, Serialize};

use crate::measure::LengthMeasure;
use crate::types::ChunkingError;

/// What happens to separator text at a split boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeepSeparator {
    /// Separator occurrences are removed from the pieces. The merge pass then
    /// uses the separator as the joiner, so reconstruction still holds.
    #[default]
    Discard,
    /// The separator stays attached to the start of the piece that follows
    /// it, so merged chunks retain the original boundary text.
    Start,
    /// The separator stays attached to the end of the piece that precedes it.
    End,
}

/// Validated, immutable chunking parameters.
///
/// The engine is stateless: a config can be shared freely across threads and
/// reused for any number of chunking calls.
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// Maximum chunk length, in the unit defined by [`length`](Self::length).
    pub chunk_size: usize,
    /// Trailing units of one chunk re-seeded at the start of the next.
    pub chunk_overlap: usize,
    /// Separator handling at split boundaries.
    pub keep_separator: KeepSeparator,
    /// Trim leading/trailing whitespace from each emitted chunk.
    pub strip_whitespace: bool,
    /// Length measurement strategy.
    pub length: LengthMeasure,
}

impl ChunkConfig {
    /// Creates a builder seeded with the defaults (`chunk_size` 1000,
    /// `chunk_overlap` 200, discard separators, strip whitespace, count
    /// code points).
    pub fn builder() -> ChunkConfigBuilder {
        ChunkConfigBuilder::default()
    }

    /// Measures `text` with the configured length strategy.
    pub(crate) fn measure(&self, text: &str) -> usize {
        self.length.measure(text)
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
            keep_separator: KeepSeparator::default(),
            strip_whitespace: true,
            length: LengthMeasure::default(),
        }
    }
}

/// Builder for [`ChunkConfig`].
#[derive(Debug, Clone, Default)]
pub struct ChunkConfigBuilder {
    chunk_size: Option<usize>,
    chunk_overlap: Option<usize>,
    keep_separator: KeepSeparator,
    strip_whitespace: Option<bool>,
    length: LengthMeasure,
}

impl ChunkConfigBuilder {
    /// Sets the maximum chunk length. Must be greater than zero.
    #[must_use]
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    /// Sets the overlap carried between consecutive chunks. Must be strictly
    /// smaller than the chunk size.
    #[must_use]
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.chunk_overlap = Some(overlap);
        self
    }

    /// Sets separator handling at split boundaries.
    #[must_use]
    pub fn keep_separator(mut self, keep: KeepSeparator) -> Self {
        self.keep_separator = keep;
        self
    }

    /// Enables or disables trimming of emitted chunks.
    #[must_use]
    pub fn strip_whitespace(mut self, strip: bool) -> Self {
        self.strip_whitespace = Some(strip);
        self
    }

    /// Sets the length measurement strategy.
    #[must_use]
    pub fn length(mut self, length: LengthMeasure) -> Self {
        self.length = length;
        self
    }

    /// Validates the parameters and builds the config.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkingError::ZeroChunkSize`] when `chunk_size == 0` and
    /// [`ChunkingError::OverlapTooLarge`] when
    /// `chunk_overlap >= chunk_size`.
    pub fn build(self) -> Result<ChunkConfig, ChunkingError> {
        let defaults = ChunkConfig::default();
        let chunk_size = self.chunk_size.unwrap_or(defaults.chunk_size);
        let chunk_overlap = self.chunk_overlap.unwrap_or(defaults.chunk_overlap);

        if chunk_size == 0 {
            return Err(ChunkingError::ZeroChunkSize);
        }
        if chunk_overlap >= chunk_size {
            return Err(ChunkingError::OverlapTooLarge {
                overlap: chunk_overlap,
                size: chunk_size,
            });
        }

        Ok(ChunkConfig {
            chunk_size,
            chunk_overlap,
            keep_separator: self.keep_separator,
            strip_whitespace: self.strip_whitespace.unwrap_or(defaults.strip_whitespace),
            length: self.length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let config = ChunkConfig::builder().build().unwrap();
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.chunk_overlap, 200);
        assert_eq!(config.keep_separator, KeepSeparator::Discard);
        assert!(config.strip_whitespace);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = ChunkConfig::builder().chunk_size(0).build().unwrap_err();
        assert!(matches!(err, ChunkingError::ZeroChunkSize));
    }

    #[test]
    fn overlap_equal_to_size_is_rejected() {
        let err = ChunkConfig::builder()
            .chunk_size(10)
            .chunk_overlap(10)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ChunkingError::OverlapTooLarge {
                overlap: 10,
                size: 10
            }
        ));
    }

    #[test]
    fn rejection_is_deterministic() {
        for _ in 0..3 {
            let result = ChunkConfig::builder()
                .chunk_size(5)
                .chunk_overlap(7)
                .build();
            assert!(result.is_err());
        }
    }
}
