//! Recursive separator splitting.
//!
//! The splitter walks a priority-ordered separator list, coarsest boundary
//! first. It splits on the first separator that actually occurs in the text,
//! keeps every piece that already fits the chunk budget, and recurses into
//! oversized pieces with the remaining, lower-priority separators only. That
//! tie-break preserves coarse boundaries wherever they already satisfy the
//! size constraint. The empty-string separator is the universal fallback: it
//! splits per code point and always succeeds, so the only way a chunk can
//! exceed the budget is an indivisible piece after every separator has been
//! exhausted.

use tracing::debug;

use crate::config::{ChunkConfig, KeepSeparator};
use crate::profiles::SeparatorProfile;
use crate::splitter::merge::merge_splits;
use crate::splitter::{TextSplitter, split_on_literal};

/// Default separator hierarchy: paragraphs, lines, words, then anywhere.
pub const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Splits text along a preference-ordered hierarchy of literal separators.
#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    config: ChunkConfig,
    separators: Vec<String>,
}

impl RecursiveSplitter {
    /// Creates a splitter with the default separator hierarchy.
    pub fn new(config: ChunkConfig) -> Self {
        Self {
            config,
            separators: DEFAULT_SEPARATORS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Creates a splitter using a syntax profile's separator table.
    pub fn for_profile(profile: SeparatorProfile, config: ChunkConfig) -> Self {
        Self {
            config,
            separators: profile.separators(),
        }
    }

    /// Replaces the separator hierarchy. Order encodes priority: coarsest
    /// boundary first, finest last.
    #[must_use]
    pub fn with_separators(mut self, separators: Vec<String>) -> Self {
        self.separators = separators;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    fn split_recursive(&self, text: &str, separators: &[String]) -> Vec<String> {
        // No separators left: the text is atomic at this level.
        let Some(last) = separators.last() else {
            return vec![text.to_string()];
        };

        // Pick the first separator that occurs in the text. The empty string
        // always matches; a separator that never occurs is skipped without
        // consuming a recursion level for it.
        let mut separator = last.as_str();
        let mut rest: &[String] = &[];
        for (i, candidate) in separators.iter().enumerate() {
            if candidate.is_empty() {
                separator = "";
                rest = &[];
                break;
            }
            if text.contains(candidate.as_str()) {
                separator = candidate;
                rest = &separators[i + 1..];
                break;
            }
        }

        debug!(separator = ?separator, remaining = rest.len(), "splitting");

        let pieces = split_on_literal(text, separator, self.config.keep_separator);
        let joiner = match self.config.keep_separator {
            KeepSeparator::Discard => separator,
            _ => "",
        };

        let mut chunks: Vec<String> = Vec::new();
        let mut conforming: Vec<String> = Vec::new();

        for piece in pieces {
            if self.config.measure(&piece) <= self.config.chunk_size {
                conforming.push(piece);
                continue;
            }
            if !conforming.is_empty() {
                chunks.extend(merge_splits(&conforming, joiner, &self.config));
                conforming.clear();
            }
            if rest.is_empty() {
                // Oversized atomic piece: emitted whole by design.
                chunks.push(piece);
            } else {
                chunks.extend(self.split_recursive(&piece, rest));
            }
        }

        if !conforming.is_empty() {
            chunks.extend(merge_splits(&conforming, joiner, &self.config));
        }

        chunks
    }
}

impl TextSplitter for RecursiveSplitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        self.split_recursive(text, &self.separators)
    }
}
