//! Core types shared across the chunking engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A piece of text paired with opaque metadata.
///
/// The chunking engine never inspects or mutates `metadata`; when a document
/// is split, every derived chunk carries a verbatim copy of the source
/// document's metadata. Loaders own encoding and extraction correctness —
/// `content` is assumed to be already-decoded text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    #[serde(default)]
    pub metadata: Value,
}

impl Document {
    /// Creates a document with no metadata.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: Value::Null,
        }
    }

    /// Creates a document carrying the provided metadata.
    pub fn with_metadata(content: impl Into<String>, metadata: Value) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }
}

/// Error type for chunking configuration.
///
/// Configuration is the only thing that can fail: every input text, including
/// the empty string, has a well-defined chunk sequence. All variants surface
/// at construction time, never mid-split.
#[derive(Debug, thiserror::Error)]
pub enum ChunkingError {
    /// `chunk_size` must be a positive number of length units.
    #[error("chunk_size must be greater than zero")]
    ZeroChunkSize,

    /// `chunk_overlap` must be strictly smaller than `chunk_size`, otherwise
    /// the merge pass could never make forward progress.
    #[error("chunk_overlap ({overlap}) must be smaller than chunk_size ({size})")]
    OverlapTooLarge { overlap: usize, size: usize },

    /// A separator configured as a regex pattern failed to compile.
    #[error("invalid separator pattern '{pattern}'")]
    InvalidSeparatorPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },
}
