//! # chunksmith: separator-aware text chunking
//!
//! A pure, stateless engine for splitting long documents into bounded-size
//! chunks along a preference-ordered hierarchy of separators, with
//! configurable overlap between consecutive chunks.
//!
//! ```text
//! Document loaders ──► plain text ──► RecursiveSplitter ──┐
//!                                     CharacterSplitter ──┤
//!                                                         │ split on the first
//!                                                         │ matching separator,
//!                                                         │ recurse into
//!                                                         │ oversized pieces
//!                                                         ▼
//!                                     merge_splits (size bound + overlap)
//!                                                         │
//!                                                         ▼
//! chunk strings / chunk documents ──► embedding & retrieval pipelines
//! ```
//!
//! ## Core concepts
//!
//! - **Separator hierarchy**: separators are tried coarsest-first; the first
//!   one occurring in the text wins, and lower-priority separators apply only
//!   to pieces that are still oversized. The empty string is the universal
//!   fallback and splits anywhere.
//! - **Overlap**: up to `chunk_overlap` trailing length units of one chunk
//!   reappear at the start of the next, preserving context across boundaries.
//! - **Length units**: all bounds are measured by a pluggable
//!   [`LengthMeasure`] — code points by default, bytes, graphemes, or BPE
//!   tokens behind the `tokenizer-tiktoken` feature.
//! - **Graceful degradation**: there is no "split failed" error. Empty input
//!   yields no chunks, unmatched separators fall through to finer ones, and
//!   an indivisible piece longer than `chunk_size` is emitted whole (and
//!   logged). The only failure mode is invalid configuration, rejected when
//!   the config is built.
//!
//! ## Quick start
//!
//! ```
//! use chunksmith::{ChunkConfig, RecursiveSplitter, TextSplitter};
//!
//! let config = ChunkConfig::builder()
//!     .chunk_size(1000)
//!     .chunk_overlap(200)
//!     .build()?;
//!
//! let splitter = RecursiveSplitter::new(config);
//! let chunks = splitter.split_text("First paragraph.\n\nSecond paragraph.");
//! assert_eq!(chunks.len(), 1);
//! # Ok::<(), chunksmith::ChunkingError>(())
//! ```
//!
//! Syntax-aware splitting reuses the same engine with a profile's separator
//! table:
//!
//! ```
//! use chunksmith::{ChunkConfig, RecursiveSplitter, SeparatorProfile, TextSplitter};
//!
//! let config = ChunkConfig::builder().chunk_size(200).chunk_overlap(20).build()?;
//! let splitter = RecursiveSplitter::for_profile(SeparatorProfile::Markdown, config);
//! let chunks = splitter.split_text("## Intro\n\nBody text.\n\n## Details\n\nMore text.");
//! assert!(!chunks.is_empty());
//! # Ok::<(), chunksmith::ChunkingError>(())
//! ```

pub mod config;
pub mod measure;
pub mod profiles;
pub mod splitter;
pub mod types;

pub use config::{ChunkConfig, ChunkConfigBuilder, KeepSeparator};
pub use measure::LengthMeasure;
pub use profiles::SeparatorProfile;
pub use splitter::TextSplitter;
pub use splitter::character::CharacterSplitter;
pub use splitter::merge::merge_splits;
pub use splitter::recursive::{DEFAULT_SEPARATORS, RecursiveSplitter};
pub use types::{ChunkingError, Document};
