//! Fixed-separator splitting.
//!
//! The degenerate case of the recursive splitter: one separator, no fallback
//! hierarchy. A piece that still exceeds the chunk budget after splitting on
//! this single separator is emitted oversized rather than subdivided further.
//! Separators are literal substrings by default; the splitter optionally
//! treats its separator as a regex pattern, which is the documented extension
//! point for boundary patterns that cannot be spelled as a literal.

use regex::Regex;

use crate::config::{ChunkConfig, KeepSeparator};
use crate::splitter::merge::merge_splits;
use crate::splitter::{TextSplitter, split_on_literal};

/// Splits text on a single separator, literal or pattern.
#[derive(Debug, Clone)]
pub struct CharacterSplitter {
    config: ChunkConfig,
    separator: String,
    pattern: Option<Regex>,
}

impl CharacterSplitter {
    /// Creates a splitter on a literal separator, typically a paragraph
    /// break such as `"\n\n"`.
    pub fn new(separator: impl Into<String>, config: ChunkConfig) -> Self {
        Self {
            config,
            separator: separator.into(),
            pattern: None,
        }
    }

    /// Creates a splitter whose separator is a regex pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkingError::InvalidSeparatorPattern`] when the pattern
    /// does not compile.
    ///
    /// [`ChunkingError::InvalidSeparatorPattern`]: crate::ChunkingError::InvalidSeparatorPattern
    pub fn with_pattern(
        pattern: impl Into<String>,
        config: ChunkConfig,
    ) -> Result<Self, crate::types::ChunkingError> {
        let pattern = pattern.into();
        let compiled = Regex::new(&pattern).map_err(|source| {
            crate::types::ChunkingError::InvalidSeparatorPattern {
                pattern: pattern.clone(),
                source: Box::new(source),
            }
        })?;
        Ok(Self {
            config,
            separator: pattern,
            pattern: Some(compiled),
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    fn split_pattern(&self, text: &str, re: &Regex) -> Vec<String> {
        let pieces: Vec<String> = match self.config.keep_separator {
            KeepSeparator::Discard => re.split(text).map(str::to_string).collect(),
            KeepSeparator::Start | KeepSeparator::End => {
                let mut pieces = Vec::new();
                let mut last = 0;
                for m in re.find_iter(text) {
                    let cut = match self.config.keep_separator {
                        KeepSeparator::Start => m.start(),
                        _ => m.end(),
                    };
                    if cut > last {
                        pieces.push(text[last..cut].to_string());
                    }
                    last = last.max(cut);
                }
                if last < text.len() {
                    pieces.push(text[last..].to_string());
                }
                pieces
            }
        };
        pieces.into_iter().filter(|p| !p.is_empty()).collect()
    }
}

impl TextSplitter for CharacterSplitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let pieces = match &self.pattern {
            Some(re) => self.split_pattern(text, re),
            None => split_on_literal(text, &self.separator, self.config.keep_separator),
        };

        // With a pattern separator the matched text varies per occurrence,
        // so there is no single separator to rejoin with; dropped pattern
        // matches are not reconstructable and the joiner stays empty.
        let joiner = match self.config.keep_separator {
            KeepSeparator::Discard if self.pattern.is_none() => self.separator.as_str(),
            _ => "",
        };

        merge_splits(&pieces, joiner, &self.config)
    }
}
