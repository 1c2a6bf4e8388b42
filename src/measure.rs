//! Pluggable length measurement for chunk size accounting.
//!
//! Every size and overlap bound in the engine is expressed in the unit this
//! strategy defines. The default counts Unicode code points; byte and
//! grapheme counting are available
//! for callers that care about storage size or user-perceived characters, and
//! the `tokenizer-tiktoken` feature adds BPE token counting so chunk budgets
//! can be expressed directly in model tokens.

use std::fmt;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

#[cfg(feature = "tokenizer-tiktoken")]
use tiktoken_rs::CoreBPE;

/// Strategy used to measure a piece of text.
#[derive(Clone, Default)]
pub enum LengthMeasure {
    /// Unicode code points (`str::chars`). The default length unit.
    #[default]
    Chars,
    /// UTF-8 bytes.
    Bytes,
    /// Extended grapheme clusters.
    Graphemes,
    /// BPE tokens produced by a `tiktoken` encoding.
    #[cfg(feature = "tokenizer-tiktoken")]
    Tokens(Arc<CoreBPE>),
    /// Caller-supplied measurement function.
    Custom(Arc<dyn Fn(&str) -> usize + Send + Sync>),
}

impl LengthMeasure {
    /// Wraps a caller-supplied measurement function.
    pub fn custom(f: impl Fn(&str) -> usize + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Wraps a `tiktoken` encoding so chunk budgets are counted in tokens.
    #[cfg(feature = "tokenizer-tiktoken")]
    pub fn tokens(bpe: CoreBPE) -> Self {
        Self::Tokens(Arc::new(bpe))
    }

    /// Measures `text` in this strategy's length unit.
    pub fn measure(&self, text: &str) -> usize {
        match self {
            Self::Chars => text.chars().count(),
            Self::Bytes => text.len(),
            Self::Graphemes => text.graphemes(true).count(),
            #[cfg(feature = "tokenizer-tiktoken")]
            Self::Tokens(bpe) => bpe.encode_with_special_tokens(text).len(),
            Self::Custom(f) => f(text),
        }
    }
}

impl fmt::Debug for LengthMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chars => f.write_str("Chars"),
            Self::Bytes => f.write_str("Bytes"),
            Self::Graphemes => f.write_str("Graphemes"),
            #[cfg(feature = "tokenizer-tiktoken")]
            Self::Tokens(_) => f.write_str("Tokens(..)"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_counts_code_points() {
        assert_eq!(LengthMeasure::Chars.measure("héllo"), 5);
        assert_eq!(LengthMeasure::Chars.measure(""), 0);
    }

    #[test]
    fn bytes_counts_utf8_length() {
        assert_eq!(LengthMeasure::Bytes.measure("héllo"), 6);
    }

    #[test]
    fn graphemes_counts_clusters() {
        // Combining acute accent: two code points, one grapheme.
        let text = "e\u{301}";
        assert_eq!(LengthMeasure::Chars.measure(text), 2);
        assert_eq!(LengthMeasure::Graphemes.measure(text), 1);
    }

    #[test]
    fn custom_overrides_counting() {
        let words = LengthMeasure::custom(|s| s.split_whitespace().count());
        assert_eq!(words.measure("one two three"), 3);
    }
}
