//! Text splitters and the seam they share.
//!
//! Both splitters produce plain chunk strings via [`TextSplitter::split_text`]
//! and gain document-aware variants for free: `create_documents` and
//! `split_documents` replicate source metadata verbatim onto every derived
//! chunk.

pub mod character;
pub mod merge;
pub mod recursive;

use serde_json::Value;

use crate::config::KeepSeparator;
use crate::types::Document;

/// Common surface of the chunking engine.
///
/// Implementations are pure: no shared mutable state, no I/O, safe to call
/// concurrently on independent inputs. An empty input always yields an empty
/// chunk sequence.
pub trait TextSplitter {
    /// Splits `text` into size-bounded chunk strings.
    fn split_text(&self, text: &str) -> Vec<String>;

    /// Chunks each text and wraps the results as documents, replicating the
    /// matching metadata entry onto every chunk derived from that text.
    ///
    /// Texts without a metadata entry produce documents with null metadata.
    fn create_documents(&self, texts: &[&str], metadatas: &[Value]) -> Vec<Document> {
        let mut documents = Vec::new();
        for (i, text) in texts.iter().enumerate() {
            let metadata = metadatas.get(i).cloned().unwrap_or(Value::Null);
            for chunk in self.split_text(text) {
                documents.push(Document::with_metadata(chunk, metadata.clone()));
            }
        }
        documents
    }

    /// Splits each document's content, carrying its metadata onto every
    /// derived chunk.
    fn split_documents(&self, documents: &[Document]) -> Vec<Document> {
        let mut out = Vec::new();
        for doc in documents {
            for chunk in self.split_text(&doc.content) {
                out.push(Document::with_metadata(chunk, doc.metadata.clone()));
            }
        }
        out
    }
}

/// Splits `text` on literal occurrences of `separator`, honoring the
/// configured separator attachment. An empty separator falls back to a
/// per-code-point split. Empty pieces are filtered out.
pub(crate) fn split_on_literal(text: &str, separator: &str, keep: KeepSeparator) -> Vec<String> {
    if separator.is_empty() {
        return text.chars().map(String::from).collect();
    }

    let pieces: Vec<String> = match keep {
        KeepSeparator::Discard => text.split(separator).map(str::to_string).collect(),
        KeepSeparator::Start | KeepSeparator::End => {
            let mut pieces = Vec::new();
            let mut last = 0;
            for (start, matched) in text.match_indices(separator) {
                let cut = match keep {
                    KeepSeparator::Start => start,
                    _ => start + matched.len(),
                };
                if cut > last {
                    pieces.push(text[last..cut].to_string());
                }
                last = cut;
            }
            if last < text.len() {
                pieces.push(text[last..].to_string());
            }
            pieces
        }
    };

    pieces.into_iter().filter(|p| !p.is_empty()).collect()
}
