//! Greedy merge-with-overlap.
//!
//! Takes the flat piece sequence produced by a splitting pass and recombines
//! it into final chunks honoring `chunk_size` and `chunk_overlap`. Single
//! left-to-right pass: pieces accumulate until adding one more (plus the
//! joiner) would push the running total past `chunk_size`, at which point the
//! accumulator is flushed as one chunk and drained from the front down to the
//! overlap budget, seeding the next chunk.

use tracing::warn;

use crate::config::ChunkConfig;

/// Joins `pieces` with `joiner`, trimming when configured. Returns `None`
/// when the joined text is empty so callers never emit empty chunks.
fn join_pieces(pieces: &[String], joiner: &str, config: &ChunkConfig) -> Option<String> {
    let text = pieces.join(joiner);
    let text = if config.strip_whitespace {
        text.trim().to_string()
    } else {
        text
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Merges split pieces into chunks bounded by `config.chunk_size`, carrying
/// up to `config.chunk_overlap` trailing units into each following chunk.
///
/// A single piece longer than `chunk_size` is emitted whole as its own chunk
/// (the oversized-atomic case); the deviation is logged, never truncated.
/// Empty input yields an empty sequence.
pub fn merge_splits(pieces: &[String], joiner: &str, config: &ChunkConfig) -> Vec<String> {
    let joiner_len = config.measure(joiner);

    let mut chunks: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut total = 0usize;

    for piece in pieces {
        let piece_len = config.measure(piece);
        let overflows = |running: usize, accumulated: bool| {
            let sep = if accumulated { joiner_len } else { 0 };
            running + piece_len + sep > config.chunk_size
        };

        if overflows(total, !current.is_empty()) {
            if total > config.chunk_size {
                warn!(
                    chunk_len = total,
                    chunk_size = config.chunk_size,
                    "emitting chunk longer than the configured chunk_size"
                );
            }
            if !current.is_empty() {
                if let Some(chunk) = join_pieces(&current, joiner, config) {
                    chunks.push(chunk);
                }
                // Drain from the front until the retained tail fits the
                // overlap budget and leaves room for the incoming piece.
                while total > config.chunk_overlap
                    || (total > 0 && overflows(total, !current.is_empty()))
                {
                    let head_len = config.measure(&current[0]);
                    total -= head_len + if current.len() > 1 { joiner_len } else { 0 };
                    current.remove(0);
                }
            }
        }

        total += piece_len + if current.is_empty() { 0 } else { joiner_len };
        current.push(piece.clone());
    }

    if let Some(chunk) = join_pieces(&current, joiner, config) {
        chunks.push(chunk);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: usize, overlap: usize) -> ChunkConfig {
        ChunkConfig::builder()
            .chunk_size(size)
            .chunk_overlap(overlap)
            .build()
            .unwrap()
    }

    fn pieces(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(merge_splits(&[], ",", &config(10, 0)).is_empty());
    }

    #[test]
    fn joiner_length_counts_against_the_budget() {
        // "a,b" is exactly 3 units, so "c" forces a flush.
        let chunks = merge_splits(&pieces(&["a", "b", "c", "d", "e"]), ",", &config(3, 0));
        assert_eq!(chunks, vec!["a,b", "c,d", "e"]);
    }

    #[test]
    fn overlap_retains_trailing_pieces() {
        let xs: Vec<String> = std::iter::repeat_n("x".to_string(), 20).collect();
        let chunks = merge_splits(&xs, "", &config(5, 2));
        assert_eq!(chunks.len(), 6);
        for chunk in &chunks {
            assert_eq!(chunk.len(), 5);
        }
        for pair in chunks.windows(2) {
            assert_eq!(&pair[0][3..], &pair[1][..2]);
        }
    }

    #[test]
    fn oversized_piece_is_emitted_whole() {
        let chunks = merge_splits(&pieces(&["short", "waytoolongforthis", "end"]), " ", &config(8, 0));
        assert_eq!(chunks, vec!["short", "waytoolongforthis", "end"]);
    }

    #[test]
    fn overlap_never_exceeds_budget() {
        // Pieces of length 3 with overlap 2: no whole trailing piece fits the
        // budget, so chunks share nothing rather than too much.
        let chunks = merge_splits(&pieces(&["aaa", "bbb", "ccc"]), "", &config(6, 2));
        assert_eq!(chunks, vec!["aaabbb", "ccc"]);
    }

    #[test]
    fn whitespace_only_join_is_skipped() {
        let cfg = config(10, 0);
        let chunks = merge_splits(&pieces(&["   "]), "", &cfg);
        assert!(chunks.is_empty());
    }
}
