//! End-to-end scenarios for the chunking engine.

use serde_json::json;

use chunksmith::{
    CharacterSplitter, ChunkConfig, ChunkingError, Document, KeepSeparator, RecursiveSplitter,
    SeparatorProfile, TextSplitter,
};

fn config(size: usize, overlap: usize) -> ChunkConfig {
    ChunkConfig::builder()
        .chunk_size(size)
        .chunk_overlap(overlap)
        .build()
        .unwrap()
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

#[test]
fn comma_delimited_text_merges_in_join_and_flush_order() {
    let splitter = CharacterSplitter::new(",", config(3, 0));
    let chunks = splitter.split_text("a,b,c,d,e");
    assert_eq!(chunks, vec!["a,b", "c,d", "e"]);

    // Reconstruction: reinserting the dropped separator restores the input.
    assert_eq!(chunks.join(","), "a,b,c,d,e");
}

#[test]
fn character_fallback_produces_fixed_stride_windows() {
    let text = "x".repeat(20);
    let splitter = RecursiveSplitter::new(config(5, 2)).with_separators(vec![String::new()]);
    let chunks = splitter.split_text(&text);

    assert_eq!(chunks.len(), 6);
    for chunk in &chunks {
        assert_eq!(chunk.len(), 5);
    }
    // Each chunk repeats exactly the last two characters of its predecessor.
    for pair in chunks.windows(2) {
        assert_eq!(pair[0][3..], pair[1][..2]);
    }
}

#[test]
fn overlap_equal_to_chunk_size_never_splits() {
    let result = ChunkConfig::builder().chunk_size(10).chunk_overlap(10).build();
    match result {
        Err(ChunkingError::OverlapTooLarge { overlap, size }) => {
            assert_eq!((overlap, size), (10, 10));
        }
        other => panic!("expected OverlapTooLarge, got {other:?}"),
    }
}

#[test]
fn empty_input_yields_empty_sequence_everywhere() {
    assert!(RecursiveSplitter::new(config(10, 0)).split_text("").is_empty());
    assert!(CharacterSplitter::new(",", config(10, 0)).split_text("").is_empty());
}

#[test]
fn no_emitted_chunk_is_empty() {
    let text = "\n\n\n\n  \n\n words \n\n  \n\n";
    let chunks = RecursiveSplitter::new(config(8, 0)).split_text(text);
    for chunk in &chunks {
        assert!(!chunk.is_empty());
    }
}

#[test]
fn markdown_profile_splits_at_headings_first() {
    let text = "## Setup\n\nInstall the tool.\n\n## Usage\n\nRun it against your corpus.";
    let splitter = RecursiveSplitter::for_profile(SeparatorProfile::Markdown, config(40, 0));
    let chunks = splitter.split_text(text);

    // The heading boundary outranks the paragraph boundary, so the two
    // sections never share a chunk even though both would fit budgets that
    // paragraph splitting alone could produce.
    assert!(chunks.iter().any(|c| c.contains("Install the tool.")));
    assert!(chunks.iter().any(|c| c.contains("Run it against your corpus.")));
    for chunk in &chunks {
        assert!(
            !(chunk.contains("Install the tool.") && chunk.contains("Run it")),
            "sections leaked into one chunk: {chunk:?}"
        );
    }
}

#[test]
fn html_profile_splits_on_structural_tags() {
    let text = "<div><p>first block</p><p>second block</p></div>";
    let splitter = RecursiveSplitter::for_profile(SeparatorProfile::Html, config(30, 0));
    let chunks = splitter.split_text(text);
    assert!(chunks.len() >= 2);
    for chunk in &chunks {
        assert!(chunk.chars().count() <= 30);
    }
}

#[test]
fn documents_replicate_source_metadata_onto_every_chunk() {
    let splitter = RecursiveSplitter::new(config(10, 0));
    let docs = splitter.split_documents(&[
        Document::with_metadata("alpha beta gamma delta", json!({"source": "a.txt"})),
        Document::with_metadata("tiny", json!({"source": "b.txt"})),
    ]);

    assert!(docs.len() > 2);
    let (from_a, from_b): (Vec<_>, Vec<_>) = docs
        .iter()
        .partition(|d| d.metadata == json!({"source": "a.txt"}));
    assert!(from_a.len() >= 2);
    assert_eq!(from_b.len(), 1);
    assert_eq!(from_b[0].content, "tiny");
}

#[test]
fn create_documents_pairs_texts_with_metadata_entries() {
    let splitter = CharacterSplitter::new(" ", config(5, 0));
    let docs = splitter.create_documents(
        &["one two three", "solo"],
        &[json!({"idx": 0}), json!({"idx": 1})],
    );
    assert!(docs.iter().any(|d| d.metadata == json!({"idx": 0})));
    assert!(docs.iter().any(|d| d.metadata == json!({"idx": 1})));
}

#[test]
fn oversized_atomic_piece_is_preserved_not_truncated() {
    init_tracing();
    let long_token = "supercalifragilistic";
    let text = format!("small {long_token} small");
    let splitter = RecursiveSplitter::new(config(8, 0)).with_separators(vec![" ".into()]);
    let chunks = splitter.split_text(&text);
    assert!(chunks.contains(&long_token.to_string()));
}

#[test]
fn keep_separator_end_attaches_to_preceding_chunk() {
    let cfg = ChunkConfig::builder()
        .chunk_size(12)
        .chunk_overlap(0)
        .keep_separator(KeepSeparator::End)
        .strip_whitespace(false)
        .build()
        .unwrap();
    let text = "one. two. three. four.";
    let chunks = CharacterSplitter::new(". ", cfg).split_text(text);
    assert_eq!(chunks.concat(), text);
    assert!(chunks[0].ends_with(". "));
}

#[test]
fn decreasing_chunk_size_never_decreases_chunk_count() {
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.\n\n\
                Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";
    let mut previous = 0;
    for size in (4..=64).rev() {
        let chunks = RecursiveSplitter::new(config(size, 0)).split_text(text);
        assert!(
            chunks.len() >= previous,
            "chunk count dropped from {previous} to {} at size {size}",
            chunks.len()
        );
        previous = chunks.len();
    }
}
