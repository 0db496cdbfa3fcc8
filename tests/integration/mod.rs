// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

pub mod fixtures;

use std::sync::OnceLock;

use chatsplit::ChatSplitter;

/// Shared splitter built from the default config
pub fn splitter() -> &'static ChatSplitter {
    static SPLITTER: OnceLock<ChatSplitter> = OnceLock::new();
    SPLITTER.get_or_init(|| {
        init_tracing();
        ChatSplitter::with_default_config().expect("Failed to build default splitter")
    })
}

/// Split with the shared splitter
pub fn split(text: &str) -> Vec<String> {
    splitter().split_str(text)
}

/// Route library logs through a JSON subscriber; repeated calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_test_writer()
        .try_init();
}

/// Letters and digits of `text`, lowercased, in order
pub fn alphanumeric_content(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Every letter and digit of the input survives, in order, across the chunks
pub fn assert_no_content_lost(input: &str, chunks: &[String], context: &str) {
    let expected = alphanumeric_content(input);
    let actual = alphanumeric_content(&chunks.concat());
    assert_eq!(
        actual, expected,
        "{context}: chunk content differs from input\nChunks: {chunks:#?}"
    );
}

/// Parentheses never open in one chunk and close in another
pub fn assert_balanced_parentheses(chunks: &[String], context: &str) {
    for chunk in chunks {
        let open = chunk.matches('(').count();
        let close = chunk.matches(')').count();
        assert_eq!(open, close, "{context}: unbalanced parentheses in chunk {chunk:?}");
    }
}

/// Compare chunk lists element by element, providing a detailed diff on mismatch
pub fn assert_chunks(actual: &[String], expected: &[String], context: &str) {
    if actual.len() != expected.len() {
        panic!(
            "{}: Chunk count mismatch. Expected {} chunks, got {}\nExpected: {:#?}\nActual:   {:#?}",
            context,
            expected.len(),
            actual.len(),
            expected,
            actual
        );
    }

    for (i, (actual_chunk, expected_chunk)) in actual.iter().zip(expected).enumerate() {
        if actual_chunk != expected_chunk {
            panic!(
                "{}: Chunk {} mismatch\nExpected: {:?}\nActual:   {:?}",
                context,
                i + 1,
                expected_chunk,
                actual_chunk
            );
        }
    }
}
