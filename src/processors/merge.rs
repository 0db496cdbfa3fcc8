// WHY: Tiny chunks read as noise in a chat, so they fold into a neighbor unless that would
// detach an intro from its list or swallow the opening of a question

use crate::config::SplitConfig;
use crate::text::{starts_with_list_marker, text_len};

fn trimmed_len(chunk: &str) -> usize {
    text_len(chunk.trim())
}

fn starts_with_question(chunk: &str) -> bool {
    chunk.trim().starts_with('¿')
}

fn ends_with_colon(chunk: &str) -> bool {
    chunk.trim().ends_with(':')
}

fn should_merge_with_next(config: &SplitConfig, chunk: &str, next: &str) -> bool {
    let introduces_next = ends_with_colon(chunk)
        && (starts_with_list_marker(next.trim()) || trimmed_len(next) > config.long_paragraph_threshold);
    if introduces_next || ends_with_colon(next) {
        return false;
    }
    trimmed_len(chunk) < config.min_chunk_size && !starts_with_question(next)
}

/// Fold chunks shorter than `min_chunk_size` forward, or the last one backward
pub fn merge_small_chunks(config: &SplitConfig, chunks: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(chunks.len());
    let mut pending: Option<String> = None;
    let count = chunks.len();

    for (i, chunk) in chunks.iter().enumerate() {
        let current = pending.take().unwrap_or_else(|| chunk.clone());

        if i + 1 == count {
            let fold_back = trimmed_len(&current) < config.min_chunk_size && !starts_with_question(&current);
            match merged.last_mut() {
                Some(previous) if fold_back => {
                    previous.push(' ');
                    previous.push_str(current.trim());
                }
                _ => merged.push(current),
            }
            continue;
        }

        let next = &chunks[i + 1];
        if should_merge_with_next(config, &current, next) {
            pending = Some(format!("{current} {next}"));
        } else {
            merged.push(current);
        }
    }

    merged
}
