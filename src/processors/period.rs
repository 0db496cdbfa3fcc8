// WHY: Sentence periods are the last resort boundary; periods inside URLs, emails, numbers,
// abbreviations, list markers and parentheses never end a chunk

use regex_automata::meta::Regex;

use super::{Split, StageContext};
use crate::patterns::Patterns;
use crate::position::is_position_inside_parentheses;
use crate::text::{smart_trim, text_len};

/// Half-open byte range whose periods are not sentence boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtectedRange {
    pub start: usize,
    pub end: usize,
}

impl ProtectedRange {
    fn contains(&self, position: usize) -> bool {
        (self.start..self.end).contains(&position)
    }
}

fn protect_whole_matches(re: &Regex, text: &str, ranges: &mut Vec<ProtectedRange>) {
    ranges.extend(re.find_iter(text).map(|m| ProtectedRange {
        start: m.start(),
        end: m.end(),
    }));
}

/// Protect only the trailing `.` of each match
fn protect_final_period(re: &Regex, text: &str, ranges: &mut Vec<ProtectedRange>) {
    ranges.extend(re.find_iter(text).map(|m| ProtectedRange {
        start: m.end() - 1,
        end: m.end(),
    }));
}

/// Every protected span in `text`, recomputed per call
pub fn find_protected_ranges(patterns: &Patterns, text: &str) -> Vec<ProtectedRange> {
    let mut ranges = Vec::new();
    protect_whole_matches(&patterns.protect_url, text, &mut ranges);
    protect_whole_matches(&patterns.protect_domain, text, &mut ranges);
    protect_whole_matches(&patterns.protect_email, text, &mut ranges);
    protect_whole_matches(&patterns.protect_number, text, &mut ranges);
    protect_final_period(&patterns.protect_list_marker, text, &mut ranges);
    protect_final_period(&patterns.protect_abbreviation, text, &mut ranges);
    protect_whole_matches(&patterns.protect_initials, text, &mut ranges);
    protect_final_period(&patterns.protect_bullet_period, text, &mut ranges);
    ranges
}

/// Periods outside protected ranges and parentheses, in text order
fn candidate_periods(patterns: &Patterns, text: &str) -> Vec<usize> {
    let ranges = find_protected_ranges(patterns, text);
    text.match_indices('.')
        .map(|(idx, _)| idx)
        .filter(|&idx| !ranges.iter().any(|range| range.contains(idx)))
        .filter(|&idx| !is_position_inside_parentheses(text, idx))
        .collect()
}

/// Avoid cascades of tiny chunks: previous chunk, remaining text and tail all short
fn is_fragmenting(ctx: &StageContext<'_>, remaining_len: usize, after_len: usize) -> bool {
    let last_was_short = ctx
        .chunks
        .last()
        .is_some_and(|chunk| text_len(chunk.trim()) < ctx.config.short_chunk_threshold);
    let short = ctx.config.current_text_short_threshold;
    last_was_short && remaining_len < short && after_len < short
}

/// Split at the first eligible sentence period of a long remaining text
pub fn process_period_splits<'a>(ctx: &StageContext<'_>, text: &'a str) -> Split<'a> {
    let remaining_len = text_len(text);
    if remaining_len <= ctx.config.period_split_text_threshold {
        return Split::NotFound;
    }

    for idx in candidate_periods(ctx.patterns, text) {
        if idx + 1 >= text.len() {
            continue;
        }
        let after = smart_trim(&text[idx + 1..]);
        if after.is_empty() {
            continue;
        }

        let after_len = text_len(after);
        if after.contains('?') && after_len < ctx.config.short_question_fragment_threshold {
            continue;
        }
        if is_fragmenting(ctx, remaining_len, after_len) {
            continue;
        }
        return Split::one(&text[..=idx], after);
    }

    Split::NotFound
}
