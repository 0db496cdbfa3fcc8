// WHY: Small string predicates shared by every processor
// Lengths follow UTF-16 code units so thresholds match what chat clients count

use crate::config::ACCENTED_LETTERS;
use crate::patterns::Patterns;

/// Length of `text` in UTF-16 code units
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

fn is_smart_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{200B}' | '\u{FEFF}')
}

/// Trim whitespace, including no-break and zero-width spaces, keeping emoji intact
pub fn smart_trim(text: &str) -> &str {
    text.trim_matches(is_smart_space)
}

fn is_text_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || ('\u{00C0}'..='\u{024F}').contains(&c)
        || ('\u{1E00}'..='\u{1EFF}').contains(&c)
}

/// True when the text carries letters or digits, not just emoji and symbols
pub fn has_text_content(text: &str) -> bool {
    smart_trim(text).chars().any(is_text_char)
}

/// Letters considered when deciding case in Spanish text
pub fn is_case_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || ACCENTED_LETTERS.contains(c)
}

/// True when the first letter of the text is lowercase
pub fn starts_with_lowercase(text: &str) -> bool {
    text.chars()
        .find(|&c| is_case_letter(c))
        .is_some_and(|c| c.is_lowercase())
}

/// True when the text opens with an Emoji-class code point (digits, `#` and `*` included)
pub fn starts_with_emoji(patterns: &Patterns, text: &str) -> bool {
    patterns.emoji_start.is_match(text)
}

/// Byte offset just past the leading emoji run and any whitespace after it
pub fn find_position_after_emoji(patterns: &Patterns, text: &str) -> usize {
    patterns.emoji_run.find(text).map_or(0, |m| m.end())
}

/// Matches "(XS, S o M)?" style clarifications that belong to the preceding question
pub fn is_parenthetical_clarification(patterns: &Patterns, text: &str) -> bool {
    let trimmed = smart_trim(text);
    !trimmed.is_empty() && patterns.parenthetical.is_match(trimmed)
}

/// `1. ` / `12. ` at the start of the text
pub fn starts_with_numbered_marker(text: &str) -> bool {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if !(1..=2).contains(&digits) {
        return false;
    }
    let mut rest = text[digits..].chars();
    rest.next() == Some('.') && rest.next().is_some_and(char::is_whitespace)
}

/// `- ` / `• ` at the start of the text
pub fn starts_with_bullet_marker(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some('-' | '•')) && chars.next().is_some_and(char::is_whitespace)
}

/// Either list marker at the start of the text
pub fn starts_with_list_marker(text: &str) -> bool {
    starts_with_numbered_marker(text) || starts_with_bullet_marker(text)
}

/// Text before the first newline, or all of it
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or(text)
}

/// Lines with any content, kept untrimmed
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.trim().is_empty())
}

/// At least `min_count` non-blank lines and one of them longer than `threshold`
pub fn has_long_paragraphs(text: &str, min_count: usize, threshold: usize) -> bool {
    let paragraphs: Vec<&str> = non_blank_lines(text).collect();
    paragraphs.len() >= min_count && paragraphs.iter().any(|p| text_len(p) > threshold)
}
