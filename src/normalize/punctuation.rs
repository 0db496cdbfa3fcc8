// WHY: An inverted mark in the middle of a sentence does not start a capitalized clause
// ("Hola. ¿Te gusta?" keeps its case, "Hola, ¿Te gusta?" becomes "Hola, ¿te gusta?")

use crate::text::is_case_letter;

const SPANISH_MARKS: [char; 2] = ['¿', '¡'];

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn lowercase_after_mark(chars: &mut [char], mark_index: usize) {
    let Some(next_index) = (mark_index + 1..chars.len()).find(|&i| chars[i] != ' ') else {
        return;
    };
    let next = chars[next_index];
    if !is_case_letter(next) {
        return;
    }

    let mut prev_index = None;
    let mut saw_line_break = false;
    for i in (0..mark_index).rev() {
        let c = chars[i];
        if !c.is_whitespace() {
            prev_index = Some(i);
            break;
        }
        if c == '\n' {
            saw_line_break = true;
        }
    }

    let Some(prev_index) = prev_index else { return };
    if is_sentence_end(chars[prev_index]) || saw_line_break {
        return;
    }
    if !chars[..mark_index].iter().any(|&c| is_case_letter(c)) {
        return;
    }

    if next.is_uppercase() {
        if let Some(lower) = next.to_lowercase().next() {
            chars[next_index] = lower;
        }
    }
}

/// Lowercase the letter after a mid-sentence `¿` or `¡`
pub fn normalize_spanish_punctuation(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for mark in SPANISH_MARKS {
        for i in 0..chars.len() {
            if chars[i] == mark {
                lowercase_after_mark(&mut chars, i);
            }
        }
    }
    chars.into_iter().collect()
}
