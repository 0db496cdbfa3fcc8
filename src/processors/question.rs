// WHY: A question usually ends a message, but not when the next words continue it, when only
// emoji follow, or when a short follow-up sentence reads as part of the same thought
//
// Flow: collect valid `?` positions → classify (contiguous group or single) → split

use super::{Split, StageContext};
use crate::position::{is_position_in_bullet_line, is_position_inside_parentheses};
use crate::text::{
    find_position_after_emoji, first_line, has_text_content, is_parenthetical_clarification,
    smart_trim, starts_with_emoji, starts_with_lowercase, text_len,
};

/// `?\n\nShort intro:\n- option` right after the mark; the break stage keeps those together
fn has_response_options_after(ctx: &StageContext<'_>, after_question: &str) -> bool {
    let Some(idx) = after_question.find("\n\n") else {
        return false;
    };
    if text_len(&after_question[..idx]) >= ctx.config.double_newline_distance_threshold {
        return false;
    }

    let after_break = &after_question[idx + 2..];
    let intro = first_line(after_break).trim();
    text_len(intro) < ctx.config.short_intro_threshold
        && intro.ends_with(':')
        && after_break.contains("\n-")
}

fn is_valid_question_position(ctx: &StageContext<'_>, text: &str, position: usize) -> bool {
    !is_position_in_bullet_line(text, position)
        && !is_position_inside_parentheses(text, position)
        && !has_response_options_after(ctx, &text[position + 1..])
}

/// Byte offsets of every `?` that may end a chunk
fn find_valid_question_indices(ctx: &StageContext<'_>, text: &str) -> Vec<usize> {
    text.match_indices('?')
        .map(|(idx, _)| idx)
        .filter(|&idx| is_valid_question_position(ctx, text, idx))
        .collect()
}

/// Split after `question`, pulling a leading emoji run into the question chunk
fn split_after_question<'a>(ctx: &StageContext<'_>, question: &str, after: &'a str) -> Split<'a> {
    if starts_with_lowercase(after) {
        return Split::NotFound;
    }

    if starts_with_emoji(ctx.patterns, after) {
        let emoji_end = find_position_after_emoji(ctx.patterns, after);
        let text_after = smart_trim(&after[emoji_end..]);
        if text_after.is_empty() {
            return Split::NotFound;
        }
        return Split::one(format!("{question} {}", &after[..emoji_end]), text_after);
    }

    Split::one(question, after)
}

/// A short question and a short follow-up sentence stay in one chunk
fn combines_with_next_sentence(ctx: &StageContext<'_>, question: &str, after: &str) -> bool {
    match after.find('.') {
        Some(dot) if dot + 1 < after.len() => {
            let combined = text_len(question) + 1 + text_len(&after[..=dot]);
            combined <= ctx.config.combined_length_threshold
        }
        _ => false,
    }
}

/// `... (XS, S o M)? Texto`: split after the clarification when real text follows it
fn split_after_clarification<'a>(
    ctx: &StageContext<'_>,
    text: &'a str,
    question_index: usize,
    after: &'a str,
) -> Split<'a> {
    let Some(clarification) = ctx.patterns.parenthetical.find(after) else {
        return Split::NotFound;
    };
    let after_clarification = smart_trim(&after[clarification.end()..]);
    if !has_text_content(after_clarification) {
        return Split::NotFound;
    }

    let raw = &text[question_index + 1..];
    let offset = raw.find(&after[clarification.range()]).unwrap_or(0);
    let end = question_index + 1 + offset + clarification.len();
    Split::one(&text[..end], after_clarification)
}

fn process_single_question<'a>(ctx: &StageContext<'_>, text: &'a str, question_index: usize) -> Split<'a> {
    if question_index + 1 >= text.len() {
        return Split::NotFound;
    }

    let after = smart_trim(&text[question_index + 1..]);
    if is_parenthetical_clarification(ctx.patterns, after) {
        return split_after_clarification(ctx, text, question_index, after);
    }
    if !has_text_content(after) {
        return Split::NotFound;
    }

    let question = &text[..=question_index];
    let is_long = text_len(question) > ctx.config.long_question_threshold;
    if !is_long && combines_with_next_sentence(ctx, question, after) {
        return Split::NotFound;
    }
    split_after_question(ctx, question, after)
}

fn process_contiguous_questions<'a>(ctx: &StageContext<'_>, text: &'a str, last_index: usize) -> Split<'a> {
    if last_index + 1 >= text.len() {
        return Split::NotFound;
    }

    let raw = &text[last_index + 1..];
    let after = smart_trim(raw);
    if !has_text_content(after) {
        return Split::NotFound;
    }

    let questions = &text[..=last_index];
    let space = if raw.starts_with(' ') { " " } else { "" };

    if starts_with_emoji(ctx.patterns, after) {
        let emoji_end = find_position_after_emoji(ctx.patterns, after);
        let text_after = smart_trim(&after[emoji_end..]);
        if text_after.is_empty() {
            return Split::NotFound;
        }
        return Split::one(format!("{questions}{space}{}", &after[..emoji_end]), text_after);
    }

    Split::one(format!("{questions}{space}"), after)
}

/// Split after a question mark (or a run of closely grouped ones)
pub fn process_question_marks<'a>(ctx: &StageContext<'_>, text: &'a str) -> Split<'a> {
    let indices = find_valid_question_indices(ctx, text);
    let (Some(&first), Some(&last)) = (indices.first(), indices.last()) else {
        return Split::NotFound;
    };

    let contiguous = indices.len() > 1 && {
        let between = &text[first + 1..last];
        !between.contains('.')
            && text_len(smart_trim(between)) < ctx.config.contiguous_questions_text_threshold
    };

    if contiguous {
        process_contiguous_questions(ctx, text, last)
    } else {
        process_single_question(ctx, text, first)
    }
}
