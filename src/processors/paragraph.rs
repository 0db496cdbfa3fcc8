// WHY: Long paragraphs are messages of their own, and a markdown header keeps its body

use super::{has_question_with_options, Split, StageContext};
use crate::sections::find_markdown_section;
use crate::text::{has_long_paragraphs, text_len};

/// `Intro:\n<paragraphs, one of them long>`: emit the intro line
pub fn process_long_paragraphs_after_intro<'a>(ctx: &StageContext<'_>, text: &'a str) -> Split<'a> {
    let Some(newline) = text.find('\n') else {
        return Split::NotFound;
    };
    let first_line = &text[..newline];
    if text_len(first_line) >= ctx.config.first_newline_search_limit
        || !first_line.trim().ends_with(':')
    {
        return Split::NotFound;
    }

    let after_intro = &text[newline + 1..];
    if has_long_paragraphs(
        after_intro,
        ctx.config.min_list_items_for_options,
        ctx.config.long_paragraph_threshold,
    ) {
        Split::one(first_line.trim(), after_intro)
    } else {
        Split::NotFound
    }
}

/// A long first line followed by more text: emit the first line
pub fn process_long_paragraph_sequence<'a>(ctx: &StageContext<'_>, text: &'a str) -> Split<'a> {
    let Some(newline) = text.find('\n') else {
        return Split::NotFound;
    };

    let first_paragraph = text[..newline].trim();
    if text_len(first_paragraph) <= ctx.config.long_paragraph_threshold {
        return Split::NotFound;
    }

    let after = text[newline + 1..].trim();
    if has_question_with_options(ctx.patterns, after) {
        return Split::NotFound;
    }
    Split::one(first_paragraph, after)
}

/// Emit a `*Header*` block together with its body
pub fn process_markdown_section<'a>(ctx: &StageContext<'_>, text: &'a str) -> Split<'a> {
    match find_markdown_section(ctx.patterns, text) {
        Some(section) => Split::one(
            section.full_section.trim(),
            text[section.full_section.len()..].trim(),
        ),
        None => Split::NotFound,
    }
}
