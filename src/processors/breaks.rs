// WHY: A blank line is the author's own message boundary, except where it separates a
// question or prompt from the options that answer it

use super::{has_question_with_options, Split, StageContext};
use crate::config::RESPONSE_PROMPTS;
use crate::sections::starts_with_markdown_header;
use crate::text::{first_line, has_long_paragraphs, smart_trim, starts_with_bullet_marker, text_len};

/// `¿...?\n\nShort intro:\n- option`
fn is_question_with_short_intro_bullets(ctx: &StageContext<'_>, before: &str, after: &str) -> bool {
    let intro = first_line(after).trim();
    before.trim().ends_with('?')
        && text_len(intro) < ctx.config.short_intro_threshold
        && intro.ends_with(':')
        && after.contains("\n-")
}

/// `... puedes responder con:\n\n- option`
fn is_response_prompt_with_bullets(before: &str, after: &str) -> bool {
    let before = before.trim();
    RESPONSE_PROMPTS.iter().any(|prompt| before.ends_with(prompt))
        && starts_with_bullet_marker(after.trim())
}

/// Split at the first double newline once enough text precedes it
pub fn process_section_breaks<'a>(ctx: &StageContext<'_>, text: &'a str) -> Split<'a> {
    let Some(idx) = text.find("\n\n") else {
        return Split::NotFound;
    };
    let before = &text[..idx];
    if text_len(before) <= ctx.config.min_content_before_break {
        return Split::NotFound;
    }
    let after = &text[idx + 2..];

    if starts_with_markdown_header(ctx.patterns, after) {
        return Split::one(before.trim(), after);
    }

    if smart_trim(after).is_empty()
        || has_long_paragraphs(
            before,
            ctx.config.min_list_items_for_options,
            ctx.config.long_paragraph_threshold,
        )
    {
        return Split::NotFound;
    }

    let keep_together = is_question_with_short_intro_bullets(ctx, before, after)
        || is_response_prompt_with_bullets(before, after)
        || has_question_with_options(ctx.patterns, after);
    if keep_together {
        Split::NotFound
    } else {
        Split::one(before, after)
    }
}
