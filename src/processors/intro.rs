// WHY: A colon-terminated intro belongs in its own message ahead of the list or long
// paragraphs it announces, while a question with numbered answers must never be split

use super::{Split, StageContext};
use crate::config::RESPONSE_PROMPTS;
use crate::patterns::group;
use crate::text::{first_line, starts_with_numbered_marker, text_len};

fn ends_with_colon(line: &str) -> bool {
    line.trim().ends_with(':')
}

/// Cut an intro that carries a response prompt back to its last colon-terminated line
fn truncate_at_response_prompt(intro: &str) -> &str {
    if !RESPONSE_PROMPTS.iter().any(|prompt| intro.contains(prompt)) {
        return intro;
    }

    let mut end = None;
    let mut offset = 0;
    for line in intro.split('\n') {
        if ends_with_colon(line) {
            end = Some(offset + line.len());
        }
        offset += line.len() + 1;
    }
    end.map_or(intro, |end| &intro[..end])
}

/// `Intro: ...\n1. item` / `Intro:\n- item`: emit the intro line when it is short
pub fn process_intro_with_list<'a>(ctx: &StageContext<'_>, text: &'a str) -> Split<'a> {
    let re = &ctx.patterns.intro_with_list;
    let mut caps = re.create_captures();
    re.captures(text, &mut caps);
    let Some(intro_end) = caps.get_group_by_name("after_colon").map(|span| span.end) else {
        return Split::NotFound;
    };

    let intro = truncate_at_response_prompt(&text[..intro_end]);
    if text_len(intro) >= ctx.config.max_intro_length {
        return Split::NotFound;
    }
    Split::one(intro, text[intro.len()..].trim())
}

/// A question followed only by numbered options stays whole
pub fn process_question_with_list<'a>(ctx: &StageContext<'_>, text: &'a str) -> Split<'a> {
    let re = &ctx.patterns.question_with_list;
    let mut caps = re.create_captures();
    re.captures(text, &mut caps);
    if !caps.is_match() {
        return Split::NotFound;
    }

    let list = group(&caps, text, "list");
    let all_items = list
        .split('\n')
        .all(|line| line.trim().is_empty() || starts_with_numbered_marker(line.trim()));
    let item_count = list
        .split('\n')
        .filter(|line| starts_with_numbered_marker(line.trim()))
        .count();

    if all_items
        && text_len(text) < ctx.config.max_question_with_options_length
        && item_count >= ctx.config.min_list_items_for_options
    {
        Split::one(text, "")
    } else {
        Split::NotFound
    }
}

fn ends_with_list_marker(intro: &str) -> bool {
    let trimmed = intro.trim_end();
    let numbered = trimmed.strip_suffix('.').is_some_and(|head| {
        let digits = head.bytes().rev().take_while(u8::is_ascii_digit).count();
        (1..=2).contains(&digits)
    });
    numbered || trimmed.ends_with(['-', '•'])
}

/// `Intro:\n<paragraph over the long threshold>`: emit the intro alone
pub fn process_intro_with_long_paragraphs<'a>(ctx: &StageContext<'_>, text: &'a str) -> Split<'a> {
    let Some(newline) = text.find('\n') else {
        return Split::NotFound;
    };
    if text_len(&text[..newline]) >= ctx.config.first_newline_search_limit {
        return Split::NotFound;
    }

    let intro = text[..newline].trim();
    if !intro.ends_with(':') || ends_with_list_marker(intro) {
        return Split::NotFound;
    }

    let after_intro = &text[newline + 1..];
    if text_len(first_line(after_intro).trim()) > ctx.config.long_paragraph_threshold {
        Split::one(intro, after_intro)
    } else {
        Split::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::test_support::{found, run};

    #[test]
    fn test_intro_before_numbered_list() {
        let (emitted, rest) = found(run(process_intro_with_list, "Datos:\n1. Nombre\n2. Email"));
        assert_eq!(emitted, vec!["Datos:"]);
        assert_eq!(rest, "1. Nombre\n2. Email");
    }

    #[test]
    fn test_intro_keeps_text_after_colon() {
        let (emitted, rest) = found(run(
            process_intro_with_list,
            "Opciones: elige una\n\n- Roja\n- Azul",
        ));
        assert_eq!(emitted, vec!["Opciones: elige una"]);
        assert_eq!(rest, "- Roja\n- Azul");
    }

    #[test]
    fn test_long_intro_is_not_split() {
        let text = format!("{}:\n- Roja\n- Azul", "a".repeat(160));
        assert_eq!(run(process_intro_with_list, &text), Split::NotFound);
    }

    #[test]
    fn test_intro_requires_list_after_newline() {
        assert_eq!(run(process_intro_with_list, "Hora: 10:30\nNos vemos"), Split::NotFound);
    }

    #[test]
    fn test_response_prompt_truncation() {
        assert_eq!(truncate_at_response_prompt("Hola:\nPuedes responder con: ya"), "Hola:");
        assert_eq!(truncate_at_response_prompt("Sin prompt: nada"), "Sin prompt: nada");
    }

    #[test]
    fn test_question_with_numbered_options_stays_whole() {
        let text = "¿Qué color prefieres?\n1. Rojo\n2. Azul\n";
        let (emitted, rest) = found(run(process_question_with_list, text));
        assert_eq!(emitted, vec![text]);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_question_with_mixed_lines_is_not_claimed() {
        assert_eq!(
            run(process_question_with_list, "¿Qué color?\n1. Rojo\nOtra cosa"),
            Split::NotFound
        );
        assert_eq!(run(process_question_with_list, "¿Qué color?\n1. Rojo"), Split::NotFound);
    }

    #[test]
    fn test_intro_before_long_paragraph() {
        let long = "b".repeat(160);
        let text = format!("Te cuento:\n{long}\nFin");
        let (emitted, rest) = found(run(process_intro_with_long_paragraphs, &text));
        assert_eq!(emitted, vec!["Te cuento:"]);
        assert_eq!(rest, format!("{long}\nFin"));
    }

    #[test]
    fn test_intro_before_short_paragraph_declines() {
        assert_eq!(
            run(process_intro_with_long_paragraphs, "Te cuento:\nalgo corto"),
            Split::NotFound
        );
        assert!(ends_with_list_marker("Paso 1."));
        assert!(ends_with_list_marker("Items -"));
        assert!(!ends_with_list_marker("Te cuento:"));
    }
}
