// WHY: Product cards are sent one per message; the last card often carries the closing
// question, which reads better as its own message

use regex_automata::{meta::Regex, Input};

use super::{Split, StageContext};
use crate::patterns::{group, matches_at, replace_first, Patterns};

/// How the cards in a list are marked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardStyle {
    /// `1. 🛍️ Title` or `**1. 🛍️ Title**`
    Emoji,
    /// `1. **Title**` followed by a metadata emoji line
    Markdown,
}

fn detect_style(patterns: &Patterns, text: &str) -> Option<CardStyle> {
    if patterns.card_emoji_marker.is_match(text) {
        Some(CardStyle::Emoji)
    } else if patterns.card_markdown_detect.is_match(text) {
        Some(CardStyle::Markdown)
    } else {
        None
    }
}

/// A card runs to the first blank line or next card marker, or to the end of the text
fn card_end(end_re: &Regex, text: &str, from: usize) -> usize {
    text[from..]
        .match_indices('\n')
        .map(|(offset, _)| from + offset)
        .find(|&newline| matches_at(end_re, text, newline))
        .unwrap_or(text.len())
}

/// Trimmed cards in order, plus the byte offset where the last card ended
fn extract_cards<'t>(start_re: &Regex, end_re: &Regex, text: &'t str) -> (Vec<&'t str>, usize) {
    let mut cards = Vec::new();
    let mut pos = 0;

    while let Some(start) = start_re.find(Input::new(text).range(pos..)) {
        let end = card_end(end_re, text, start.end());
        cards.push(text[start.start()..end].trim());
        pos = end;
    }

    (cards, pos)
}

fn strip_number_prefix(card: &str) -> &str {
    let digits = card.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return card;
    }
    let Some(after_dot) = card[digits..].strip_prefix('.') else {
        return card;
    };
    let body = after_dot.trim_start();
    if body.len() == after_dot.len() {
        card
    } else {
        body
    }
}

/// Drop the card number, keeping any emphasis asterisks that wrapped it
fn clean_card(patterns: &Patterns, style: CardStyle, card: &str) -> String {
    match style {
        CardStyle::Emoji => replace_first(&patterns.card_emoji_prefix, card, |caps| {
            group(caps, card, "stars").to_string()
        }),
        CardStyle::Markdown => strip_number_prefix(card).to_string(),
    }
}

/// Split a card into its content and a trailing `¿...?` question when one is present
fn split_trailing_question(patterns: &Patterns, card: &str) -> Option<Vec<String>> {
    let lines: Vec<&str> = card.split('\n').collect();

    let (content, question) = match lines.iter().position(|line| line.trim().starts_with('¿')) {
        Some(idx) => (lines[..idx].join("\n"), lines[idx..].join(" ")),
        None => {
            let re = &patterns.card_question_line;
            let mut caps = re.create_captures();
            let idx = lines.iter().position(|line| {
                re.captures(*line, &mut caps);
                caps.is_match()
            })?;
            let line = lines[idx];

            let mut content_lines = lines[..idx].to_vec();
            content_lines.push(group(&caps, line, "before"));
            let question_parts: Vec<&str> = std::iter::once(group(&caps, line, "question"))
                .chain(lines[idx + 1..].iter().copied())
                .collect();
            (content_lines.join("\n"), question_parts.join(" "))
        }
    };

    Some(
        [content.trim(), question.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Emit the intro, then one chunk per product card
pub fn process_product_card_lists<'a>(ctx: &StageContext<'_>, text: &'a str) -> Split<'a> {
    let patterns = ctx.patterns;
    let Some(style) = detect_style(patterns, text) else {
        return Split::NotFound;
    };

    let (marker, start_re, end_re) = match style {
        CardStyle::Emoji => (
            &patterns.card_emoji_marker,
            &patterns.card_emoji_marker,
            &patterns.card_emoji_end,
        ),
        CardStyle::Markdown => (
            &patterns.card_markdown_marker,
            &patterns.card_markdown_start,
            &patterns.card_markdown_end,
        ),
    };
    let Some(first) = marker.find(text) else {
        return Split::NotFound;
    };

    let mut emitted = Vec::new();
    let intro = text[..first.start()].trim();
    if !intro.is_empty() {
        emitted.push(intro.to_string());
    }

    let cards_text = text[first.start()..].trim();
    let (cards, cards_end) = extract_cards(start_re, end_re, cards_text);
    let last_index = cards.len().saturating_sub(1);

    for (i, card) in cards.into_iter().enumerate() {
        if card.is_empty() {
            continue;
        }
        let cleaned = clean_card(patterns, style, card);
        if i == last_index {
            if let Some(parts) = split_trailing_question(patterns, &cleaned) {
                emitted.extend(parts);
                continue;
            }
        }
        emitted.push(cleaned);
    }

    Split::Found {
        emitted,
        rest: cards_text[cards_end..].trim_start(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::test_patterns;
    use crate::processors::test_support::{found, run};

    #[test]
    fn test_emoji_cards_with_closing_question() {
        let text = "¡Mira estas opciones!\n**1. 🛍️ Tenis Nike**\n💵 $100\n**2. 🛍️ Botas**\n💵 $200\n¿Cuál te gusta?";
        let (emitted, rest) = found(run(process_product_card_lists, text));
        assert_eq!(
            emitted,
            vec![
                "¡Mira estas opciones!",
                "**🛍️ Tenis Nike**\n💵 $100",
                "**🛍️ Botas**\n💵 $200",
                "¿Cuál te gusta?",
            ]
        );
        assert_eq!(rest, "");
    }

    #[test]
    fn test_markdown_cards_with_inline_question() {
        let text = "Te recomiendo:\n1. **Tenis Runner**\n💵 $120\n✅ Livianos\n\n2. **Botas Trek**\n💵 $180 ¿Te gusta alguno?\n\nGracias";
        let (emitted, rest) = found(run(process_product_card_lists, text));
        assert_eq!(
            emitted,
            vec![
                "Te recomiendo:",
                "**Tenis Runner**\n💵 $120\n✅ Livianos",
                "**Botas Trek**\n💵 $180",
                "¿Te gusta alguno?",
            ]
        );
        assert_eq!(rest, "Gracias");
    }

    #[test]
    fn test_plain_numbered_list_is_not_a_card_list() {
        assert_eq!(
            run(process_product_card_lists, "1. Uno\n2. Dos"),
            Split::NotFound
        );
        assert_eq!(
            run(process_product_card_lists, "1. **Negrita** sin metadatos"),
            Split::NotFound
        );
    }

    #[test]
    fn test_number_prefix_stripping() {
        assert_eq!(strip_number_prefix("12. **Título**"), "**Título**");
        assert_eq!(strip_number_prefix("1.**Pegado**"), "1.**Pegado**");
        assert_eq!(strip_number_prefix("Sin número"), "Sin número");
    }

    #[test]
    fn test_last_card_without_question_stays_whole() {
        let p = test_patterns();
        assert_eq!(split_trailing_question(p, "**🛍️ Botas**\n💵 $200"), None);
        assert_eq!(
            split_trailing_question(p, "**🛍️ Botas**\n¿Te gustan?\n😊"),
            Some(vec!["**🛍️ Botas**".to_string(), "¿Te gustan? 😊".to_string()])
        );
    }
}
