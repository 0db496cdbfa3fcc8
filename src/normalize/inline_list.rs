// WHY: Models often emit "Datos: 1. Nombre 2. Email" on one line; lists only split cleanly
// once every item starts its own line

use crate::config::{SplitConfig, PRODUCT_CARD_EMOJI};
use crate::patterns::{group, replace_all, replace_first, Patterns};

/// Break an inline numbered list ("Datos: 1. Nombre 2. Email") onto separate lines
pub fn normalize_inline_numbered_list(patterns: &Patterns, config: &SplitConfig, text: &str) -> String {
    if patterns.list_already_formatted.is_match(text) {
        return text.to_string();
    }
    if !patterns.list_inline_after_colon.is_match(text)
        && !patterns.list_inline_after_punct.is_match(text)
    {
        return text.to_string();
    }

    replace_all(&patterns.list_inline_item, text, |caps| {
        let Some(m) = caps.get_match() else {
            return String::new();
        };
        let whole = &text[m.range()];
        let before = group(caps, text, "before");
        let num = group(caps, text, "num");
        let after = group(caps, text, "after");

        // "v1 2." style version numbers are not list items
        let preceded_by_digit = text[..m.start()]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_digit());
        let too_large = num.parse::<u32>().map_or(true, |n| n > config.max_list_number);
        if too_large || preceded_by_digit {
            return whole.to_string();
        }

        if num == "1" && before == ":" {
            format!(":\n{num}. {after}")
        } else if before.trim().is_empty() || before == ":" {
            format!("\n{num}. {after}")
        } else {
            whole.to_string()
        }
    })
}

/// True when `text` ends with a card number such as "**2." or "\n2.", not a sentence like "42, 43."
fn ends_with_card_number(text: &str) -> bool {
    let Some(rest) = text.strip_suffix('.') else {
        return false;
    };
    let prefix = rest.trim_end_matches(|c: char| c.is_ascii_digit());
    if prefix.len() == rest.len() {
        return false;
    }
    prefix.is_empty() || prefix.ends_with('\n') || prefix.ends_with('*')
}

/// Give inline product cards ("**1. 🛍️ X** 💵 ... **2. 🛍️ Y** ...") one line per card and metadata field
pub fn normalize_inline_product_card_list(patterns: &Patterns, text: &str) -> String {
    let has_inline_cards = patterns.cards_inline_multiple.is_match(text)
        || patterns.cards_inline_titled.is_match(text)
        || patterns.cards_inline_single.is_match(text);
    if !has_inline_cards {
        return text.to_string();
    }

    // each later card starts a new line
    let result = replace_all(&patterns.card_break, text, |caps| {
        format!("{}\n{}", group(caps, text, "punct"), group(caps, text, "card"))
    });

    // metadata emoji start their own line, but only inside the card area
    let result = match result.find(PRODUCT_CARD_EMOJI) {
        Some(first_card) => {
            let (intro, cards) = result.split_at(first_card);
            let cards = replace_all(&patterns.card_emoji_line, cards, |caps| {
                let before = group(caps, cards, "before");
                let emoji = group(caps, cards, "emoji");
                let before_end = caps.get_group_by_name("before").map_or(0, |span| span.end);
                if ends_with_card_number(&cards[..before_end]) {
                    let whole = caps.get_match().map_or("", |m| &cards[m.range()]);
                    return whole.to_string();
                }
                format!("{before}\n{emoji}")
            });
            format!("{intro}{cards}")
        }
        None => result,
    };

    // a closing question gets its own line
    replace_first(&patterns.card_trailing_question, &result, |caps| {
        format!(
            "{}\n{}",
            group(caps, &result, "punct"),
            group(caps, &result, "question").trim()
        )
    })
}
