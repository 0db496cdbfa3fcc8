// WHY: A list is one message unless its items are long enough to read as separate messages

use super::{Split, StageContext};
use crate::sections::{find_list_section, ListKind};
use crate::text::{starts_with_bullet_marker, starts_with_numbered_marker, text_len};

/// Split `list` at every newline whose next line opens a new item, dropping blank items
fn split_items(list: &str, opens_item: fn(&str) -> bool) -> Vec<&str> {
    let mut items = Vec::new();
    let mut start = 0;
    for (newline, _) in list.match_indices('\n') {
        if opens_item(&list[newline + 1..]) {
            items.push(&list[start..newline]);
            start = newline + 1;
        }
    }
    items.push(&list[start..]);
    items.retain(|item| !item.trim().is_empty());
    items
}

fn should_split_numbered(ctx: &StageContext<'_>, items: &[&str]) -> bool {
    let lengths: Vec<usize> = items.iter().map(|item| text_len(item)).collect();
    let has_huge_item = lengths.iter().any(|&len| len > ctx.config.huge_item_threshold);
    let average = lengths.iter().sum::<usize>() as f64 / lengths.len().max(1) as f64;
    let has_long_items = average > ctx.config.avg_item_length_threshold as f64;
    has_huge_item || (has_long_items && items.len() <= ctx.config.max_items_for_long_split)
}

fn should_split_bullets(ctx: &StageContext<'_>, items: &[&str]) -> bool {
    items
        .iter()
        .any(|item| text_len(item) > ctx.config.huge_item_threshold)
}

/// Emit the list at the top of the text, whole or one chunk per item
pub fn process_list_section<'a>(ctx: &StageContext<'_>, text: &'a str) -> Split<'a> {
    let Some(section) = find_list_section(text) else {
        return Split::NotFound;
    };
    if section.end == 0 {
        return Split::NotFound;
    }

    let list = &text[section.start..section.end];
    let (items, split_per_item) = match section.kind {
        ListKind::Numbered => {
            let items = split_items(list, starts_with_numbered_marker);
            let split = should_split_numbered(ctx, &items);
            (items, split)
        }
        ListKind::Bullet => {
            let items = split_items(list, starts_with_bullet_marker);
            let split = should_split_bullets(ctx, &items);
            (items, split)
        }
    };

    let emitted = if split_per_item {
        items.iter().map(|item| item.trim().to_string()).collect()
    } else {
        vec![list.trim().to_string()]
    };

    Split::Found {
        emitted,
        rest: text[section.end..].trim(),
    }
}
