use super::{Split, StageContext};
use crate::table::{find_markdown_table, format_table};

/// Emit the text before a markdown table, then the rendered table
pub fn process_markdown_table<'a>(ctx: &StageContext<'_>, text: &'a str) -> Split<'a> {
    let Some(found) = find_markdown_table(ctx.patterns, text) else {
        return Split::NotFound;
    };

    let mut emitted = Vec::new();
    if !found.before.is_empty() {
        emitted.push(found.before.to_string());
    }
    emitted.extend(format_table(ctx.patterns, &found.table, ctx.config.table_max_width));

    Split::Found {
        emitted,
        rest: found.after,
    }
}
