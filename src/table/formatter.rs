// WHY: Narrow tables read best as an aligned monospace block, wide ones as one labeled message per row

use regex_automata::meta::Regex;

use super::parser::ParsedTable;
use crate::patterns::{group, replace_all, Patterns};
use crate::text::text_len;

/// Width contributed by the space between two monospace columns
pub const COLUMN_SEPARATOR_WIDTH: usize = 3;

const FENCE: &str = "```";

fn keep_content(re: &Regex, input: &str) -> String {
    replace_all(re, input, |caps| group(caps, input, "content").to_string())
}

/// Remove bold, italic, inline code and link markup, keeping the visible text
pub fn strip_markdown(patterns: &Patterns, text: &str) -> String {
    let result = keep_content(&patterns.md_bold, text);
    let result = keep_content(&patterns.md_italic, &result);
    let result = keep_content(&patterns.md_code, &result);
    keep_content(&patterns.md_link, &result)
}

/// Convert markdown emphasis to chat markup: `**x**` → `*x*`, `*x*` → `_x_`; code and links are unwrapped
pub fn transform_markdown_to_chat(patterns: &Patterns, text: &str) -> String {
    let result = replace_all(&patterns.md_bold_or_italic, text, |caps| {
        let Some(m) = caps.get_match() else {
            return String::new();
        };
        let emphasis = &text[m.range()];
        match emphasis.strip_prefix("**").and_then(|s| s.strip_suffix("**")) {
            Some(inner) => format!("*{inner}*"),
            None => format!("_{}_", &emphasis[1..emphasis.len() - 1]),
        }
    });
    let result = keep_content(&patterns.md_code, &result);
    keep_content(&patterns.md_link, &result)
}

/// Display width of every column, measured on stripped text
pub fn column_widths(patterns: &Patterns, table: &ParsedTable) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            table
                .rows
                .iter()
                .map(|row| row.get(col).map_or(0, |cell| text_len(&strip_markdown(patterns, cell))))
                .fold(text_len(&strip_markdown(patterns, header)), usize::max)
        })
        .collect()
}

/// Content width plus the separators between columns
pub fn table_real_width(widths: &[usize]) -> usize {
    let content: usize = widths.iter().sum();
    content + widths.len().saturating_sub(1) * COLUMN_SEPARATOR_WIDTH
}

fn pad_to_width(text: String, width: usize) -> String {
    let padding = width.saturating_sub(text_len(&text));
    text + &" ".repeat(padding)
}

fn monospace_row(patterns: &Patterns, cells: &[String], widths: &[usize]) -> String {
    let last = cells.len().saturating_sub(1);
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            let stripped = strip_markdown(patterns, cell);
            if i < last {
                pad_to_width(stripped, width)
            } else {
                stripped
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Option A: one fenced block, columns padded to align
pub fn format_as_monospace(patterns: &Patterns, table: &ParsedTable, widths: &[usize]) -> String {
    let rows: Vec<String> = std::iter::once(&table.headers)
        .chain(&table.rows)
        .map(|cells| monospace_row(patterns, cells, widths))
        .collect();
    format!("{FENCE}\n{}\n{FENCE}", rows.join("\n"))
}

/// Option B body for a single row: `*Header:* value` per column
pub fn format_row_chunk(patterns: &Patterns, headers: &[String], row: &[String]) -> String {
    headers
        .iter()
        .zip(row)
        .map(|(header, value)| {
            format!(
                "*{}:* {}",
                strip_markdown(patterns, header),
                transform_markdown_to_chat(patterns, value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Option B: one chunk per data row
pub fn format_as_row_chunks(patterns: &Patterns, table: &ParsedTable) -> Vec<String> {
    table
        .rows
        .iter()
        .map(|row| format_row_chunk(patterns, &table.headers, row))
        .collect()
}

/// Render a table, choosing the monospace block when it fits `max_width`
pub fn format_table(patterns: &Patterns, table: &ParsedTable, max_width: usize) -> Vec<String> {
    let widths = column_widths(patterns, table);
    if table_real_width(&widths) <= max_width {
        vec![format_as_monospace(patterns, table, &widths)]
    } else {
        format_as_row_chunks(patterns, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::test_patterns;

    fn table(headers: &[&str], rows: &[&[&str]]) -> ParsedTable {
        ParsedTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_strip_markdown() {
        let p = test_patterns();
        assert_eq!(strip_markdown(p, "**Nike Air**"), "Nike Air");
        assert_eq!(strip_markdown(p, "*Adidas*"), "Adidas");
        assert_eq!(strip_markdown(p, "`npm install`"), "npm install");
        assert_eq!(strip_markdown(p, "[Download](https://git.com)"), "Download");
    }

    #[test]
    fn test_transform_to_chat_markup() {
        let p = test_patterns();
        assert_eq!(transform_markdown_to_chat(p, "**Bold**"), "*Bold*");
        assert_eq!(transform_markdown_to_chat(p, "*Italic*"), "_Italic_");
        assert_eq!(transform_markdown_to_chat(p, "`print(\"Hello\")`"), "print(\"Hello\")");
        assert_eq!(transform_markdown_to_chat(p, "[Click me](#)"), "Click me");
        assert_eq!(transform_markdown_to_chat(p, "**a** y *b*"), "*a* y _b_");
    }

    #[test]
    fn test_monospace_alignment() {
        let p = test_patterns();
        let t = table(&["Name", "City"], &[&["John", "New York"], &["Sarah", "Miami"]]);
        let out = format_table(p, &t, 47);
        assert_eq!(out, vec!["```\nName  City\nJohn  New York\nSarah Miami\n```"]);
    }

    #[test]
    fn test_width_threshold_boundary() {
        let p = test_patterns();
        let t = table(
            &["Column A", "Column B"],
            &[&["12345678901234567890", "123456789012345678901234"]],
        );
        let widths = column_widths(p, &t);
        assert_eq!(widths, vec![20, 24]);
        assert_eq!(table_real_width(&widths), 47);
        assert!(format_table(p, &t, 47)[0].starts_with("```"));
        assert!(format_table(p, &t, 46)[0].starts_with("*Column A:*"));
    }

    #[test]
    fn test_row_chunks() {
        let p = test_patterns();
        let t = table(
            &["Feature", "Example"],
            &[&["**Bold**", "**Important**"], &["*Italic*", "*Emphasized*"]],
        );
        let out = format_as_row_chunks(p, &t);
        assert_eq!(out[0], "*Feature:* *Bold*\n*Example:* *Important*");
        assert_eq!(out[1], "*Feature:* _Italic_\n*Example:* _Emphasized_");
    }
}
