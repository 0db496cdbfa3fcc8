// WHY: Boundary finders for list runs and markdown header blocks at the top of the text
// Both scan line by line so blank-line continuation rules stay explicit

use crate::patterns::{group, Patterns};
use crate::text::{starts_with_bullet_marker, starts_with_numbered_marker};

/// Kind of list found at the top of the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Numbered,
    Bullet,
}

/// Byte range of a contiguous list run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSection {
    pub start: usize,
    pub end: usize,
    pub kind: ListKind,
}

/// A `*Header*` / `_Header_` line and the body that belongs to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownSection<'a> {
    pub header: &'a str,
    pub content: &'a str,
    pub full_section: &'a str,
}

fn is_numbered_item(line: &str) -> bool {
    starts_with_numbered_marker(line.trim_start())
}

fn is_bullet_item(line: &str) -> bool {
    starts_with_bullet_marker(line.trim_start())
}

/// Byte length of `lines[..=last]` joined back with newlines
fn joined_len(lines: &[&str], last: usize) -> usize {
    lines[..=last].iter().map(|l| l.len()).sum::<usize>() + last
}

fn numbered_list_end(lines: &[&str]) -> usize {
    let mut in_list = false;
    let mut end_line = None;

    for (i, line) in lines.iter().enumerate() {
        if is_numbered_item(line) {
            in_list = true;
            end_line = Some(i);
        } else if in_list && is_bullet_item(line) {
            // sub-bullets stay with their numbered parent
            end_line = Some(i);
        } else if in_list && line.trim().is_empty() {
            let continues = lines[i + 1..]
                .iter()
                .find(|l| !l.trim().is_empty())
                .is_some_and(|l| is_numbered_item(l) || is_bullet_item(l));
            if !continues {
                break;
            }
        } else if in_list {
            break;
        }
    }

    end_line.map_or(0, |last| joined_len(lines, last))
}

fn bullet_list_end(lines: &[&str]) -> usize {
    let mut in_list = false;
    let mut end = 0;

    for (i, line) in lines.iter().enumerate() {
        if starts_with_bullet_marker(line.trim()) {
            in_list = true;
            end = joined_len(lines, i);
        } else if in_list && line.trim().is_empty() {
            let next_is_bullet = lines
                .get(i + 1)
                .is_some_and(|l| starts_with_bullet_marker(l.trim()));
            if !next_is_bullet {
                break;
            }
        } else if in_list {
            break;
        }
    }

    end
}

/// Locate a numbered or bullet list run starting at the top of `text`
pub fn find_list_section(text: &str) -> Option<ListSection> {
    let trimmed = text.trim();
    let lines: Vec<&str> = text.split('\n').collect();

    if starts_with_numbered_marker(trimmed) {
        return Some(ListSection {
            start: 0,
            end: numbered_list_end(&lines),
            kind: ListKind::Numbered,
        });
    }

    if starts_with_bullet_marker(trimmed) {
        return Some(ListSection {
            start: 0,
            end: bullet_list_end(&lines),
            kind: ListKind::Bullet,
        });
    }

    None
}

/// True when the text opens with a markdown header line
pub fn starts_with_markdown_header(patterns: &Patterns, text: &str) -> bool {
    patterns.markdown_header.is_match(text)
}

/// Locate a markdown header block at the top of `text`
pub fn find_markdown_section<'a>(patterns: &Patterns, text: &'a str) -> Option<MarkdownSection<'a>> {
    let mut caps = patterns.markdown_header.create_captures();
    patterns.markdown_header.captures(text, &mut caps);
    let header_match = caps.get_match()?;
    let header = group(&caps, text, "header");

    let after_header = &text[header_match.end()..];
    let end = match after_header.find("\n\n") {
        None => after_header.len(),
        Some(idx) => {
            let after_break = &after_header[idx + 2..];
            if starts_with_markdown_header(patterns, after_break) {
                idx
            } else if starts_with_bullet_marker(after_break.trim()) {
                after_header.len()
            } else {
                idx
            }
        }
    };

    Some(MarkdownSection {
        header,
        content: &after_header[..end],
        full_section: &text[..header_match.end() + end],
    })
}
