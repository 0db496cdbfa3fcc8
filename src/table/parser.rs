// WHY: Pipe tables are recognized only with a header, a separator row and at least one data row

use crate::patterns::Patterns;

const MIN_COLUMNS: usize = 2;

/// Rectangular table: every row has exactly `headers.len()` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A table plus the trimmed text around it, borrowed from the searched text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMatch<'a> {
    pub before: &'a str,
    pub table: ParsedTable,
    pub after: &'a str,
}

fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

fn is_separator_row(patterns: &Patterns, line: &str) -> bool {
    patterns.table_separator.is_match(line.trim())
}

/// Cells of a `| a | b |` row, trimmed, outer pipes dropped
pub fn parse_cells(row: &str) -> Vec<String> {
    let trimmed = row.trim();
    let inner = trimmed
        .strip_prefix('|')
        .and_then(|s| s.strip_suffix('|'))
        .unwrap_or("");
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

fn fit_row(mut cells: Vec<String>, width: usize) -> Vec<String> {
    cells.resize(width, String::new());
    cells
}

/// Find the first well-formed markdown table in `text`
pub fn find_markdown_table<'a>(patterns: &Patterns, text: &'a str) -> Option<TableMatch<'a>> {
    let lines: Vec<&str> = text.split('\n').collect();
    let line_starts: Vec<usize> = lines
        .iter()
        .scan(0, |offset, line| {
            let start = *offset;
            *offset += line.len() + 1;
            Some(start)
        })
        .collect();

    for i in 0..lines.len().saturating_sub(1) {
        let header_line = lines[i];
        if !is_table_row(header_line) || !is_separator_row(patterns, lines[i + 1]) {
            continue;
        }

        let headers = parse_cells(header_line);
        if headers.len() < MIN_COLUMNS {
            continue;
        }

        let data_start = i + 2;
        let data_end = lines[data_start..]
            .iter()
            .position(|line| !is_table_row(line))
            .map_or(lines.len(), |offset| data_start + offset);
        if data_end == data_start {
            continue;
        }

        let rows = lines[data_start..data_end]
            .iter()
            .map(|line| fit_row(parse_cells(line), headers.len()))
            .collect();

        let after = line_starts.get(data_end).map_or("", |&start| &text[start..]);
        return Some(TableMatch {
            before: text[..line_starts[i]].trim(),
            table: ParsedTable { headers, rows },
            after: after.trim(),
        });
    }

    None
}
