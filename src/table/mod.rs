// WHY: Markdown pipe tables are parsed once and rendered in a chat-friendly shape

pub mod formatter;
pub mod parser;

pub use formatter::{format_table, strip_markdown, transform_markdown_to_chat};
pub use parser::{find_markdown_table, parse_cells, ParsedTable, TableMatch};
