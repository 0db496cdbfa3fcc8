pub mod config;
pub mod normalize;
pub mod patterns;
pub mod position;
pub mod processors;
pub mod sections;
pub mod splitter;
pub mod table;
pub mod text;

// Re-export the main entry points
pub use config::SplitConfig;
pub use patterns::Patterns;
pub use splitter::{split_chat_text, ChatSplitter};

// Re-export the narrow helpers for direct testing and reuse
pub use normalize::{
    normalize_inline_numbered_list, normalize_inline_product_card_list,
    normalize_spanish_punctuation, remove_periods_after_urls,
};
pub use position::{is_position_in_bullet_line, is_position_inside_parentheses};
pub use processors::{merge_small_chunks, Split, StageContext};
pub use sections::{find_list_section, find_markdown_section, ListKind, ListSection, MarkdownSection};
pub use table::{
    find_markdown_table, format_table, parse_cells, strip_markdown, transform_markdown_to_chat,
    ParsedTable, TableMatch,
};
pub use text::{
    find_position_after_emoji, has_text_content, smart_trim, starts_with_emoji,
    starts_with_lowercase, text_len,
};
