// WHY: Every tuning threshold lives in one serde-loadable struct so deployments can
// override values from JSON while defaults reproduce the tuned production behavior

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Abbreviations whose trailing period never ends a sentence (matched case-insensitively)
pub const PROTECTED_ABBREVIATIONS: &[&str] = &[
    "etc", "e\\.g", "i\\.e", "dr", "mr", "mrs", "ms", "prof", "sr", "jr", "inc", "ltd", "co", "corp",
];

/// Top-level and country-code domains recognized in plain (scheme-less) domain names
pub const DOMAIN_SUFFIXES: &[&str] = &[
    "com", "co", "net", "org", "edu", "gov", "io", "ai", "app", "dev", "ly", "me", "tv", "info",
    "biz", "tech", "store", "shop", "online", "site", "web", "blog", "news", "uk", "ca", "au", "de",
    "fr", "es", "it", "nl", "mx", "ar", "br", "cl", "pe", "ve", "uy", "py", "bo", "gt", "hn", "sv",
    "cr", "pa", "ni", "do", "cu", "pr",
];

/// Phrases that introduce a bullet list of allowed replies
pub const RESPONSE_PROMPTS: &[&str] = &["Puedes responder con:", "puedes responder con:"];

/// Metadata emoji that open the line after a markdown-titled product card
pub const PRODUCT_METADATA_EMOJI: &[char] = &['💵', '🌈', '👟', '✅', '📏'];

/// Shopping bag marking an emoji product card
pub const PRODUCT_CARD_EMOJI: char = '🛍';

/// Accented letters that, together with ASCII letters, decide letter case in Spanish text
pub const ACCENTED_LETTERS: &str = "áéíóúüñÁÉÍÓÚÜÑàèìòùÀÈÌÒÙâêîôûÂÊÎÔÛäëïöüÄËÏÖÜ";

/// Thresholds steering every split decision. Lengths are UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Chunks shorter than this (trimmed) get merged into a neighbor
    pub min_chunk_size: usize,
    /// Longest intro line split off ahead of a list
    pub max_intro_length: usize,
    /// Longest question + numbered options kept as one chunk
    pub max_question_with_options_length: usize,
    /// Options intro lines shorter than this stay glued to their bullets
    pub short_intro_threshold: usize,
    /// Question prefix length above which the long-question rules apply
    pub long_question_threshold: usize,
    /// Short question plus its follow-up sentence kept together up to this length
    pub combined_length_threshold: usize,
    /// Trailing text containing `?` below this length stays attached to the period
    pub short_question_fragment_threshold: usize,
    /// A double newline must appear after at least this much text to split
    pub min_content_before_break: usize,
    /// Previous chunk counts as short below this length
    pub short_chunk_threshold: usize,
    /// Remaining/trailing text counts as short below this length
    pub current_text_short_threshold: usize,
    /// Average numbered item length above which short lists split per item
    pub avg_item_length_threshold: usize,
    /// Maximum item count for the average-length list split
    pub max_items_for_long_split: usize,
    /// Largest number treated as an inline list marker
    pub max_list_number: u32,
    /// First newline must occur before this offset for intro detection
    pub first_newline_search_limit: usize,
    /// Double newline after a question must occur before this offset to defer to options
    pub double_newline_distance_threshold: usize,
    /// A line longer than this is a long paragraph
    pub long_paragraph_threshold: usize,
    /// A single list item longer than this forces per-item chunks
    pub huge_item_threshold: usize,
    /// Minimum items (or paragraphs) for option/paragraph detection
    pub min_list_items_for_options: usize,
    /// Text between grouped question marks must stay below this length
    pub contiguous_questions_text_threshold: usize,
    /// The period splitter only runs on remaining text longer than this
    pub period_split_text_threshold: usize,
    /// Widest table (content plus separators) rendered as a monospace block
    pub table_max_width: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            min_chunk_size: 20,
            max_intro_length: 150,
            max_question_with_options_length: 250,
            short_intro_threshold: 50,
            long_question_threshold: 100,
            combined_length_threshold: 110,
            short_question_fragment_threshold: 35,
            min_content_before_break: 45,
            short_chunk_threshold: 50,
            current_text_short_threshold: 150,
            avg_item_length_threshold: 70,
            max_items_for_long_split: 3,
            max_list_number: 20,
            first_newline_search_limit: 100,
            double_newline_distance_threshold: 5,
            long_paragraph_threshold: 150,
            huge_item_threshold: 150,
            min_list_items_for_options: 2,
            contiguous_questions_text_threshold: 50,
            period_split_text_threshold: 100,
            table_max_width: 47,
        }
    }
}

impl SplitConfig {
    /// Parse a config from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the merge or table stages meaningless
    pub fn validate(&self) -> Result<()> {
        if self.min_chunk_size == 0 {
            bail!("min_chunk_size must be greater than zero");
        }
        if self.table_max_width == 0 {
            bail!("table_max_width must be greater than zero");
        }
        Ok(())
    }
}
