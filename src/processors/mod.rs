// WHY: Each stage inspects the remaining text and either claims a prefix (emitting chunks)
// or declines; the driver tries them in priority order until one claims

pub mod breaks;
pub mod intro;
pub mod list;
pub mod merge;
pub mod paragraph;
pub mod period;
pub mod product_card;
pub mod question;
pub mod table;

use crate::config::SplitConfig;
use crate::patterns::Patterns;

pub use merge::merge_small_chunks;

/// Outcome of one stage attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Split<'a> {
    /// The stage consumed a prefix: `emitted` chunks go out, `rest` is what remains
    Found { emitted: Vec<String>, rest: &'a str },
    NotFound,
}

impl<'a> Split<'a> {
    pub(crate) fn one(chunk: impl Into<String>, rest: &'a str) -> Self {
        Split::Found {
            emitted: vec![chunk.into()],
            rest,
        }
    }
}

/// Read-only view shared with every stage for one driver iteration
#[derive(Debug, Clone, Copy)]
pub struct StageContext<'c> {
    pub patterns: &'c Patterns,
    pub config: &'c SplitConfig,
    /// Chunks emitted so far, oldest first
    pub chunks: &'c [String],
}

/// Signature every pipeline stage implements
pub type Stage = for<'a, 'b, 'c> fn(&'b StageContext<'c>, &'a str) -> Split<'a>;

/// A question followed by a "Puedes responder con:" prompt and its dash options
pub fn has_question_with_options(patterns: &Patterns, text: &str) -> bool {
    patterns.question_with_options.is_match(text)
}

/// Ordered stage list the driver iterates; the first stage that claims wins
pub const STAGES: &[(&str, Stage)] = &[
    ("table", table::process_markdown_table),
    ("intro_with_list", intro::process_intro_with_list),
    ("question_with_list", intro::process_question_with_list),
    ("intro_with_long_paragraphs", intro::process_intro_with_long_paragraphs),
    ("product_cards", product_card::process_product_card_lists),
    ("list_section", list::process_list_section),
    ("long_paragraphs_after_intro", paragraph::process_long_paragraphs_after_intro),
    ("long_paragraph_sequence", paragraph::process_long_paragraph_sequence),
    ("markdown_section", paragraph::process_markdown_section),
    ("section_break", breaks::process_section_breaks),
    ("question_marks", question::process_question_marks),
    ("period", period::process_period_splits),
];

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::patterns::test_patterns;
    use std::sync::OnceLock;

    pub(crate) fn default_config() -> &'static SplitConfig {
        static CONFIG: OnceLock<SplitConfig> = OnceLock::new();
        CONFIG.get_or_init(SplitConfig::default)
    }

    /// Run a stage with no previously emitted chunks
    pub(crate) fn run<'a>(stage: Stage, text: &'a str) -> Split<'a> {
        run_after(stage, &[], text)
    }

    /// Run a stage after `chunks` were already emitted
    pub(crate) fn run_after<'a>(stage: Stage, chunks: &[String], text: &'a str) -> Split<'a> {
        let ctx = StageContext {
            patterns: test_patterns(),
            config: default_config(),
            chunks,
        };
        stage(&ctx, text)
    }

    /// Unwrap a claimed split for assertions
    pub(crate) fn found<'a>(split: Split<'a>) -> (Vec<String>, &'a str) {
        match split {
            Split::Found { emitted, rest } => (emitted, rest),
            Split::NotFound => panic!("expected the stage to claim a split"),
        }
    }
}
