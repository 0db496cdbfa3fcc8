// WHY: All regexes are compiled once per splitter and shared read-only by every stage
// Patterns are composed from named fragments the same way the boundary detector builds its DFA

use anyhow::{Context, Result};
use regex_automata::{meta::Regex, util::captures::Captures, Anchored, Input};

use crate::config::{
    DOMAIN_SUFFIXES, PRODUCT_CARD_EMOJI, PRODUCT_METADATA_EMOJI, PROTECTED_ABBREVIATIONS,
    RESPONSE_PROMPTS,
};

/// Compiled pattern set used by the normalizers and processors
#[derive(Debug)]
pub struct Patterns {
    // Emoji helpers
    pub(crate) emoji_start: Regex,
    pub(crate) emoji_run: Regex,
    pub(crate) parenthetical: Regex,

    // Pre-processing normalizers
    pub(crate) url_trailing_period: Regex,
    pub(crate) list_already_formatted: Regex,
    pub(crate) list_inline_after_colon: Regex,
    pub(crate) list_inline_after_punct: Regex,
    pub(crate) list_inline_item: Regex,
    pub(crate) cards_inline_multiple: Regex,
    pub(crate) cards_inline_titled: Regex,
    pub(crate) cards_inline_single: Regex,
    pub(crate) card_break: Regex,
    pub(crate) card_emoji_line: Regex,
    pub(crate) card_trailing_question: Regex,

    // Intro/list combiners
    pub(crate) intro_with_list: Regex,
    pub(crate) question_with_list: Regex,
    pub(crate) question_with_options: Regex,

    // Product cards
    pub(crate) card_emoji_marker: Regex,
    pub(crate) card_emoji_end: Regex,
    pub(crate) card_emoji_prefix: Regex,
    pub(crate) card_markdown_detect: Regex,
    pub(crate) card_markdown_marker: Regex,
    pub(crate) card_markdown_start: Regex,
    pub(crate) card_markdown_end: Regex,
    pub(crate) card_question_line: Regex,

    // Sections
    pub(crate) markdown_header: Regex,

    // Period protection
    pub(crate) protect_url: Regex,
    pub(crate) protect_domain: Regex,
    pub(crate) protect_email: Regex,
    pub(crate) protect_number: Regex,
    pub(crate) protect_list_marker: Regex,
    pub(crate) protect_abbreviation: Regex,
    pub(crate) protect_initials: Regex,
    pub(crate) protect_bullet_period: Regex,

    // Tables
    pub(crate) table_separator: Regex,
    pub(crate) md_bold: Regex,
    pub(crate) md_italic: Regex,
    pub(crate) md_code: Regex,
    pub(crate) md_link: Regex,
    pub(crate) md_bold_or_italic: Regex,
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("failed to compile {name} pattern: {pattern}"))
}

impl Patterns {
    /// Compile every pattern
    pub fn new() -> Result<Self> {
        // Shared fragments
        let bag = format!("{PRODUCT_CARD_EMOJI}\\x{{FE0F}}?");
        let list_start = r"(?:[0-9]{1,2}\.\s+|[\-•]\s+)";
        let card_number = r"(?:\*{1,2})?[0-9]+\.";
        let metadata_emoji: String = PRODUCT_METADATA_EMOJI.iter().collect();
        let prompts = RESPONSE_PROMPTS
            .iter()
            .map(|p| p.trim_end_matches(':'))
            .collect::<Vec<_>>()
            .join("|");
        let suffixes = DOMAIN_SUFFIXES.join("|");
        let abbreviations = PROTECTED_ABBREVIATIONS.join("|");
        let question_tail = r"(?:\s*\S+)?";

        let emoji_card_marker = format!(r"{card_number}\s*{bag}");
        let markdown_card_marker = r"[0-9]+\.\s+\*{1,2}[^*\s]";

        Ok(Self {
            emoji_start: compile("emoji start", r"^\p{Emoji}")?,
            emoji_run: compile("emoji run", r"^\p{Emoji}+\s*")?,
            parenthetical: compile("parenthetical clarification", r"^\([^)]+\)\?")?,

            url_trailing_period: compile(
                "url trailing period",
                r"(?P<url>https?://\S+?|www\.\S+?)\.(?P<after>\s|$)",
            )?,
            list_already_formatted: compile(
                "formatted list",
                r"[0-9]{1,2}\.\s+[^\n]+\n\s*[0-9]{1,2}\.\s+",
            )?,
            list_inline_after_colon: compile(
                "inline list after colon",
                r":[^\n]*[0-9]{1,2}\.\s+[^\n]+[ ]+[0-9]{1,2}\.\s+",
            )?,
            list_inline_after_punct: compile(
                "inline list after punctuation",
                r"[?!][^\n]*\s+1\.\s+[^\n]+[ ]+2\.\s+",
            )?,
            list_inline_item: compile(
                "inline list item",
                r"(?P<before>[:\s?!])(?P<num>[0-9]{1,2})\.\s+(?P<after>[^\n])",
            )?,
            cards_inline_multiple: compile(
                "inline product cards",
                &format!(r"{emoji_card_marker}[^\n]*\s+{emoji_card_marker}"),
            )?,
            cards_inline_titled: compile(
                "inline titled product cards",
                &format!(
                    r"[0-9]+\.\s+\*{{1,2}}[^*\n]+\*{{1,2}}\s+\p{{Extended_Pictographic}}[^\n]+\s+{card_number}\s+"
                ),
            )?,
            cards_inline_single: compile(
                "inline single product card",
                &format!(
                    r"{emoji_card_marker}[^\n]+\p{{Extended_Pictographic}}[^\n]+\p{{Extended_Pictographic}}"
                ),
            )?,
            card_break: compile(
                "product card break",
                &format!(r"(?P<punct>[.!✅])\s+(?P<card>\*{{0,2}}[0-9]+\.\s+(?:{bag}|\*{{1,2}}))"),
            )?,
            card_emoji_line: compile(
                "product metadata line",
                r"(?P<before>[^\n])\s+(?P<emoji>\p{Extended_Pictographic})",
            )?,
            card_trailing_question: compile(
                "product trailing question",
                &format!(r"(?m)(?P<punct>[.!])\s+(?P<question>¿[^\n?]*\?{question_tail})$"),
            )?,

            intro_with_list: compile(
                "intro with list",
                &format!(r"^(?P<intro>.+?:)(?P<after_colon>[^\n]*?)\n+{list_start}"),
            )?,
            question_with_list: compile(
                "question with list",
                r"^(?P<question>(?s:.*?)\?[^\n]*?)\n(?P<list>[0-9]{1,2}\.\s+(?s:.*))",
            )?,
            question_with_options: compile(
                "question with options",
                &format!(r"^[^?]+\?\s*\n+(?s:.*?)(?:{prompts}):(?s:.*?)\n+-"),
            )?,

            card_emoji_marker: compile("emoji product card", &emoji_card_marker)?,
            card_emoji_end: compile(
                "emoji product card end",
                &format!(r"\n\s*\n|\n\s*{emoji_card_marker}"),
            )?,
            card_emoji_prefix: compile("emoji card prefix", r"^(?P<stars>\*{1,2})?[0-9]+\.\s*")?,
            card_markdown_detect: compile(
                "markdown product card",
                &format!(r"[0-9]+\.\s+\*{{1,2}}[^*\n]+\*{{1,2}}\s*\n[{metadata_emoji}]"),
            )?,
            card_markdown_marker: compile("markdown card marker", markdown_card_marker)?,
            card_markdown_start: compile("markdown card start", r"[0-9]+\.\s+\*{1,2}[^*\n]*")?,
            card_markdown_end: compile(
                "markdown product card end",
                &format!(r"\n\s*\n|\n\s*{markdown_card_marker}"),
            )?,
            card_question_line: compile(
                "card question line",
                &format!(r"^(?P<before>.*?)\s+(?P<question>¿[^\n?]+\?{question_tail})$"),
            )?,

            markdown_header: compile(
                "markdown header",
                r"^(?P<header>\*[^*\n]+\*|_[^_\n]+_)\s*\n",
            )?,

            protect_url: compile(
                "protected url",
                r"https?://\S*[^\s.!?,;:]|www\.\S*[^\s.!?,;:]",
            )?,
            protect_domain: compile(
                "protected domain",
                &format!(
                    r"(?i)(?-u:\b)[a-z0-9][a-z0-9\-]*(?:\.[a-z0-9][a-z0-9\-]*)*\.(?:{suffixes})(?:\.[a-z]{{2,3}})?(?-u:\b)"
                ),
            )?,
            protect_email: compile(
                "protected email",
                r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}",
            )?,
            protect_number: compile(
                "protected number",
                r"\$?[0-9]{1,3}(?:\.[0-9]{3})+(?:\.[0-9]+)?|[0-9]+(?:\.[0-9]+)+",
            )?,
            protect_list_marker: compile("protected list marker", r"(?:^|\n)\s*[0-9]+\.")?,
            protect_abbreviation: compile(
                "protected abbreviation",
                &format!(r"(?i)(?-u:\b)(?:{abbreviations})\."),
            )?,
            protect_initials: compile("protected initials", r"(?-u:\b)[A-Z]\.(?:[A-Z]\.)+")?,
            protect_bullet_period: compile(
                "protected bullet period",
                r"(?m)(?:^|\n)\s*[\-•]\s+[^\n]+\.",
            )?,

            table_separator: compile("table separator", r"^\|(?:\s*:?-+:?\s*\|)+\s*$")?,
            md_bold: compile("markdown bold", r"\*\*(?P<content>[^*]+)\*\*")?,
            md_italic: compile("markdown italic", r"\*(?P<content>[^*]+)\*")?,
            md_code: compile("markdown code", r"`(?P<content>[^`]+)`")?,
            md_link: compile("markdown link", r"\[(?P<content>[^\]]+)\]\([^)]*\)")?,
            md_bold_or_italic: compile("markdown emphasis", r"\*\*[^*]+\*\*|\*[^*]+\*")?,
        })
    }
}

/// Text of a named capture group, or "" when the group did not participate
pub(crate) fn group<'h>(caps: &Captures, haystack: &'h str, name: &str) -> &'h str {
    caps.get_group_by_name(name)
        .map(|span| &haystack[span.range()])
        .unwrap_or("")
}

/// Does `re` match starting exactly at byte offset `at`
pub(crate) fn matches_at(re: &Regex, haystack: &str, at: usize) -> bool {
    if at > haystack.len() {
        return false;
    }
    re.is_match(Input::new(haystack).range(at..).anchored(Anchored::Yes))
}

/// Replace every non-overlapping match with the closure's output
pub(crate) fn replace_all<F>(re: &Regex, haystack: &str, mut replacement: F) -> String
where
    F: FnMut(&Captures) -> String,
{
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for caps in re.captures_iter(haystack) {
        let Some(m) = caps.get_match() else { continue };
        out.push_str(&haystack[last..m.start()]);
        out.push_str(&replacement(&caps));
        last = m.end();
    }
    out.push_str(&haystack[last..]);
    out
}

/// Replace only the leftmost match
pub(crate) fn replace_first<F>(re: &Regex, haystack: &str, replacement: F) -> String
where
    F: FnOnce(&Captures) -> String,
{
    let mut caps = re.create_captures();
    re.captures(haystack, &mut caps);
    match caps.get_match() {
        Some(m) => format!(
            "{}{}{}",
            &haystack[..m.start()],
            replacement(&caps),
            &haystack[m.end()..]
        ),
        None => haystack.to_string(),
    }
}

#[cfg(test)]
pub(crate) fn test_patterns() -> &'static Patterns {
    use std::sync::OnceLock;

    // WHY: Single shared pattern set keeps unit tests from recompiling every regex
    static SHARED_PATTERNS: OnceLock<Patterns> = OnceLock::new();
    SHARED_PATTERNS.get_or_init(|| Patterns::new().expect("patterns compile"))
}
