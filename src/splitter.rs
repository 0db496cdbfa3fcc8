// WHY: The driver owns the compiled patterns and config, runs the pre-processing pass, then
// tries stages in priority order until the remaining text is consumed

use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::SplitConfig;
use crate::normalize::{normalize_spanish_punctuation, preprocess};
use crate::patterns::Patterns;
use crate::processors::{merge_small_chunks, Split, StageContext, STAGES};
use crate::text::{smart_trim, text_len};

/// Splits one chat message into display chunks
#[derive(Debug)]
pub struct ChatSplitter {
    patterns: Patterns,
    config: SplitConfig,
}

impl ChatSplitter {
    /// Create a splitter with custom thresholds
    pub fn new(config: SplitConfig) -> Result<Self> {
        config.validate().context("invalid split configuration")?;
        let patterns = Patterns::new()?;
        info!("Compiled chat split patterns");
        Ok(Self { patterns, config })
    }

    /// Create a splitter with the tuned default thresholds
    pub fn with_default_config() -> Result<Self> {
        Self::new(SplitConfig::default())
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    pub fn patterns(&self) -> &Patterns {
        &self.patterns
    }

    /// Split optional text; `None` and `""` produce no chunks
    pub fn split(&self, text: Option<&str>) -> Vec<String> {
        match text {
            None => Vec::new(),
            Some(text) => self.split_str(text),
        }
    }

    /// Split text into ordered chunks
    pub fn split_str(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        if smart_trim(text).is_empty() {
            return vec![text.to_string()];
        }

        let processed = preprocess(&self.patterns, &self.config, text);
        let chunks = self.run_stages(&processed);
        let merged = merge_small_chunks(&self.config, chunks);
        let result: Vec<String> = merged
            .iter()
            .map(|chunk| normalize_spanish_punctuation(chunk))
            .collect();

        info!("Split {} characters into {} chunks", text_len(text), result.len());
        result
    }

    fn run_stages(&self, text: &str) -> Vec<String> {
        let mut chunks: Vec<String> = Vec::new();
        let mut remaining = text;

        while !smart_trim(remaining).is_empty() {
            let ctx = StageContext {
                patterns: &self.patterns,
                config: &self.config,
                chunks: &chunks,
            };
            let claimed = STAGES.iter().find_map(|(name, stage)| match stage(&ctx, remaining) {
                Split::Found { emitted, rest } => Some((*name, emitted, rest)),
                Split::NotFound => None,
            });

            let Some((name, emitted, rest)) = claimed else {
                chunks.push(remaining.to_string());
                break;
            };

            if rest.len() >= remaining.len() {
                warn!(
                    "Stage {} did not consume any text ({} bytes remain); flushing remainder",
                    name,
                    remaining.len()
                );
                chunks.push(remaining.to_string());
                break;
            }

            debug!(
                "Stage {} emitted {} chunks, {} characters remain",
                name,
                emitted.len(),
                text_len(rest)
            );
            chunks.extend(emitted.into_iter().filter(|chunk| !chunk.trim().is_empty()));
            remaining = rest;
        }

        chunks
    }
}

/// Split with a process-wide splitter built from the default config on first use
pub fn split_chat_text(text: Option<&str>) -> Result<Vec<String>> {
    // WHY: patterns compile once; the splitter is read-only afterwards
    static SHARED_SPLITTER: OnceLock<ChatSplitter> = OnceLock::new();

    let splitter = match SHARED_SPLITTER.get() {
        Some(splitter) => splitter,
        None => {
            let splitter = ChatSplitter::with_default_config()?;
            SHARED_SPLITTER.get_or_init(|| splitter)
        }
    };
    Ok(splitter.split(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter() -> &'static ChatSplitter {
        static SPLITTER: OnceLock<ChatSplitter> = OnceLock::new();
        SPLITTER.get_or_init(|| ChatSplitter::with_default_config().expect("default splitter"))
    }

    #[test]
    fn test_empty_and_missing_input() {
        assert!(splitter().split(None).is_empty());
        assert!(splitter().split(Some("")).is_empty());
    }

    #[test]
    fn test_whitespace_only_input_is_returned_unchanged() {
        assert_eq!(splitter().split_str("   \n\t "), vec!["   \n\t "]);
    }

    #[test]
    fn test_single_question() {
        assert_eq!(splitter().split_str("¿Cómo estás hoy?"), vec!["¿Cómo estás hoy?"]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SplitConfig {
            min_chunk_size: 0,
            ..SplitConfig::default()
        };
        assert!(ChatSplitter::new(config).is_err());
    }

    #[test]
    fn test_shared_splitter_matches_owned() {
        let text = "¿Qué te parece esta? ¿quieres ver más fotos? También tengo otras opciones disponibles si prefieres ver más estilos.";
        assert_eq!(split_chat_text(Some(text)).unwrap(), splitter().split_str(text));
    }

    #[test]
    fn test_custom_threshold_changes_merging() {
        let config = SplitConfig {
            min_chunk_size: 5,
            ..SplitConfig::default()
        };
        let custom = ChatSplitter::new(config).unwrap();
        let text = "Datos:\n1. Nombre\n2. Email";
        assert_eq!(custom.split_str(text), vec!["Datos:", "1. Nombre\n2. Email"]);
        assert_eq!(splitter().split_str(text), vec!["Datos: 1. Nombre\n2. Email"]);
    }
}
