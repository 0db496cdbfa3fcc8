// WHY: Whole-text rewrites that run once before the stage loop, plus the per-chunk
// punctuation pass that runs after merging

pub mod inline_list;
pub mod punctuation;
pub mod url;

use tracing::debug;

use crate::config::SplitConfig;
use crate::patterns::Patterns;

pub use inline_list::{normalize_inline_numbered_list, normalize_inline_product_card_list};
pub use punctuation::normalize_spanish_punctuation;
pub use url::remove_periods_after_urls;

/// URL periods, then inline numbered lists, then inline product cards
pub fn preprocess(patterns: &Patterns, config: &SplitConfig, text: &str) -> String {
    let result = remove_periods_after_urls(patterns, text);
    let result = normalize_inline_numbered_list(patterns, config, &result);
    let result = normalize_inline_product_card_list(patterns, &result);
    if result != text {
        debug!("Pre-processing rewrote text: {} -> {} bytes", text.len(), result.len());
    }
    result
}
