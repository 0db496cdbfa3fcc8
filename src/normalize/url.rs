use crate::patterns::{group, replace_all, Patterns};

/// Move a sentence period that directly follows a URL onto a line break
///
/// "Visita https://nike.com.co. Tenemos" becomes "Visita https://nike.com.co\n Tenemos".
pub fn remove_periods_after_urls(patterns: &Patterns, text: &str) -> String {
    replace_all(&patterns.url_trailing_period, text, |caps| {
        format!("{}\n{}", group(caps, text, "url"), group(caps, text, "after"))
    })
}
