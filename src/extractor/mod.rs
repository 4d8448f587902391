//! Main-content extraction from raw HTML.
//!
//! Extraction strategies are tried in order until one yields usable text:
//! the reader strategy favors precision (isolating the article body from
//! templated boilerplate), the DOM strategy favors recall (all visible text
//! in the document). An empty result means nothing could be extracted; the
//! caller decides what that implies.

pub mod dom;
pub mod reader;

#[cfg(test)]
mod tests;

use tracing::debug;

type Strategy = fn(&str) -> Option<String>;

/// Strategies in priority order. Each yields usable text or abstains,
/// letting the next one try.
const STRATEGIES: &[(&str, Strategy)] = &[("reader", reader::extract), ("dom", dom::extract)];

/// Extract the main textual content of an HTML document, whitespace
/// normalized. Empty or unparseable markup yields an empty string rather
/// than an error.
pub fn extract(markup: &str) -> String {
    for &(name, strategy) in STRATEGIES {
        if let Some(text) = strategy(markup) {
            let text = normalize_whitespace(&text);
            if !text.is_empty() {
                debug!(strategy = name, chars = text.chars().count(), "extracted content");
                return text;
            }
        }
    }
    String::new()
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
