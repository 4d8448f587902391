use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

/// Elements whose subtrees carry no visible text.
const SKIP_TAGS: &[&str] = &["script", "style", "noscript"];

static ARTICLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article").expect("Failed to parse article selector"));

/// Recall-favoring extraction: all visible text in the document, scoped to
/// the first `<article>` element when one exists.
pub fn extract(markup: &str) -> Option<String> {
    let document = Html::parse_document(markup);
    let scope = document
        .select(&ARTICLE_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut text = String::new();
    collect_text(scope, &mut text);

    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn collect_text(el: ElementRef, out: &mut String) {
    if SKIP_TAGS.contains(&el.value().name()) {
        return;
    }
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child_el) = ElementRef::wrap(child) {
            collect_text(child_el, out);
        }
    }
}
