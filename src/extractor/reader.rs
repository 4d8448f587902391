use std::collections::HashSet;
use std::sync::LazyLock;

use readability::extractor;
use scraper::{ElementRef, Html};
use url::Url;

use crate::extractor::normalize_whitespace;

/// Minimum trimmed length (in characters) for this strategy to accept its
/// own output; anything shorter falls through to the DOM strategy.
const MIN_TEXT_CHARS: usize = 200;

/// Subtrees that never contribute article text. Hyperlink text is mostly
/// navigation chrome, and embedded tables skew term counts.
const SKIP_TAGS: &[&str] = &["a", "table", "script", "style", "noscript"];

/// Elements treated as block boundaries when collecting candidate text.
const BLOCK_TAGS: &[&str] = &[
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "blockquote",
    "pre",
    "figcaption",
];

// readability wants a base URL for resolving links in the content it keeps;
// the text we collect never depends on it.
static BASE_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://localhost/").expect("Failed to parse base URL"));

/// Precision-favoring extraction: isolate the article body with readability,
/// then collect its block text, dropping link/table subtrees and repeated
/// boilerplate blocks. Abstains unless the result clears `MIN_TEXT_CHARS`.
pub fn extract(markup: &str) -> Option<String> {
    let article = extractor::extract(&mut markup.as_bytes(), &BASE_URL).ok()?;

    let text = collect_blocks(&article.content);
    if text.trim().chars().count() > MIN_TEXT_CHARS {
        Some(text)
    } else {
        None
    }
}

/// Walk the cleaned article fragment, emitting one chunk of text per block
/// element. A block whose normalized text was already seen is dropped, so
/// repeated boilerplate (share prompts, cookie banners) counts once at most.
fn collect_blocks(content_html: &str) -> String {
    let fragment = Html::parse_fragment(content_html);
    let mut seen = HashSet::new();
    let mut blocks = Vec::new();
    let mut trailing = String::new();
    walk(fragment.root_element(), &mut seen, &mut blocks, &mut trailing);
    // Inline text that never hit a block boundary forms one final block.
    push_block(trailing, &mut seen, &mut blocks);
    blocks.join(" ")
}

fn walk(el: ElementRef, seen: &mut HashSet<String>, blocks: &mut Vec<String>, buf: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            buf.push_str(text);
            buf.push(' ');
        } else if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            if SKIP_TAGS.contains(&name) {
                continue;
            }
            if BLOCK_TAGS.contains(&name) {
                let mut inner = String::new();
                walk(child_el, seen, blocks, &mut inner);
                push_block(inner, seen, blocks);
            } else {
                walk(child_el, seen, blocks, buf);
            }
        }
    }
}

fn push_block(raw: String, seen: &mut HashSet<String>, blocks: &mut Vec<String>) {
    let text = normalize_whitespace(&raw);
    if text.is_empty() {
        return;
    }
    let digest = format!("{:x}", md5::compute(&text));
    if seen.insert(digest) {
        blocks.push(text);
    }
}
