use std::fs;

use crate::extractor::{extract, normalize_whitespace};

#[test]
fn extracts_article_body_without_boilerplate() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/article.html")
        .expect("Failed to read test fixture");

    let text = extract(&html);

    assert!(text.chars().count() > 200);
    assert!(text.contains("signal priority"));
    assert!(text.contains("dedicated lanes"));

    // Script bodies, navigation chrome, table contents and hyperlink text
    // never reach the output.
    assert!(!text.contains("analyticsTracker"));
    assert!(!text.contains("Opinion"));
    assert!(!text.contains("Ridership by quarter"));
    assert!(!text.contains("related coverage"));

    // The promo paragraph appears twice in the markup but counts once.
    assert_eq!(text.matches("newsletter").count(), 1);
}

#[test]
fn falls_back_to_article_scope_on_short_pages() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/listing.html")
        .expect("Failed to read test fixture");

    let text = extract(&html);

    assert!(text.contains("scheduler regression"));
    assert!(!text.contains("Hosted on mirrors"));
    assert!(!text.contains("Archive"));
    assert!(!text.contains("__data"));
}

#[test]
fn page_without_visible_text_yields_empty() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/empty.html")
        .expect("Failed to read test fixture");

    assert_eq!(extract(&html), "");
}

#[test]
fn script_only_page_yields_empty() {
    assert_eq!(extract("<html><body><script>x</script></body></html>"), "");
}

#[test]
fn empty_markup_yields_empty() {
    assert_eq!(extract(""), "");
}

#[test]
fn prefers_article_over_surrounding_chrome() {
    let html = "<html><body><header>Site menu</header>\
                <article><p>Observed flight times for the maiden voyage.</p></article>\
                <footer>Copyright notice</footer></body></html>";

    let text = extract(html);

    assert!(text.contains("maiden voyage"));
    assert!(!text.contains("Site menu"));
    assert!(!text.contains("Copyright notice"));
}

#[test]
fn handles_malformed_markup() {
    let text = extract("<html><head><title>Broken</title><body><p>Unclosed tags<div>More content");

    assert!(text.contains("Unclosed tags"));
    assert!(text.contains("More content"));
}

#[test]
fn normalize_collapses_whitespace_runs() {
    assert_eq!(normalize_whitespace("  a\t\tb \n\n c  "), "a b c");
    assert_eq!(normalize_whitespace(""), "");
    assert_eq!(normalize_whitespace("   \n  "), "");
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use crate::keywords;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn extract_never_panics(markup in ".*") {
            let _ = extract(&markup);
        }

        #[test]
        fn extract_output_is_normalized(markup in ".*") {
            let text = extract(&markup);
            prop_assert_eq!(text.clone(), normalize_whitespace(&text));
        }

        #[test]
        fn pipeline_weights_stay_bounded(markup in ".*") {
            let text = extract(&markup);
            for tw in keywords::weigh(&text, 25) {
                prop_assert!(tw.weight > 0.0 && tw.weight <= 1.0);
            }
        }
    }
}
