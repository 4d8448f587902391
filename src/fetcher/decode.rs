//! Charset detection and decoding for fetched bodies.
//!
//! Servers lie about encodings often enough that the Content-Type header
//! alone is not trustworthy: we check it first, then sniff `<meta>`
//! declarations in the body prefix, then let chardetng guess. Decoding is
//! lossy; a page with a few mangled bytes still yields usable text.

use std::sync::LazyLock;

use encoding_rs::Encoding;
use regex::Regex;

/// How much of the body prefix to scan for `<meta>` charset declarations.
const META_SCAN_LIMIT: usize = 4096;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

pub fn decode_body(content_type: &str, body: &[u8]) -> String {
    let encoding = detect_encoding(content_type, body);
    let (decoded, _encoding, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}

fn detect_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    // 1. Content-Type header
    if let Some(encoding) = encoding_from_capture(&CHARSET_REGEX, content_type) {
        return encoding;
    }

    // 2. <meta> declarations in the body prefix
    let prefix = &body[..body.len().min(META_SCAN_LIMIT)];
    let prefix_str = String::from_utf8_lossy(prefix);
    if let Some(encoding) = encoding_from_capture(&META_CHARSET_REGEX, &prefix_str) {
        return encoding;
    }
    if let Some(encoding) = encoding_from_capture(&META_HTTP_EQUIV_REGEX, &prefix_str) {
        return encoding;
    }

    // 3. Heuristic detection
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(prefix, false);
    detector.guess(None, true)
}

fn encoding_from_capture(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = regex.captures(haystack)?.get(1)?.as_str();
    Encoding::for_label(label.trim().to_lowercase().as_bytes())
}
