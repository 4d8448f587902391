use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{LANGUAGE, get};

/// English stop-word set, built once. The list ships with the `stop-words`
/// crate, so the exact contents are pinned by the lockfile rather than
/// maintained here.
static ENGLISH: LazyLock<HashSet<String>> =
    LazyLock::new(|| get(LANGUAGE::English).into_iter().collect());

pub fn is_stop_word(term: &str) -> bool {
    ENGLISH.contains(term)
}
