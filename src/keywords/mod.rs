//! Term weighing over a single document.
//!
//! The text is treated as a one-document corpus: every term present shares
//! the same inverse-document-frequency factor, so the TF-IDF ranking
//! collapses to plain term frequency. We keep the raw counts as scores and
//! normalize by the retained maximum, which reproduces the same ordering and
//! the same max-normalized weights a single-document vectorization yields.

pub mod stopwords;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Tokens are runs of two or more word characters; single-letter words and
/// bare punctuation never become terms.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// A term and its normalized importance weight.
///
/// Invariant: `weight` is in `(0.0, 1.0]`, and the first term of any
/// non-empty ranking carries exactly `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeight {
    pub term: String,
    pub weight: f64,
}

/// Rank the most frequent non-stop-word terms in `text`.
///
/// Returns at most `top_k` terms, sorted by descending weight. Ties in
/// frequency break lexicographically by term, so identical input always
/// produces identical output. Empty text, `top_k == 0`, or text with no
/// surviving terms all yield an empty ranking rather than an error.
pub fn weigh(text: &str, top_k: usize) -> Vec<TermWeight> {
    if top_k == 0 {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for token in TOKEN_REGEX.find_iter(&lowered) {
        let term = token.as_str();
        if stopwords::is_stop_word(term) {
            continue;
        }
        *counts.entry(term).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, u64)> = counts.into_iter().collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(top_k);

    let Some(&(_, max_count)) = ranked.first() else {
        return Vec::new();
    };

    ranked
        .into_iter()
        .map(|(term, count)| TermWeight {
            term: term.to_string(),
            weight: count as f64 / max_count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_frequency_with_max_weight_one() {
        let ranking = weigh("data model analysis data data model", 25);

        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking[0].term, "data");
        assert_eq!(ranking[0].weight, 1.0);
        assert_eq!(ranking[1].term, "model");
        assert!(ranking[1].weight < 1.0);
        assert_eq!(ranking[2].term, "analysis");
        assert!(ranking[2].weight <= ranking[1].weight);
    }

    #[test]
    fn equal_counts_break_ties_lexicographically() {
        let ranking = weigh("zebra apple zebra apple", 25);

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].term, "apple");
        assert_eq!(ranking[1].term, "zebra");
        assert_eq!(ranking[0].weight, 1.0);
        assert_eq!(ranking[1].weight, 1.0);
    }

    #[test]
    fn stop_words_never_appear() {
        let ranking = weigh("the the the the and and and keyword", 25);

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].term, "keyword");
        assert_eq!(ranking[0].weight, 1.0);
    }

    #[test]
    fn respects_top_k_bound() {
        let text = "alpha alpha alpha beta beta gamma delta epsilon";
        let ranking = weigh(text, 2);

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].term, "alpha");
        assert_eq!(ranking[1].term, "beta");
    }

    #[test]
    fn top_k_zero_yields_empty() {
        assert!(weigh("plenty of meaningful words here", 0).is_empty());
    }

    #[test]
    fn empty_text_yields_empty() {
        assert!(weigh("", 25).is_empty());
        assert!(weigh("   \t\n  ", 25).is_empty());
    }

    #[test]
    fn single_character_tokens_are_dropped() {
        let ranking = weigh("a b c d x y z keyword", 25);

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].term, "keyword");
    }

    #[test]
    fn tokenization_is_case_insensitive() {
        let ranking = weigh("Keyword KEYWORD keyword", 25);

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].term, "keyword");
        assert_eq!(ranking[0].weight, 1.0);
    }

    #[test]
    fn punctuation_does_not_join_terms() {
        let ranking = weigh("data-driven analysis, data. analysis; data!", 25);

        assert_eq!(ranking[0].term, "data");
        assert_eq!(ranking[0].weight, 1.0);
        let terms: Vec<&str> = ranking.iter().map(|tw| tw.term.as_str()).collect();
        assert!(terms.contains(&"analysis"));
        assert!(terms.contains(&"driven"));
    }

    #[test]
    fn weights_are_non_increasing_and_bounded() {
        let text = "kernel kernel kernel kernel parser parser parser cache cache socket";
        let ranking = weigh(text, 25);

        assert_eq!(ranking.len(), 4);
        for pair in ranking.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
        }
        for tw in &ranking {
            assert!(tw.weight > 0.0 && tw.weight <= 1.0);
        }
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let text = "repeatable ranking of repeatable terms with stable ordering";
        assert_eq!(weigh(text, 25), weigh(text, 25));
    }
}
