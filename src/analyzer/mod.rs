//! The per-request pipeline: fetch markup, extract text, weigh terms.
//!
//! Every stage failure is terminal and surfaces as a fixed message in the
//! response body; nothing here returns an error to the HTTP layer.

pub mod dtos;
pub mod handlers;

use tracing::{info, instrument};

use crate::analyzer::dtos::AnalyzeResponse;
use crate::extractor;
use crate::fetcher::MarkupSource;
use crate::keywords;

/// Fixed bound on how many keywords a page yields.
pub const MAX_KEYWORDS: usize = 25;

pub const ERR_FETCH: &str = "Failed to fetch HTML";
pub const ERR_EXTRACT: &str = "Failed to extract article text";

#[instrument(skip_all, fields(url = %url))]
pub async fn analyze(source: &dyn MarkupSource, url: &str) -> AnalyzeResponse {
    // Only a missing or truly empty body counts as a fetch failure; a page
    // of nothing but whitespace fetched fine and fails at extraction.
    let markup = match source.fetch_markup(url).await {
        Some(markup) if !markup.is_empty() => markup,
        _ => return AnalyzeResponse::failure(ERR_FETCH),
    };

    let text = extractor::extract(&markup);
    if text.is_empty() {
        return AnalyzeResponse::failure(ERR_EXTRACT);
    }

    let ranking = keywords::weigh(&text, MAX_KEYWORDS);
    info!(keywords = ranking.len(), "analysis complete");
    AnalyzeResponse::success(ranking)
}
