use async_trait::async_trait;
use tracing::warn;

use crate::fetcher;

/// Where the analysis pipeline gets page markup from.
///
/// Implementations signal failure with `None` instead of an error: callers
/// never see transport details, they only learn that no markup is available.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarkupSource: Send + Sync {
    async fn fetch_markup(&self, url: &str) -> Option<String>;
}

/// `MarkupSource` backed by the shared HTTP client.
#[derive(Clone)]
pub struct HttpMarkupSource;

#[async_trait]
impl MarkupSource for HttpMarkupSource {
    async fn fetch_markup(&self, url: &str) -> Option<String> {
        match fetcher::fetch(url).await {
            Ok(page) => Some(page.body_utf8),
            Err(err) => {
                warn!(url, error = %err, "fetch failed");
                None
            }
        }
    }
}
