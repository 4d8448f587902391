use crate::fetcher::{decode::decode_body, errors::FetchError, types::PageResponse};
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::instrument;

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB

/// Some sites serve stripped-down or blocked pages to anything that does not
/// look like a mainstream browser.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Total budget for one fetch, redirects included.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(5))
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
                    .parse()
                    .unwrap(),
            );
            headers
        })
        .build()
        .expect("Failed to build HTTP client")
});

#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(url: &str) -> Result<PageResponse, FetchError> {
    let parsed_url = url::Url::parse(url)?;

    let response = HTTP_CLIENT
        .get(parsed_url)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    // Check content length before downloading
    if let Some(content_length) = response.content_length()
        && content_length > MAX_BODY_SIZE
    {
        return Err(FetchError::BodyTooLarge(content_length));
    }

    let final_url = response.url().clone();
    let status = response.status();

    if !status.is_success() {
        return Err(FetchError::Http { status });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    // Only HTML bodies are worth handing to the extractor
    if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
        return Err(FetchError::UnsupportedContentType(content_type));
    }

    let body_bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Io(e.to_string()))?;

    // Check body size after download (in case Content-Length was missing)
    if body_bytes.len() as u64 > MAX_BODY_SIZE {
        return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
    }

    let body_utf8 = decode_body(&content_type, &body_bytes);

    Ok(PageResponse {
        url_final: final_url,
        status,
        body_utf8,
    })
}
