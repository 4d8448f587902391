use reqwest::StatusCode;
use url::Url;

/// A fetched page, decoded to UTF-8.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub body_utf8: String,
}
