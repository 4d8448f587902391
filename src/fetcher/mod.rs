pub mod client;
pub mod decode;
pub mod errors;
pub mod source;
pub mod types;

pub use client::fetch;
pub use errors::FetchError;
pub use source::{HttpMarkupSource, MarkupSource};
pub use types::PageResponse;
