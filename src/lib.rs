pub mod analyzer;
pub mod app_state;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod keywords;
