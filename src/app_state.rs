use crate::fetcher::{HttpMarkupSource, MarkupSource};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub markup_source: Arc<dyn MarkupSource>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            markup_source: Arc::new(HttpMarkupSource),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
