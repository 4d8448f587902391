use std::sync::Arc;

use axum::{Router, routing::post};
use tower_http::cors::{Any, CorsLayer};

use distill::{analyzer::handlers, app_state::AppState, fetcher::HttpMarkupSource};

pub fn test_app() -> Router {
    let state = AppState {
        markup_source: Arc::new(HttpMarkupSource),
    };
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/analyze", post(handlers::analyze))
        .layer(cors)
        .with_state(state)
}
