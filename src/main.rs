use anyhow::Result;
use axum::{Router, routing::post};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use distill::{analyzer::handlers, app_state::AppState, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let state = AppState::new();

    // The endpoint is meant to be called straight from browsers anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/analyze", post(handlers::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = config.bind_addr(), "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
