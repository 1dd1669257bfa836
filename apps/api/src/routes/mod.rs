pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Slack over the configured upload cap for multipart framing and the
    // job_description part; the per-file cap is enforced in the handler.
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes + 64 * 1024);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .route("/analyze/file", post(handlers::handle_analyze_file))
        .layer(body_limit)
        .with_state(state)
}
