use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service banner.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Matcher API is running"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "matcher-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
