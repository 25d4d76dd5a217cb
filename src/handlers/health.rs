use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Static answer; no upstream call is made.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "pope-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
