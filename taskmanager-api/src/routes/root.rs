//! Welcome endpoint.

use axum::{response::IntoResponse, Json};

/// `GET /` — welcome payload.
pub async fn welcome() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to Taskmanager"
    }))
}
