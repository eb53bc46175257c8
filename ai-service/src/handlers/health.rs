use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness indicator at the service root.
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "AI Service is running",
        "status": "healthy"
    }))
}

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "ai-service"
    }))
}
