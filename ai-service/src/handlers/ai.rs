use axum::{routing::post, Json, Router};
use serde_json::{json, Value};

/// Route table for the placeholder AI endpoints.
///
/// Each entry maps a path to the fixed acknowledgement it returns. When a
/// real inference backend lands, its handler replaces one entry here
/// without touching routing or CORS configuration.
pub const PLACEHOLDER_ROUTES: &[(&str, &str)] = &[
    (
        "/ai/candidate-summary",
        "AI candidate summary endpoint - ready for implementation",
    ),
    (
        "/ai/match",
        "AI candidate matching endpoint - ready for implementation",
    ),
    (
        "/ai/interview-feedback",
        "AI interview feedback endpoint - ready for implementation",
    ),
];

fn acknowledgement(message: &str) -> Json<Value> {
    Json(json!({ "message": message }))
}

/// Router covering every placeholder AI endpoint.
pub fn router() -> Router {
    PLACEHOLDER_ROUTES
        .iter()
        .copied()
        .fold(Router::new(), |router, (path, message)| {
            router.route(path, post(move || async move { acknowledgement(message) }))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn every_placeholder_route_acknowledges_post() {
        for (path, message) in PLACEHOLDER_ROUTES.iter().copied() {
            let response = router()
                .oneshot(
                    Request::builder()
                        .method(Method::POST)
                        .uri(path)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "POST {}", path);

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body, json!({ "message": message }), "POST {}", path);
        }
    }

    #[tokio::test]
    async fn placeholder_routes_reject_get() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/ai/match")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
