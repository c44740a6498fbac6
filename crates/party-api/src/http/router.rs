//! Axum router configuration with middleware.
//!
//! Routes: `/party/{venue}/{activity}` and `/health`.
//! Middleware: request tracing.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/party/{venue}/{activity}",
            get(handlers::party::run_activity),
        )
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use party_types::party::FALLBACK_MESSAGE;
    use tower::ServiceExt;

    fn test_router() -> Router {
        build_router(AppState::init())
    }

    async fn get_text(uri: &str) -> (StatusCode, Option<String>, String) {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn party_route_returns_activity_text() {
        let (status, content_type, body) = get_text("/party/school/sing").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        assert_eq!(body, "在学校唱");

        let (_, _, body) = get_text("/party/classroom/basketball").await;
        assert_eq!(body, "在班里打篮球");
    }

    #[tokio::test]
    async fn party_route_unknown_venue_is_ok_with_fallback() {
        let (status, _, body) = get_text("/party/gym/sing").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn party_route_unknown_activity_is_ok_with_fallback() {
        let (status, _, body) = get_text("/party/school/fly").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn party_route_undecodable_segment_is_ok_with_fallback() {
        let (status, content_type, body) = get_text("/party/%FF/sing").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        assert_eq!(body, FALLBACK_MESSAGE);

        let (status, _, body) = get_text("/party/school/%C3%28").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn party_route_accepts_legacy_service_names() {
        let (_, _, body) = get_text("/party/classPartyService/dance").await;
        assert_eq!(body, "在班里跳");
    }

    #[tokio::test]
    async fn health_check_reports_ok() {
        let (status, _, body) = get_text("/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}
