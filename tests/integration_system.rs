mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{get_json, setup_test_app, setup_test_app_with_origins};
use tower::ServiceExt;

// The system routes never reach the market upstream, so any base URL works.
const NO_UPSTREAM: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn test_health_returns_ok() {
    let app = setup_test_app(NO_UPSTREAM);
    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_root_returns_running_marker() {
    let app = setup_test_app(NO_UPSTREAM);
    let (status, body) = get_json(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "stockProject API is running");
}

#[tokio::test]
async fn test_favicon_is_no_content() {
    let app = setup_test_app(NO_UPSTREAM);
    let request = Request::builder()
        .method("GET")
        .uri("/favicon.ico")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_cors_allows_listed_origin() {
    let app = setup_test_app_with_origins(NO_UPSTREAM, vec!["http://a.test".to_string()]);
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header("origin", "http://a.test")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://a.test")
    );
}

#[tokio::test]
async fn test_cors_withholds_unlisted_origin() {
    let app = setup_test_app_with_origins(NO_UPSTREAM, vec!["http://a.test".to_string()]);
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header("origin", "http://evil.test")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}

#[tokio::test]
async fn test_preflight_for_listed_origin() {
    let app = setup_test_app_with_origins(NO_UPSTREAM, vec!["http://a.test".to_string()]);
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/stocks/600519")
        .header("origin", "http://a.test")
        .header("access-control-request-method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://a.test")
    );
}

#[tokio::test]
async fn test_rebinding_same_address_fails() {
    let first = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = first.local_addr().unwrap();

    let second = tokio::net::TcpListener::bind(addr).await;
    assert!(second.is_err());
}
