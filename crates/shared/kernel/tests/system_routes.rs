#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::routing::post;
use sentio_kernel::server::{ApiError, ApiJson, system_router};
use sentio_kernel::domain::sentiment::{ErrorBody, TweetRequest};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    let (router, _api) = system_router::<()>().split_for_parts();
    router
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_root_reports_healthy() {
    let response = app().oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Tweet Sentiment Analysis API");
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_is_not_cached() {
    let response =
        app().oneshot(Request::get("/health").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cache = response.headers().get(header::CACHE_CONTROL).unwrap().to_str().unwrap();
    assert!(cache.contains("no-store"));

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "sentiment-analysis-api");
    assert!(json["uptime"].is_u64());
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(), "{timestamp}");
}

async fn echo(ApiJson(request): ApiJson<TweetRequest>) -> Result<ApiJson<TweetRequest>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("empty"));
    }
    Ok(ApiJson(request))
}

fn echo_app() -> Router {
    Router::new().route("/echo", post(echo))
}

fn post_json(body: &str) -> Request<Body> {
    Request::post("/echo")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn test_json_rejections_become_422_with_detail() {
    for body in ["{", "{}", r#"{"text": 5}"#] {
        let response = echo_app().oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{body}");

        let error: ErrorBody = serde_json::from_value(body_json(response).await).unwrap();
        assert!(!error.detail.is_empty());
    }
}

#[tokio::test]
async fn test_missing_content_type_is_422() {
    let request = Request::post("/echo").body(Body::from(r#"{"text":"hi"}"#)).unwrap();
    let response = echo_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_handler_errors_carry_status_and_detail() {
    let response = echo_app().oneshot(post_json(r#"{"text":"  "}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["detail"], "empty");

    let response = echo_app().oneshot(post_json(r#"{"text":"hi","extra":1}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["text"], "hi");
}

#[test]
fn test_fallback_response_is_generic_500() {
    let response = ApiError::fallback_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_internal_errors_keep_context_out_of_detail() {
    use sentio_kernel::server::ApiErrorExt;

    let err = Err::<(), _>(ApiError::internal("Error analyzing sentiment"))
        .context("scorer panicked")
        .unwrap_err();

    assert_eq!(err.detail(), "Error analyzing sentiment");
    assert!(err.to_string().contains("scorer panicked"));
}
