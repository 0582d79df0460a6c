use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use sentio::domain::config::ApiConfig;
use sentio::domain::sentiment::PolarityScores;
use sentio::features::analysis::{self, AnalysisError, PolarityScorer};
use sentio_server::Server;
use serde_json::{Value, json};
use tokio::task::JoinSet;
use tower::ServiceExt;

fn app() -> Router {
    Server::builder().build().expect("default config builds").router()
}

fn analyze(body: Value) -> Request<Body> {
    Request::post("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response).await)
}

#[tokio::test]
async fn test_root_endpoint() {
    let (status, json) = send(Request::get("/").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Tweet Sentiment Analysis API");
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], "1.0.0");
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = send(Request::get("/health").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "sentiment-analysis-api");
}

#[tokio::test]
async fn test_analyze_positive_sentiment() {
    let text = "I love this product! It's amazing and wonderful!";
    let (status, json) = send(analyze(json!({ "text": text }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sentiment"], "positive");
    assert_eq!(json["text"], text);

    let confidence = json["confidence"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&confidence));
    for key in ["pos", "neg", "neu", "compound"] {
        assert!(json["scores"][key].is_f64(), "missing score {key}");
    }
    let compound = json["scores"]["compound"].as_f64().unwrap();
    assert!((confidence - compound.abs()).abs() < 1e-9);
}

#[tokio::test]
async fn test_analyze_negative_sentiment() {
    let text = "I hate this product! It's terrible and awful!";
    let (status, json) = send(analyze(json!({ "text": text }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sentiment"], "negative");
    assert_eq!(json["text"], text);
    assert!((0.0..=1.0).contains(&json["confidence"].as_f64().unwrap()));
}

#[tokio::test]
async fn test_analyze_neutral_sentiment() {
    let text = "The weather is 75 degrees today.";
    let (status, json) = send(analyze(json!({ "text": text }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sentiment"], "neutral");
    assert_eq!(json["text"], text);
}

#[tokio::test]
async fn test_empty_text_error() {
    let (status, json) = send(analyze(json!({ "text": "" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Tweet text cannot be empty");
}

#[tokio::test]
async fn test_whitespace_only_text_error() {
    let (status, json) = send(analyze(json!({ "text": "   " }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["detail"].as_str().unwrap().to_lowercase().contains("empty"));
}

#[tokio::test]
async fn test_missing_text_field_error() {
    let (status, json) = send(analyze(json!({}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn test_wrong_text_type_error() {
    let (status, _) = send(analyze(json!({ "text": 42 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_invalid_json_error() {
    let request = Request::post("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("invalid json"))
        .unwrap();
    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn test_form_body_error() {
    let request = Request::post("/analyze").body(Body::from("invalid json")).unwrap();
    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_long_text_analysis() {
    let text = format!("{}I love it!", "This is a very long positive message. ".repeat(10));
    let (status, json) = send(analyze(json!({ "text": text }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sentiment"], "positive");
}

#[tokio::test]
async fn test_special_characters_handling() {
    let (status, json) = send(analyze(json!({ "text": "I love this! 😍❤️🎉 #awesome @company" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sentiment"], "positive");
}

#[tokio::test]
async fn test_mixed_sentiment_text() {
    let (status, json) = send(analyze(
        json!({ "text": "I love the design but hate the price. It's good but expensive." }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(["positive", "negative", "neutral"].contains(&json["sentiment"].as_str().unwrap()));
}

#[tokio::test]
async fn test_text_is_echoed_untrimmed() {
    let (status, json) = send(analyze(json!({ "text": "  good vibes  " }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["text"], "  good vibes  ");
}

#[tokio::test]
async fn test_concurrent_requests() {
    let app = app();
    let mut tasks = JoinSet::new();

    for i in 0..10 {
        let app = app.clone();
        tasks.spawn(async move {
            let response =
                app.oneshot(analyze(json!({ "text": format!("Test message {i}") }))).await.unwrap();
            let status = response.status();
            (status, json_body(response).await)
        });
    }

    let mut completed = 0;
    while let Some(result) = tasks.join_next().await {
        let (status, json) = result.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert!(json["sentiment"].is_string());
        completed += 1;
    }
    assert_eq!(completed, 10);
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::options("/analyze")
        .header(header::ORIGIN, "http://localhost:8501")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_cors_restricted_origins() {
    let mut cfg = ApiConfig::default();
    cfg.cors.allowed_origins = vec!["http://localhost:8501".to_owned()];
    let app = Server::builder().config(cfg).build().unwrap().router();

    let request = Request::get("/health")
        .header(header::ORIGIN, "http://evil.test")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());

    let request = Request::get("/health")
        .header(header::ORIGIN, "http://localhost:8501")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://localhost:8501");
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let (status, json) = send(Request::get("/openapi.json").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["info"]["title"], "Tweet Sentiment Analysis API");
    for path in ["/", "/health", "/analyze"] {
        assert!(json["paths"][path].is_object(), "missing {path}");
    }
    assert!(json["paths"]["/analyze"]["post"].is_object());
}

#[tokio::test]
async fn test_docs_page_is_served() {
    let response = app().oneshot(Request::get("/docs").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_404_with_detail() {
    let (status, json) = send(Request::get("/nope").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Not Found");
}

#[tokio::test]
async fn test_emphasized_neutral_text_stays_neutral() {
    let (status, json) = send(analyze(json!({ "text": "The weather is 75 degrees today!" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sentiment"], "neutral");
    assert_eq!(json["scores"]["compound"], 0.0);
}

#[derive(Debug)]
struct BrokenScorer;

impl PolarityScorer for BrokenScorer {
    fn polarity_scores(&self, _: &str) -> Result<PolarityScores, AnalysisError> {
        Err(AnalysisError::Scoring { message: "lexicon unavailable".into(), context: None })
    }
}

#[derive(Debug)]
struct PanickingScorer;

impl PolarityScorer for PanickingScorer {
    fn polarity_scores(&self, _: &str) -> Result<PolarityScores, AnalysisError> {
        panic!("scorer blew up")
    }
}

fn app_with(scorer: impl PolarityScorer) -> Router {
    let cfg = ApiConfig::default();
    let slice = analysis::init_with(&cfg, scorer).unwrap();

    Server::builder().config(cfg).slice(slice).build().unwrap().router()
}

#[tokio::test]
async fn test_scoring_failure_is_500() {
    let response = app_with(BrokenScorer).oneshot(analyze(json!({ "text": "hello" }))).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = json_body(response).await;
    assert_eq!(json["detail"], "Error analyzing sentiment");
    assert!(!json.to_string().contains("lexicon"));
}

#[tokio::test]
async fn test_handler_panic_is_500() {
    let response = app_with(PanickingScorer).oneshot(analyze(json!({ "text": "hello" }))).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await["detail"], "Internal server error");
}

#[tokio::test]
async fn test_server_survives_handler_panic() {
    let router = app_with(PanickingScorer);

    let response = router.clone().oneshot(analyze(json!({ "text": "hello" }))).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = router.oneshot(Request::get("/health").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn test_build_rejects_invalid_thresholds() {
    let mut cfg = ApiConfig::default();
    cfg.analysis.positive_threshold = -0.5;

    let err = Server::builder().config(cfg).build().unwrap_err();
    assert!(err.to_string().contains("bootstrap"), "{err}");
}

#[test]
fn test_build_rejects_missing_certificates() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = ApiConfig::default();
    cfg.server.ssl = Some(sentio::domain::config::SslConfig {
        cert: dir.path().join("cert.pem"),
        key: dir.path().join("key.pem"),
    });

    let err = Server::builder().config(cfg).build().unwrap_err();
    assert!(err.to_string().contains("SSL certificate not found"), "{err}");
}

#[test]
fn test_port_override() {
    let server = Server::builder().port(9100).build().unwrap();
    assert_eq!(server.state().config.server.port, 9100);
}
