use crate::error::DashboardError;
use crate::export::{ExportRecord, ExportRequest, file_name};
use crate::state::DashboardState;
use crate::view::AnalysisView;
use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use chrono::{Local, Utc};
use sentio_domain::constants::TWEET_MAX_CHARS;
use sentio_domain::sentiment::TweetRequest;
use sentio_kernel::server::ApiJson;
use serde::{Deserialize, Serialize};
use tracing::info;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Example tweets offered next to the input.
pub const EXAMPLES: [&str; 5] = [
    "I love this new product! It's amazing! 😍",
    "This is the worst service ever. Very disappointed. 😠",
    "The weather is sunny today. Temperature is 75°F.",
    "Just finished my morning workout! Feeling great! 💪",
    "Traffic is terrible. Going to be late for work again. 😤",
];

/// Sidebar status and debug info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    pub backend_online: bool,
    pub backend_url: String,
    pub docs_url: String,
    pub environment: String,
    pub retries: u32,
    pub timeout_secs: u64,
    /// Current time, `YYYY-MM-DD HH:MM UTC`.
    pub time: String,
}

pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(crate) async fn ui_health() -> &'static str {
    "ok"
}

pub(crate) async fn examples() -> Json<[&'static str; 5]> {
    Json(EXAMPLES)
}

pub(crate) async fn status(State(state): State<DashboardState>) -> Json<StatusView> {
    let cfg = &state.config;

    Json(StatusView {
        backend_online: state.backend.is_online().await,
        backend_url: state.backend.base_url().to_owned(),
        docs_url: cfg.backend.docs_url.clone(),
        environment: cfg.environment.clone(),
        retries: cfg.backend.retries,
        timeout_secs: cfg.backend.timeout_secs,
        time: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
    })
}

pub(crate) async fn analyze(
    State(state): State<DashboardState>,
    ApiJson(request): ApiJson<TweetRequest>,
) -> Result<Json<AnalysisView>, DashboardError> {
    if !state.backend.is_online().await {
        return Err(DashboardError::Offline {
            message: "Backend service is offline".into(),
            context: Some(state.backend.base_url().to_owned().into()),
        });
    }

    let text = request.text.trim();
    if text.is_empty() {
        return Err(DashboardError::InvalidInput {
            message: "Please enter some text to analyze".into(),
            context: None,
        });
    }

    let chars = request.text.chars().count();
    if chars > TWEET_MAX_CHARS {
        return Err(DashboardError::InvalidInput {
            message: format!("Text exceeds the {TWEET_MAX_CHARS} character limit ({chars})").into(),
            context: None,
        });
    }

    let response = state.backend.analyze(text).await.inspect_err(|e| {
        if matches!(e, DashboardError::BadGateway { .. } | DashboardError::Timeout { .. }) {
            state.backend.invalidate_health();
        }
    })?;

    info!(sentiment = %response.sentiment, chars, "Analysis displayed");
    Ok(Json(AnalysisView::from(response)))
}

pub(crate) async fn export_json(
    ApiJson(request): ApiJson<ExportRequest>,
) -> Result<Response, DashboardError> {
    let now = Local::now();
    let body = ExportRecord::stamped(request, now).to_json()?;

    Ok(attachment("application/json", &file_name("json", now), body))
}

pub(crate) async fn export_csv(ApiJson(request): ApiJson<ExportRequest>) -> Response {
    let now = Local::now();
    let body = ExportRecord::stamped(request, now).to_csv();

    attachment("text/csv; charset=utf-8", &file_name("csv", now), body)
}

fn attachment(content_type: &'static str, file_name: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_owned()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{file_name}\"")),
        ],
        body,
    )
        .into_response()
}
