use axum::http::header;
use axum::{Json, response::IntoResponse};
use chrono::{SecondsFormat, Utc};
use sentio_derive::{api_handler, api_model};
use sentio_domain::constants::{API_TITLE, HEALTHY, SERVICE_NAME, SYSTEM_TAG};
use std::sync::LazyLock;
use std::time::Instant;

/// Greeting of `GET /`.
#[api_model]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub version: String,
}

/// Body of `GET /health`.
#[api_model]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// RFC 3339, UTC.
    pub timestamp: String,
    /// Seconds since the router was first built.
    pub uptime: u64,
}

pub(super) static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[api_handler(
    get,
    path = "/",
    responses((status = OK, description = "Liveness probe", body = RootResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: API_TITLE.to_owned(),
        status: HEALTHY.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Health check", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler() -> impl IntoResponse {
    let body = HealthResponse {
        status: HEALTHY.to_owned(),
        service: SERVICE_NAME.to_owned(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        uptime: START_TIME.elapsed().as_secs(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
