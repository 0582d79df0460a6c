use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use sentio::domain::config::CorsConfig;
use sentio::domain::sentiment::ErrorBody;
use sentio::kernel::server::{ApiError, ApiState};
use std::any::Any;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tweet Sentiment Analysis API",
        description = "A REST API for analyzing tweet sentiment using VADER sentiment analysis"
    ),
    tags(
        (name = "System", description = "Liveness and health"),
        (name = "Analysis", description = "Sentiment analysis"),
    )
)]
struct ApiDoc;

pub(crate) fn init(state: ApiState) -> Result<Router> {
    let cors = cors_layer(&state.config.cors)?;

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(sentio::server::router::system_router())
        .merge(sentio::server::router::analysis_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let spec = api_doc.clone();

    Ok(Router::new()
        .merge(openapi_routes)
        .merge(Scalar::with_url("/docs", api_doc))
        .route("/openapi.json", get(move || std::future::ready(Json(spec.clone()))))
        .fallback(not_found)
        .layer(cors)
        .layer(CatchPanicLayer::custom(on_panic)))
}

fn cors_layer(cfg: &CorsConfig) -> Result<CorsLayer> {
    let origins = if cfg.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let list = cfg
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).with_context(|| format!("Invalid CORS origin: {origin}"))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(list)
    };

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(cfg.max_age_secs)))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not Found")))
}

#[allow(clippy::needless_pass_by_value)]
fn on_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_owned());
    tracing::error!(panic = %message, "Handler panicked");

    ApiError::fallback_response()
}
