use crate::handlers;
use crate::state::DashboardState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub(crate) fn init(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/_stcore/health", get(handlers::ui_health))
        .route("/api/status", get(handlers::status))
        .route("/api/examples", get(handlers::examples))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/export/json", post(handlers::export_json))
        .route("/api/export/csv", post(handlers::export_csv))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
