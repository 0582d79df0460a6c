use super::health;
use std::sync::LazyLock;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// `GET /` and `GET /health`. Building it starts the uptime clock.
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    LazyLock::force(&health::START_TIME);

    OpenApiRouter::<S>::new()
        .routes(routes!(health::root_handler))
        .routes(routes!(health::health_handler))
}
