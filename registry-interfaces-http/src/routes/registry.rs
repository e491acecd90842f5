use axum::routing::get;
use axum::Router;

use registry_application::AppState;

use crate::handlers::{ops_handlers, registry_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/registry/:name/source",
            get(registry_handlers::get_source),
        )
        .route("/r/:name", get(registry_handlers::get_item))
        .route("/registry.json", get(registry_handlers::get_registry_index))
        .route("/ops/health/live", get(ops_handlers::health_live))
        .route("/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
