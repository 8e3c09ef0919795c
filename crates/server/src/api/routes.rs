use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{addon, handlers, middleware::metrics_middleware};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Liveness and operations
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        // Addon protocol
        .route("/manifest.json", get(addon::get_manifest))
        .route("/catalog/{type}/{id}", get(addon::get_catalog))
        .route("/stream/{type}/{id}", get(addon::get_stream))
        .with_state(state)
        .layer(middleware::from_fn(metrics_middleware))
        // Media clients load addons cross-origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
