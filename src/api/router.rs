use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::metrics::StoreMetrics;
use crate::store::MetadataStore;

use super::handlers::*;

/// Application state shared across all handlers
pub struct AppState {
    pub store: Arc<MetadataStore>,
    pub metrics: Arc<StoreMetrics>,
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // Record operations
        .route("/metadata", get(get_metadata).put(put_metadata))
        .route(
            "/metadata/:id",
            get(get_metadata_with_id)
                .put(put_metadata_with_id)
                .delete(delete_metadata),
        )
        // Health and metrics
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
