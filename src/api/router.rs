//! Report API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! No auth middleware: the service is meant to sit behind the deployer's
//! own gateway.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router with all routes and request tracing.
pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/predict", post(endpoints::predict::predict))
        .route("/health", get(endpoints::health::check))
        .with_state(ctx)
        .layer(TraceLayer::new_for_http())
}
