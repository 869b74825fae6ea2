//! API module
//!
//! HTTP endpoints, HTML views and middleware.

pub mod middleware;
pub mod routes;
pub mod views;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::ledger::SharedLedger;

pub use routes::create_router;

/// Build the application router
pub fn build_router(ledger: SharedLedger) -> Router {
    // ServiceBuilder layers run top to bottom:
    // request id -> trace -> propagate id -> logging -> handler
    let app_routes =
        create_router().layer(axum::middleware::from_fn(middleware::logging_middleware));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        .merge(app_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(ledger)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
