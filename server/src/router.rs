//! Order Desk HTTP router.
//!
//! Composes the order handlers, health checks and optional metrics endpoint
//! into a single Axum router.

use crate::handlers;
use axum::{
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use order_desk_web::handlers::{health_check, readiness_check};
use order_desk_web::{correlation_id_layer, AppState};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the complete router.
///
/// # Routes
///
/// - `POST /orders` - Store a new order
/// - `GET /orders/:id` - Get an order
/// - `GET /orders/:type/:date` - Summarize orders by type and date
/// - `GET /health` - Liveness
/// - `GET /ready` - Readiness with store diagnostics
/// - `GET /metrics` - Prometheus text format, only when `metrics` is `Some`
pub fn build_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let mut router = Router::new()
        .route("/orders", post(handlers::create_order))
        .route("/orders/:id", get(handlers::get_order))
        .route("/orders/:type/:date", get(handlers::summarize_orders))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .with_state(state);

    if let Some(handle) = metrics {
        router = router.route(
            "/metrics",
            get(move || {
                let handle = handle.clone();
                async move { handle.render() }
            }),
        );
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .layer(CorsLayer::permissive())
}
