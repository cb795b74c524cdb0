//! Health check endpoints.
//!
//! These endpoints are used by load balancers and monitoring systems
//! to verify service health.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}

/// Simple health check endpoint (for basic liveness).
///
/// Returns 200 OK to indicate the service is running. Does not touch the
/// order store.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// { "status": "ok", "version": "0.1.0" }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    /// Whether the service can take traffic
    pub ready: bool,
    /// Number of orders currently loaded
    pub orders: usize,
    /// Where the order document is persisted
    pub backend: String,
    /// Time of the check (RFC 3339)
    pub checked_at: String,
}

/// Readiness check with store diagnostics.
///
/// The store is fully loaded before the router is built, so reaching this
/// handler means the document was read successfully.
///
/// # Endpoint
///
/// ```text
/// GET /ready
/// ```
///
/// # Response
///
/// ```json
/// {
///   "ready": true,
///   "orders": 3,
///   "backend": "json file db.json",
///   "checked_at": "2024-01-01T00:00:00+00:00"
/// }
/// ```
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let orders = state.store.len().await;

    (
        StatusCode::OK,
        Json(ReadinessResponse {
            ready: true,
            orders,
            backend: state.store.backend_description(),
            checked_at: chrono::Utc::now().to_rfc3339(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use order_desk_testing::{fixtures, store_with_orders};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_simple_health_check() {
        let (status, Json(body)) = health_check().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_readiness_reports_order_count() {
        let (store, _) = store_with_orders(vec![
            fixtures::order("1", "2024-01-01", "A", "X"),
            fixtures::order("2", "2024-01-02", "A", "Y"),
        ])
        .await;
        let state = AppState::new(Arc::new(store));

        let (status, Json(body)) = readiness_check(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.ready);
        assert_eq!(body.orders, 2);
        assert_eq!(body.backend, "in-memory");
    }
}
