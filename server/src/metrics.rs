//! Prometheus metrics for Order Desk.
//!
//! The store and the correlation-id middleware emit through the `metrics`
//! facade. Nothing is recorded until [`install_recorder`] runs, which only
//! happens when `METRICS_ENABLED=true`.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use thiserror::Error;

/// Errors from metrics setup.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter")]
    Build(#[source] BuildError),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter")]
    Install(#[source] BuildError),
}

/// Installs the global Prometheus recorder and returns a handle for rendering.
///
/// # Errors
///
/// Returns `MetricsError::Install` if a recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle, MetricsError> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Suffix("duration_seconds".to_string()),
            &[0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0],
        )
        .map_err(MetricsError::Build)?
        .install_recorder()
        .map_err(MetricsError::Install)?;

    register_metrics();
    tracing::info!("Prometheus recorder installed");
    Ok(handle)
}

/// Register all metric descriptions.
fn register_metrics() {
    describe_counter!("orders_inserted_total", "Orders accepted and persisted");
    describe_counter!(
        "orders_duplicate_rejected_total",
        "Inserts rejected because the order id already exists"
    );
    describe_counter!(
        "orders_persist_failures_total",
        "Inserts rolled back because the document write failed"
    );
    describe_histogram!(
        "orders_persist_duration_seconds",
        "Time spent rewriting the order document"
    );
    describe_counter!("orders_summaries_total", "Aggregation queries served");
    describe_counter!("http_requests_total", "HTTP requests by method and status");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request latency by method"
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn build_errors_keep_the_exporter_cause() {
        let err = PrometheusBuilder::new()
            .set_buckets_for_metric(Matcher::Suffix("duration_seconds".to_string()), &[])
            .map(|_| ())
            .map_err(MetricsError::Build)
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to build metrics exporter");
        assert!(matches!(
            err.source().and_then(|e| e.downcast_ref::<BuildError>()),
            Some(BuildError::EmptyBucketsOrQuantiles)
        ));
    }
}
