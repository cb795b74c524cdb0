//! Order Desk HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: 0.0.0.0:3000, orders in ./db.json
//! cargo run --bin order-desk
//!
//! # Custom port and storage, with Prometheus metrics
//! PORT=8080 ORDERS_DB_PATH=/tmp/orders.json METRICS_ENABLED=true cargo run --bin order-desk
//! ```

use order_desk::config::Config;
use order_desk::{metrics, open_store, router::build_router};
use order_desk_web::AppState;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("=== Order Desk HTTP API Server ===");

    let store = open_store(&config).await?;

    let metrics_handle = if config.metrics.enabled {
        Some(metrics::install_recorder()?)
    } else {
        None
    };

    let app = build_router(AppState::new(store), metrics_handle);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);
    info!("API Endpoints:");
    info!("  POST   /orders              - Store an order");
    info!("  GET    /orders/:id          - Get an order");
    info!("  GET    /orders/:type/:date  - Summarize orders");
    info!("  GET    /health              - Health check");
    info!("  GET    /ready               - Readiness check");
    if config.metrics.enabled {
        info!("  GET    /metrics             - Prometheus metrics");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
