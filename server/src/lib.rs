//! Order Desk HTTP service.
//!
//! Wires the order store to an Axum router:
//!
//! - [`config`]: environment-driven settings
//! - [`handlers`]: create, fetch and summarize orders
//! - [`router`]: routes plus CORS, tracing and correlation-id layers
//! - [`metrics`]: optional Prometheus recorder
//!
//! # Example
//!
//! ```no_run
//! use order_desk::{config::Config, open_store, router::build_router};
//! use order_desk_web::AppState;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env();
//! let store = open_store(&config).await?;
//! let app = build_router(AppState::new(store), None);
//!
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod router;

use config::Config;
use order_desk_core::{JsonFileStore, OrderStore, StoreError};
use std::sync::Arc;

/// Open the JSON-file-backed order store named by `config`.
///
/// Creates the file with an empty collection when it does not exist yet.
///
/// # Errors
///
/// Returns [`StoreError::Persistence`] if the file cannot be read, parsed,
/// or initialized.
pub async fn open_store(config: &Config) -> Result<Arc<OrderStore>, StoreError> {
    let backend = Arc::new(JsonFileStore::new(config.storage.db_path.clone()));
    let store = OrderStore::open(backend).await?;
    Ok(Arc::new(store))
}
