//! Axum integration for Order Desk.
//!
//! This crate is the imperative shell around `order-desk-core`: it turns
//! store outcomes into HTTP responses and adds the request plumbing every
//! endpoint shares.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, JSON, CORS
//! │  - Request parsing                      │  ← Correlation IDs
//! │  - Response serialization               │  ← Logging, metrics
//! ├─────────────────────────────────────────┤
//! │         Order Desk Core                 │
//! │  - OrderStore (unique ids, durability)  │
//! │  - OrderSummary aggregation             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract data** from the request (JSON body, path segments)
//! 3. **Call the store** through [`AppState`]
//! 4. **Map result** to a response, or to an [`AppError`]
//!
//! # Example
//!
//! ```ignore
//! use order_desk_web::{AppError, AppState};
//! use axum::{extract::{Path, State}, Json};
//!
//! async fn get_order(
//!     State(state): State<AppState>,
//!     Path(id): Path<String>,
//! ) -> Result<Json<Order>, AppError> {
//!     state.store.find_by_id(&id).await
//!         .map(Json)
//!         .ok_or_else(|| AppError::not_found("Order", &id))
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::CorrelationId;
pub use middleware::{correlation_id_layer, CORRELATION_ID_HEADER};
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
