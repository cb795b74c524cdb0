//! # Order Desk Core
//!
//! Order storage and aggregation for the Order Desk service.
//!
//! ## Core Concepts
//!
//! - **Order**: a flat, caller-identified record (`id`, `title`, `date`, `type`, `customer`)
//! - **`OrderStore`**: owns the collection, enforces unique ids, persists on every insert
//! - **`DocumentStore`**: persistence seam; the whole collection is one JSON document
//! - **`OrderSummary`**: count, ten most recent ids and distinct customers for a (type, date) pair
//!
//! ## Example
//!
//! ```no_run
//! use order_desk_core::{JsonFileStore, Order, OrderStore};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = OrderStore::open(Arc::new(JsonFileStore::new("db.json"))).await?;
//!
//! store
//!     .insert(Order::new("1", "Standing desk", "2024-01-15", "furniture", "alice"))
//!     .await?;
//!
//! let summary = store.summarize("furniture", "20240115").await;
//! assert_eq!(summary.count, 1);
//! # Ok(())
//! # }
//! ```

pub mod document_store;
pub mod json_file;
pub mod store;
pub mod summary;
pub mod types;

pub use document_store::{DocumentStore, DocumentStoreError, OrderDocument};
pub use json_file::JsonFileStore;
pub use store::{OrderStore, StoreError};
pub use summary::{OrderSummary, RECENT_ORDERS_LIMIT};
pub use types::{CustomerId, Order, OrderId};
