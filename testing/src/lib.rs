//! # Order Desk Testing
//!
//! Testing utilities for Order Desk.
//!
//! This crate provides:
//! - An in-memory [`DocumentStore`](order_desk_core::DocumentStore) with write-failure injection
//! - Order fixtures and builders
//! - proptest strategies for orders
//!
//! ## Example
//!
//! ```
//! use order_desk_testing::{fixtures, in_memory_store};
//!
//! # tokio_test::block_on(async {
//! let (store, backend) = in_memory_store().await;
//! store.insert(fixtures::order("1", "2024-01-01", "A", "X")).await.unwrap();
//!
//! assert_eq!(backend.save_count(), 2); // initial empty document + insert
//! # });
//! ```

pub mod mocks;

/// Order fixtures.
pub mod fixtures {
    use order_desk_core::Order;

    /// An order with a generated title.
    #[must_use]
    pub fn order(id: &str, date: &str, order_type: &str, customer: &str) -> Order {
        Order::new(id, format!("Order {id}"), date, order_type, customer)
    }

    /// `count` orders of `order_type` on consecutive January 2024 days,
    /// oldest first, with ids `"1"..="count"`.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds 31.
    #[must_use]
    pub fn january_orders(count: u32, order_type: &str, customer: &str) -> Vec<Order> {
        assert!(count <= 31, "January has 31 days");
        (1..=count)
            .map(|day| order(&day.to_string(), &format!("2024-01-{day:02}"), order_type, customer))
            .collect()
    }
}

/// proptest strategies for domain types.
pub mod properties {
    use order_desk_core::Order;
    use proptest::prelude::*;

    /// A date in `YYYY-MM-DD` form within a small range, so collisions are common.
    pub fn date() -> impl Strategy<Value = String> {
        (2023u32..=2024, 1u32..=2, 1u32..=3)
            .prop_map(|(year, month, day)| format!("{year}-{month:02}-{day:02}"))
    }

    /// Orders with unique ids drawn from a few types, dates and customers.
    pub fn orders(max: usize) -> impl Strategy<Value = Vec<Order>> {
        prop::collection::vec(
            (prop::sample::select(vec!["A", "B"]), date(), prop::sample::select(vec!["X", "Y", "Z"])),
            0..max,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(n, (order_type, date, customer))| {
                    Order::new(n.to_string(), format!("Order {n}"), date, order_type, customer)
                })
                .collect()
        })
    }
}

/// Test helpers.
pub mod helpers {
    use crate::mocks::InMemoryDocumentStore;
    use order_desk_core::{Order, OrderDocument, OrderStore};
    use std::sync::Arc;

    /// Opens an [`OrderStore`] over a fresh [`InMemoryDocumentStore`].
    ///
    /// # Panics
    ///
    /// Panics if the in-memory backend fails to initialize, which only
    /// happens when writes were set to fail beforehand.
    pub async fn in_memory_store() -> (OrderStore, Arc<InMemoryDocumentStore>) {
        store_with_orders(Vec::new()).await
    }

    /// Opens an [`OrderStore`] whose backend already holds `orders`.
    ///
    /// # Panics
    ///
    /// Panics if the in-memory backend fails to load.
    #[allow(clippy::expect_used)]
    pub async fn store_with_orders(orders: Vec<Order>) -> (OrderStore, Arc<InMemoryDocumentStore>) {
        let backend = Arc::new(if orders.is_empty() {
            InMemoryDocumentStore::new()
        } else {
            InMemoryDocumentStore::with_document(OrderDocument::new(orders))
        });
        let store = OrderStore::open(Arc::clone(&backend) as Arc<dyn order_desk_core::DocumentStore>)
            .await
            .expect("in-memory backend should open");
        (store, backend)
    }

    /// Installs a test tracing subscriber, ignoring repeated installs.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::{in_memory_store, init_tracing, store_with_orders};
pub use mocks::InMemoryDocumentStore;
