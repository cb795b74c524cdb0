//! The order store.
//!
//! [`OrderStore`] owns the authoritative in-memory collection and the
//! [`DocumentStore`] it is persisted to. Reads work on the in-memory copy and
//! hand out clones; inserts rewrite the whole document before returning.
//!
//! # Concurrency
//!
//! The collection sits behind an async `RwLock`. An insert holds the write
//! lock across the duplicate check and the durability write, so concurrent
//! inserts of one id cannot both succeed and readers never observe an order
//! that is not yet on disk.

use crate::document_store::{DocumentStore, DocumentStoreError, OrderDocument};
use crate::summary::OrderSummary;
use crate::types::{Order, OrderId};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors returned by [`OrderStore`] operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// An order with this id is already stored.
    #[error("Order ID already exists: {0}")]
    DuplicateId(OrderId),

    /// The document could not be loaded or the durability write failed.
    #[error("Persistence error: {0}")]
    Persistence(#[from] DocumentStoreError),
}

/// In-memory order collection backed by a [`DocumentStore`].
pub struct OrderStore {
    orders: RwLock<Vec<Order>>,
    backend: Arc<dyn DocumentStore>,
}

impl std::fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStore")
            .field("backend", &self.backend.describe())
            .finish_non_exhaustive()
    }
}

impl OrderStore {
    /// Loads the full document from `backend`.
    ///
    /// A backend with no document yet is initialized with an empty one, which
    /// is written out immediately.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the document cannot be read,
    /// decoded or initialized.
    pub async fn open(backend: Arc<dyn DocumentStore>) -> Result<Self, StoreError> {
        let document = match backend.load().await? {
            Some(document) => document,
            None => {
                let document = OrderDocument::default();
                backend.save(&document).await?;
                tracing::info!(backend = %backend.describe(), "Initialized empty order document");
                document
            },
        };

        tracing::info!(
            backend = %backend.describe(),
            orders = document.orders.len(),
            "Order store opened"
        );

        Ok(Self {
            orders: RwLock::new(document.orders),
            backend,
        })
    }

    /// Adds `order` and persists the collection.
    ///
    /// Returns once the document write has completed. If the write fails the
    /// order is removed again, so the in-memory state always matches what was
    /// last committed.
    ///
    /// # Errors
    ///
    /// - `DuplicateId`: an order with the same id is already stored
    /// - `Persistence`: the durability write failed
    pub async fn insert(&self, order: Order) -> Result<(), StoreError> {
        let mut orders = self.orders.write().await;

        if orders.iter().any(|existing| existing.id == order.id) {
            metrics::counter!("orders_duplicate_rejected_total").increment(1);
            tracing::warn!(order_id = %order.id, "Rejected order with duplicate id");
            return Err(StoreError::DuplicateId(order.id));
        }

        let order_id = order.id.clone();
        orders.push(order);

        let document = OrderDocument::new(orders.to_vec());
        let started = Instant::now();
        let result = self.backend.save(&document).await;
        metrics::histogram!("orders_persist_duration_seconds")
            .record(started.elapsed().as_secs_f64());

        if let Err(e) = result {
            orders.pop();
            metrics::counter!("orders_persist_failures_total").increment(1);
            tracing::error!(order_id = %order_id, error = %e, "Failed to persist order document");
            return Err(e.into());
        }

        metrics::counter!("orders_inserted_total").increment(1);
        tracing::info!(order_id = %order_id, total = orders.len(), "Order stored");
        Ok(())
    }

    /// Looks up an order by id.
    pub async fn find_by_id(&self, id: &str) -> Option<Order> {
        self.orders
            .read()
            .await
            .iter()
            .find(|order| order.id.as_str() == id)
            .cloned()
    }

    /// Every order of type `order_type` whose compacted date equals `date`.
    ///
    /// `date` is a digit string such as `20240115`; it matches an order dated
    /// `2024-01-15`. Results keep insertion order.
    pub async fn find_by_type_and_date(&self, order_type: &str, date: &str) -> Vec<Order> {
        self.orders
            .read()
            .await
            .iter()
            .filter(|order| order.matches_type_and_date(order_type, date))
            .cloned()
            .collect()
    }

    /// Aggregates the orders matching (`order_type`, `date`).
    ///
    /// Never fails: a date that matches nothing yields an empty summary.
    pub async fn summarize(&self, order_type: &str, date: &str) -> OrderSummary {
        let matches = self.find_by_type_and_date(order_type, date).await;
        let summary = OrderSummary::from_matches(order_type, &matches);

        metrics::counter!("orders_summaries_total").increment(1);
        tracing::debug!(
            order_type,
            date,
            count = summary.count,
            customers = summary.related_customers.len(),
            "Summarized orders"
        );
        summary
    }

    /// Snapshot of every stored order, in insertion order.
    pub async fn all(&self) -> Vec<Order> {
        self.orders.read().await.to_vec()
    }

    /// Number of stored orders.
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Whether the store holds no orders.
    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }

    /// Description of the persistence backend.
    #[must_use]
    pub fn backend_description(&self) -> String {
        self.backend.describe()
    }
}
