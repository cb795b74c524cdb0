//! Persistence seam for the order collection.
//!
//! The whole collection lives in one JSON document, `{ "orders": [...] }`.
//! A [`DocumentStore`] loads that document once at startup and rewrites it in
//! full on every insert. There is no partial update and no append log.
//!
//! # Implementations
//!
//! - [`JsonFileStore`](crate::json_file::JsonFileStore): production, a file on disk
//! - `InMemoryDocumentStore` (in `order-desk-testing`): fast tests with failure injection

use crate::types::Order;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// The persisted layout of the order collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDocument {
    /// Every stored order, in insertion order
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl OrderDocument {
    /// Creates a document holding `orders`
    #[must_use]
    pub const fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }
}

/// Errors that can occur while loading or saving the document.
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// Reading or writing the backing storage failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend refused the operation.
    #[error("Document store unavailable: {0}")]
    Unavailable(String),
}

/// Whole-document persistence for orders.
///
/// # Durability
///
/// `save` must not resolve `Ok` until the document is committed. Callers rely
/// on this to report an insert as successful.
///
/// # Dyn Compatibility
///
/// Methods return `Pin<Box<dyn Future>>` so the store can hold an
/// `Arc<dyn DocumentStore>`.
pub trait DocumentStore: Send + Sync {
    /// Loads the document.
    ///
    /// A backend with nothing stored yet returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - `Io`: the storage could not be read
    /// - `Serialization`: the stored bytes are not a valid document
    fn load(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<OrderDocument>, DocumentStoreError>> + Send + '_>>;

    /// Replaces the stored document with `document`.
    ///
    /// # Errors
    ///
    /// - `Io`: the write or flush failed
    /// - `Serialization`: the document could not be encoded
    fn save<'a>(
        &'a self,
        document: &'a OrderDocument,
    ) -> Pin<Box<dyn Future<Output = Result<(), DocumentStoreError>> + Send + 'a>>;

    /// Short human-readable description of where the document lives.
    fn describe(&self) -> String;
}
