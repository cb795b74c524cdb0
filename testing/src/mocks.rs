//! Mock implementations of the persistence seam.

use order_desk_core::{DocumentStore, DocumentStoreError, OrderDocument};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// In-memory [`DocumentStore`] for fast, deterministic tests.
///
/// Keeps the last saved document and counts saves. Writes can be made to
/// fail with [`fail_writes`](Self::fail_writes) to exercise the store's
/// rollback path.
///
/// # Example
///
/// ```
/// use order_desk_testing::InMemoryDocumentStore;
/// use order_desk_core::{DocumentStore, OrderDocument};
///
/// # tokio_test::block_on(async {
/// let backend = InMemoryDocumentStore::new();
/// backend.fail_writes(true);
///
/// assert!(backend.save(&OrderDocument::default()).await.is_err());
/// assert_eq!(backend.save_count(), 0);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    document: Mutex<Option<OrderDocument>>,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl InMemoryDocumentStore {
    /// An empty backend; the first load returns `None`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `document`.
    #[must_use]
    pub fn with_document(document: OrderDocument) -> Self {
        Self {
            document: Mutex::new(Some(document)),
            ..Self::default()
        }
    }

    /// Makes every following save fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// The last committed document, if any.
    pub async fn snapshot(&self) -> Option<OrderDocument> {
        self.document.lock().await.clone()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn load(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<OrderDocument>, DocumentStoreError>> + Send + '_>>
    {
        Box::pin(async move { Ok(self.document.lock().await.clone()) })
    }

    fn save<'a>(
        &'a self,
        document: &'a OrderDocument,
    ) -> Pin<Box<dyn Future<Output = Result<(), DocumentStoreError>> + Send + 'a>> {
        Box::pin(async move {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(DocumentStoreError::Unavailable(
                    "writes disabled for test".to_string(),
                ));
            }

            *self.document.lock().await = Some(document.clone());
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use order_desk_core::Order;

    #[tokio::test]
    async fn save_replaces_document() {
        let backend = InMemoryDocumentStore::new();
        let first = OrderDocument::new(vec![Order::new("1", "t", "2024-01-01", "A", "X")]);
        let second = OrderDocument::default();

        backend.save(&first).await.unwrap();
        backend.save(&second).await.unwrap();

        assert_eq!(backend.load().await.unwrap(), Some(second));
        assert_eq!(backend.save_count(), 2);
    }

    #[tokio::test]
    async fn failing_writes_keep_previous_document() {
        let document = OrderDocument::new(vec![Order::new("1", "t", "2024-01-01", "A", "X")]);
        let backend = InMemoryDocumentStore::with_document(document.clone());
        backend.fail_writes(true);

        let result = backend.save(&OrderDocument::default()).await;

        assert!(matches!(result, Err(DocumentStoreError::Unavailable(_))));
        assert_eq!(backend.snapshot().await, Some(document));
    }
}
