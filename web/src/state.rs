//! Application state for Axum handlers.

use order_desk_core::OrderStore;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloned per request; the store itself is shared through an `Arc`, so every
/// handler sees the same collection.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The order store
    pub store: Arc<OrderStore>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub const fn new(store: Arc<OrderStore>) -> Self {
        Self { store }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use order_desk_testing::in_memory_store;

    #[test]
    fn test_state_is_clone() {
        // Axum requires Clone state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let (store, _) = in_memory_store().await;
        let state = AppState::new(Arc::new(store));
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.store, &cloned.store));
    }
}
