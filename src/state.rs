//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the message store as a trait object so tests can hand in memory
//! stores without a database.

use std::sync::Arc;

use crate::services::contact::MessageStore;

/// Clone is required by Axum; the store is `Arc`-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MessageStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::services::contact::{ContactError, ContactSubmission};

    /// Store that keeps rows in memory.
    #[derive(Default)]
    pub struct MemoryStore {
        pub rows: Mutex<Vec<ContactSubmission>>,
    }

    impl MemoryStore {
        #[must_use]
        pub fn rows(&self) -> Vec<ContactSubmission> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageStore for MemoryStore {
        async fn insert(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
            self.rows.lock().unwrap().push(submission.clone());
            Ok(())
        }
    }

    /// Store that fails every insert, unreachable or rejecting.
    pub struct FailingStore {
        pub unavailable: bool,
    }

    #[async_trait]
    impl MessageStore for FailingStore {
        async fn insert(&self, _submission: &ContactSubmission) -> Result<(), ContactError> {
            if self.unavailable {
                Err(ContactError::Unavailable("connection refused".into()))
            } else {
                Err(ContactError::Rejected("relation \"messages\" does not exist".into()))
            }
        }
    }

    /// Create a test `AppState` over an in-memory store; returns the store too.
    #[must_use]
    pub fn test_app_state() -> (AppState, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (AppState::new(store.clone()), store)
    }

    /// Create a test `AppState` whose store always fails.
    #[must_use]
    pub fn failing_app_state(unavailable: bool) -> AppState {
        AppState::new(Arc::new(FailingStore { unavailable }))
    }
}
