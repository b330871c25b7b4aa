//! Application state for the Leave and Bonus Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::{LeaveStore, MemoryStore};

/// Shared application state.
///
/// Holds the persistence collaborator every handler operates against. The
/// store is injected so deployments can supply the hosted backend while
/// tests run on [`MemoryStore`].
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn LeaveStore>,
}

impl AppState {
    /// Creates a new application state with the given store.
    pub fn new(store: Arc<dyn LeaveStore>) -> Self {
        Self { store }
    }

    /// Creates a state backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Returns a reference to the store.
    pub fn store(&self) -> &dyn LeaveStore {
        self.store.as_ref()
    }
}
