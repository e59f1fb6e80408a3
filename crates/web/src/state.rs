//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::TodoStore;
use crate::services::todo::TodoService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// document store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn TodoStore>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `store` - Document store holding items and lists
    #[must_use]
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    /// Get a reference to the document store.
    #[must_use]
    pub fn store(&self) -> &dyn TodoStore {
        self.inner.store.as_ref()
    }

    /// List and item operations over the shared store.
    #[must_use]
    pub fn todos(&self) -> TodoService<'_> {
        TodoService::new(self.store())
    }
}
