//! Application state for the API server.

use crate::db::Database;
use crate::service::TodoService;

/// Shared application state.
///
/// Generic over `D: Database`; the concrete store is injected by the caller.
pub struct AppState<D: Database> {
    service: TodoService<D>,
}

// Manual Clone impl - TodoService shares the database through an Arc
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState around the given database.
    pub fn new(db: D) -> Self {
        Self {
            service: TodoService::new(db),
        }
    }

    /// Get a reference to the todo service.
    pub fn service(&self) -> &TodoService<D> {
        &self.service
    }
}
