//! Application state shared across handlers

use std::sync::Arc;

use crate::repositories::{InMemoryUserRepository, UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repository: Arc<dyn UserRepository>,
}

impl AppState {
    /// Wrap an arbitrary repository implementation
    pub fn new(user_repository: impl UserRepository + 'static) -> Self {
        Self {
            user_repository: Arc::new(user_repository),
        }
    }

    /// State backed by a freshly seeded in-memory store
    pub fn in_memory() -> Self {
        Self::new(InMemoryUserRepository::seeded())
    }
}
