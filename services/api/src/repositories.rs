//! Repositories for user records

use async_trait::async_trait;
use common::error::RepositoryResult;

use crate::models::{User, UserPayload};

pub mod memory;

pub use memory::InMemoryUserRepository;

/// Capability surface consumed by the request handlers
///
/// Implementations own identifier assignment and creation timestamps.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get all users in insertion order
    async fn list(&self) -> RepositoryResult<Vec<User>>;

    /// Find a user by ID
    async fn get(&self, id: u64) -> RepositoryResult<User>;

    /// Create a new user with a fresh ID and the current time
    async fn create(&self, payload: UserPayload) -> RepositoryResult<User>;

    /// Replace every field of an existing user except its ID and creation time
    async fn update(&self, id: u64, payload: UserPayload) -> RepositoryResult<User>;

    /// Delete a user by ID
    async fn delete(&self, id: u64) -> RepositoryResult<()>;
}
