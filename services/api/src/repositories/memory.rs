//! In-memory user repository

use async_trait::async_trait;
use chrono::{Duration, Utc};
use common::error::{RepositoryError, RepositoryResult};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::UserRepository;
use crate::models::{User, UserPayload};

/// Records plus the next identifier to hand out
#[derive(Debug)]
struct UserTable {
    users: Vec<User>,
    next_id: u64,
}

/// User repository backed by a vector behind a single reader/writer lock
///
/// Clones share the same table.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Create an empty repository; the first user gets ID 1
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Create a repository holding `users`, continuing after the highest ID
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            table: Arc::new(RwLock::new(UserTable { users, next_id })),
        }
    }

    /// Create a repository pre-loaded with the five startup users
    pub fn seeded() -> Self {
        let now = Utc::now();
        let seed = [
            (1, "ahmet123", "ahmet@ornek.com", "Ahmet Yılmaz", 45),
            (2, "mehmetk", "mehmet@ornek.com", "Mehmet Kaya", 30),
            (3, "ayses", "ayse@ornek.com", "Ayşe Şahin", 10),
            (4, "fatmad", "fatma@ornek.com", "Fatma Demir", 5),
            (5, "mustafar", "mustafa@ornek.com", "Mustafa Reis", 2),
        ];

        let users = seed
            .into_iter()
            .map(|(id, username, email, full_name, days_ago)| User {
                id,
                username: username.to_string(),
                email: email.to_string(),
                full_name: full_name.to_string(),
                created_at: now - Duration::days(days_ago),
                is_active: true,
            })
            .collect();

        Self::with_users(users)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> RepositoryResult<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.users.clone())
    }

    async fn get(&self, id: u64) -> RepositoryResult<User> {
        let table = self.table.read().await;
        table
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn create(&self, payload: UserPayload) -> RepositoryResult<User> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let user = User {
            id,
            username: payload.username,
            email: payload.email,
            full_name: payload.full_name,
            created_at: Utc::now(),
            is_active: payload.is_active,
        };
        table.users.push(user.clone());

        info!(user_id = id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn update(&self, id: u64, payload: UserPayload) -> RepositoryResult<User> {
        let mut table = self.table.write().await;

        let Some(user) = table.users.iter_mut().find(|u| u.id == id) else {
            warn!(user_id = id, "Update of unknown user");
            return Err(RepositoryError::NotFound(id));
        };
        user.apply(payload);

        info!(user_id = id, "Updated user");
        Ok(user.clone())
    }

    async fn delete(&self, id: u64) -> RepositoryResult<()> {
        let mut table = self.table.write().await;

        let Some(index) = table.users.iter().position(|u| u.id == id) else {
            warn!(user_id = id, "Delete of unknown user");
            return Err(RepositoryError::NotFound(id));
        };
        // Vec::remove keeps the remaining users in order
        table.users.remove(index);

        info!(user_id = id, "Deleted user");
        Ok(())
    }
}
