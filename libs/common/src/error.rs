//! Custom error types for the common library
//!
//! This module defines the error taxonomy shared by every user repository
//! implementation, so handlers can map failures without knowing the backing store.

use thiserror::Error;

/// Custom error type for repository operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No record carries the requested identifier
    #[error("User not found (ID: {0})")]
    NotFound(u64),

    /// The backing store failed unexpectedly
    #[error("Repository failure: {0}")]
    Internal(String),
}

/// Type alias for Result with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;
