//! Common library for the users service
//!
//! This crate provides shared functionality used by the service crates,
//! currently the repository error taxonomy and the server configuration.

pub mod config;
pub mod error;

pub use config::ServerConfig;
pub use error::{RepositoryError, RepositoryResult};
