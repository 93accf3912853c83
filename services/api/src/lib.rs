//! Users API service
//!
//! A CRUD HTTP surface over a repository of user records. The router wires
//! handlers to an [`AppState`] holding the repository; the default backing
//! store is [`repositories::InMemoryUserRepository`].

pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
