//! menuboard database: SurrealDB connection management, schema
//! migrations, and repository implementations.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - Error types ([`DbError`])
//! - Implementations of the `menuboard-core` repository traits
//!   ([`repository`])

mod connection;
mod error;
mod password;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use password::hash_password;
pub use schema::{run_migrations, schema_v1};
