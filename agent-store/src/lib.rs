//! Storage backends for agent configurations.
//!
//! The [`ConfigStore`] trait is the capability boundary: handlers receive an
//! explicitly constructed store instance and never touch backend internals.
//! Two implementations exist — [`MemoryStore`] for tests and development,
//! [`PostgresStore`] for durable deployments — selected by configuration.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod memory;
mod postgres;
mod record;
mod store;

/// Error type and result alias for store operations.
pub use error::{StoreError, StoreResult};
/// In-memory store with per-name atomic operations.
pub use memory::MemoryStore;
/// Postgres-backed store with transactional upserts.
pub use postgres::{PostgresConfig, PostgresStore};
/// Server-side record envelope around a stored configuration.
pub use record::AgentRecord;
/// The store capability trait.
pub use store::ConfigStore;
