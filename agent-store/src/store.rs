//! The store capability trait.

use agent_schema::AgentConfig;
use async_trait::async_trait;

use crate::{AgentRecord, StoreResult};

/// Holds the authoritative set of named configurations.
///
/// Implementations must make each operation atomic per name: two concurrent
/// writers for the same name must serialize, never interleave. Inputs are
/// assumed to have passed validation; the store performs no schema checks of
/// its own.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Strict create: stores the configuration under its name.
    ///
    /// # Errors
    ///
    /// [`crate::StoreError::Conflict`] when the name already exists;
    /// [`crate::StoreError::Backend`] on storage failure.
    async fn insert(&self, config: AgentConfig) -> StoreResult<AgentRecord>;

    /// Upsert create: stores the configuration, replacing any prior value
    /// for the name. `id` and `created_at` of a prior record are preserved;
    /// `updated_at` is refreshed.
    ///
    /// # Errors
    ///
    /// [`crate::StoreError::Backend`] on storage failure.
    async fn upsert(&self, config: AgentConfig) -> StoreResult<AgentRecord>;

    /// Fetches the record stored under `name`.
    ///
    /// # Errors
    ///
    /// [`crate::StoreError::NotFound`] when the name is absent.
    async fn get(&self, name: &str) -> StoreResult<AgentRecord>;

    /// Returns all stored records. Order is store-defined and carries no
    /// semantic meaning.
    ///
    /// # Errors
    ///
    /// [`crate::StoreError::Backend`] on storage failure.
    async fn list(&self) -> StoreResult<Vec<AgentRecord>>;

    /// Full replacement of the value stored under `name`.
    ///
    /// # Errors
    ///
    /// [`crate::StoreError::NotFound`] when the name is absent.
    async fn replace(&self, name: &str, config: AgentConfig) -> StoreResult<AgentRecord>;

    /// Removes the record stored under `name`.
    ///
    /// # Errors
    ///
    /// [`crate::StoreError::NotFound`] when the name is absent.
    async fn remove(&self, name: &str) -> StoreResult<()>;
}
