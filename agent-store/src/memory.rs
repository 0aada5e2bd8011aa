//! In-memory store for tests and development deployments.

use std::collections::HashMap;

use agent_schema::AgentConfig;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{AgentRecord, ConfigStore, StoreError, StoreResult};

/// Map-backed store guarded by a single `RwLock`.
///
/// Every mutation holds the write lock for the whole check-and-set, so
/// operations on any name are linearizable. State lives in this instance
/// only — construct it at startup and inject it where needed; it is empty
/// again once dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, AgentRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored configurations.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// True when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn insert(&self, config: AgentConfig) -> StoreResult<AgentRecord> {
        let mut guard = self.inner.write().await;
        if guard.contains_key(&config.name) {
            return Err(StoreError::conflict(&config.name));
        }
        let record = AgentRecord::fresh(config);
        debug!(agent = %record.name(), "stored new agent configuration");
        guard.insert(record.name().to_owned(), record.clone());
        Ok(record)
    }

    async fn upsert(&self, config: AgentConfig) -> StoreResult<AgentRecord> {
        let mut guard = self.inner.write().await;
        let record = match guard.get(&config.name) {
            Some(existing) => existing.replaced_with(config),
            None => AgentRecord::fresh(config),
        };
        debug!(agent = %record.name(), "upserted agent configuration");
        guard.insert(record.name().to_owned(), record.clone());
        Ok(record)
    }

    async fn get(&self, name: &str) -> StoreResult<AgentRecord> {
        self.inner
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::not_found(name))
    }

    async fn list(&self) -> StoreResult<Vec<AgentRecord>> {
        let guard = self.inner.read().await;
        let mut records: Vec<AgentRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(records)
    }

    async fn replace(&self, name: &str, config: AgentConfig) -> StoreResult<AgentRecord> {
        let mut guard = self.inner.write().await;
        let existing = guard
            .get(name)
            .ok_or_else(|| StoreError::not_found(name))?;
        let record = existing.replaced_with(config);
        debug!(agent = %record.name(), "replaced agent configuration");
        guard.insert(name.to_owned(), record.clone());
        Ok(record)
    }

    async fn remove(&self, name: &str) -> StoreResult<()> {
        let mut guard = self.inner.write().await;
        match guard.remove(name) {
            Some(_) => {
                debug!(agent = %name, "removed agent configuration");
                Ok(())
            }
            None => Err(StoreError::not_found(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(name: &str, provider: &str) -> AgentConfig {
        serde_json::from_value(json!({
            "name": name,
            "modelProvider": provider,
            "bio": "a bot",
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn stored_configuration_round_trips() {
        let store = MemoryStore::new();
        let created = store.insert(config("bob", "openai")).await.unwrap();
        let fetched = store.get("bob").await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.config, config("bob", "openai"));
    }

    #[tokio::test]
    async fn strict_insert_rejects_duplicates_and_keeps_the_first() {
        let store = MemoryStore::new();
        store.insert(config("bob", "openai")).await.unwrap();

        let err = store.insert(config("bob", "anthropic")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict { ref name } if name == "bob"));

        let kept = store.get("bob").await.unwrap();
        assert_eq!(kept.config.model_provider, "openai");
    }

    #[tokio::test]
    async fn upsert_is_idempotent_modulo_updated_at() {
        let store = MemoryStore::new();
        let first = store.upsert(config("bob", "openai")).await.unwrap();
        let second = store.upsert(config("bob", "openai")).await.unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.config, first.config);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn absent_names_fail_symmetrically() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get("ghost").await.unwrap_err(),
            StoreError::NotFound { .. }
        ));
        assert!(matches!(
            store.replace("ghost", config("ghost", "openai")).await.unwrap_err(),
            StoreError::NotFound { .. }
        ));
        assert!(matches!(
            store.remove("ghost").await.unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn replace_is_a_full_replacement() {
        let store = MemoryStore::new();
        let created = store.insert(config("bob", "openai")).await.unwrap();
        let replaced = store
            .replace("bob", config("bob", "anthropic"))
            .await
            .unwrap();
        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.config.model_provider, "anthropic");
    }

    #[tokio::test]
    async fn list_returns_every_record() {
        let store = MemoryStore::new();
        store.insert(config("bob", "openai")).await.unwrap();
        store.insert(config("alice", "anthropic")).await.unwrap();

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(|record| record.name().to_owned())
            .collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[tokio::test]
    async fn concurrent_upserts_on_one_name_serialize() {
        let store = std::sync::Arc::new(MemoryStore::new());

        let mut tasks = Vec::new();
        for i in 0..16 {
            let store = std::sync::Arc::clone(&store);
            tasks.push(tokio::spawn(async move {
                let provider = if i % 2 == 0 { "openai" } else { "anthropic" };
                store.upsert(config("bob", provider)).await.unwrap()
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        // All writers targeted one name; exactly one record survives and it
        // carries the identity assigned by whichever writer ran first.
        assert_eq!(store.len().await, 1);
        let record = store.get("bob").await.unwrap();
        assert!(["openai", "anthropic"].contains(&record.config.model_provider.as_str()));
    }
}
