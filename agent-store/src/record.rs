//! Server-side envelope around a stored configuration.

use agent_schema::AgentConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored configuration plus the metadata the server assigns to it.
///
/// Callers always receive owned records; the authoritative copy stays inside
/// the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    /// Opaque identifier assigned at first insertion.
    pub id: Uuid,
    /// The validated configuration document.
    #[serde(flatten)]
    pub config: AgentConfig,
    /// When the name was first stored.
    pub created_at: DateTime<Utc>,
    /// When the stored value was last written.
    pub updated_at: DateTime<Utc>,
}

impl AgentRecord {
    /// Wraps a freshly validated configuration in new server metadata.
    #[must_use]
    pub fn fresh(config: AgentConfig) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            config,
            created_at: now,
            updated_at: now,
        }
    }

    /// Produces the record that replaces `self` after an upsert or update:
    /// same `id` and `created_at`, new configuration, refreshed `updated_at`.
    #[must_use]
    pub fn replaced_with(&self, config: AgentConfig) -> Self {
        Self {
            id: self.id,
            config,
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    /// The store key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }
}
