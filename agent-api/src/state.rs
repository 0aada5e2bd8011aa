//! Shared application state injected into request handlers.

use std::sync::Arc;

use agent_schema::Validator;
use agent_store::ConfigStore;

use crate::CreatePolicy;

/// Dependencies every handler needs, constructed once at startup.
///
/// The store is held behind the [`ConfigStore`] trait so the in-memory and
/// postgres backends are interchangeable, and tests can supply whichever
/// suits them.
pub struct AppState {
    /// Document validator with the deployment's policy and allowlists.
    pub validator: Validator,
    /// The authoritative configuration store.
    pub store: Arc<dyn ConfigStore>,
    /// Creation policy applied by `POST /api/agents`.
    pub create_policy: CreatePolicy,
}

impl AppState {
    /// Bundles the handler dependencies.
    #[must_use]
    pub fn new(
        validator: Validator,
        store: Arc<dyn ConfigStore>,
        create_policy: CreatePolicy,
    ) -> Self {
        Self {
            validator,
            store,
            create_policy,
        }
    }
}
