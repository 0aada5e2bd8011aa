//! Environment-driven deployment configuration.

use agent_schema::{Allowlist, ValidationPolicy};

/// Creation policy applied by `POST /api/agents`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CreatePolicy {
    /// Reject with a conflict when the name already exists.
    #[default]
    Strict,
    /// Insert-or-replace, always succeeding after validation.
    Upsert,
}

/// Cross-origin policy for the HTTP surface.
///
/// Permissive is the development default; it is a deployment choice surfaced
/// through `AGENT_API_CORS`, never silently baked in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CorsMode {
    /// Any origin, method, and header.
    #[default]
    Permissive,
    /// No CORS headers at all.
    Off,
}

/// Which store implementation backs the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-memory map; state does not survive restarts.
    #[default]
    Memory,
    /// Postgres with transactional per-name upserts.
    Postgres,
}

/// Deployment configuration for the API process.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Socket address to bind (`AGENT_API_ADDR`, default `0.0.0.0:8080`).
    pub bind_addr: String,
    /// Cross-origin policy (`AGENT_API_CORS`: `permissive` | `off`).
    pub cors: CorsMode,
    /// Validation strictness (`AGENT_VALIDATION`: `strict` | `permissive`).
    pub validation: ValidationPolicy,
    /// Creation policy (`AGENT_CREATE_POLICY`: `strict` | `upsert`).
    pub create_policy: CreatePolicy,
    /// Store backend (`AGENT_STORE_BACKEND`: `memory` | `postgres`).
    pub backend: StoreBackend,
    /// Provider allowlist (`AGENT_MODEL_PROVIDERS`, comma-separated).
    pub providers: Allowlist,
    /// Client platform allowlist (`AGENT_CLIENTS`, comma-separated).
    pub clients: Allowlist,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            cors: CorsMode::default(),
            validation: ValidationPolicy::default(),
            create_policy: CreatePolicy::default(),
            backend: StoreBackend::default(),
            providers: Allowlist::default_providers(),
            clients: Allowlist::default_clients(),
        }
    }
}

impl ApiConfig {
    /// Reads the deployment configuration from the environment.
    ///
    /// Unset variables fall back to the defaults above; unrecognized values
    /// for the policy toggles also fall back, with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: non_empty("AGENT_API_ADDR").unwrap_or(defaults.bind_addr),
            cors: match non_empty("AGENT_API_CORS").as_deref() {
                Some("off") => CorsMode::Off,
                Some("permissive") | None => CorsMode::Permissive,
                Some(other) => {
                    tracing::warn!(value = other, "unrecognized AGENT_API_CORS; using permissive");
                    CorsMode::Permissive
                }
            },
            validation: match non_empty("AGENT_VALIDATION").as_deref() {
                Some("permissive") => ValidationPolicy::Permissive,
                Some("strict") | None => ValidationPolicy::Strict,
                Some(other) => {
                    tracing::warn!(value = other, "unrecognized AGENT_VALIDATION; using strict");
                    ValidationPolicy::Strict
                }
            },
            create_policy: match non_empty("AGENT_CREATE_POLICY").as_deref() {
                Some("upsert") => CreatePolicy::Upsert,
                Some("strict") | None => CreatePolicy::Strict,
                Some(other) => {
                    tracing::warn!(value = other, "unrecognized AGENT_CREATE_POLICY; using strict");
                    CreatePolicy::Strict
                }
            },
            backend: match non_empty("AGENT_STORE_BACKEND").as_deref() {
                Some("postgres") => StoreBackend::Postgres,
                Some("memory") | None => StoreBackend::Memory,
                Some(other) => {
                    tracing::warn!(value = other, "unrecognized AGENT_STORE_BACKEND; using memory");
                    StoreBackend::Memory
                }
            },
            providers: non_empty("AGENT_MODEL_PROVIDERS")
                .map_or(defaults.providers, |csv| Allowlist::from_csv(&csv)),
            clients: non_empty("AGENT_CLIENTS")
                .map_or(defaults.clients, |csv| Allowlist::from_csv(&csv)),
        }
    }
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_development_friendly() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.cors, CorsMode::Permissive);
        assert_eq!(config.validation, ValidationPolicy::Strict);
        assert_eq!(config.create_policy, CreatePolicy::Strict);
        assert_eq!(config.backend, StoreBackend::Memory);
        assert!(config.providers.contains("openai"));
        assert!(config.clients.contains("discord"));
    }
}
