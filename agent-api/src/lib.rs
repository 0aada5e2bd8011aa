//! HTTP surface for the agent configuration service.
//!
//! The request pipeline is linear: a submitted document enters the
//! [`agent_schema::Validator`]; on success it is handed to the configured
//! [`agent_store::ConfigStore`]; on failure the request is rejected before
//! any storage side effect.

#![warn(missing_docs, clippy::pedantic)]

mod config;
mod error;
mod routes;
mod state;

/// Environment-driven deployment configuration.
pub use config::{ApiConfig, CorsMode, CreatePolicy, StoreBackend};
/// Request failure type with HTTP mapping.
pub use error::ApiError;
/// Router construction.
pub use routes::router;
/// Shared per-request state.
pub use state::AppState;
