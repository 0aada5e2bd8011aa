//! Schema and validation for agent configuration documents.

#![warn(missing_docs, clippy::pedantic)]

mod allowlist;
mod config;
mod error;
mod validator;

/// Injectable allowlist of enumerated identifiers.
pub use allowlist::Allowlist;
/// The agent configuration document and its nested types.
pub use config::{
    AgentConfig, Bio, ClientConfig, ClientPlatformConfig, MessageExample, NftConfig, Settings,
    StyleConfig, TwitterProfile, VoiceConfig,
};
/// Validation error type and result alias.
pub use error::{SchemaResult, ValidationError};
/// Document validator and its enforcement policy.
pub use validator::{ValidationPolicy, Validator};
