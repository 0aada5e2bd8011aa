//! Fail-fast validation of candidate configuration documents.

use serde_json::{Map, Value};

use crate::{AgentConfig, Allowlist, SchemaResult, ValidationError};

/// Enforcement policy applied by the validator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Only structural/type validity is required; no field must be non-empty.
    Permissive,
    /// Structural validity plus non-empty required fields.
    #[default]
    Strict,
}

/// Decides whether a candidate document is acceptable for persistence.
///
/// Checks run in a fixed field order and stop at the first violation. On
/// success the untyped document is returned as a fully typed [`AgentConfig`].
/// The validator has no side effects and holds no mutable state.
#[derive(Clone, Debug)]
pub struct Validator {
    policy: ValidationPolicy,
    providers: Allowlist,
    clients: Allowlist,
}

impl Validator {
    /// Creates a validator with explicit allowlists.
    #[must_use]
    pub fn new(policy: ValidationPolicy, providers: Allowlist, clients: Allowlist) -> Self {
        Self {
            policy,
            providers,
            clients,
        }
    }

    /// Creates a validator using the documented default allowlists.
    #[must_use]
    pub fn with_defaults(policy: ValidationPolicy) -> Self {
        Self::new(
            policy,
            Allowlist::default_providers(),
            Allowlist::default_clients(),
        )
    }

    /// Returns the enforcement policy in effect.
    #[must_use]
    pub const fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Validates a candidate document.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered in field order:
    /// name, modelProvider, bio, lore, messageExamples, postExamples,
    /// topics, adjectives, clients, plugins, style.
    pub fn validate(&self, document: &Value) -> SchemaResult<AgentConfig> {
        let object = document.as_object().ok_or(ValidationError::NotAnObject)?;
        let strict = self.policy == ValidationPolicy::Strict;

        // `name` keys the store; it is non-empty under either policy.
        let name = require_string(object, "name")?;
        if name.is_empty() {
            return Err(ValidationError::RequiredField { field: "name" });
        }

        let provider = require_string(object, "modelProvider")?;
        if provider.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "modelProvider",
            });
        }
        self.check_provider("modelProvider", provider)?;

        check_bio(object, strict)?;
        check_string_seq(object, "lore", strict)?;
        check_message_examples(object, strict)?;
        check_string_seq(object, "postExamples", strict)?;
        check_string_seq(object, "topics", strict)?;
        check_string_seq(object, "adjectives", strict)?;

        check_string_seq(object, "clients", strict)?;
        if let Some(Value::Array(entries)) = object.get("clients") {
            for entry in entries {
                if let Some(value) = entry.as_str() {
                    if !self.clients.contains(value) {
                        return Err(ValidationError::NotInAllowlist {
                            field: "clients",
                            value: value.to_owned(),
                        });
                    }
                }
            }
        }

        check_string_seq(object, "plugins", strict)?;
        check_style(object, strict)?;

        if let Some(value) = object.get("imageModelProvider") {
            let provider = value
                .as_str()
                .ok_or(ValidationError::TypeMismatch {
                    field: "imageModelProvider",
                    expected: "a string",
                })?;
            self.check_provider("imageModelProvider", provider)?;
        }

        serde_json::from_value(document.clone()).map_err(|err| ValidationError::Malformed {
            detail: err.to_string(),
        })
    }

    fn check_provider(&self, field: &'static str, value: &str) -> SchemaResult<()> {
        if self.providers.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::NotInAllowlist {
                field,
                value: value.to_owned(),
            })
        }
    }
}

fn require_string<'a>(object: &'a Map<String, Value>, field: &'static str) -> SchemaResult<&'a str> {
    match object.get(field) {
        Some(value) => value.as_str().ok_or(ValidationError::TypeMismatch {
            field,
            expected: "a string",
        }),
        None => Err(ValidationError::RequiredField { field }),
    }
}

fn check_bio(object: &Map<String, Value>, strict: bool) -> SchemaResult<()> {
    match object.get("bio") {
        Some(Value::String(text)) => {
            if strict && text.is_empty() {
                return Err(ValidationError::RequiredField { field: "bio" });
            }
        }
        Some(Value::Array(fragments)) => {
            if fragments.iter().any(|entry| !entry.is_string()) {
                return Err(ValidationError::TypeMismatch {
                    field: "bio",
                    expected: "a string or a sequence of strings",
                });
            }
            if strict && fragments.is_empty() {
                return Err(ValidationError::RequiredField { field: "bio" });
            }
        }
        Some(_) => {
            return Err(ValidationError::TypeMismatch {
                field: "bio",
                expected: "a string or a sequence of strings",
            });
        }
        None => {
            if strict {
                return Err(ValidationError::RequiredField { field: "bio" });
            }
        }
    }
    Ok(())
}

fn check_string_seq(
    object: &Map<String, Value>,
    field: &'static str,
    strict: bool,
) -> SchemaResult<()> {
    match object.get(field) {
        Some(Value::Array(entries)) => {
            if entries.iter().any(|entry| !entry.is_string()) {
                return Err(ValidationError::TypeMismatch {
                    field,
                    expected: "a sequence of strings",
                });
            }
            if strict && entries.is_empty() {
                return Err(ValidationError::RequiredField { field });
            }
        }
        Some(_) => {
            return Err(ValidationError::TypeMismatch {
                field,
                expected: "a sequence of strings",
            });
        }
        None => {
            if strict {
                return Err(ValidationError::RequiredField { field });
            }
        }
    }
    Ok(())
}

fn check_message_examples(object: &Map<String, Value>, strict: bool) -> SchemaResult<()> {
    match object.get("messageExamples") {
        Some(Value::Array(dialogues)) => {
            for dialogue in dialogues {
                let turns = dialogue.as_array().ok_or(ValidationError::TypeMismatch {
                    field: "messageExamples",
                    expected: "a sequence of dialogues (sequences of turns)",
                })?;
                if turns.iter().any(|turn| !turn.is_object()) {
                    return Err(ValidationError::TypeMismatch {
                        field: "messageExamples",
                        expected: "dialogue turns with `role` and `content`",
                    });
                }
            }
            if strict && dialogues.is_empty() {
                return Err(ValidationError::RequiredField {
                    field: "messageExamples",
                });
            }
        }
        Some(_) => {
            return Err(ValidationError::TypeMismatch {
                field: "messageExamples",
                expected: "a sequence of dialogues (sequences of turns)",
            });
        }
        None => {
            if strict {
                return Err(ValidationError::RequiredField {
                    field: "messageExamples",
                });
            }
        }
    }
    Ok(())
}

fn check_style(object: &Map<String, Value>, strict: bool) -> SchemaResult<()> {
    match object.get("style") {
        Some(Value::Object(style)) => {
            for key in ["all", "chat", "post"] {
                match style.get(key) {
                    Some(Value::Array(entries)) => {
                        if entries.iter().any(|entry| !entry.is_string()) {
                            return Err(ValidationError::TypeMismatch {
                                field: "style",
                                expected: "string sequences for `all`, `chat`, and `post`",
                            });
                        }
                    }
                    Some(_) => {
                        return Err(ValidationError::TypeMismatch {
                            field: "style",
                            expected: "string sequences for `all`, `chat`, and `post`",
                        });
                    }
                    None => {
                        if strict {
                            return Err(ValidationError::RequiredField { field: "style" });
                        }
                    }
                }
            }
        }
        Some(_) => {
            return Err(ValidationError::TypeMismatch {
                field: "style",
                expected: "an object with `all`, `chat`, and `post` sequences",
            });
        }
        None => {
            if strict {
                return Err(ValidationError::RequiredField { field: "style" });
            }
        }
    }
    Ok(())
}
