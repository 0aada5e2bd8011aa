//! Error definitions for schema validation.

use thiserror::Error;

/// Result alias for validation operations.
pub type SchemaResult<T> = Result<T, ValidationError>;

/// Reasons a candidate configuration document is rejected.
///
/// Validation is fail-fast: the first violation in field order is reported.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The submitted document was not a JSON object.
    #[error("configuration document must be a JSON object")]
    NotAnObject,

    /// A field was present with the wrong JSON type.
    #[error("field `{field}` must be {expected}")]
    TypeMismatch {
        /// The offending field.
        field: &'static str,
        /// Description of the expected shape.
        expected: &'static str,
    },

    /// A field required by the strict policy was absent or empty.
    #[error("field `{field}` is required and must be non-empty")]
    RequiredField {
        /// The offending field.
        field: &'static str,
    },

    /// An enumerated value was not a member of the deployment allowlist.
    #[error("field `{field}` value `{value}` is not a supported identifier")]
    NotInAllowlist {
        /// The offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The document passed field checks but failed full typed
    /// deserialization.
    #[error("malformed configuration document: {detail}")]
    Malformed {
        /// Deserializer diagnostic.
        detail: String,
    },
}

impl ValidationError {
    /// The field the failure names, when it names one.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::TypeMismatch { field, .. }
            | Self::RequiredField { field }
            | Self::NotInAllowlist { field, .. } => Some(field),
            Self::NotAnObject | Self::Malformed { .. } => None,
        }
    }
}
