//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, in-memory failures (validation and
/// payload parsing). Infrastructure concerns belong elsewhere.
///
/// Parsing and validation are distinct failure kinds and must never be
/// conflated: `Parse` means the input text was not a well-formed payload,
/// while `Validation`/`MissingFields` mean well-formed data carried values
/// that violate a field contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field value failed validation (wrong kind, empty, out of range).
    #[error("validation failed for `{field}`: {reason}")]
    Validation { field: String, reason: String },

    /// A mapping-shaped input lacked one or more required keys.
    ///
    /// Carries every absent key, not just the first one found.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Serialized text could not be parsed into a structured payload.
    #[error("malformed payload: {0}")]
    Parse(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_fields(fields: Vec<String>) -> Self {
        Self::MissingFields(fields)
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Name of the offending field, when the error is field-scoped.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
