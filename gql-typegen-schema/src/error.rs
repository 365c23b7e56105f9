//! Error types for schema loading, lookup and validation.

use thiserror::Error;

/// Error type for loading schema and document interchange data.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed type reference notation.
    #[error("invalid type reference '{value}': {reason}")]
    InvalidTypeRef {
        /// The offending notation.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Error type for schema lookups and validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Type not found.
    #[error("type '{name}' not found")]
    TypeNotFound {
        /// Type name.
        name: String,
    },

    /// Field not found on a composite type.
    #[error("field '{field}' not found on type '{type_name}'")]
    FieldNotFound {
        /// Parent type name.
        type_name: String,
        /// Field name.
        field: String,
    },

    /// Fragment not found in the document.
    #[error("fragment '{name}' not found")]
    FragmentNotFound {
        /// Fragment name.
        name: String,
    },

    /// The schema declares no root type for an operation kind.
    #[error("schema has no root type for {kind} operations")]
    MissingRootType {
        /// Operation kind.
        kind: String,
    },

    /// A type was used where a different kind of type is required.
    #[error("type '{name}' is not {expected}")]
    WrongTypeKind {
        /// Type name.
        name: String,
        /// Description of the expected kind.
        expected: &'static str,
    },

    /// Wrapper chain violating the non-null invariant.
    #[error("invalid type reference '{type_ref}': non-null cannot wrap non-null")]
    NestedNonNull {
        /// Rendered type reference.
        type_ref: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates an invalid type reference error.
    pub fn invalid_type_ref(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTypeRef {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl SchemaError {
    /// Creates a type not found error.
    pub fn type_not_found(name: impl Into<String>) -> Self {
        Self::TypeNotFound { name: name.into() }
    }

    /// Creates a field not found error.
    pub fn field_not_found(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    /// Creates a fragment not found error.
    pub fn fragment_not_found(name: impl Into<String>) -> Self {
        Self::FragmentNotFound { name: name.into() }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
