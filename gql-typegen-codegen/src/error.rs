//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema or document loading error.
    #[error("parse error: {0}")]
    Parse(#[from] gql_typegen_schema::ParseError),

    /// Schema lookup or validation error.
    #[error("schema error: {0}")]
    Schema(#[from] gql_typegen_schema::SchemaError),

    /// IO error while reading input files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Operation kind other than query, mutation or subscription.
    #[error("unsupported operation type '{kind}' for operation '{operation}'")]
    UnsupportedOperationKind {
        /// Operation name.
        operation: String,
        /// Operation kind as written in the document.
        kind: String,
    },

    /// Two selections share a response key but declare different types.
    #[error(
        "conflicting types for response key '{response_key}': '{first}' and '{second}'"
    )]
    FieldMergeConflict {
        /// Response key shared by the selections.
        response_key: String,
        /// Type of the first occurrence.
        first: String,
        /// Type of the conflicting occurrence.
        second: String,
    },

    /// A non-null wrapper reached the nullable resolution path.
    #[error("non-null type '{type_ref}' cannot be resolved as a nullable type")]
    InvalidWrapperUsage {
        /// Rendered type reference.
        type_ref: String,
    },

    /// Error raised while building a named declaration.
    #[error("in declaration '{declaration}': {source}")]
    InDeclaration {
        /// Declaration name.
        declaration: String,
        /// Underlying error.
        #[source]
        source: Box<CodegenError>,
    },

    /// One or more declarations could not be generated.
    #[error("{} declaration(s) failed to generate{}", .0.len(), first_failure(.0))]
    Declarations(Vec<CodegenError>),
}

impl CodegenError {
    /// Creates a field merge conflict error.
    pub fn merge_conflict(
        response_key: impl Into<String>,
        first: impl ToString,
        second: impl ToString,
    ) -> Self {
        Self::FieldMergeConflict {
            response_key: response_key.into(),
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    /// Wraps this error with the name of the declaration being built.
    #[must_use]
    pub fn in_declaration(self, declaration: impl Into<String>) -> Self {
        Self::InDeclaration {
            declaration: declaration.into(),
            source: Box::new(self),
        }
    }

    /// Returns true if the error must abort the whole compilation.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::UnsupportedOperationKind { .. } | Self::InvalidWrapperUsage { .. } => true,
            Self::InDeclaration { source, .. } => source.is_fatal(),
            _ => false,
        }
    }

    /// Returns the innermost error, unwrapping declaration context.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::InDeclaration { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

fn first_failure(errors: &[CodegenError]) -> String {
    errors
        .first()
        .map(|err| format!("; first: {err}"))
        .unwrap_or_default()
}
