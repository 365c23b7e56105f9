//! Compiler options.

use crate::error::CodegenError;
use crate::syntax::Target;
use serde::{Deserialize, Serialize};

/// Options controlling IR compilation and declaration generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Emit the target's dynamic type for custom scalars instead of a named
    /// reference.
    pub passthrough_custom_scalars: bool,
    /// Prefix prepended to custom scalar names when referencing them.
    pub custom_scalars_prefix: String,
    /// Fold fields from fragment spreads into the enclosing shape instead of
    /// referencing the fragment's own declaration.
    pub merge_in_fields_from_fragment_spreads: bool,
    /// Add a `__typename` selection to every composite selection set.
    pub add_typename: bool,
    /// Output target.
    pub target: Target,
}

impl CompilerOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            passthrough_custom_scalars: false,
            custom_scalars_prefix: String::new(),
            merge_in_fields_from_fragment_spreads: true,
            add_typename: false,
            target: Target::Flow,
        }
    }

    /// Loads options from a JSON document; missing keys keep their defaults.
    ///
    /// # Errors
    /// Returns `CodegenError` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, CodegenError> {
        serde_json::from_str(json)
            .map_err(|e| CodegenError::Parse(gql_typegen_schema::ParseError::Json(e)))
    }

    /// Sets whether custom scalars pass through as the dynamic type.
    #[must_use]
    pub fn passthrough_custom_scalars(mut self, enabled: bool) -> Self {
        self.passthrough_custom_scalars = enabled;
        self
    }

    /// Sets the custom scalar prefix.
    #[must_use]
    pub fn custom_scalars_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.custom_scalars_prefix = prefix.into();
        self
    }

    /// Sets whether fragment spread fields are merged into the parent shape.
    #[must_use]
    pub fn merge_in_fields_from_fragment_spreads(mut self, enabled: bool) -> Self {
        self.merge_in_fields_from_fragment_spreads = enabled;
        self
    }

    /// Sets whether `__typename` is added to every composite selection set.
    #[must_use]
    pub fn add_typename(mut self, enabled: bool) -> Self {
        self.add_typename = enabled;
        self
    }

    /// Sets the output target.
    #[must_use]
    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self::new()
    }
}
