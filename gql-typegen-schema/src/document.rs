//! Query document definitions.
//!
//! This module contains the data structures representing an already parsed
//! and validated query document: operations, fragments and their untyped
//! selection sets.

use crate::types::TypeRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A query document: operations plus the fragments they may spread.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Operation definitions in document order.
    #[serde(default)]
    pub operations: Vec<OperationDef>,
    /// Fragment definitions in document order.
    #[serde(default)]
    pub fragments: Vec<FragmentDef>,
}

impl Document {
    /// Creates a new empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an operation to the document.
    pub fn add_operation(&mut self, operation: OperationDef) {
        self.operations.push(operation);
    }

    /// Adds a fragment to the document.
    pub fn add_fragment(&mut self, fragment: FragmentDef) {
        self.fragments.push(fragment);
    }

    /// Looks up a fragment by name.
    #[must_use]
    pub fn fragment(&self, name: &str) -> Option<&FragmentDef> {
        self.fragments.iter().find(|f| f.name == name)
    }
}

/// Operation definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDef {
    /// Operation name.
    pub name: String,
    /// Operation kind as written in the document (`query`, `mutation`, ...).
    pub operation_type: String,
    /// Variable definitions.
    #[serde(default)]
    pub variables: Vec<VariableDef>,
    /// Root selection set.
    #[serde(default)]
    pub selection_set: Vec<SelectionDef>,
}

impl OperationDef {
    /// Creates a new operation definition.
    #[must_use]
    pub fn new(name: impl Into<String>, operation_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operation_type: operation_type.into(),
            variables: Vec::new(),
            selection_set: Vec::new(),
        }
    }

    /// Returns the operation kind, if it is one of the supported kinds.
    #[must_use]
    pub fn kind(&self) -> Option<OperationKind> {
        OperationKind::parse(&self.operation_type)
    }
}

/// Variable definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDef {
    /// Variable name, without the `$` sigil.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// Fragment definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentDef {
    /// Fragment name.
    pub name: String,
    /// Type condition.
    pub type_condition: String,
    /// Selection set.
    #[serde(default)]
    pub selection_set: Vec<SelectionDef>,
}

/// A selection within a selection set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SelectionDef {
    /// Field selection.
    Field(FieldSelectionDef),
    /// Named fragment spread.
    FragmentSpread(FragmentSpreadDef),
    /// Inline fragment.
    InlineFragment(InlineFragmentDef),
}

impl SelectionDef {
    /// Creates a leaf field selection.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(FieldSelectionDef {
            name: name.into(),
            alias: None,
            selection_set: Vec::new(),
        })
    }

    /// Creates a fragment spread.
    #[must_use]
    pub fn spread(fragment_name: impl Into<String>) -> Self {
        Self::FragmentSpread(FragmentSpreadDef {
            fragment_name: fragment_name.into(),
        })
    }
}

/// Field selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSelectionDef {
    /// Field name.
    pub name: String,
    /// Alias, if any.
    #[serde(default)]
    pub alias: Option<String>,
    /// Sub-selections; empty for leaf fields.
    #[serde(default)]
    pub selection_set: Vec<SelectionDef>,
}

/// Named fragment spread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentSpreadDef {
    /// Name of the spread fragment.
    pub fragment_name: String,
}

/// Inline fragment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineFragmentDef {
    /// Type condition; `None` means the enclosing type.
    #[serde(default)]
    pub type_condition: Option<String>,
    /// Selection set.
    #[serde(default)]
    pub selection_set: Vec<SelectionDef>,
}

/// Supported operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Read-only fetch.
    Query,
    /// Write followed by a fetch.
    Mutation,
    /// Long-lived request that fetches data in response to events.
    Subscription,
}

impl OperationKind {
    /// Parses an operation kind from its document keyword.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }

    /// Returns the document keyword.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    /// Returns the suffix appended to operation names to form type names.
    #[must_use]
    pub const fn type_suffix(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
