//! Intermediate representation for code generation.
//!
//! This module provides a typed representation of a query document: every
//! field carries its resolved schema type and description, and every
//! selection set, inline fragment and fragment spread carries the concrete
//! object types it can apply to.

use crate::document::OperationKind;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// Name of the introspection meta-field every composite type exposes.
pub const TYPENAME_FIELD: &str = "__typename";

/// Fragments of a compiled document, keyed by name in document order.
pub type FragmentMap = IndexMap<String, Fragment>;

/// Typed operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Operation name.
    pub name: String,
    /// Operation kind.
    pub kind: OperationKind,
    /// Root type the selection set applies to.
    pub root_type: String,
    /// Typed variables.
    pub variables: Vec<Variable>,
    /// Root selection set.
    pub selection_set: SelectionSet,
}

impl Operation {
    /// Returns the name of the declaration describing the operation's result.
    #[must_use]
    pub fn type_name(&self) -> String {
        format!("{}{}", self.name, self.kind.type_suffix())
    }

    /// Returns the name of the declaration describing the operation's variables.
    #[must_use]
    pub fn variables_type_name(&self) -> String {
        format!("{}Variables", self.type_name())
    }
}

/// Typed operation variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Variable name.
    pub name: String,
    /// Resolved type.
    pub ty: GraphQLType,
}

/// Typed fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Fragment name.
    pub name: String,
    /// Type condition.
    pub type_condition: String,
    /// Selection set.
    pub selection_set: SelectionSet,
}

/// Typed selection set.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSet {
    /// Type the selections are made on.
    pub parent_type: String,
    /// Concrete object types the parent type can resolve to.
    pub possible_types: Vec<String>,
    /// Selections in document order.
    pub selections: Vec<Selection>,
}

impl SelectionSet {
    /// Creates an empty selection set.
    #[must_use]
    pub fn new(parent_type: impl Into<String>, possible_types: Vec<String>) -> Self {
        Self {
            parent_type: parent_type.into(),
            possible_types,
            selections: Vec::new(),
        }
    }

    /// Adds a selection.
    #[must_use]
    pub fn with(mut self, selection: Selection) -> Self {
        self.selections.push(selection);
        self
    }

    /// Returns true unless the parent type is itself the only possible type.
    #[must_use]
    pub fn is_polymorphic(&self) -> bool {
        !(self.possible_types.len() == 1 && self.possible_types[0] == self.parent_type)
    }

    /// Returns true if any selection is an inline fragment or fragment spread.
    #[must_use]
    pub fn has_type_conditions(&self) -> bool {
        self.selections
            .iter()
            .any(|s| !matches!(s, Selection::Field(_)))
    }

    /// Iterates over the direct field selections.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.selections.iter().filter_map(|s| match s {
            Selection::Field(f) => Some(f),
            _ => None,
        })
    }

    /// Returns true if a direct field with the given response key exists.
    #[must_use]
    pub fn has_response_key(&self, key: &str) -> bool {
        self.fields().any(|f| f.response_key() == key)
    }

    /// Appends the selections of another selection set to this one.
    pub fn append(&mut self, other: &Self) {
        self.selections.extend(other.selections.iter().cloned());
    }
}

/// A typed selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Field selection.
    Field(Field),
    /// Named fragment spread.
    FragmentSpread(FragmentSpread),
    /// Inline fragment.
    InlineFragment(InlineFragment),
}

/// Typed field selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Schema field name.
    pub name: String,
    /// Alias, if any.
    pub alias: Option<String>,
    /// Resolved field type.
    pub ty: GraphQLType,
    /// Schema description.
    pub description: Option<String>,
    /// Sub-selections of a composite field.
    pub selection_set: Option<SelectionSet>,
}

impl Field {
    /// Creates a leaf field.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: GraphQLType) -> Self {
        Self {
            name: name.into(),
            alias: None,
            ty,
            description: None,
            selection_set: None,
        }
    }

    /// Creates the `__typename` meta-field.
    #[must_use]
    pub fn typename() -> Self {
        Self::new(
            TYPENAME_FIELD,
            GraphQLType::Scalar("String".to_string()).non_null(),
        )
    }

    /// Sets the alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the sub-selections.
    #[must_use]
    pub fn with_selection_set(mut self, selection_set: SelectionSet) -> Self {
        self.selection_set = Some(selection_set);
        self
    }

    /// Returns the key under which the field appears in a response.
    #[must_use]
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Returns true for the `__typename` meta-field.
    #[must_use]
    pub fn is_typename(&self) -> bool {
        self.name == TYPENAME_FIELD
    }
}

/// Typed named fragment spread.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSpread {
    /// Name of the spread fragment.
    pub fragment_name: String,
    /// The fragment's type condition.
    pub type_condition: String,
    /// Concrete object types satisfying the type condition.
    pub possible_types: Vec<String>,
}

/// Typed inline fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineFragment {
    /// Type condition.
    pub type_condition: String,
    /// Concrete object types satisfying the type condition.
    pub possible_types: Vec<String>,
    /// Selection set.
    pub selection_set: SelectionSet,
}
