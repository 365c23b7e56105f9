//! # gql-typegen Schema
//!
//! GraphQL schema, query document and typed IR model.
//!
//! This crate provides:
//! - Type definitions for schema elements and type references
//! - Query document definitions (operations, fragments, selections)
//! - JSON interchange loading for both
//! - Schema validation
//! - Intermediate representation for code generation

pub mod document;
pub mod error;
pub mod ir;
pub mod loader;
pub mod types;
pub mod validation;

pub use document::{
    Document, FieldSelectionDef, FragmentDef, FragmentSpreadDef, InlineFragmentDef,
    OperationDef, OperationKind, SelectionDef, VariableDef,
};
pub use error::{ParseError, SchemaError};
pub use ir::{
    Field, Fragment, FragmentMap, FragmentSpread, InlineFragment, Operation, Selection,
    SelectionSet, TYPENAME_FIELD, Variable,
};
pub use loader::{parse_document, parse_schema};
pub use types::{
    BuiltinScalar, EnumDef, EnumValue, FieldDef, GraphQLType, InputObjectDef, InputValueDef,
    InterfaceDef, ObjectDef, ScalarDef, Schema, TypeDef, TypeRef, UnionDef,
};
pub use validation::validate_schema;
