//! # gql-typegen
//!
//! Flow and TypeScript type declarations for GraphQL operations.
//!
//! gql-typegen reads a GraphQL schema and a document of operations and
//! fragments, and emits one type declaration per operation result, per
//! operation variables, per fragment and per schema enum or input object
//! the document uses.
//!
//! ## Features
//!
//! - **Polymorphic results** - Interfaces and unions become tagged unions keyed by `__typename`
//! - **Field merging** - Duplicate selections and fragment spreads are merged per concrete type
//! - **Nested declarations** - Anonymous sub-selections get stable, unique names
//! - **Two targets** - Flow exact object types or TypeScript
//!
//! ## Quick Start
//!
//! ```ignore
//! use gql_typegen::prelude::*;
//!
//! let schema = parse_schema(&schema_json)?;
//! let document = parse_document(&document_json)?;
//! let options = CompilerOptions::new().target(Target::TypeScript);
//!
//! let source = generate_source(&schema, &document, &options)?;
//! std::fs::write("types.ts", source)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema and document model, JSON loading, validation, IR
//! - [`codegen`] - IR compilation and declaration generation

pub mod prelude;

/// Schema and document model, loading and validation.
pub mod schema {
    pub use gql_typegen_schema::*;
}

/// Declaration generation.
pub mod codegen {
    pub use gql_typegen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use gql_typegen_codegen::{
    CodegenError, CompilerOptions, GeneratedOutput, Target, generate, generate_from_json,
    generate_source,
};
pub use gql_typegen_schema::{Document, Schema, parse_document, parse_schema};
