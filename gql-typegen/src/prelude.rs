//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use gql_typegen::prelude::*;
//! ```

// Schema types
pub use gql_typegen_schema::{
    Document, GraphQLType, OperationKind, ParseError, Schema, SchemaError, TypeRef,
    parse_document, parse_schema, validate_schema,
};

// Generation
pub use gql_typegen_codegen::{
    CodegenError, CompilerContext, CompilerOptions, Declaration, Diagnostic, GeneratedOutput,
    Generator, Target, compile_to_ir, generate, generate_from_files, generate_from_json,
    generate_source,
};
