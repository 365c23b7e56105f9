//! # gql-typegen Codegen
//!
//! Flow and TypeScript type declarations for GraphQL operations.
//!
//! This crate provides:
//! - Compilation of query documents into a typed IR
//! - Field merging and type-case resolution for polymorphic selections
//! - Declaration generation for operations, fragments, enums and inputs
//! - Target-specific rendering through a scoped code printer

pub mod compiler;
pub mod declarations;
pub mod emit;
pub mod error;
pub mod generator;
pub mod merge;
pub mod options;
pub mod printer;
pub mod syntax;
pub mod type_case;
pub mod typename;

pub use compiler::{CompilerContext, compile_to_ir};
pub use declarations::{Declaration, DeclarationKind, ObjectShape, Property, TypeExpr};
pub use error::CodegenError;
pub use generator::{Diagnostic, GeneratedOutput, Generator};
pub use options::CompilerOptions;
pub use syntax::{FLOW, TYPESCRIPT, Target, TargetSyntax};

use gql_typegen_schema::{Document, Schema, parse_document, parse_schema, validate_schema};

/// Generates type declarations for every operation and fragment in a document.
///
/// The schema is validated first, then the document is compiled to IR.
///
/// # Arguments
/// * `schema` - Schema the document is written against
/// * `document` - Query document
/// * `options` - Compiler options
///
/// # Returns
/// Declarations, rendered text and diagnostics.
///
/// # Errors
/// Returns `CodegenError` if validation, compilation or a fatal generation
/// step fails.
pub fn generate(
    schema: &Schema,
    document: &Document,
    options: &CompilerOptions,
) -> Result<GeneratedOutput, CodegenError> {
    validate_schema(schema)?;
    let context = compile_to_ir(schema, document, options)?;
    Generator::new(&context, options).generate()
}

/// Generates the declaration source for a document.
///
/// # Errors
/// Returns `CodegenError` if generation fails or any declaration could not
/// be built.
pub fn generate_source(
    schema: &Schema,
    document: &Document,
    options: &CompilerOptions,
) -> Result<String, CodegenError> {
    generate(schema, document, options)?.into_source()
}

/// Generates the declaration source from the JSON interchange forms of a
/// schema and a document.
///
/// # Errors
/// Returns `CodegenError` if either input cannot be parsed or generation
/// fails.
pub fn generate_from_json(
    schema_json: &str,
    document_json: &str,
    options: &CompilerOptions,
) -> Result<String, CodegenError> {
    let schema = parse_schema(schema_json)?;
    let document = parse_document(document_json)?;
    generate_source(&schema, &document, options)
}

/// Generates the declaration source from JSON interchange files.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing or generation fails.
pub fn generate_from_files(
    schema_path: &std::path::Path,
    document_path: &std::path::Path,
    options: &CompilerOptions,
) -> Result<String, CodegenError> {
    let schema_json = std::fs::read_to_string(schema_path)?;
    let document_json = std::fs::read_to_string(document_path)?;
    generate_from_json(&schema_json, &document_json, options)
}
