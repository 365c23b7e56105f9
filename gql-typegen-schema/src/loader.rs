//! JSON interchange loader.
//!
//! Schemas and documents arrive already parsed and validated; this module
//! only decodes their JSON interchange form into the in-memory model.

use crate::document::Document;
use crate::error::ParseError;
use crate::types::Schema;

/// Parses a schema from its JSON interchange form.
///
/// The type lookup map is rebuilt and any built-in scalar the schema does
/// not declare is registered.
///
/// # Arguments
/// * `json` - Schema content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or contains an invalid
/// type reference.
pub fn parse_schema(json: &str) -> Result<Schema, ParseError> {
    let mut schema: Schema = serde_json::from_str(json)?;
    schema.build_type_map();
    schema.add_builtin_scalars();
    Ok(schema)
}

/// Parses a query document from its JSON interchange form.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or contains an invalid
/// type reference.
pub fn parse_document(json: &str) -> Result<Document, ParseError> {
    Ok(serde_json::from_str(json)?)
}
