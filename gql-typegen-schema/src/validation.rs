//! Schema validation utilities.
//!
//! This module provides structural checks ensuring a schema is consistent
//! enough for code generation: every reference resolves to a type of the
//! right kind and no definition is duplicated.

use crate::error::SchemaError;
use crate::types::{FieldDef, InputValueDef, Schema, TypeDef, TypeRef};
use std::collections::HashSet;

/// Validates a schema for correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    validate_type_names(schema)?;
    validate_root_types(schema)?;
    validate_types(schema)?;
    Ok(())
}

/// Validates that no type name is declared twice.
fn validate_type_names(schema: &Schema) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for type_def in &schema.types {
        if !seen.insert(type_def.name()) {
            return Err(SchemaError::validation(format!(
                "Duplicate type name '{}'",
                type_def.name()
            )));
        }
    }
    Ok(())
}

/// Validates that every declared root type exists and is an object type.
fn validate_root_types(schema: &Schema) -> Result<(), SchemaError> {
    let roots = std::iter::once(schema.query_type.as_str())
        .chain(schema.mutation_type.as_deref())
        .chain(schema.subscription_type.as_deref());

    for root in roots {
        match schema.get_type(root) {
            Some(TypeDef::Object(_)) => {}
            Some(_) => {
                return Err(SchemaError::WrongTypeKind {
                    name: root.to_string(),
                    expected: "an object type",
                });
            }
            None => return Err(SchemaError::type_not_found(root)),
        }
    }
    Ok(())
}

/// Validates all type definitions in the schema.
fn validate_types(schema: &Schema) -> Result<(), SchemaError> {
    for type_def in &schema.types {
        match type_def {
            TypeDef::Object(object) => {
                validate_fields(schema, &object.name, &object.fields)?;
                for interface in &object.interfaces {
                    match schema.get_type(interface) {
                        Some(TypeDef::Interface(_)) => {}
                        Some(_) => {
                            return Err(SchemaError::WrongTypeKind {
                                name: interface.clone(),
                                expected: "an interface",
                            });
                        }
                        None => return Err(SchemaError::type_not_found(interface)),
                    }
                }
            }
            TypeDef::Interface(interface) => {
                validate_fields(schema, &interface.name, &interface.fields)?;
            }
            TypeDef::Union(union) => {
                for member in &union.members {
                    match schema.get_type(member) {
                        Some(TypeDef::Object(_)) => {}
                        Some(_) => {
                            return Err(SchemaError::WrongTypeKind {
                                name: member.clone(),
                                expected: "an object type",
                            });
                        }
                        None => return Err(SchemaError::type_not_found(member)),
                    }
                }
            }
            TypeDef::InputObject(input) => {
                validate_input_fields(schema, &input.name, &input.fields)?;
            }
            TypeDef::Enum(enum_def) => {
                let mut seen_names = HashSet::new();
                for value in &enum_def.values {
                    if !seen_names.insert(&value.name) {
                        return Err(SchemaError::validation(format!(
                            "Duplicate enum value name '{}' in enum '{}'",
                            value.name, enum_def.name
                        )));
                    }
                }
            }
            TypeDef::Scalar(_) => {}
        }
    }
    Ok(())
}

/// Validates the output fields of an object or interface.
fn validate_fields(
    schema: &Schema,
    type_name: &str,
    fields: &[FieldDef],
) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(&field.name) {
            return Err(SchemaError::validation(format!(
                "Duplicate field '{}' on type '{}'",
                field.name, type_name
            )));
        }
        let named = lookup_named(schema, &field.ty)?;
        if !named.is_output_type() {
            return Err(SchemaError::WrongTypeKind {
                name: named.name().to_string(),
                expected: "an output type",
            });
        }
    }
    Ok(())
}

/// Validates the fields of an input object.
fn validate_input_fields(
    schema: &Schema,
    type_name: &str,
    fields: &[InputValueDef],
) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(&field.name) {
            return Err(SchemaError::validation(format!(
                "Duplicate field '{}' on input type '{}'",
                field.name, type_name
            )));
        }
        let named = lookup_named(schema, &field.ty)?;
        if !named.is_input_type() {
            return Err(SchemaError::WrongTypeKind {
                name: named.name().to_string(),
                expected: "an input type",
            });
        }
    }
    Ok(())
}

/// Resolves the wrapper chain and returns the referenced definition.
fn lookup_named<'a>(schema: &'a Schema, type_ref: &TypeRef) -> Result<&'a TypeDef, SchemaError> {
    schema.resolve_type(type_ref)?;
    schema
        .get_type(type_ref.named_type())
        .ok_or_else(|| SchemaError::type_not_found(type_ref.named_type()))
}
