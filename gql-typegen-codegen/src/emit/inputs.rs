//! Input object declaration emission.

use super::{EmitContext, input_property};
use crate::declarations::{Declaration, DeclarationKind, ObjectShape};
use crate::error::CodegenError;
use gql_typegen_schema::InputObjectDef;

/// Emitter for schema input objects.
pub struct InputObjectEmitter<'c, 'a> {
    ctx: &'c mut EmitContext<'a>,
}

impl<'c, 'a> InputObjectEmitter<'c, 'a> {
    /// Creates a new input object emitter.
    #[must_use]
    pub fn new(ctx: &'c mut EmitContext<'a>) -> Self {
        Self { ctx }
    }

    /// Builds the declaration of an input object. Nullable fields are optional.
    ///
    /// # Errors
    /// Returns `CodegenError` if a field type cannot be resolved.
    pub fn emit(&mut self, input: &InputObjectDef) -> Result<Declaration, CodegenError> {
        let mut properties = Vec::with_capacity(input.fields.len());
        for field in &input.fields {
            let ty = self.ctx.schema.resolve_type(&field.ty)?;
            properties.push(input_property(
                &mut self.ctx.resolver,
                &field.name,
                &ty,
                field.description.as_deref(),
            )?);
        }

        Ok(Declaration::new(
            &input.name,
            DeclarationKind::Object(ObjectShape {
                fragment_spreads: Vec::new(),
                properties,
            }),
        )
        .with_description(input.description.clone()))
    }
}
