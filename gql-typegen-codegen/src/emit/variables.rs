//! Operation variables declaration emission.

use super::{EmitContext, input_property};
use crate::declarations::{Declaration, DeclarationKind, ObjectShape};
use crate::error::CodegenError;
use gql_typegen_schema::Operation;

/// Emitter for the variables of an operation.
pub struct VariablesEmitter<'c, 'a> {
    ctx: &'c mut EmitContext<'a>,
}

impl<'c, 'a> VariablesEmitter<'c, 'a> {
    /// Creates a new variables emitter.
    #[must_use]
    pub fn new(ctx: &'c mut EmitContext<'a>) -> Self {
        Self { ctx }
    }

    /// Builds the variables declaration of an operation, or `None` if the
    /// operation declares no variables.
    ///
    /// # Errors
    /// Returns `CodegenError` if a variable type cannot be resolved.
    pub fn emit(&mut self, operation: &Operation) -> Result<Option<Declaration>, CodegenError> {
        if operation.variables.is_empty() {
            return Ok(None);
        }

        let properties = operation
            .variables
            .iter()
            .map(|v| input_property(&mut self.ctx.resolver, &v.name, &v.ty, None))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Declaration::new(
            operation.variables_type_name(),
            DeclarationKind::Object(ObjectShape {
                fragment_spreads: Vec::new(),
                properties,
            }),
        )))
    }
}
