//! Result declaration emission for selection sets.
//!
//! One declaration is built per selection set: a flat object when every
//! possible type yields the same fields, a tagged union of object shapes
//! otherwise. Fields with sub-selections recurse into nested declarations
//! named after the enclosing scope.

use super::EmitContext;
use crate::declarations::{Declaration, DeclarationKind, ObjectShape, Property, TypeExpr};
use crate::error::CodegenError;
use crate::merge::MergedField;
use crate::type_case::{TypeCaseResolver, Variant};
use crate::typename::{TypeNameContext, join_name};
use gql_typegen_schema::SelectionSet;
use tracing::trace;

/// Emitter for operation and fragment result types.
pub struct SelectionSetEmitter<'c, 'a> {
    ctx: &'c mut EmitContext<'a>,
    type_cases: TypeCaseResolver<'a>,
}

impl<'c, 'a> SelectionSetEmitter<'c, 'a> {
    /// Creates a new selection set emitter.
    #[must_use]
    pub fn new(ctx: &'c mut EmitContext<'a>) -> Self {
        let type_cases = TypeCaseResolver::new(
            ctx.fragments,
            ctx.options.merge_in_fields_from_fragment_spreads,
        );
        Self { ctx, type_cases }
    }

    /// Builds the declaration describing a selection set's result.
    ///
    /// The caller is expected to have pushed `name`'s scope component.
    ///
    /// # Errors
    /// Returns `CodegenError` if fields cannot be merged or typed.
    pub fn emit(
        &mut self,
        name: &str,
        description: Option<String>,
        selection_set: &SelectionSet,
    ) -> Result<Declaration, CodegenError> {
        let variants = self.type_cases.resolve_variants(selection_set)?;
        trace!(declaration = name, variants = variants.len(), "emitting selection set");

        let mut nested = NestedDeclarations::default();
        let mut shapes = Vec::with_capacity(variants.len());
        for variant in &variants {
            shapes.push(self.shape(variant, &mut nested)?);
        }

        let kind = if shapes.len() == 1 {
            DeclarationKind::Object(shapes.remove(0))
        } else {
            DeclarationKind::Union(shapes)
        };

        let mut declaration = Declaration::new(name, kind).with_description(description);
        declaration.nested = nested.declarations;
        Ok(declaration)
    }

    fn shape(
        &mut self,
        variant: &Variant,
        nested: &mut NestedDeclarations,
    ) -> Result<ObjectShape, CodegenError> {
        let mut properties = Vec::with_capacity(variant.fields.len());
        for field in &variant.fields {
            properties.push(self.property(field, nested)?);
        }
        Ok(ObjectShape {
            fragment_spreads: variant.fragment_spreads.clone(),
            properties,
        })
    }

    fn property(
        &mut self,
        field: &MergedField,
        nested: &mut NestedDeclarations,
    ) -> Result<Property, CodegenError> {
        let ty = match (&field.typename_literals, &field.selection_set) {
            (Some(literals), _) => TypeExpr::literals(literals.iter().cloned()),
            (None, Some(selection_set)) if field.ty.is_composite() => {
                let type_name = match nested.lookup(&field.response_key, selection_set) {
                    Some(existing) => existing.to_string(),
                    None => {
                        let component = self
                            .ctx
                            .names
                            .claim(self.ctx.printer.scope(), &field.response_key);
                        let type_name = join_name(self.ctx.printer.scope(), &component);

                        self.ctx.printer.push_scope(component);
                        let declaration = self.emit(&type_name, None, selection_set);
                        self.ctx.printer.pop_scope();
                        nested.insert(&field.response_key, selection_set, declaration?);
                        type_name
                    }
                };

                let naming = TypeNameContext::field(self.ctx.printer.scope(), &field.response_key)
                    .with_composite_name(&type_name);
                self.ctx.resolver.resolve(&field.ty, &naming)?
            }
            _ => {
                let naming = TypeNameContext::field(self.ctx.printer.scope(), &field.response_key);
                self.ctx.resolver.resolve(&field.ty, &naming)?
            }
        };

        Ok(Property {
            name: field.response_key.clone(),
            optional: false,
            ty,
            description: field.description.clone(),
        })
    }
}

/// Nested declarations built for one selection set.
///
/// Variants selecting the same response key with an identical sub-selection
/// share one nested declaration.
#[derive(Default)]
struct NestedDeclarations {
    declarations: Vec<Declaration>,
    emitted: Vec<(String, SelectionSet, String)>,
}

impl NestedDeclarations {
    fn lookup(&self, response_key: &str, selection_set: &SelectionSet) -> Option<&str> {
        self.emitted
            .iter()
            .find(|(key, set, _)| key == response_key && set == selection_set)
            .map(|(_, _, name)| name.as_str())
    }

    fn insert(&mut self, response_key: &str, selection_set: &SelectionSet, declaration: Declaration) {
        self.emitted.push((
            response_key.to_string(),
            selection_set.clone(),
            declaration.name.clone(),
        ));
        self.declarations.push(declaration);
    }
}
