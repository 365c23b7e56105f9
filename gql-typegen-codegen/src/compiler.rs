//! Compilation of query documents into the typed IR.
//!
//! Every field is annotated with its schema type and description, every
//! selection set and type condition with its possible types. The schema
//! enums and input objects the document uses are collected along the way.

use crate::error::CodegenError;
use crate::options::CompilerOptions;
use gql_typegen_schema::{
    Document, Field, Fragment, FragmentDef, FragmentMap, FragmentSpread, GraphQLType,
    InlineFragment, Operation, OperationDef, Schema, SchemaError, Selection,
    SelectionDef, SelectionSet, TYPENAME_FIELD, TypeDef, Variable,
};
use indexmap::IndexSet;
use tracing::{debug, trace};

/// A compiled document together with the schema it was compiled against.
#[derive(Debug, Clone)]
pub struct CompilerContext<'a> {
    /// Schema the document was compiled against.
    pub schema: &'a Schema,
    /// Operations in document order.
    pub operations: Vec<Operation>,
    /// Fragments in document order.
    pub fragments: FragmentMap,
    /// Enum and input object type names used by the document, in first-use order.
    pub types_used: Vec<String>,
}

impl CompilerContext<'_> {
    /// Looks up an operation by name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|o| o.name == name)
    }
}

/// Compiles a document into the typed IR.
///
/// # Errors
/// Returns `CodegenError::UnsupportedOperationKind` for an unknown operation
/// kind, or a schema error if a type, field, fragment or root type the
/// document references does not exist.
pub fn compile_to_ir<'a>(
    schema: &'a Schema,
    document: &Document,
    options: &CompilerOptions,
) -> Result<CompilerContext<'a>, CodegenError> {
    let mut compiler = Compiler {
        schema,
        document,
        options,
        types_used: IndexSet::new(),
    };

    let mut fragments = FragmentMap::new();
    for fragment in &document.fragments {
        let compiled = compiler.compile_fragment(fragment)?;
        fragments.insert(compiled.name.clone(), compiled);
    }

    let operations = document
        .operations
        .iter()
        .map(|operation| compiler.compile_operation(operation))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        operations = operations.len(),
        fragments = fragments.len(),
        types_used = compiler.types_used.len(),
        "compiled document"
    );

    Ok(CompilerContext {
        schema,
        operations,
        fragments,
        types_used: compiler.types_used.into_iter().collect(),
    })
}

struct Compiler<'a, 'd> {
    schema: &'a Schema,
    document: &'d Document,
    options: &'d CompilerOptions,
    types_used: IndexSet<String>,
}

impl Compiler<'_, '_> {
    fn compile_operation(&mut self, operation: &OperationDef) -> Result<Operation, CodegenError> {
        let kind = operation.kind().ok_or_else(|| {
            CodegenError::UnsupportedOperationKind {
                operation: operation.name.clone(),
                kind: operation.operation_type.clone(),
            }
        })?;
        let root_type = self
            .schema
            .root_type(kind)
            .ok_or_else(|| SchemaError::MissingRootType {
                kind: kind.to_string(),
            })?
            .to_string();

        let mut variables = Vec::with_capacity(operation.variables.len());
        for variable in &operation.variables {
            let ty = self.schema.resolve_type(&variable.ty)?;
            self.add_type_used(&ty)?;
            variables.push(Variable {
                name: variable.name.clone(),
                ty,
            });
        }

        trace!(operation = %operation.name, %kind, "compiling operation");
        let selection_set = self.compile_selection_set(&root_type, &operation.selection_set)?;

        Ok(Operation {
            name: operation.name.clone(),
            kind,
            root_type,
            variables,
            selection_set,
        })
    }

    fn compile_fragment(&mut self, fragment: &FragmentDef) -> Result<Fragment, CodegenError> {
        if !self.schema.has_type(&fragment.type_condition) {
            return Err(SchemaError::type_not_found(&fragment.type_condition).into());
        }
        trace!(fragment = %fragment.name, "compiling fragment");
        Ok(Fragment {
            name: fragment.name.clone(),
            type_condition: fragment.type_condition.clone(),
            selection_set: self
                .compile_selection_set(&fragment.type_condition, &fragment.selection_set)?,
        })
    }

    fn compile_selection_set(
        &mut self,
        parent_type: &str,
        selections: &[SelectionDef],
    ) -> Result<SelectionSet, CodegenError> {
        let mut selection_set =
            SelectionSet::new(parent_type, self.schema.possible_types(parent_type));

        if self.options.add_typename && !requests_typename(selections) {
            selection_set
                .selections
                .push(Selection::Field(Field::typename()));
        }

        for selection in selections {
            let compiled = self.compile_selection(parent_type, selection)?;
            selection_set.selections.push(compiled);
        }
        Ok(selection_set)
    }

    fn compile_selection(
        &mut self,
        parent_type: &str,
        selection: &SelectionDef,
    ) -> Result<Selection, CodegenError> {
        match selection {
            SelectionDef::Field(field) => {
                let mut compiled = if field.name == TYPENAME_FIELD {
                    Field::typename()
                } else {
                    let definition = self
                        .schema
                        .field(parent_type, &field.name)
                        .ok_or_else(|| SchemaError::field_not_found(parent_type, &field.name))?;
                    let ty = self.schema.resolve_type(&definition.ty)?;
                    self.add_type_used(&ty)?;

                    let mut compiled = Field::new(&field.name, ty);
                    compiled.description = definition.description.clone();
                    compiled
                };
                compiled.alias = field.alias.clone();

                if compiled.ty.is_composite() {
                    let nested_type = compiled.ty.named_type().to_string();
                    compiled.selection_set =
                        Some(self.compile_selection_set(&nested_type, &field.selection_set)?);
                }
                Ok(Selection::Field(compiled))
            }
            SelectionDef::FragmentSpread(spread) => {
                let fragment = self
                    .document
                    .fragment(&spread.fragment_name)
                    .ok_or_else(|| SchemaError::fragment_not_found(&spread.fragment_name))?;
                Ok(Selection::FragmentSpread(FragmentSpread {
                    fragment_name: spread.fragment_name.clone(),
                    type_condition: fragment.type_condition.clone(),
                    possible_types: self.schema.possible_types(&fragment.type_condition),
                }))
            }
            SelectionDef::InlineFragment(fragment) => {
                let type_condition = fragment.type_condition.as_deref().unwrap_or(parent_type);
                if !self.schema.has_type(type_condition) {
                    return Err(SchemaError::type_not_found(type_condition).into());
                }
                Ok(Selection::InlineFragment(InlineFragment {
                    type_condition: type_condition.to_string(),
                    possible_types: self.schema.possible_types(type_condition),
                    selection_set: self
                        .compile_selection_set(type_condition, &fragment.selection_set)?,
                }))
            }
        }
    }

    /// Records the enum or input object behind a type, following input
    /// object fields.
    fn add_type_used(&mut self, ty: &GraphQLType) -> Result<(), CodegenError> {
        match ty.unwrapped() {
            GraphQLType::Enum(name) => {
                self.types_used.insert(name.clone());
            }
            GraphQLType::InputObject(name) => {
                if !self.types_used.insert(name.clone()) {
                    return Ok(());
                }
                if let Some(TypeDef::InputObject(input)) = self.schema.get_type(name) {
                    for field in &input.fields {
                        let field_ty = self.schema.resolve_type(&field.ty)?;
                        self.add_type_used(&field_ty)?;
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn requests_typename(selections: &[SelectionDef]) -> bool {
    selections.iter().any(|s| {
        matches!(s, SelectionDef::Field(f) if f.alias.as_deref().unwrap_or(&f.name) == TYPENAME_FIELD)
    })
}
