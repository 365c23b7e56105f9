//! Main declaration generator.

use crate::compiler::CompilerContext;
use crate::declarations::Declaration;
use crate::emit::{
    EmitContext, EnumEmitter, InputObjectEmitter, SelectionSetEmitter, VariablesEmitter,
};
use crate::error::CodegenError;
use crate::options::CompilerOptions;
use crate::printer::DocumentPart;
use gql_typegen_schema::{SchemaError, SelectionSet, TypeDef};
use std::fmt;
use tracing::{debug, warn};

/// A non-fatal problem found while generating.
#[derive(Debug)]
pub enum Diagnostic {
    /// A custom scalar was referenced by name; the consumer must declare it.
    UnresolvedScalar {
        /// Scalar name.
        name: String,
    },
    /// A declaration could not be built and was skipped.
    DeclarationFailed(CodegenError),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedScalar { name } => {
                write!(f, "custom scalar '{name}' has no built-in mapping")
            }
            Self::DeclarationFailed(err) => write!(f, "{err}"),
        }
    }
}

/// Output of a generation run.
#[derive(Debug)]
pub struct GeneratedOutput {
    /// Top-level declarations in emission order.
    pub declarations: Vec<Declaration>,
    /// Rendered source text.
    pub text: String,
    /// Non-fatal problems.
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratedOutput {
    /// Finds a declaration by name, including nested ones.
    #[must_use]
    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find_map(|d| d.find(name))
    }

    /// Iterates over the declarations that failed to generate.
    pub fn failures(&self) -> impl Iterator<Item = &CodegenError> {
        self.diagnostics.iter().filter_map(|d| match d {
            Diagnostic::DeclarationFailed(err) => Some(err),
            Diagnostic::UnresolvedScalar { .. } => None,
        })
    }

    /// Returns the source text, or the collected errors if any declaration
    /// failed.
    ///
    /// # Errors
    /// Returns `CodegenError::Declarations` with every declaration failure.
    pub fn into_source(self) -> Result<String, CodegenError> {
        let failures: Vec<CodegenError> = self
            .diagnostics
            .into_iter()
            .filter_map(|d| match d {
                Diagnostic::DeclarationFailed(err) => Some(err),
                Diagnostic::UnresolvedScalar { .. } => None,
            })
            .collect();

        if failures.is_empty() {
            Ok(self.text)
        } else {
            Err(CodegenError::Declarations(failures))
        }
    }
}

/// Generator producing type declarations for a compiled document.
pub struct Generator<'a> {
    context: &'a CompilerContext<'a>,
    options: &'a CompilerOptions,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(context: &'a CompilerContext<'a>, options: &'a CompilerOptions) -> Self {
        Self { context, options }
    }

    /// Generates every declaration and renders the output text.
    ///
    /// Schema types used by the document come first, then the variables and
    /// result declarations of every operation, then one declaration per
    /// fragment. A declaration that fails with a non-fatal error is skipped
    /// and recorded as a diagnostic.
    ///
    /// # Errors
    /// Returns `CodegenError` on a fatal error.
    pub fn generate(&self) -> Result<GeneratedOutput, CodegenError> {
        let mut ctx = EmitContext::new(self.context.schema, &self.context.fragments, self.options);
        let mut output = GeneratedOutput {
            declarations: Vec::new(),
            text: String::new(),
            diagnostics: Vec::new(),
        };

        self.register_names(&mut ctx);
        self.file_header(&mut ctx);

        for name in &self.context.types_used {
            let result = match self.context.schema.get_type(name) {
                Some(TypeDef::Enum(enum_def)) => Ok(EnumEmitter::new(enum_def).emit()),
                Some(TypeDef::InputObject(input)) => InputObjectEmitter::new(&mut ctx).emit(input),
                _ => Err(SchemaError::type_not_found(name).into()),
            };
            record(&mut ctx, &mut output, name, result)?;
        }

        for operation in &self.context.operations {
            let variables = VariablesEmitter::new(&mut ctx).emit(operation).transpose();
            if let Some(result) = variables {
                record(&mut ctx, &mut output, &operation.variables_type_name(), result)?;
            }

            let name = operation.type_name();
            let result = emit_selection_set(&mut ctx, &name, &operation.selection_set);
            record(&mut ctx, &mut output, &name, result)?;
        }

        for fragment in self.context.fragments.values() {
            let result = emit_selection_set(&mut ctx, &fragment.name, &fragment.selection_set);
            record(&mut ctx, &mut output, &fragment.name, result)?;
        }

        output.diagnostics.extend(
            ctx.resolver
                .unresolved_scalars()
                .map(|name| Diagnostic::UnresolvedScalar {
                    name: name.to_string(),
                }),
        );
        output.text = ctx.printer.flush();

        debug!(
            declarations = output.declarations.len(),
            diagnostics = output.diagnostics.len(),
            target = %self.options.target,
            "generated declarations"
        );
        Ok(output)
    }

    /// Claims every top-level name before nested names are synthesized.
    fn register_names(&self, ctx: &mut EmitContext<'_>) {
        for name in &self.context.types_used {
            ctx.names.register(name.as_str());
        }
        for operation in &self.context.operations {
            if !operation.variables.is_empty() {
                ctx.names.register(operation.variables_type_name());
            }
            ctx.names.register(operation.type_name());
        }
        for name in self.context.fragments.keys() {
            ctx.names.register(name.as_str());
        }
    }

    fn file_header(&self, ctx: &mut EmitContext<'_>) {
        for line in self.options.target.syntax().file_header {
            ctx.printer.print_on_newline(line);
        }
        ctx.printer.finish_part();
    }
}

fn emit_selection_set(
    ctx: &mut EmitContext<'_>,
    name: &str,
    selection_set: &SelectionSet,
) -> Result<Declaration, CodegenError> {
    ctx.scoped(name, |ctx| {
        SelectionSetEmitter::new(ctx).emit(name, None, selection_set)
    })
}

/// Queues a built declaration, or records why it could not be built.
fn record(
    ctx: &mut EmitContext<'_>,
    output: &mut GeneratedOutput,
    name: &str,
    result: Result<Declaration, CodegenError>,
) -> Result<(), CodegenError> {
    match result {
        Ok(declaration) => {
            for part in declaration.flatten() {
                ctx.printer.enqueue(DocumentPart::code(part.shallow()));
            }
            output.declarations.push(declaration);
            Ok(())
        }
        Err(err) => {
            let err = err.in_declaration(name);
            if err.is_fatal() {
                return Err(err);
            }
            warn!(declaration = name, error = %err, "skipping declaration");
            output.diagnostics.push(Diagnostic::DeclarationFailed(err));
            Ok(())
        }
    }
}
