//! Declaration emitters.
//!
//! Each emitter turns one kind of IR element into a [`Declaration`]. They
//! share an [`EmitContext`] so that type names stay unique and unresolved
//! scalars are reported once per generated file.

pub mod enums;
pub mod inputs;
pub mod selections;
pub mod variables;

pub use enums::EnumEmitter;
pub use inputs::InputObjectEmitter;
pub use selections::SelectionSetEmitter;
pub use variables::VariablesEmitter;

use crate::declarations::{Declaration, Property};
use crate::error::CodegenError;
use crate::options::CompilerOptions;
use crate::printer::CodePrinter;
use crate::typename::{NameRegistry, TypeNameContext, TypeNameResolver};
use gql_typegen_schema::{FragmentMap, GraphQLType, Schema};

/// State shared by the emitters of one generated file.
pub struct EmitContext<'a> {
    /// Schema the document was compiled against.
    pub schema: &'a Schema,
    /// Compiled fragments.
    pub fragments: &'a FragmentMap,
    /// Compiler options.
    pub options: &'a CompilerOptions,
    /// Type-name resolver.
    pub resolver: TypeNameResolver<'a>,
    /// Every type name claimed so far.
    pub names: NameRegistry,
    /// Output printer, also holding the naming scope.
    pub printer: CodePrinter,
}

impl<'a> EmitContext<'a> {
    /// Creates a context for one generated file.
    #[must_use]
    pub fn new(schema: &'a Schema, fragments: &'a FragmentMap, options: &'a CompilerOptions) -> Self {
        Self {
            schema,
            fragments,
            options,
            resolver: TypeNameResolver::new(options),
            names: NameRegistry::new(),
            printer: CodePrinter::new(options.target.syntax()),
        }
    }

    /// Runs `body` with `component` pushed onto the naming scope.
    pub fn scoped<R>(&mut self, component: impl Into<String>, body: impl FnOnce(&mut Self) -> R) -> R {
        self.printer.push_scope(component);
        let result = body(self);
        self.printer.pop_scope();
        result
    }
}

/// Builds the property for an input value; nullable values may be omitted.
fn input_property(
    resolver: &mut TypeNameResolver<'_>,
    name: &str,
    ty: &GraphQLType,
    description: Option<&str>,
) -> Result<Property, CodegenError> {
    Ok(Property {
        name: name.to_string(),
        optional: !ty.is_non_null(),
        ty: resolver.resolve(ty, &TypeNameContext::default())?,
        description: description.map(str::to_string),
    })
}

/// Returns the names of every declaration in a list, depth first.
#[must_use]
pub fn declaration_names(declarations: &[Declaration]) -> Vec<&str> {
    declarations
        .iter()
        .flat_map(Declaration::flatten)
        .map(|d| d.name.as_str())
        .collect()
}
