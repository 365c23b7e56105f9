//! Enum declaration emission.

use crate::declarations::{Declaration, DeclarationKind, EnumMember};
use gql_typegen_schema::EnumDef;

/// Emitter for schema enums, rendered as string literal unions.
pub struct EnumEmitter<'a> {
    enum_def: &'a EnumDef,
}

impl<'a> EnumEmitter<'a> {
    /// Creates a new enum emitter.
    #[must_use]
    pub fn new(enum_def: &'a EnumDef) -> Self {
        Self { enum_def }
    }

    /// Builds the enum declaration.
    #[must_use]
    pub fn emit(&self) -> Declaration {
        let members = self
            .enum_def
            .values
            .iter()
            .map(|value| EnumMember {
                value: value.name.clone(),
                description: value.description.clone(),
            })
            .collect();

        Declaration::new(&self.enum_def.name, DeclarationKind::Enum(members))
            .with_description(self.enum_def.description.clone())
    }
}
