//! Type-name resolution.
//!
//! Maps resolved schema types to target type expressions, synthesizing
//! names for the anonymous object types introduced by nested selection sets.

use crate::declarations::TypeExpr;
use crate::error::CodegenError;
use crate::options::CompilerOptions;
use crate::syntax::TargetSyntax;
use gql_typegen_schema::{BuiltinScalar, GraphQLType};
use indexmap::IndexSet;
use inflector::Inflector;
use std::collections::HashSet;
use tracing::debug;

/// Separator between the components of a synthesized type name.
pub const NAME_SEPARATOR: &str = "_";

/// Naming context for a single resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeNameContext<'a> {
    /// Enclosing naming scope, outermost component first.
    pub scope: &'a [String],
    /// Response key of the field being typed.
    pub response_key: Option<&'a str>,
    /// Name already claimed for the field's composite type.
    pub composite_name: Option<&'a str>,
}

impl<'a> TypeNameContext<'a> {
    /// Context for a field in the given scope.
    #[must_use]
    pub fn field(scope: &'a [String], response_key: &'a str) -> Self {
        Self {
            scope,
            response_key: Some(response_key),
            composite_name: None,
        }
    }

    /// Sets the claimed composite type name.
    #[must_use]
    pub fn with_composite_name(mut self, name: &'a str) -> Self {
        self.composite_name = Some(name);
        self
    }
}

/// Joins scope components and a final component into a type name.
#[must_use]
pub fn join_name(scope: &[String], component: &str) -> String {
    scope
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(component))
        .collect::<Vec<_>>()
        .join(NAME_SEPARATOR)
}

/// Returns the synthesized name for a nested composite type.
#[must_use]
pub fn composite_type_name(scope: &[String], response_key: &str) -> String {
    join_name(scope, &response_key.to_singular())
}

/// Resolves schema types into target type expressions.
pub struct TypeNameResolver<'a> {
    syntax: &'static TargetSyntax,
    options: &'a CompilerOptions,
    unresolved_scalars: IndexSet<String>,
}

impl<'a> TypeNameResolver<'a> {
    /// Creates a resolver for the options' target.
    #[must_use]
    pub fn new(options: &'a CompilerOptions) -> Self {
        Self {
            syntax: options.target.syntax(),
            options,
            unresolved_scalars: IndexSet::new(),
        }
    }

    /// Resolves a type, marking it nullable unless it is wrapped in non-null.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidWrapperUsage` if a non-null wrapper
    /// directly wraps another non-null wrapper.
    pub fn resolve(
        &mut self,
        ty: &GraphQLType,
        ctx: &TypeNameContext<'_>,
    ) -> Result<TypeExpr, CodegenError> {
        match ty {
            GraphQLType::NonNull(inner) => self.resolve_nullable(inner, ctx),
            other => Ok(TypeExpr::Nullable(Box::new(
                self.resolve_nullable(other, ctx)?,
            ))),
        }
    }

    /// Resolves a type without adding a nullability marker.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidWrapperUsage` if `ty` is a non-null
    /// wrapper.
    pub fn resolve_nullable(
        &mut self,
        ty: &GraphQLType,
        ctx: &TypeNameContext<'_>,
    ) -> Result<TypeExpr, CodegenError> {
        match ty {
            GraphQLType::NonNull(_) => Err(CodegenError::InvalidWrapperUsage {
                type_ref: ty.to_string(),
            }),
            GraphQLType::List(inner) => Ok(TypeExpr::Array(Box::new(self.resolve(inner, ctx)?))),
            GraphQLType::Scalar(name) => Ok(self.scalar(name)),
            GraphQLType::Enum(name) | GraphQLType::InputObject(name) => {
                Ok(TypeExpr::named(name.clone()))
            }
            GraphQLType::Object(name) | GraphQLType::Interface(name) | GraphQLType::Union(name) => {
                let resolved = match (ctx.composite_name, ctx.response_key) {
                    (Some(claimed), _) => claimed.to_string(),
                    (None, Some(key)) => composite_type_name(ctx.scope, key),
                    (None, None) => name.clone(),
                };
                Ok(TypeExpr::Named(resolved))
            }
        }
    }

    fn scalar(&mut self, name: &str) -> TypeExpr {
        let keyword = match BuiltinScalar::from_name(name) {
            Some(BuiltinScalar::String | BuiltinScalar::Id) => self.syntax.string_type,
            Some(BuiltinScalar::Int | BuiltinScalar::Float) => self.syntax.number_type,
            Some(BuiltinScalar::Boolean) => self.syntax.boolean_type,
            None if self.options.passthrough_custom_scalars => self.syntax.any_type,
            None => {
                if self.unresolved_scalars.insert(name.to_string()) {
                    debug!(scalar = name, "custom scalar referenced by name");
                }
                return TypeExpr::Named(format!("{}{name}", self.options.custom_scalars_prefix));
            }
        };
        TypeExpr::named(keyword)
    }

    /// Returns the custom scalars referenced by name so far, in first-use order.
    pub fn unresolved_scalars(&self) -> impl Iterator<Item = &str> {
        self.unresolved_scalars.iter().map(String::as_str)
    }
}

/// Registry of every type name used in a generated file.
#[derive(Debug, Default)]
pub struct NameRegistry {
    used: HashSet<String>,
}

impl NameRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a top-level name. Returns false if it was already taken.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        self.used.insert(name.into())
    }

    /// Returns true if the name is taken.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Claims a unique name for the nested type of a field.
    ///
    /// Tries the singularized response key, then the response key as
    /// written, then the singular form with an increasing numeric suffix.
    /// Returns the scope component to push for the nested type.
    pub fn claim(&mut self, scope: &[String], response_key: &str) -> String {
        let singular = response_key.to_singular();
        let mut candidates = vec![singular.clone()];
        if singular != response_key {
            candidates.push(response_key.to_string());
        }

        for candidate in candidates {
            if self.used.insert(join_name(scope, &candidate)) {
                return candidate;
            }
        }

        let mut suffix = 2;
        loop {
            let candidate = format!("{singular}{suffix}");
            if self.used.insert(join_name(scope, &candidate)) {
                debug!(name = %join_name(scope, &candidate), "nested type name deduplicated");
                return candidate;
            }
            suffix += 1;
        }
    }
}
