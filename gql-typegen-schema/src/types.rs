//! Schema type definitions.
//!
//! This module contains the data structures representing a GraphQL schema:
//! named types (scalars, enums, objects, interfaces, unions and input
//! objects), the wrapper notation used by field declarations, and the closed
//! resolved-type enumeration consumed by code generation.

use crate::document::OperationKind;
use crate::error::{ParseError, SchemaError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Complete GraphQL schema definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Root type for query operations.
    #[serde(default = "default_query_type")]
    pub query_type: String,
    /// Root type for mutation operations.
    #[serde(default)]
    pub mutation_type: Option<String>,
    /// Root type for subscription operations.
    #[serde(default)]
    pub subscription_type: Option<String>,
    /// Type definitions, in declaration order.
    #[serde(default)]
    pub types: Vec<TypeDef>,
    /// Type lookup map (built after loading).
    #[serde(skip)]
    type_map: HashMap<String, usize>,
}

fn default_query_type() -> String {
    "Query".to_string()
}

impl Schema {
    /// Creates a new schema holding only the built-in scalars.
    #[must_use]
    pub fn new(query_type: impl Into<String>) -> Self {
        let mut schema = Self {
            query_type: query_type.into(),
            mutation_type: None,
            subscription_type: None,
            types: Vec::new(),
            type_map: HashMap::new(),
        };
        schema.add_builtin_scalars();
        schema
    }

    /// Adds a type definition to the schema.
    pub fn add_type(&mut self, type_def: TypeDef) {
        let name = type_def.name().to_string();
        let index = self.types.len();
        self.types.push(type_def);
        self.type_map.insert(name, index);
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Builds the type lookup map from the types vector.
    pub fn build_type_map(&mut self) {
        self.type_map.clear();
        for (idx, type_def) in self.types.iter().enumerate() {
            self.type_map.insert(type_def.name().to_string(), idx);
        }
    }

    /// Registers every built-in scalar the schema does not declare itself.
    pub fn add_builtin_scalars(&mut self) {
        for scalar in BuiltinScalar::ALL {
            if !self.has_type(scalar.name()) {
                self.add_type(TypeDef::Scalar(ScalarDef::new(scalar.name())));
            }
        }
    }

    /// Returns the root type name for an operation kind, if the schema has one.
    #[must_use]
    pub fn root_type(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// Iterates over all object type definitions in declaration order.
    pub fn object_types(&self) -> impl Iterator<Item = &ObjectDef> {
        self.types.iter().filter_map(|t| match t {
            TypeDef::Object(o) => Some(o),
            _ => None,
        })
    }

    /// Returns the concrete object types a named type can resolve to.
    ///
    /// An object type resolves to itself, an interface to every object type
    /// implementing it (in schema order), and a union to its members. Any
    /// other kind of type has no possible types.
    #[must_use]
    pub fn possible_types(&self, name: &str) -> Vec<String> {
        match self.get_type(name) {
            Some(TypeDef::Object(o)) => vec![o.name.clone()],
            Some(TypeDef::Interface(i)) => self
                .object_types()
                .filter(|o| o.interfaces.iter().any(|n| n == &i.name))
                .map(|o| o.name.clone())
                .collect(),
            Some(TypeDef::Union(u)) => u.members.clone(),
            _ => Vec::new(),
        }
    }

    /// Returns true if the named type is an interface or a union.
    #[must_use]
    pub fn is_abstract(&self, name: &str) -> bool {
        self.get_type(name).is_some_and(TypeDef::is_abstract)
    }

    /// Looks up a field on an object or interface type.
    #[must_use]
    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&FieldDef> {
        self.get_type(type_name)?
            .fields()?
            .iter()
            .find(|f| f.name == field_name)
    }

    /// Resolves a type reference against the schema's named types.
    ///
    /// # Errors
    /// Returns `SchemaError` if a named type is unknown or a non-null wrapper
    /// directly wraps another non-null wrapper.
    pub fn resolve_type(&self, type_ref: &TypeRef) -> Result<GraphQLType, SchemaError> {
        match type_ref {
            TypeRef::Named(name) => {
                let type_def = self
                    .get_type(name)
                    .ok_or_else(|| SchemaError::type_not_found(name))?;
                Ok(type_def.as_graphql_type())
            }
            TypeRef::List(inner) => Ok(GraphQLType::List(Box::new(self.resolve_type(inner)?))),
            TypeRef::NonNull(inner) => {
                if matches!(**inner, TypeRef::NonNull(_)) {
                    return Err(SchemaError::NestedNonNull {
                        type_ref: type_ref.to_string(),
                    });
                }
                Ok(GraphQLType::NonNull(Box::new(self.resolve_type(inner)?)))
            }
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(default_query_type())
    }
}

/// Type definition variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeDef {
    /// Scalar type definition.
    Scalar(ScalarDef),
    /// Enum type definition.
    Enum(EnumDef),
    /// Object type definition.
    Object(ObjectDef),
    /// Interface type definition.
    Interface(InterfaceDef),
    /// Union type definition.
    Union(UnionDef),
    /// Input object type definition.
    InputObject(InputObjectDef),
}

impl TypeDef {
    /// Returns the name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(s) => &s.name,
            Self::Enum(e) => &e.name,
            Self::Object(o) => &o.name,
            Self::Interface(i) => &i.name,
            Self::Union(u) => &u.name,
            Self::InputObject(i) => &i.name,
        }
    }

    /// Returns the description of the type.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => s.description.as_deref(),
            Self::Enum(e) => e.description.as_deref(),
            Self::Object(o) => o.description.as_deref(),
            Self::Interface(i) => i.description.as_deref(),
            Self::Union(u) => u.description.as_deref(),
            Self::InputObject(i) => i.description.as_deref(),
        }
    }

    /// Returns a human readable name of the type kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Enum(_) => "enum",
            Self::Object(_) => "object",
            Self::Interface(_) => "interface",
            Self::Union(_) => "union",
            Self::InputObject(_) => "input object",
        }
    }

    /// Returns the output fields of an object or interface type.
    #[must_use]
    pub fn fields(&self) -> Option<&[FieldDef]> {
        match self {
            Self::Object(o) => Some(&o.fields),
            Self::Interface(i) => Some(&i.fields),
            _ => None,
        }
    }

    /// Returns true if this is an object, interface or union type.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Interface(_) | Self::Union(_))
    }

    /// Returns true if this is an interface or union type.
    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// Returns true if values of this type may appear in input positions.
    #[must_use]
    pub const fn is_input_type(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_) | Self::InputObject(_))
    }

    /// Returns true if values of this type may appear in output positions.
    #[must_use]
    pub const fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    /// Returns the unwrapped resolved type naming this definition.
    #[must_use]
    pub fn as_graphql_type(&self) -> GraphQLType {
        let name = self.name().to_string();
        match self {
            Self::Scalar(_) => GraphQLType::Scalar(name),
            Self::Enum(_) => GraphQLType::Enum(name),
            Self::Object(_) => GraphQLType::Object(name),
            Self::Interface(_) => GraphQLType::Interface(name),
            Self::Union(_) => GraphQLType::Union(name),
            Self::InputObject(_) => GraphQLType::InputObject(name),
        }
    }
}

/// Scalar type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarDef {
    /// Type name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
}

impl ScalarDef {
    /// Creates a new scalar definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// Enum type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    /// Type name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Enum values in declaration order.
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

/// A single enum value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    /// Value name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Deprecation reason, if deprecated.
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// Object type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDef {
    /// Type name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Output fields.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    /// Names of the interfaces this object implements.
    #[serde(default)]
    pub interfaces: Vec<String>,
}

impl ObjectDef {
    /// Creates a new object definition without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    /// Adds a field to the object.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }
}

/// Interface type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDef {
    /// Type name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Output fields.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// Union type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionDef {
    /// Type name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Member object type names.
    #[serde(default)]
    pub members: Vec<String>,
}

/// Input object type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObjectDef {
    /// Type name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Input fields.
    #[serde(default)]
    pub fields: Vec<InputValueDef>,
}

/// Output field definition on an object or interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Deprecation reason, if deprecated.
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

impl FieldDef {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            deprecation_reason: None,
        }
    }
}

/// Input field or variable-like value definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValueDef {
    /// Field name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Default value in literal notation.
    #[serde(default)]
    pub default_value: Option<String>,
}

/// Type reference as written in a declaration: a named type, optionally
/// wrapped in list and non-null markers.
///
/// The textual notation is the familiar one: `[Episode!]!`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    /// Reference to a named type.
    Named(String),
    /// List of the inner type.
    List(Box<TypeRef>),
    /// Non-null inner type.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a named type reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps this reference in a list.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Wraps this reference in a non-null marker.
    #[must_use]
    pub fn non_null(self) -> Self {
        Self::NonNull(Box::new(self))
    }

    /// Returns the innermost named type.
    #[must_use]
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl FromStr for TypeRef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (body, non_null) = match s.strip_suffix('!') {
            Some(body) => (body, true),
            None => (s, false),
        };

        let inner = if let Some(rest) = body.strip_prefix('[') {
            let element = rest
                .strip_suffix(']')
                .ok_or_else(|| ParseError::invalid_type_ref(s, "unterminated list"))?;
            Self::List(Box::new(element.parse()?))
        } else {
            let valid = !body.is_empty()
                && !body.starts_with(|c: char| c.is_ascii_digit())
                && body.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid {
                return Err(ParseError::invalid_type_ref(s, "expected a type name"));
            }
            Self::Named(body.to_string())
        };

        Ok(if non_null {
            Self::NonNull(Box::new(inner))
        } else {
            inner
        })
    }
}

impl TryFrom<String> for TypeRef {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

/// A type reference resolved against the schema.
///
/// Every named type carries its kind, so code generation can match
/// exhaustively instead of looking definitions up again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GraphQLType {
    /// Scalar type.
    Scalar(String),
    /// Enum type.
    Enum(String),
    /// Object type.
    Object(String),
    /// Interface type.
    Interface(String),
    /// Union type.
    Union(String),
    /// Input object type.
    InputObject(String),
    /// Non-null wrapper.
    NonNull(Box<GraphQLType>),
    /// List wrapper.
    List(Box<GraphQLType>),
}

impl GraphQLType {
    /// Wraps this type in a non-null marker.
    #[must_use]
    pub fn non_null(self) -> Self {
        Self::NonNull(Box::new(self))
    }

    /// Wraps this type in a list.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Returns the innermost named type.
    #[must_use]
    pub fn named_type(&self) -> &str {
        match self {
            Self::Scalar(name)
            | Self::Enum(name)
            | Self::Object(name)
            | Self::Interface(name)
            | Self::Union(name)
            | Self::InputObject(name) => name,
            Self::NonNull(inner) | Self::List(inner) => inner.named_type(),
        }
    }

    /// Returns the innermost type with all wrappers removed.
    #[must_use]
    pub fn unwrapped(&self) -> &Self {
        match self {
            Self::NonNull(inner) | Self::List(inner) => inner.unwrapped(),
            named => named,
        }
    }

    /// Returns true if the outermost wrapper is non-null.
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Returns true if the innermost type is an object, interface or union.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(
            self.unwrapped(),
            Self::Object(_) | Self::Interface(_) | Self::Union(_)
        )
    }
}

impl fmt::Display for GraphQLType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonNull(inner) => write!(f, "{inner}!"),
            Self::List(inner) => write!(f, "[{inner}]"),
            named => write!(f, "{}", named.named_type()),
        }
    }
}

/// Built-in GraphQL scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinScalar {
    /// UTF-8 character sequence.
    String,
    /// Signed 32-bit integer.
    Int,
    /// Double precision floating point.
    Float,
    /// Boolean.
    Boolean,
    /// Opaque unique identifier, serialized as a string.
    Id,
}

impl BuiltinScalar {
    /// All built-in scalars.
    pub const ALL: [Self; 5] = [
        Self::String,
        Self::Int,
        Self::Float,
        Self::Boolean,
        Self::Id,
    ];

    /// Returns the schema name of the scalar.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::Id => "ID",
        }
    }

    /// Parses a built-in scalar from its schema name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(Self::String),
            "Int" => Some(Self::Int),
            "Float" => Some(Self::Float),
            "Boolean" => Some(Self::Boolean),
            "ID" => Some(Self::Id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_schema;

    fn create_test_schema() -> Schema {
        let json = r#"{
            "queryType": "Query",
            "types": [
                {"kind": "OBJECT", "name": "Query", "fields": [
                    {"name": "hero", "type": "Character"},
                    {"name": "search", "type": "[SearchResult]"}
                ]},
                {"kind": "INTERFACE", "name": "Character", "fields": [
                    {"name": "name", "type": "String!"}
                ]},
                {"kind": "OBJECT", "name": "Human", "interfaces": ["Character"], "fields": [
                    {"name": "name", "type": "String!"},
                    {"name": "height", "type": "Float"}
                ]},
                {"kind": "OBJECT", "name": "Droid", "interfaces": ["Character"], "fields": [
                    {"name": "name", "type": "String!"}
                ]},
                {"kind": "OBJECT", "name": "Starship", "fields": [
                    {"name": "name", "type": "String!"}
                ]},
                {"kind": "UNION", "name": "SearchResult", "members": ["Starship", "Human"]},
                {"kind": "ENUM", "name": "Episode", "values": [{"name": "JEDI"}]}
            ]
        }"#;
        parse_schema(json).expect("Failed to parse")
    }

    #[test]
    fn test_type_ref_parse_named() {
        let type_ref: TypeRef = "Episode".parse().expect("Failed to parse");
        assert_eq!(type_ref, TypeRef::named("Episode"));
    }

    #[test]
    fn test_type_ref_parse_wrappers() {
        let type_ref: TypeRef = "[String!]!".parse().expect("Failed to parse");
        assert_eq!(type_ref, TypeRef::named("String").non_null().list().non_null());
        assert_eq!(type_ref.to_string(), "[String!]!");
        assert_eq!(type_ref.named_type(), "String");
    }

    #[test]
    fn test_type_ref_parse_rejects_double_non_null() {
        assert!("String!!".parse::<TypeRef>().is_err());
    }

    #[test]
    fn test_type_ref_parse_rejects_malformed() {
        assert!("[String".parse::<TypeRef>().is_err());
        assert!("[String]]".parse::<TypeRef>().is_err());
        assert!("".parse::<TypeRef>().is_err());
        assert!("1Type".parse::<TypeRef>().is_err());
    }

    #[test]
    fn test_schema_new_has_builtins() {
        let schema = Schema::new("Query");
        for scalar in BuiltinScalar::ALL {
            assert!(schema.has_type(scalar.name()));
        }
    }

    #[test]
    fn test_possible_types_interface_in_schema_order() {
        let schema = create_test_schema();
        assert_eq!(schema.possible_types("Character"), vec!["Human", "Droid"]);
    }

    #[test]
    fn test_possible_types_union_in_member_order() {
        let schema = create_test_schema();
        assert_eq!(schema.possible_types("SearchResult"), vec!["Starship", "Human"]);
    }

    #[test]
    fn test_possible_types_object_and_leaf() {
        let schema = create_test_schema();
        assert_eq!(schema.possible_types("Droid"), vec!["Droid"]);
        assert!(schema.possible_types("Episode").is_empty());
        assert!(schema.possible_types("Missing").is_empty());
    }

    #[test]
    fn test_is_abstract() {
        let schema = create_test_schema();
        assert!(schema.is_abstract("Character"));
        assert!(schema.is_abstract("SearchResult"));
        assert!(!schema.is_abstract("Human"));
    }

    #[test]
    fn test_field_lookup() {
        let schema = create_test_schema();
        let field = schema.field("Human", "height").expect("field");
        assert_eq!(field.ty, TypeRef::named("Float"));
        assert!(schema.field("Human", "mass").is_none());
        assert!(schema.field("SearchResult", "name").is_none());
    }

    #[test]
    fn test_resolve_type() {
        let schema = create_test_schema();
        let resolved = schema
            .resolve_type(&"[Character!]".parse().expect("Failed to parse"))
            .expect("Failed to resolve");
        assert_eq!(
            resolved,
            GraphQLType::Interface("Character".to_string())
                .non_null()
                .list()
        );
        assert!(resolved.is_composite());
        assert!(!resolved.is_non_null());
        assert_eq!(resolved.to_string(), "[Character!]");
    }

    #[test]
    fn test_resolve_type_unknown() {
        let schema = create_test_schema();
        let result = schema.resolve_type(&TypeRef::named("Planet"));
        assert!(matches!(result, Err(SchemaError::TypeNotFound { .. })));
    }

    #[test]
    fn test_resolve_type_nested_non_null() {
        let schema = create_test_schema();
        let type_ref = TypeRef::named("String").non_null().non_null();
        let result = schema.resolve_type(&type_ref);
        assert!(matches!(result, Err(SchemaError::NestedNonNull { .. })));
    }

    #[test]
    fn test_root_type() {
        let schema = create_test_schema();
        assert_eq!(schema.root_type(OperationKind::Query), Some("Query"));
        assert_eq!(schema.root_type(OperationKind::Mutation), None);
    }

    #[test]
    fn test_builtin_scalar_names() {
        assert_eq!(BuiltinScalar::from_name("ID"), Some(BuiltinScalar::Id));
        assert_eq!(BuiltinScalar::Id.name(), "ID");
        assert_eq!(BuiltinScalar::from_name("DateTime"), None);
    }
}
