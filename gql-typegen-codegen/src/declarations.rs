//! Declaration tree.
//!
//! The emitter builds target independent declarations; rendering to a
//! concrete language happens through [`PrettyPrint`] with a
//! [`TargetSyntax`].

use crate::printer::{CodePrinter, PrettyPrint};
use crate::syntax::{ArrayNotation, FragmentNotation, NullableNotation, TargetSyntax};

/// A target type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Reference to a named type or keyword.
    Named(String),
    /// String literal type.
    StringLiteral(String),
    /// Nullable inner type.
    Nullable(Box<TypeExpr>),
    /// Array of the inner type.
    Array(Box<TypeExpr>),
    /// Union of alternatives.
    Union(Vec<TypeExpr>),
}

impl TypeExpr {
    /// Creates a named type expression.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a union of string literals.
    #[must_use]
    pub fn literals<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut members: Vec<Self> = values
            .into_iter()
            .map(|v| Self::StringLiteral(v.into()))
            .collect();
        if members.len() == 1 {
            members.remove(0)
        } else {
            Self::Union(members)
        }
    }

    /// Returns true if the expression carries the nullable marker.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Returns true if the rendered expression is a top-level union.
    fn renders_as_union(&self, syntax: &TargetSyntax) -> bool {
        match self {
            Self::Union(members) => members.len() > 1,
            Self::Nullable(_) => matches!(syntax.nullable, NullableNotation::UnionWith(_)),
            _ => false,
        }
    }

    /// Renders the expression in the target's notation.
    #[must_use]
    pub fn render(&self, syntax: &TargetSyntax) -> String {
        match self {
            Self::Named(name) => name.clone(),
            Self::StringLiteral(value) => format!("\"{value}\""),
            Self::Union(members) if members.is_empty() => syntax.empty_type.to_string(),
            Self::Union(members) => members
                .iter()
                .map(|m| m.render(syntax))
                .collect::<Vec<_>>()
                .join(syntax.union_separator),
            Self::Nullable(inner) => match syntax.nullable {
                NullableNotation::Prefix(marker) => {
                    format!("{marker}{}", inner.render_grouped(syntax))
                }
                NullableNotation::UnionWith(null) => {
                    format!("{}{}{null}", inner.render(syntax), syntax.union_separator)
                }
            },
            Self::Array(inner) => match syntax.array {
                ArrayNotation::Generic { open, close } => {
                    format!("{open}{}{close}", inner.render(syntax))
                }
                ArrayNotation::Postfix(marker) => {
                    format!("{}{marker}", inner.render_grouped(syntax))
                }
            },
        }
    }

    fn render_grouped(&self, syntax: &TargetSyntax) -> String {
        if self.renders_as_union(syntax) {
            format!("({})", self.render(syntax))
        } else {
            self.render(syntax)
        }
    }
}

/// A top-level or nested type declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Declared type name.
    pub name: String,
    /// Description printed as a leading comment.
    pub description: Option<String>,
    /// Declared shape.
    pub kind: DeclarationKind,
    /// Declarations of anonymous nested types, in the order they were built.
    pub nested: Vec<Declaration>,
}

/// Shape of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationKind {
    /// String literal union.
    Enum(Vec<EnumMember>),
    /// Single object shape.
    Object(ObjectShape),
    /// Tagged union of object shapes.
    Union(Vec<ObjectShape>),
}

/// A member of an enum declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Value name.
    pub value: String,
    /// Description.
    pub description: Option<String>,
}

/// An object type shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectShape {
    /// Fragments whose declarations are referenced instead of inlined.
    pub fragment_spreads: Vec<String>,
    /// Properties in declaration order.
    pub properties: Vec<Property>,
}

impl ObjectShape {
    /// Returns true if the shape declares nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragment_spreads.is_empty() && self.properties.is_empty()
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// A property of an object shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Whether the property may be omitted.
    pub optional: bool,
    /// Property type.
    pub ty: TypeExpr,
    /// Description.
    pub description: Option<String>,
}

impl Declaration {
    /// Creates a declaration without nested declarations.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
            nested: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    /// Returns this declaration and all nested declarations, depth first.
    #[must_use]
    pub fn flatten(&self) -> Vec<&Declaration> {
        let mut all = vec![self];
        for nested in &self.nested {
            all.extend(nested.flatten());
        }
        all
    }

    /// Returns a copy without nested declarations.
    #[must_use]
    pub fn shallow(&self) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            kind: self.kind.clone(),
            nested: Vec::new(),
        }
    }

    /// Finds a declaration by name in this subtree.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.flatten().into_iter().find(|d| d.name == name)
    }
}

impl PrettyPrint for Declaration {
    fn pretty_print(&self, syntax: &TargetSyntax) -> String {
        let mut printer = CodePrinter::new(syntax);
        if let Some(description) = &self.description {
            print_comment_lines(&mut printer, description);
        }

        match &self.kind {
            DeclarationKind::Enum(members) => print_enum(&mut printer, &self.name, members),
            DeclarationKind::Object(shape) => {
                printer.print_on_newline(format!("{} {} = ", syntax.type_alias, self.name));
                print_shape(&mut printer, shape);
                printer.print(syntax.terminator);
            }
            DeclarationKind::Union(shapes) => {
                printer.print_on_newline(format!("{} {} = ", syntax.type_alias, self.name));
                for (index, shape) in shapes.iter().enumerate() {
                    if index > 0 {
                        printer.print(syntax.union_separator);
                    }
                    print_shape(&mut printer, shape);
                }
                if shapes.is_empty() {
                    printer.print(syntax.empty_type);
                }
                printer.print(syntax.terminator);
            }
        }

        printer.take_output()
    }
}

fn print_comment_lines(printer: &mut CodePrinter, text: &str) {
    let marker = printer.syntax().line_comment;
    for line in text.trim().lines() {
        printer.print_on_newline(format!("{marker} {}", line.trim()));
    }
}

/// Prints a description as a trailing comment if it fits on one line.
fn print_trailing_comment(printer: &mut CodePrinter, description: Option<&str>) {
    if let Some(text) = description.map(str::trim).filter(|d| is_single_line(d)) {
        let marker = printer.syntax().line_comment;
        printer.print(format!(" {marker} {text}"));
    }
}

fn print_leading_comment(printer: &mut CodePrinter, description: Option<&str>) {
    if let Some(text) = description.map(str::trim).filter(|d| !is_single_line(d)) {
        print_comment_lines(printer, text);
    }
}

fn is_single_line(text: &str) -> bool {
    !text.is_empty() && !text.contains('\n')
}

fn print_enum(printer: &mut CodePrinter, name: &str, members: &[EnumMember]) {
    let syntax = printer.syntax();
    if members.is_empty() {
        printer.print_on_newline(format!(
            "{} {name} = {}{}",
            syntax.type_alias, syntax.empty_type, syntax.terminator
        ));
        return;
    }

    printer.print_on_newline(format!("{} {name} =", syntax.type_alias));
    printer.with_indent(|p| {
        let last = members.len() - 1;
        for (index, member) in members.iter().enumerate() {
            print_leading_comment(p, member.description.as_deref());
            p.print_on_newline(format!("| \"{}\"", member.value));
            if index == last {
                p.print(syntax.terminator);
            }
            print_trailing_comment(p, member.description.as_deref());
        }
    });
}

fn print_shape(printer: &mut CodePrinter, shape: &ObjectShape) {
    let syntax = printer.syntax();
    let mut spreads_in_body = Vec::new();

    match syntax.fragment {
        FragmentNotation::Intersection(separator) => {
            for spread in &shape.fragment_spreads {
                printer.print(format!("{spread}{separator}"));
            }
        }
        FragmentNotation::Spread(marker) => {
            spreads_in_body.extend(shape.fragment_spreads.iter().map(|s| format!("{marker}{s}")));
        }
    }

    if spreads_in_body.is_empty() && shape.properties.is_empty() {
        printer.print(format!("{}{}", syntax.object_open, syntax.object_close));
        return;
    }

    printer.scoped_block(syntax.object_open, syntax.object_close, |p| {
        for spread in &spreads_in_body {
            p.print_on_newline(spread);
            p.print_on_newline(syntax.property_separator);
        }
        for property in &shape.properties {
            print_leading_comment(p, property.description.as_deref());
            let marker = if property.optional {
                syntax.optional_marker
            } else {
                ""
            };
            p.print_on_newline(format!(
                "{}{marker}: {}",
                property.name,
                property.ty.render(&syntax)
            ));
            print_trailing_comment(p, property.description.as_deref());
            p.print_on_newline(syntax.property_separator);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::fix_commas;
    use crate::syntax::{FLOW, TYPESCRIPT};

    fn nullable(inner: TypeExpr) -> TypeExpr {
        TypeExpr::Nullable(Box::new(inner))
    }

    fn array(inner: TypeExpr) -> TypeExpr {
        TypeExpr::Array(Box::new(inner))
    }

    fn render(declaration: &Declaration, syntax: &TargetSyntax) -> String {
        fix_commas(&declaration.pretty_print(syntax), syntax.line_comment)
    }

    fn property(name: &str, ty: TypeExpr) -> Property {
        Property {
            name: name.to_string(),
            optional: false,
            ty,
            description: None,
        }
    }

    #[test]
    fn test_render_flow_wrappers() {
        let int = nullable(TypeExpr::named("number"));
        assert_eq!(int.render(&FLOW), "?number");

        let list = nullable(array(nullable(TypeExpr::named("string"))));
        assert_eq!(list.render(&FLOW), "?Array<?string>");

        let non_null_list = array(nullable(TypeExpr::named("string")));
        assert_eq!(non_null_list.render(&FLOW), "Array<?string>");
    }

    #[test]
    fn test_render_typescript_wrappers() {
        let list = nullable(array(nullable(TypeExpr::named("string"))));
        assert_eq!(list.render(&TYPESCRIPT), "(string | null)[] | null");

        let non_null = array(TypeExpr::named("number"));
        assert_eq!(non_null.render(&TYPESCRIPT), "number[]");
    }

    #[test]
    fn test_render_literal_unions() {
        let single = TypeExpr::literals(["Human"]);
        assert_eq!(single.render(&FLOW), "\"Human\"");

        let union = TypeExpr::literals(["Human", "Droid"]);
        assert_eq!(union.render(&FLOW), "\"Human\" | \"Droid\"");
        assert_eq!(nullable(union.clone()).render(&FLOW), "?(\"Human\" | \"Droid\")");
        assert_eq!(array(union).render(&TYPESCRIPT), "(\"Human\" | \"Droid\")[]");
    }

    #[test]
    fn test_object_declaration_flow() {
        let declaration = Declaration::new(
            "UserQuery_user",
            DeclarationKind::Object(ObjectShape {
                fragment_spreads: Vec::new(),
                properties: vec![
                    property("id", TypeExpr::named("string")),
                    Property {
                        description: Some("Display name".to_string()),
                        ..property("name", nullable(TypeExpr::named("string")))
                    },
                ],
            }),
        );

        let expected = "export type UserQuery_user = {|\n  id: string,\n  name: ?string, // Display name\n|};";
        assert_eq!(render(&declaration, &FLOW), expected);
    }

    #[test]
    fn test_object_declaration_typescript_optional() {
        let declaration = Declaration::new(
            "ReviewInput",
            DeclarationKind::Object(ObjectShape {
                fragment_spreads: Vec::new(),
                properties: vec![Property {
                    optional: true,
                    ..property("commentary", nullable(TypeExpr::named("string")))
                }],
            }),
        );

        let expected = "export type ReviewInput = {\n  commentary?: string | null,\n};";
        assert_eq!(render(&declaration, &TYPESCRIPT), expected);
    }

    #[test]
    fn test_union_declaration() {
        let shape = |name: &str| ObjectShape {
            fragment_spreads: Vec::new(),
            properties: vec![property("__typename", TypeExpr::literals([name]))],
        };
        let declaration = Declaration::new(
            "PetQuery_pet",
            DeclarationKind::Union(vec![shape("Cat"), shape("Dog")]),
        );

        let expected = "export type PetQuery_pet = {|\n  __typename: \"Cat\",\n|} | {|\n  __typename: \"Dog\",\n|};";
        assert_eq!(render(&declaration, &FLOW), expected);
    }

    #[test]
    fn test_enum_declaration() {
        let declaration = Declaration::new(
            "Episode",
            DeclarationKind::Enum(vec![
                EnumMember {
                    value: "NEWHOPE".to_string(),
                    description: Some("Star Wars Episode IV".to_string()),
                },
                EnumMember {
                    value: "EMPIRE".to_string(),
                    description: Some("Episode V\nreleased in 1980".to_string()),
                },
                EnumMember {
                    value: "JEDI".to_string(),
                    description: Some("Episode VI".to_string()),
                },
            ]),
        )
        .with_description(Some("The episodes".to_string()));

        let expected = "// The episodes\nexport type Episode =\n  | \"NEWHOPE\" // Star Wars Episode IV\n  // Episode V\n  // released in 1980\n  | \"EMPIRE\"\n  | \"JEDI\";   // Episode VI";
        assert_eq!(render(&declaration, &FLOW), expected);
    }

    #[test]
    fn test_empty_enum_and_shape() {
        let declaration = Declaration::new("Nothing", DeclarationKind::Enum(Vec::new()));
        assert_eq!(render(&declaration, &FLOW), "export type Nothing = empty;");
        assert_eq!(render(&declaration, &TYPESCRIPT), "export type Nothing = never;");

        let declaration = Declaration::new("Blank", DeclarationKind::Object(ObjectShape::default()));
        assert_eq!(render(&declaration, &FLOW), "export type Blank = {||};");
    }

    #[test]
    fn test_fragment_references() {
        let declaration = Declaration::new(
            "HeroQuery_hero",
            DeclarationKind::Object(ObjectShape {
                fragment_spreads: vec!["HeroDetails".to_string()],
                properties: vec![property("id", TypeExpr::named("string"))],
            }),
        );

        assert_eq!(
            render(&declaration, &FLOW),
            "export type HeroQuery_hero = {|\n  ...HeroDetails,\n  id: string,\n|};"
        );
        assert_eq!(
            render(&declaration, &TYPESCRIPT),
            "export type HeroQuery_hero = HeroDetails & {\n  id: string,\n};"
        );
    }

    #[test]
    fn test_flatten_and_find() {
        let mut root = Declaration::new("A", DeclarationKind::Object(ObjectShape::default()));
        let mut child = Declaration::new("A_b", DeclarationKind::Object(ObjectShape::default()));
        child
            .nested
            .push(Declaration::new("A_b_c", DeclarationKind::Object(ObjectShape::default())));
        root.nested.push(child);
        root.nested
            .push(Declaration::new("A_d", DeclarationKind::Object(ObjectShape::default())));

        let names: Vec<&str> = root.flatten().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["A", "A_b", "A_b_c", "A_d"]);
        assert!(root.find("A_b_c").is_some());
        assert!(root.shallow().nested.is_empty());
    }
}
