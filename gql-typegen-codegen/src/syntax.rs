//! Target language syntax.
//!
//! Generation is target agnostic: everything that differs between the
//! emitted languages is captured by a [`TargetSyntax`] constant set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a nullable type is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullableNotation {
    /// Marker placed before the type (`?T`).
    Prefix(&'static str),
    /// Union with a null keyword (`T | null`).
    UnionWith(&'static str),
}

/// How an array type is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayNotation {
    /// Generic wrapper (`Array<T>`).
    Generic {
        /// Opening text, including the generic bracket.
        open: &'static str,
        /// Closing text.
        close: &'static str,
    },
    /// Postfix marker (`T[]`).
    Postfix(&'static str),
}

/// How a reference to a fragment's own declaration joins an object shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentNotation {
    /// Spread inside the object body (`{| ...Fragment, |}`).
    Spread(&'static str),
    /// Intersection with the object (`Fragment & { }`).
    Intersection(&'static str),
}

/// String constants and notations describing one target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSyntax {
    /// Target name.
    pub name: &'static str,
    /// Lines printed at the top of every generated file.
    pub file_header: &'static [&'static str],
    /// Keyword introducing an exported type alias.
    pub type_alias: &'static str,
    /// Opening delimiter of an object type.
    pub object_open: &'static str,
    /// Closing delimiter of an object type.
    pub object_close: &'static str,
    /// Separator written after each object property.
    pub property_separator: &'static str,
    /// Marker appended to optional property names.
    pub optional_marker: &'static str,
    /// Separator between union members.
    pub union_separator: &'static str,
    /// Marker introducing a line comment.
    pub line_comment: &'static str,
    /// Statement terminator.
    pub terminator: &'static str,
    /// Nullable type notation.
    pub nullable: NullableNotation,
    /// Array type notation.
    pub array: ArrayNotation,
    /// Fragment reference notation.
    pub fragment: FragmentNotation,
    /// Keyword for string values.
    pub string_type: &'static str,
    /// Keyword for numeric values.
    pub number_type: &'static str,
    /// Keyword for boolean values.
    pub boolean_type: &'static str,
    /// Keyword for values of unknown shape.
    pub any_type: &'static str,
    /// Keyword for the type with no values.
    pub empty_type: &'static str,
    /// One level of indentation.
    pub indent: &'static str,
}

/// Flow syntax.
pub const FLOW: TargetSyntax = TargetSyntax {
    name: "flow",
    file_header: &[
        "/* @flow */",
        "// This file was automatically generated and should not be edited.",
    ],
    type_alias: "export type",
    object_open: "{|",
    object_close: "|}",
    property_separator: ",",
    optional_marker: "?",
    union_separator: " | ",
    line_comment: "//",
    terminator: ";",
    nullable: NullableNotation::Prefix("?"),
    array: ArrayNotation::Generic {
        open: "Array<",
        close: ">",
    },
    fragment: FragmentNotation::Spread("..."),
    string_type: "string",
    number_type: "number",
    boolean_type: "boolean",
    any_type: "any",
    empty_type: "empty",
    indent: "  ",
};

/// TypeScript syntax.
pub const TYPESCRIPT: TargetSyntax = TargetSyntax {
    name: "typescript",
    file_header: &[
        "/* tslint:disable */",
        "// This file was automatically generated and should not be edited.",
    ],
    type_alias: "export type",
    object_open: "{",
    object_close: "}",
    property_separator: ",",
    optional_marker: "?",
    union_separator: " | ",
    line_comment: "//",
    terminator: ";",
    nullable: NullableNotation::UnionWith("null"),
    array: ArrayNotation::Postfix("[]"),
    fragment: FragmentNotation::Intersection(" & "),
    string_type: "string",
    number_type: "number",
    boolean_type: "boolean",
    any_type: "any",
    empty_type: "never",
    indent: "  ",
};

/// Supported output targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Flow type declarations.
    #[default]
    Flow,
    /// TypeScript type declarations.
    #[serde(alias = "ts")]
    TypeScript,
}

impl Target {
    /// Returns the syntax constants of the target.
    #[must_use]
    pub const fn syntax(&self) -> &'static TargetSyntax {
        match self {
            Self::Flow => &FLOW,
            Self::TypeScript => &TYPESCRIPT,
        }
    }

    /// Parses a target from its name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flow" => Some(Self::Flow),
            "typescript" | "ts" => Some(Self::TypeScript),
            _ => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.syntax().name)
    }
}
