//! Field collection and merging.
//!
//! Flattens a selection set, its inline fragments and its fragment spreads
//! into one field list per concrete object type, keyed by response key.

use crate::error::CodegenError;
use gql_typegen_schema::{
    Field, FragmentMap, GraphQLType, SchemaError, Selection, SelectionSet, TYPENAME_FIELD,
};
use indexmap::IndexMap;
use tracing::trace;

/// A field after merging every selection sharing its response key.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedField {
    /// Key under which the field appears in a response.
    pub response_key: String,
    /// Schema field name.
    pub name: String,
    /// Declared type of the first occurrence.
    pub ty: GraphQLType,
    /// Description of the first occurrence.
    pub description: Option<String>,
    /// Concatenated sub-selections of every occurrence.
    pub selection_set: Option<SelectionSet>,
    /// Concrete type names a `__typename` field is restricted to.
    pub typename_literals: Option<Vec<String>>,
}

impl MergedField {
    fn from_field(field: &Field) -> Self {
        Self {
            response_key: field.response_key().to_string(),
            name: field.name.clone(),
            ty: field.ty.clone(),
            description: field.description.clone(),
            selection_set: field.selection_set.clone(),
            typename_literals: None,
        }
    }

    /// Returns true for the `__typename` meta-field.
    #[must_use]
    pub fn is_typename(&self) -> bool {
        self.name == TYPENAME_FIELD
    }
}

/// Result of collecting a selection set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collected {
    /// Merged fields in first-occurrence order.
    pub fields: Vec<MergedField>,
    /// Names of the fragments referenced instead of merged.
    pub fragment_spreads: Vec<String>,
}

#[derive(Default)]
struct CollectState {
    fields: IndexMap<String, MergedField>,
    fragment_spreads: Vec<String>,
    open_fragments: Vec<String>,
}

/// Collects and merges fields for a concrete object type.
pub struct FieldCollector<'a> {
    fragments: &'a FragmentMap,
    merge_fragment_spreads: bool,
}

impl<'a> FieldCollector<'a> {
    /// Creates a collector over the given fragment registry.
    #[must_use]
    pub fn new(fragments: &'a FragmentMap, merge_fragment_spreads: bool) -> Self {
        Self {
            fragments,
            merge_fragment_spreads,
        }
    }

    /// Collects the fields a selection set yields for an object type.
    ///
    /// Inline fragments and fragment spreads contribute only when their
    /// possible types include `object_type`; `None` accepts every
    /// contribution.
    ///
    /// # Errors
    /// Returns `CodegenError::FieldMergeConflict` if two selections share a
    /// response key but not a type, or a schema error if a spread names an
    /// unknown fragment.
    pub fn collect(
        &self,
        selection_set: &SelectionSet,
        object_type: Option<&str>,
    ) -> Result<Collected, CodegenError> {
        let mut state = CollectState::default();
        self.collect_into(&selection_set.selections, object_type, &mut state)?;
        Ok(Collected {
            fields: state.fields.into_values().collect(),
            fragment_spreads: state.fragment_spreads,
        })
    }

    fn collect_into(
        &self,
        selections: &[Selection],
        object_type: Option<&str>,
        state: &mut CollectState,
    ) -> Result<(), CodegenError> {
        for selection in selections {
            match selection {
                Selection::Field(field) => merge_field(&mut state.fields, field)?,
                Selection::InlineFragment(fragment) => {
                    if applies(&fragment.possible_types, object_type) {
                        self.collect_into(&fragment.selection_set.selections, object_type, state)?;
                    }
                }
                Selection::FragmentSpread(spread) => {
                    if !applies(&spread.possible_types, object_type) {
                        continue;
                    }
                    if !self.merge_fragment_spreads {
                        if !state.fragment_spreads.contains(&spread.fragment_name) {
                            state.fragment_spreads.push(spread.fragment_name.clone());
                        }
                        continue;
                    }
                    if state.open_fragments.contains(&spread.fragment_name) {
                        trace!(fragment = %spread.fragment_name, "skipping re-entrant spread");
                        continue;
                    }
                    let fragment = self
                        .fragments
                        .get(&spread.fragment_name)
                        .ok_or_else(|| SchemaError::fragment_not_found(&spread.fragment_name))?;

                    state.open_fragments.push(spread.fragment_name.clone());
                    self.collect_into(&fragment.selection_set.selections, object_type, state)?;
                    state.open_fragments.pop();
                }
            }
        }
        Ok(())
    }
}

fn applies(possible_types: &[String], object_type: Option<&str>) -> bool {
    object_type.is_none_or(|object| possible_types.iter().any(|t| t == object))
}

fn merge_field(
    fields: &mut IndexMap<String, MergedField>,
    field: &Field,
) -> Result<(), CodegenError> {
    let key = field.response_key();
    let Some(existing) = fields.get_mut(key) else {
        fields.insert(key.to_string(), MergedField::from_field(field));
        return Ok(());
    };

    if existing.ty != field.ty {
        return Err(CodegenError::merge_conflict(key, &existing.ty, &field.ty));
    }
    if let Some(nested) = &field.selection_set {
        match &mut existing.selection_set {
            Some(merged) => merged.append(nested),
            None => existing.selection_set = Some(nested.clone()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gql_typegen_schema::{Fragment, FragmentSpread, InlineFragment};

    fn string() -> GraphQLType {
        GraphQLType::Scalar("String".to_string())
    }

    fn object_set(name: &str) -> SelectionSet {
        SelectionSet::new(name, vec![name.to_string()])
    }

    fn field(name: &str, ty: GraphQLType) -> Selection {
        Selection::Field(Field::new(name, ty))
    }

    fn spread(name: &str, possible_types: &[&str]) -> Selection {
        Selection::FragmentSpread(FragmentSpread {
            fragment_name: name.to_string(),
            type_condition: possible_types[0].to_string(),
            possible_types: possible_types.iter().map(|t| t.to_string()).collect(),
        })
    }

    fn keys(collected: &Collected) -> Vec<&str> {
        collected
            .fields
            .iter()
            .map(|f| f.response_key.as_str())
            .collect()
    }

    #[test]
    fn test_collect_direct_fields_in_order() {
        let set = object_set("User")
            .with(field("id", GraphQLType::Scalar("ID".to_string()).non_null()))
            .with(field("name", string()))
            .with(field("id", GraphQLType::Scalar("ID".to_string()).non_null()));

        let fragments = FragmentMap::new();
        let collector = FieldCollector::new(&fragments, true);
        let collected = collector.collect(&set, Some("User")).expect("Failed to collect");

        assert_eq!(keys(&collected), ["id", "name"]);
    }

    #[test]
    fn test_collect_conflicting_types() {
        let set = object_set("Query")
            .with(field("x", string()))
            .with(field("x", GraphQLType::Scalar("Int".to_string())));

        let fragments = FragmentMap::new();
        let collector = FieldCollector::new(&fragments, true);
        let result = collector.collect(&set, Some("Query"));

        assert!(matches!(
            result,
            Err(CodegenError::FieldMergeConflict { ref response_key, ref first, ref second })
                if response_key == "x" && first == "String" && second == "Int"
        ));
    }

    #[test]
    fn test_collect_nullability_conflict() {
        let set = object_set("Query")
            .with(field("x", string()))
            .with(field("x", string().non_null()));

        let fragments = FragmentMap::new();
        let collector = FieldCollector::new(&fragments, true);
        assert!(collector.collect(&set, Some("Query")).is_err());
    }

    #[test]
    fn test_collect_concatenates_nested_sets() {
        let character = GraphQLType::Interface("Character".to_string());
        let nested = |name: &str| {
            SelectionSet::new("Character", vec!["Human".to_string(), "Droid".to_string()])
                .with(field(name, string()))
        };
        let set = object_set("Human")
            .with(Selection::Field(
                Field::new("friend", character.clone()).with_selection_set(nested("name")),
            ))
            .with(Selection::Field(
                Field::new("friend", character).with_selection_set(nested("id")),
            ));

        let fragments = FragmentMap::new();
        let collector = FieldCollector::new(&fragments, true);
        let collected = collector.collect(&set, Some("Human")).expect("Failed to collect");

        assert_eq!(collected.fields.len(), 1);
        let friend = &collected.fields[0];
        let nested = friend.selection_set.as_ref().expect("nested selection set");
        assert_eq!(nested.selections.len(), 2);
    }

    #[test]
    fn test_collect_inline_fragments_filtered_by_type() {
        let set = SelectionSet::new("Pet", vec!["Cat".to_string(), "Dog".to_string()])
            .with(Selection::Field(Field::typename()))
            .with(Selection::InlineFragment(InlineFragment {
                type_condition: "Cat".to_string(),
                possible_types: vec!["Cat".to_string()],
                selection_set: object_set("Cat").with(field("meow", string())),
            }))
            .with(Selection::InlineFragment(InlineFragment {
                type_condition: "Dog".to_string(),
                possible_types: vec!["Dog".to_string()],
                selection_set: object_set("Dog").with(field("bark", string())),
            }));

        let fragments = FragmentMap::new();
        let collector = FieldCollector::new(&fragments, true);

        let cat = collector.collect(&set, Some("Cat")).expect("Failed to collect");
        assert_eq!(keys(&cat), ["__typename", "meow"]);

        let dog = collector.collect(&set, Some("Dog")).expect("Failed to collect");
        assert_eq!(keys(&dog), ["__typename", "bark"]);

        let all = collector.collect(&set, None).expect("Failed to collect");
        assert_eq!(keys(&all), ["__typename", "meow", "bark"]);
    }

    #[test]
    fn test_collect_expands_spreads_in_place() {
        let mut fragments = FragmentMap::new();
        fragments.insert(
            "UserName".to_string(),
            Fragment {
                name: "UserName".to_string(),
                type_condition: "User".to_string(),
                selection_set: object_set("User").with(field("name", string())),
            },
        );
        let set = object_set("User")
            .with(field("id", string()))
            .with(spread("UserName", &["User"]))
            .with(field("email", string()));

        let collector = FieldCollector::new(&fragments, true);
        let collected = collector.collect(&set, Some("User")).expect("Failed to collect");
        assert_eq!(keys(&collected), ["id", "name", "email"]);
        assert!(collected.fragment_spreads.is_empty());
    }

    #[test]
    fn test_collect_records_spreads_when_not_merging() {
        let fragments = FragmentMap::new();
        let set = object_set("User")
            .with(field("id", string()))
            .with(spread("UserName", &["User"]))
            .with(spread("UserName", &["User"]));

        let collector = FieldCollector::new(&fragments, false);
        let collected = collector.collect(&set, Some("User")).expect("Failed to collect");
        assert_eq!(keys(&collected), ["id"]);
        assert_eq!(collected.fragment_spreads, ["UserName"]);
    }

    #[test]
    fn test_collect_does_not_reenter_open_fragment() {
        let mut fragments = FragmentMap::new();
        fragments.insert(
            "Loop".to_string(),
            Fragment {
                name: "Loop".to_string(),
                type_condition: "User".to_string(),
                selection_set: object_set("User")
                    .with(field("id", string()))
                    .with(spread("Loop", &["User"])),
            },
        );
        let set = object_set("User").with(spread("Loop", &["User"]));

        let collector = FieldCollector::new(&fragments, true);
        let collected = collector.collect(&set, Some("User")).expect("Failed to collect");
        assert_eq!(keys(&collected), ["id"]);
    }

    #[test]
    fn test_collect_unknown_fragment() {
        let fragments = FragmentMap::new();
        let set = object_set("User").with(spread("Missing", &["User"]));

        let collector = FieldCollector::new(&fragments, true);
        assert!(matches!(
            collector.collect(&set, Some("User")),
            Err(CodegenError::Schema(SchemaError::FragmentNotFound { .. }))
        ));
    }

    #[test]
    fn test_collect_is_idempotent() {
        let set = object_set("User")
            .with(field("id", string()))
            .with(field("name", string()));
        let mut doubled = set.clone();
        doubled.append(&set);

        let fragments = FragmentMap::new();
        let collector = FieldCollector::new(&fragments, true);
        let once = collector.collect(&set, Some("User")).expect("Failed to collect");
        let twice = collector.collect(&doubled, Some("User")).expect("Failed to collect");
        assert_eq!(once, twice);
    }
}
