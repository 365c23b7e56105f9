//! Type-case resolution.
//!
//! A selection set on an interface or union can produce differently shaped
//! results depending on the concrete type of the value. The resolver groups
//! the possible types into variants sharing one merged field list.

use crate::error::CodegenError;
use crate::merge::{FieldCollector, MergedField};
use gql_typegen_schema::{FragmentMap, GraphQLType, SelectionSet};
use tracing::debug;

/// One concrete-type-specific shape of a selection set's result.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    /// Concrete types producing this shape.
    pub possible_types: Vec<String>,
    /// Merged fields in first-occurrence order.
    pub fields: Vec<MergedField>,
    /// Fragments referenced instead of merged.
    pub fragment_spreads: Vec<String>,
}

impl Variant {
    /// Returns true if another field list and spread list describe the same shape.
    fn has_shape(&self, fields: &[MergedField], fragment_spreads: &[String]) -> bool {
        ShapeKey::new(&self.fields, &self.fragment_spreads)
            == ShapeKey::new(fields, fragment_spreads)
    }
}

/// Order-independent identity of a result shape.
///
/// Fields compare by response key, declared type and nested selections;
/// descriptions and contribution order are ignored.
#[derive(PartialEq)]
struct ShapeKey<'f> {
    fields: Vec<(&'f str, &'f GraphQLType, Option<&'f SelectionSet>)>,
    fragment_spreads: Vec<&'f str>,
}

impl<'f> ShapeKey<'f> {
    fn new(fields: &'f [MergedField], fragment_spreads: &'f [String]) -> Self {
        let mut keyed: Vec<_> = fields
            .iter()
            .map(|f| (f.response_key.as_str(), &f.ty, f.selection_set.as_ref()))
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(b.0));

        let mut spreads: Vec<&str> = fragment_spreads.iter().map(String::as_str).collect();
        spreads.sort_unstable();

        Self {
            fields: keyed,
            fragment_spreads: spreads,
        }
    }
}

/// Computes the variants of selection sets.
pub struct TypeCaseResolver<'a> {
    collector: FieldCollector<'a>,
}

impl<'a> TypeCaseResolver<'a> {
    /// Creates a resolver over the given fragment registry.
    #[must_use]
    pub fn new(fragments: &'a FragmentMap, merge_fragment_spreads: bool) -> Self {
        Self {
            collector: FieldCollector::new(fragments, merge_fragment_spreads),
        }
    }

    /// Resolves the variants of a selection set.
    ///
    /// A selection set on a concrete object type yields exactly one variant,
    /// as does an abstract type without implementations. Otherwise every
    /// possible type is collected on its own and types with the same fields
    /// are grouped, in the order of their first member, keeping that
    /// member's field order. In polymorphic variants `__typename` is
    /// narrowed to the variant's type names.
    ///
    /// # Errors
    /// Returns `CodegenError` if fields cannot be merged.
    pub fn resolve_variants(
        &self,
        selection_set: &SelectionSet,
    ) -> Result<Vec<Variant>, CodegenError> {
        if !selection_set.is_polymorphic() || selection_set.possible_types.is_empty() {
            // No concrete type to filter by when nothing implements the parent.
            let object_type = if selection_set.possible_types.is_empty() {
                None
            } else {
                Some(selection_set.parent_type.as_str())
            };
            let collected = self.collector.collect(selection_set, object_type)?;
            return Ok(vec![Variant {
                possible_types: selection_set.possible_types.clone(),
                fields: collected.fields,
                fragment_spreads: collected.fragment_spreads,
            }]);
        }

        let mut variants: Vec<Variant> = Vec::new();
        for object_type in &selection_set.possible_types {
            let collected = self.collector.collect(selection_set, Some(object_type))?;
            let existing = variants
                .iter()
                .position(|v| v.has_shape(&collected.fields, &collected.fragment_spreads));
            match existing {
                Some(index) => variants[index].possible_types.push(object_type.clone()),
                None => variants.push(Variant {
                    possible_types: vec![object_type.clone()],
                    fields: collected.fields,
                    fragment_spreads: collected.fragment_spreads,
                }),
            }
        }

        for variant in &mut variants {
            let literals = variant.possible_types.clone();
            for field in variant.fields.iter_mut().filter(|f| f.is_typename()) {
                field.typename_literals = Some(literals.clone());
            }
        }

        debug!(
            parent = %selection_set.parent_type,
            possible_types = selection_set.possible_types.len(),
            variants = variants.len(),
            "resolved type cases"
        );
        Ok(variants)
    }
}
