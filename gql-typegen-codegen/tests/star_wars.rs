use gql_typegen_codegen::{
    CodegenError, CompilerOptions, Diagnostic, Target, generate, generate_from_json,
    generate_source,
};
use gql_typegen_schema::{Schema, parse_document, parse_schema};

const SCHEMA: &str = include_str!("fixtures/star_wars_schema.json");
const HERO_AND_FRIENDS: &str = include_str!("fixtures/hero_and_friends.json");
const CREATE_REVIEW: &str = include_str!("fixtures/create_review.json");
const SEARCH: &str = include_str!("fixtures/search.json");

const EPISODE_FLOW: &str = r#"// The episodes in the Star Wars trilogy
export type Episode =
  | "NEWHOPE" // Star Wars Episode IV: A New Hope, released in 1977.
  | "EMPIRE"  // Star Wars Episode V: The Empire Strikes Back, released in 1980.
  | "JEDI";   // Star Wars Episode VI: Return of the Jedi, released in 1983."#;

fn schema() -> Schema {
    parse_schema(SCHEMA).expect("Failed to parse")
}

#[test]
fn test_hero_and_friends_flow() {
    let options = CompilerOptions::default();
    let source =
        generate_from_json(SCHEMA, HERO_AND_FRIENDS, &options).expect("Failed to generate");

    let expected = format!(
        r#"/* @flow */
// This file was automatically generated and should not be edited.

{EPISODE_FLOW}

export type HeroAndFriendsQueryVariables = {{|
  episode?: ?Episode,
|}};

export type HeroAndFriendsQuery = {{|
  hero: ?HeroAndFriendsQuery_hero,
|}};

export type HeroAndFriendsQuery_hero = {{|
  __typename: "Human",
  name: string,
  friends: ?Array<?HeroAndFriendsQuery_hero_friend>, // The friends of the character
|}} | {{|
  __typename: "Droid",
  name: string,
  primaryFunction: ?string,
  friends: ?Array<?HeroAndFriendsQuery_hero_friend>, // The friends of the character
|}};

export type HeroAndFriendsQuery_hero_friend = {{|
  name: string,
|}};
"#
    );
    assert_eq!(source, expected);
}

#[test]
fn test_create_review_flow() {
    let options = CompilerOptions::default();
    let source = generate_from_json(SCHEMA, CREATE_REVIEW, &options).expect("Failed to generate");

    let expected = format!(
        r#"/* @flow */
// This file was automatically generated and should not be edited.

{EPISODE_FLOW}

export type ReviewInput = {{|
  stars: number,        // 0-5 stars
  commentary?: ?string, // Comment about the movie, optional
|}};

export type CreateReviewForEpisodeMutationVariables = {{|
  episode: Episode,
  review: ReviewInput,
|}};

export type CreateReviewForEpisodeMutation = {{|
  createReview: ?CreateReviewForEpisodeMutation_createReview,
|}};

export type CreateReviewForEpisodeMutation_createReview = {{|
  stars: number,
  commentary: ?string,
|}};
"#
    );
    assert_eq!(source, expected);
}

#[test]
fn test_search_flow_merges_fragments() {
    let schema = schema();
    let document = parse_document(SEARCH).expect("Failed to parse");
    let options = CompilerOptions::default();
    let output = generate(&schema, &document, &options).expect("Failed to generate");

    assert!(output.text.contains(
        r#"export type SearchQuery_search = {|
  __typename: "Human",
  name: string,
  height: ?number,
  born: ?DateTime,
|} | {|
  __typename: "Droid",
|} | {|
  __typename: "Starship",
  name: string,
|};"#
    ));
    assert!(output.text.contains("  search: ?Array<?SearchQuery_search>,\n"));
    assert!(output.text.ends_with(
        "export type HumanDetails = {|\n  name: string,\n  height: ?number,\n  born: ?DateTime,\n|};\n"
    ));

    assert!(matches!(
        output.diagnostics.as_slice(),
        [Diagnostic::UnresolvedScalar { name }] if name == "DateTime"
    ));
}

#[test]
fn test_search_typescript_fragment_references() {
    let schema = schema();
    let document = parse_document(SEARCH).expect("Failed to parse");
    let options = CompilerOptions::new()
        .target(Target::TypeScript)
        .merge_in_fields_from_fragment_spreads(false);
    let source = generate_source(&schema, &document, &options).expect("Failed to generate");

    let expected = r#"/* tslint:disable */
// This file was automatically generated and should not be edited.

export type SearchQuery = {
  search: (SearchQuery_search | null)[] | null,
};

export type SearchQuery_search = HumanDetails & {
  __typename: "Human",
} | {
  __typename: "Droid",
} | {
  __typename: "Starship",
  name: string,
};

export type HumanDetails = {
  name: string,
  height: number | null,
  born: DateTime | null,
};
"#;
    assert_eq!(source, expected);
}

#[test]
fn test_passthrough_custom_scalars() {
    let options = CompilerOptions::new().passthrough_custom_scalars(true);
    let source = generate_from_json(SCHEMA, SEARCH, &options).expect("Failed to generate");
    assert!(source.contains("  born: ?any,\n"));
    assert!(!source.contains("DateTime"));
}

#[test]
fn test_add_typename() {
    let options = CompilerOptions::new().add_typename(true);
    let source = generate_from_json(SCHEMA, CREATE_REVIEW, &options).expect("Failed to generate");
    assert!(source.contains(
        "export type CreateReviewForEpisodeMutation_createReview = {|\n  __typename: string,\n  stars: number,\n"
    ));
}

#[test]
fn test_declaration_names_unique() {
    let schema = schema();
    let options = CompilerOptions::default();
    for document in [HERO_AND_FRIENDS, CREATE_REVIEW, SEARCH] {
        let document = parse_document(document).expect("Failed to parse");
        let output = generate(&schema, &document, &options).expect("Failed to generate");

        let mut names: Vec<&str> = output
            .declarations
            .iter()
            .flat_map(|d| d.flatten())
            .map(|d| d.name.as_str())
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}

#[test]
fn test_unknown_field_aborts() {
    let document = r#"{"operations": [{"name": "Bad", "operationType": "query", "selectionSet": [
        {"kind": "Field", "name": "villain"}
    ]}]}"#;
    let result = generate_from_json(SCHEMA, document, &CompilerOptions::default());
    assert!(matches!(result, Err(CodegenError::Schema(_))));
}

#[test]
fn test_merge_conflict_reported() {
    let document = r#"{"operations": [{"name": "Clash", "operationType": "query", "selectionSet": [
        {"kind": "Field", "name": "hero", "selectionSet": [
            {"kind": "Field", "name": "name"},
            {"kind": "Field", "name": "id", "alias": "name"}
        ]}
    ]}]}"#;
    let result = generate_from_json(SCHEMA, document, &CompilerOptions::default());

    let Err(CodegenError::Declarations(errors)) = result else {
        panic!("expected declaration failures, got {result:?}");
    };
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0].root_cause(),
        CodegenError::FieldMergeConflict { response_key, .. } if response_key == "name"
    ));
}
