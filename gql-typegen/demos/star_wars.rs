//! Generates declarations for the Star Wars schema.
//!
//! Run with: `cargo run --example star_wars -- [flow|typescript] [schema.json document.json]`
//!
//! Without paths the bundled hero query is used. Set `RUST_LOG=debug` to
//! trace the compiler.

use gql_typegen::prelude::*;
use std::path::Path;

const SCHEMA: &str = include_str!("../../gql-typegen-codegen/tests/fixtures/star_wars_schema.json");
const DOCUMENT: &str = include_str!("../../gql-typegen-codegen/tests/fixtures/hero_and_friends.json");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let target = match args.first() {
        Some(name) => Target::parse(name).ok_or_else(|| anyhow::anyhow!("unknown target '{name}'"))?,
        None => Target::Flow,
    };
    let options = CompilerOptions::new().target(target);

    let (schema_json, document_json) = match (args.get(1), args.get(2)) {
        (Some(schema), Some(document)) => (
            std::fs::read_to_string(Path::new(schema))?,
            std::fs::read_to_string(Path::new(document))?,
        ),
        _ => (SCHEMA.to_string(), DOCUMENT.to_string()),
    };

    let schema = parse_schema(&schema_json)?;
    let document = parse_document(&document_json)?;
    let output = generate(&schema, &document, &options)?;

    for diagnostic in &output.diagnostics {
        tracing::warn!("{diagnostic}");
    }
    tracing::info!(
        declarations = output.declarations.len(),
        target = %target,
        "generation finished"
    );

    print!("{}", output.into_source()?);
    Ok(())
}
