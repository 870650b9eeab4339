//! Sub-schema extraction command.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use gqlmap_core::{build_sub_schema, introspection, RootKind, SchemaModel};

#[derive(Args)]
pub struct SubSchemaArgs {
    /// Main schema file location
    #[arg(short, long, default_value = "schema.json")]
    pub schema: PathBuf,

    /// File to save the sub-schema to
    #[arg(short, long, default_value = "sub_schema.json")]
    pub output: PathBuf,

    /// Comma-delimited top-level queries to support (e.g. 'orders,users')
    #[arg(short, long, value_delimiter = ',')]
    pub queries: Vec<String>,

    /// Comma-delimited top-level mutations to support
    #[arg(short, long, value_delimiter = ',')]
    pub mutations: Vec<String>,
}

pub fn execute(args: SubSchemaArgs) -> Result<()> {
    if args.queries.is_empty() && args.mutations.is_empty() {
        bail!("Pass at least one query (-q) or mutation (-m) to support");
    }

    let document = introspection::load_document(&args.schema)
        .context("Failed to load schema file")?;
    let model = SchemaModel::from_document(document);

    let mut operations: Vec<(RootKind, String)> = Vec::new();
    for mutation in &args.mutations {
        operations.push((RootKind::Mutation, mutation.clone()));
    }
    for query in &args.queries {
        operations.push((RootKind::Query, query.clone()));
    }

    println!(
        "{} {} operations",
        "Building sub-schema for".bold(),
        operations.len()
    );

    let sub_schema =
        build_sub_schema(&model, &operations).context("Sub-schema extraction failed")?;
    introspection::save_document(&args.output, &sub_schema)
        .context("Failed to save sub-schema")?;

    println!(
        "{} {} types written to {}",
        "Done:".green().bold(),
        sub_schema.data.schema.types.len(),
        args.output.display()
    );
    Ok(())
}
