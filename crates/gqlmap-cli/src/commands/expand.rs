//! Request body expansion command.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use gqlmap_core::{expand_operation, introspection, ExpandOptions, RootKind, SchemaModel};

#[derive(Args)]
pub struct ExpandArgs {
    /// Schema file location
    #[arg(short, long, default_value = "schema.json")]
    pub schema: PathBuf,

    /// File to save the request body to
    #[arg(short, long, default_value = "expanded_body.req")]
    pub output: PathBuf,

    /// Top-level query to expand
    #[arg(short, long, conflicts_with = "mutation")]
    pub query: Option<String>,

    /// Top-level mutation to expand
    #[arg(short, long)]
    pub mutation: Option<String>,

    /// Fork the cycle-guard set per sibling branch for a fuller body
    #[arg(long)]
    pub deep_copy_hashes: bool,
}

pub fn execute(args: ExpandArgs) -> Result<()> {
    let (root, name) = match (&args.query, &args.mutation) {
        (Some(query), None) => (RootKind::Query, query.clone()),
        (None, Some(mutation)) => (RootKind::Mutation, mutation.clone()),
        _ => bail!("Pass exactly one operation: a query (-q) or a mutation (-m)"),
    };

    let document = introspection::load_document(&args.schema)
        .context("Failed to load schema file")?;
    let model = SchemaModel::from_document(document);

    println!("{} {}.{}", "Expanding".bold(), root, name.cyan());

    let options = ExpandOptions {
        deep_copy_hashes: args.deep_copy_hashes,
    };
    let body = expand_operation(&model, root, &name, &options)
        .context("Request body expansion failed")?;

    std::fs::write(&args.output, &body).context("Failed to save request body")?;

    println!(
        "{} body written to {} (request arguments still need manual input)",
        "Done:".green().bold(),
        args.output.display()
    );
    Ok(())
}
