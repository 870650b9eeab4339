//! Introspection fetch command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use gqlmap_core::introspection;

#[derive(Args)]
pub struct FetchArgs {
    /// URL to send the introspection query to
    #[arg(short, long)]
    pub target: String,

    /// File to save the schema to
    #[arg(short, long, default_value = "schema.json")]
    pub output: PathBuf,
}

pub async fn execute(args: FetchArgs) -> Result<()> {
    println!(
        "{} {}",
        "Running introspection query against".bold(),
        args.target.cyan()
    );

    let document = introspection::fetch_introspection(&args.target)
        .await
        .context("Introspection query failed")?;

    introspection::save_document(&args.output, &document)
        .context("Failed to save schema file")?;

    println!(
        "{} {} types saved to {}",
        "Done:".green().bold(),
        document.data.schema.types.len(),
        args.output.display()
    );
    Ok(())
}
