//! Operation path query command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use gqlmap_graph::find_operation_paths;

use super::ConnectionArgs;

#[derive(Args)]
pub struct PathsArgs {
    /// Name of the GraphQL type returned by an operation
    #[arg(short = 't', long = "type")]
    pub type_name: String,

    /// Paths to return per root operation type (queries AND mutations)
    #[arg(short, long, default_value_t = 5)]
    pub limit: i64,

    /// Maximum number of hops between the type and a root
    #[arg(long, default_value_t = 10)]
    pub max_hops: u32,

    /// Show type objects in rendered paths
    #[arg(long)]
    pub show_types: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn execute(args: PathsArgs) -> Result<()> {
    println!(
        "{} {}",
        "Querying operation paths for".bold(),
        args.type_name.cyan()
    );

    let client = args.connection.connect().await?;
    let paths = find_operation_paths(
        &client,
        &args.type_name,
        args.max_hops,
        args.limit,
        args.show_types,
    )
    .await
    .context("Path query failed")?;

    if paths.is_empty() {
        println!("{}", "No operation paths found.".dimmed());
        return Ok(());
    }

    for (i, path) in paths.iter().enumerate() {
        println!("Path {}: {}", (i + 1).to_string().bold(), path);
    }
    Ok(())
}
