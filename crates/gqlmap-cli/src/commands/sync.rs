//! Graph store sync and status commands.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use gqlmap_core::introspection;
use gqlmap_graph::SyncEngine;

use super::ConnectionArgs;

#[derive(Args)]
pub struct SyncArgs {
    /// Schema file location
    #[arg(short, long)]
    pub schema: PathBuf,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn execute(args: SyncArgs) -> Result<()> {
    let document = introspection::load_document(&args.schema)
        .context("Failed to load schema file")?;

    println!(
        "{} {} types from {}",
        "Syncing".bold(),
        document.data.schema.types.len(),
        args.schema.display()
    );

    let client = args.connection.connect().await?;
    gqlmap_graph::initialize_store(&client)
        .await
        .context("Failed to initialize store indexes")?;

    let report = SyncEngine::new(&client)
        .sync_schema(&document.data.schema.types)
        .await;

    println!("\n{}", "Sync complete:".green().bold());
    println!("  Nodes created:         {}", report.nodes_created);
    println!("  Nodes updated:         {}", report.nodes_updated);
    println!("  Nodes unchanged:       {}", report.nodes_skipped);
    println!("  Relationships created: {}", report.relationships_created);
    if report.types_failed > 0 {
        println!(
            "  {} {}",
            "Types failed:".yellow(),
            report.types_failed
        );
    }

    println!(
        "\n{}",
        "Use the Neo4j browser to inspect the graph, e.g. 'MATCH (n) RETURN n LIMIT 500'."
            .dimmed()
    );
    Ok(())
}

pub async fn execute_status(args: StatusArgs) -> Result<()> {
    let client = args.connection.connect().await?;
    let counts = client
        .get_counts()
        .await
        .context("Failed to read store counts")?;

    println!("{}", "Graph store status:".bold());
    println!("  Nodes:         {}", counts.nodes);
    println!("  Relationships: {}", counts.relationships);
    Ok(())
}
