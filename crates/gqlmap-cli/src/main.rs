//! gqlmap CLI - GraphQL attack-surface mapping
//!
//! Fetches an introspected schema, mirrors it into a Neo4j property graph,
//! and derives operation paths, sub-schemas and expanded request bodies.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Cli;

/// Initialize tracing, honoring `RUST_LOG` over the built-in defaults.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "gqlmap=debug,gqlmap_core=debug,gqlmap_graph=debug"
    } else {
        "gqlmap=info,gqlmap_core=info,gqlmap_graph=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute().await
}
