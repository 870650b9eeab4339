//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use gqlmap_graph::{GraphClient, GraphConfig};

pub mod expand;
pub mod fetch;
pub mod paths;
pub mod subschema;
pub mod sync;

/// gqlmap - GraphQL schema mapping for attack-surface analysis
#[derive(Parser)]
#[command(name = "gqlmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a schema with an introspection query
    Fetch(fetch::FetchArgs),

    /// Sync a schema file into the graph store
    Sync(sync::SyncArgs),

    /// Query operation paths that return a type
    Paths(paths::PathsArgs),

    /// Build a sub-schema supporting a set of operations
    SubSchema(subschema::SubSchemaArgs),

    /// Expand the request body for one operation
    Expand(expand::ExpandArgs),

    /// Show graph store status
    Status(sync::StatusArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Fetch(args) => fetch::execute(args).await,
            Commands::Sync(args) => sync::execute(args).await,
            Commands::Paths(args) => paths::execute(args).await,
            Commands::SubSchema(args) => subschema::execute(args),
            Commands::Expand(args) => expand::execute(args),
            Commands::Status(args) => sync::execute_status(args).await,
        }
    }
}

/// Graph store connection flags shared by store-facing commands.
#[derive(Args)]
pub struct ConnectionArgs {
    /// Database URI in <scheme>://<host>:<port> format
    #[arg(short, long, env = "NEO4J_URI", default_value = "bolt://localhost:7687")]
    pub uri: String,

    /// Auth credentials in <user>:<password> format
    #[arg(short, long, env = "NEO4J_CREDENTIALS", default_value = "neo4j:password123")]
    pub credentials: String,
}

impl ConnectionArgs {
    pub async fn connect(&self) -> Result<GraphClient> {
        let config = GraphConfig::from_parts(Some(&self.uri), Some(&self.credentials));
        GraphClient::connect(&config).await
    }
}
