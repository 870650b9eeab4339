//! # gqlmap graph
//!
//! Neo4j integration for gqlmap: synchronizes an introspected GraphQL
//! schema into a property graph and answers bounded-hop reachability
//! queries from any type back to the operation roots.

pub mod client;
pub mod error;
pub mod paths;
pub mod store_schema;
pub mod sync;
pub mod taxonomy;

pub use client::{GraphClient, GraphConfig, GraphCounts};
pub use error::{SyncError, SyncResult};
pub use paths::find_operation_paths;
pub use store_schema::initialize_store;
pub use sync::{SyncEngine, SyncReport};
pub use taxonomy::{EntityKind, Relationship};
