//! Error types for graph synchronization.

use thiserror::Error;

/// Failures local to one upsert branch. None of these escalate past the
/// enclosing type's upsert: `sync_schema` converts them into logged skips.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Missing required property '{property}' on {entity}")]
    MissingRequiredProperty {
        entity: String,
        property: &'static str,
    },

    #[error("Ambiguous lookup for '{name}': {matches} existing nodes share the name")]
    AmbiguousLookup { name: String, matches: usize },

    #[error("Relationship wiring failed between nodes {parent} and {child} ({label})")]
    RelationshipWiring {
        parent: i64,
        child: i64,
        label: &'static str,
    },

    #[error("Store returned no {0}")]
    EmptyResult(&'static str),

    #[error("Store error: {0}")]
    Store(#[from] neo4rs::Error),
}

/// Result type for sync-internal operations.
pub type SyncResult<T> = Result<T, SyncError>;
