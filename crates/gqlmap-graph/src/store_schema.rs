//! Store index initialization.

use neo4rs::Query;
use tracing::info;

use crate::client::GraphClient;

/// Index statements for the labels the sync engine looks up by name/hash.
const INDEX_STATEMENTS: &[&str] = &[
    "CREATE INDEX gql_object_name IF NOT EXISTS FOR (n:OBJECT) ON (n.name)",
    "CREATE INDEX gql_union_name IF NOT EXISTS FOR (n:UNION) ON (n.name)",
    "CREATE INDEX gql_enum_name IF NOT EXISTS FOR (n:ENUM) ON (n.name)",
    "CREATE INDEX gql_interface_name IF NOT EXISTS FOR (n:INTERFACE) ON (n.name)",
    "CREATE INDEX gql_input_object_name IF NOT EXISTS FOR (n:INPUT_OBJECT) ON (n.name)",
    "CREATE INDEX gql_scalar_name IF NOT EXISTS FOR (n:SCALAR) ON (n.name)",
    "CREATE INDEX gql_field_hash IF NOT EXISTS FOR (n:FIELD) ON (n.hash)",
    "CREATE INDEX gql_arg_hash IF NOT EXISTS FOR (n:ARG) ON (n.hash)",
    "CREATE INDEX gql_input_field_hash IF NOT EXISTS FOR (n:INPUT_FIELD) ON (n.hash)",
];

/// Initialize store indexes before a sync.
///
/// Safe to run multiple times - uses IF NOT EXISTS clauses.
pub async fn initialize_store(client: &GraphClient) -> Result<(), neo4rs::Error> {
    for statement in INDEX_STATEMENTS {
        client.execute(Query::new(statement.to_string())).await?;
    }

    info!("Store indexes initialized ({} statements)", INDEX_STATEMENTS.len());
    Ok(())
}
