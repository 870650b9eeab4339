//! Operation path discovery.
//!
//! Answers "which Query/Mutation entry points can reach this type" by
//! walking the inverse (child→parent) edges the sync engine materializes,
//! bounded by a caller-supplied hop count.

use neo4rs::Query;
use tracing::debug;

use gqlmap_core::schema::model::RootKind;

use crate::taxonomy::Relationship;
use crate::GraphClient;

/// Find bounded-hop paths from a type back to the Query and Mutation roots.
///
/// Each path is rendered root-to-leaf as `"Query -> field -> Type"`. Type
/// resolution hops (IS_TYPE_FOR) are hidden unless `show_type_nodes`, which
/// keeps the output focused on structural steps. A type with no incoming
/// references yields an empty list.
pub async fn find_operation_paths(
    client: &GraphClient,
    type_name: &str,
    max_hops: u32,
    per_root_limit: i64,
    show_type_nodes: bool,
) -> Result<Vec<String>, neo4rs::Error> {
    let mut paths = Vec::new();

    for root in [RootKind::Query, RootKind::Mutation] {
        // The hop bound is structural Cypher and cannot be a parameter; it
        // is formatted from an integer. Names and the limit are bound.
        let cypher = format!(
            "MATCH (n {{name: $name}})-[r*1..{max_hops}]->(m {{name: $root}}) \
             RETURN r LIMIT $limit"
        );
        let query = Query::new(cypher)
            .param("name", type_name)
            .param("root", root.type_name())
            .param("limit", per_root_limit);

        debug!(type_name, root = root.type_name(), max_hops, "Querying operation paths");

        for row in client.query(query).await? {
            let Ok(edges) = row.get::<Vec<neo4rs::Relation>>("r") else {
                continue;
            };

            let mut names = Vec::new();
            for edge in &edges {
                let label = edge.typ().to_string();
                if keep_hop(&label, show_type_nodes) {
                    let name = client
                        .node_name(edge.start_node_id())
                        .await?
                        .unwrap_or_default();
                    names.push(name);
                }
            }
            paths.push(render_path(&names));
        }
    }

    Ok(paths)
}

/// Type-resolution hops are hidden unless explicitly requested.
fn keep_hop(label: &str, show_type_nodes: bool) -> bool {
    show_type_nodes || label != Relationship::IsTypeFor.as_str()
}

/// Join leaf-to-root hop names in root-to-leaf reading order.
fn render_path(leaf_to_root: &[String]) -> String {
    let names: Vec<&str> = leaf_to_root.iter().rev().map(String::as_str).collect();
    names.join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_renders_root_first() {
        let hops = vec![
            "Order".to_string(),
            "order".to_string(),
            "Query".to_string(),
        ];
        assert_eq!(render_path(&hops), "Query -> order -> Order");
    }

    #[test]
    fn type_resolution_hops_are_hidden_by_default() {
        assert!(!keep_hop("IS_TYPE_FOR", false));
        assert!(keep_hop("IS_TYPE_FOR", true));
        assert!(keep_hop("IS_FIELD_OF", false));
        assert!(keep_hop("IS_ITEM_FROM_LIST", false));
    }

    #[test]
    fn empty_hop_list_renders_empty() {
        assert_eq!(render_path(&[]), "");
    }
}
