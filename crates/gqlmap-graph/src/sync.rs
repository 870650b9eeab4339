//! Schema-to-graph synchronization engine.
//!
//! Upserts a parsed introspection type list into the graph store. Upserts
//! are idempotent and keyed by content hash: an unchanged type is a no-op,
//! a changed one gets its scalar properties rewritten and its relationships
//! resynced. The batch is best-effort — a failure inside one type's subtree
//! aborts that type only, never the run.
//!
//! Occurrence entities (FIELD, ARG, INPUT_FIELD) are created per parent,
//! never deduplicated by name: the same field name can recur under
//! different parents. Named types are deduplicated by name, so an OBJECT
//! referenced as a UNION member resolves to the same node as its top-level
//! definition.
//!
//! Interfaces and enum values are not wired into the graph. Known gap.

use neo4rs::Query;
use tracing::{debug, info, warn};

use gqlmap_core::hash::{hash_properties, type_hash, ScalarProps};
use gqlmap_core::schema::model::{FieldDescriptor, TypeDescriptor, TypeKind, TypeRef};
use gqlmap_core::schema::unwrap::{unwrap_type, ResolvedTypeRef};

use crate::error::{SyncError, SyncResult};
use crate::taxonomy::EntityKind;
use crate::GraphClient;

/// Aggregate outcome of a sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub nodes_created: usize,
    pub nodes_updated: usize,
    pub nodes_skipped: usize,
    pub relationships_created: usize,
    pub types_failed: usize,
}

/// Engine owning the sync policy for one run.
pub struct SyncEngine<'a> {
    client: &'a GraphClient,
    bidirectional: bool,
}

impl<'a> SyncEngine<'a> {
    pub fn new(client: &'a GraphClient) -> Self {
        Self {
            client,
            bidirectional: false,
        }
    }

    /// Also create forward (parent→child) edges. No current call path
    /// enables this: symmetric pairs create cycles on root-to-leaf walks.
    pub fn bidirectional(mut self, enabled: bool) -> Self {
        self.bidirectional = enabled;
        self
    }

    /// Upsert every type in the list. Never fails: per-type errors are
    /// logged with entity context and counted, the batch continues.
    pub async fn sync_schema(&self, types: &[TypeDescriptor]) -> SyncReport {
        let mut report = SyncReport::default();

        for descriptor in types {
            let name = descriptor.name.as_deref().unwrap_or("<unnamed>");
            debug!(name, kind = %descriptor.kind, "Syncing type");
            if let Err(err) = self.upsert_type(descriptor, &mut report).await {
                warn!(name, kind = %descriptor.kind, error = %err, "Type sync failed, skipping");
                report.types_failed += 1;
            }
        }

        info!(
            created = report.nodes_created,
            updated = report.nodes_updated,
            skipped = report.nodes_skipped,
            relationships = report.relationships_created,
            failed = report.types_failed,
            "Schema sync complete"
        );
        report
    }

    async fn upsert_type(
        &self,
        descriptor: &TypeDescriptor,
        report: &mut SyncReport,
    ) -> SyncResult<()> {
        let name = descriptor
            .name
            .clone()
            .ok_or_else(|| SyncError::MissingRequiredProperty {
                entity: descriptor.kind.to_string(),
                property: "name",
            })?;
        let hash = type_hash(descriptor);

        // Kind and name must both match: a FIELD occurrence may share its
        // name with a top-level type.
        for existing in self.find_nodes_by_name(&name).await? {
            if existing.label == descriptor.kind.as_str() && existing.name == name {
                if existing.hash == hash {
                    debug!(name = %name, "Type unchanged");
                    report.nodes_skipped += 1;
                    return Ok(());
                }
                self.update_type_node(descriptor, &name, &hash).await?;
                report.nodes_updated += 1;
                return self.sync_relationships(existing.id, descriptor, report).await;
            }
        }

        let id = self
            .create_node(
                descriptor.kind.as_str(),
                &descriptor.scalar_properties(),
                &hash,
            )
            .await?;
        report.nodes_created += 1;
        self.sync_relationships(id, descriptor, report).await
    }

    /// Rewrite a matched node's scalar properties and hash in place.
    async fn update_type_node(
        &self,
        descriptor: &TypeDescriptor,
        name: &str,
        hash: &str,
    ) -> SyncResult<()> {
        let query = Query::new(format!(
            "MATCH (n:{} {{name: $name}}) SET n.description = $description, n.hash = $hash",
            descriptor.kind.as_str()
        ))
        .param("name", name)
        .param("description", descriptor.description.as_deref().unwrap_or(""))
        .param("hash", hash);

        self.client.execute(query).await?;
        Ok(())
    }

    async fn sync_relationships(
        &self,
        parent_id: i64,
        descriptor: &TypeDescriptor,
        report: &mut SyncReport,
    ) -> SyncResult<()> {
        for field in descriptor.fields.as_deref().unwrap_or_default() {
            self.add_field(parent_id, field, report).await?;
        }

        for input_field in descriptor.input_fields.as_deref().unwrap_or_default() {
            self.add_occurrence(
                parent_id,
                EntityKind::InputField,
                &input_field.name,
                input_field.scalar_properties(),
                &input_field.type_ref,
                report,
            )
            .await?;
        }

        for member in descriptor.possible_types.as_deref().unwrap_or_default() {
            self.add_member(parent_id, member, report).await?;
        }

        // interfaces and enumValues are deliberately not wired.
        Ok(())
    }

    /// Create a FIELD occurrence, then its ARG children beneath it.
    async fn add_field(
        &self,
        parent_id: i64,
        field: &FieldDescriptor,
        report: &mut SyncReport,
    ) -> SyncResult<()> {
        let field_id = self
            .add_occurrence(
                parent_id,
                EntityKind::Field,
                &field.name,
                field.scalar_properties(),
                &field.type_ref,
                report,
            )
            .await?;

        for arg in &field.args {
            self.add_occurrence(
                field_id,
                EntityKind::Arg,
                &arg.name,
                arg.scalar_properties(),
                &arg.type_ref,
                report,
            )
            .await?;
        }
        Ok(())
    }

    /// Create an occurrence node, wire it to its resolved type, and attach
    /// it under its parent with the structural label pair.
    ///
    /// Occurrences are never deduplicated by name — the same field name can
    /// recur under different parents. The resync guard is scoped to (hash,
    /// parent): an unchanged occurrence already wired beneath this parent is
    /// reused as-is, so resyncing a changed type leaves its relationship set
    /// alone.
    async fn add_occurrence(
        &self,
        parent_id: i64,
        kind: EntityKind,
        name: &str,
        props: Vec<(&'static str, Option<String>)>,
        type_ref: &TypeRef,
        report: &mut SyncReport,
    ) -> SyncResult<i64> {
        let hash = hash_properties(kind.label(), &props);

        if let Some(id) = self.find_occurrence(kind, &hash, parent_id).await? {
            debug!(kind = kind.label(), name, "Occurrence unchanged");
            return Ok(id);
        }

        debug!(kind = kind.label(), name, "Adding occurrence");
        let occurrence_id = self.create_node(kind.label(), &props, &hash).await?;
        report.nodes_created += 1;

        let resolved = unwrap_type(type_ref);

        // Guard against re-wiring when the occurrence already carries its
        // TYPE or LIST edge.
        if !self.has_type_edge(occurrence_id).await? {
            let target_id = self.resolve_target(&resolved, report).await?;
            let edge_kind = if resolved.is_list {
                EntityKind::List
            } else {
                EntityKind::Type
            };
            self.wire_edge_pair(occurrence_id, target_id, edge_kind, report)
                .await?;
        }

        self.wire_edge_pair(parent_id, occurrence_id, kind, report)
            .await?;
        Ok(occurrence_id)
    }

    /// Wire a UNION member to the same node as its top-level definition.
    async fn add_member(
        &self,
        parent_id: i64,
        member: &TypeRef,
        report: &mut SyncReport,
    ) -> SyncResult<()> {
        let resolved = unwrap_type(member);
        let member_id = self.resolve_target(&resolved, report).await?;
        self.wire_edge_pair(parent_id, member_id, EntityKind::PossibleType, report)
            .await
    }

    /// Find or create the node backing a resolved type reference.
    ///
    /// Non-scalar targets are reused by name; scalar targets are created
    /// fresh per occurrence. More than one name match means the name is no
    /// longer unique in the store and aborts this branch.
    async fn resolve_target(
        &self,
        resolved: &ResolvedTypeRef,
        report: &mut SyncReport,
    ) -> SyncResult<i64> {
        let name = resolved
            .name
            .clone()
            .ok_or_else(|| SyncError::MissingRequiredProperty {
                entity: resolved.kind.to_string(),
                property: "name",
            })?;

        if resolved.kind != TypeKind::Scalar {
            if let Some(id) = self.find_unique_node_id(&name).await? {
                return Ok(id);
            }
        }

        let props = vec![("name", Some(name))];
        let hash = hash_properties(resolved.kind.as_str(), &props);
        let id = self.create_node(resolved.kind.as_str(), &props, &hash).await?;
        report.nodes_created += 1;
        Ok(id)
    }

    async fn find_nodes_by_name(&self, name: &str) -> SyncResult<Vec<ExistingNode>> {
        let query =
            Query::new("MATCH (n {name: $name}) RETURN n".to_string()).param("name", name);
        let rows = self.client.query(query).await?;

        let mut nodes = Vec::new();
        for row in rows {
            let Ok(node) = row.get::<neo4rs::Node>("n") else {
                continue;
            };
            nodes.push(ExistingNode {
                id: node.id(),
                label: node
                    .labels()
                    .first()
                    .map(|l| l.to_string())
                    .unwrap_or_default(),
                name: node.get::<String>("name").unwrap_or_default(),
                hash: node.get::<String>("hash").unwrap_or_default(),
            });
        }
        Ok(nodes)
    }

    /// Resolve a name expected to be unique to a single node id.
    async fn find_unique_node_id(&self, name: &str) -> SyncResult<Option<i64>> {
        let nodes = self.find_nodes_by_name(name).await?;
        match nodes.len() {
            0 => Ok(None),
            1 => Ok(Some(nodes[0].id)),
            matches => {
                for node in &nodes {
                    warn!(name, id = node.id, label = %node.label, "Ambiguous name match");
                }
                Err(SyncError::AmbiguousLookup {
                    name: name.to_string(),
                    matches,
                })
            }
        }
    }

    /// Look up an occurrence with this content hash already attached under
    /// the given parent.
    async fn find_occurrence(
        &self,
        kind: EntityKind,
        hash: &str,
        parent_id: i64,
    ) -> SyncResult<Option<i64>> {
        let (_, inverse) = kind.relationship_pair();
        let query = Query::new(format!(
            "MATCH (o:{} {{hash: $hash}})-[:{}]->(p) WHERE id(p) = $parent \
             RETURN id(o) AS id LIMIT 1",
            kind.label(),
            inverse.as_str()
        ))
        .param("hash", hash)
        .param("parent", parent_id);
        Ok(self.client.query_scalar::<i64>(query, "id").await?)
    }

    /// True when the occurrence already has an incoming type-resolution edge.
    async fn has_type_edge(&self, occurrence_id: i64) -> SyncResult<bool> {
        let query = Query::new(
            "MATCH (t)-[r:IS_TYPE_FOR|IS_ITEM_FROM_LIST]->(a) WHERE id(a) = $id \
             RETURN id(r) AS id LIMIT 1"
                .to_string(),
        )
        .param("id", occurrence_id);
        Ok(!self.client.query(query).await?.is_empty())
    }

    async fn create_node(
        &self,
        label: &str,
        props: &[(&'static str, Option<String>)],
        hash: &str,
    ) -> SyncResult<i64> {
        let mut query = Query::new(create_node_statement(label, props));
        for (key, value) in props {
            query = query.param(key, value.clone().unwrap_or_default());
        }
        query = query.param("hash", hash);

        self.client
            .query_scalar::<i64>(query, "id")
            .await?
            .ok_or(SyncError::EmptyResult("node id"))
    }

    /// Merge the inverse (child→parent) edge, plus the forward edge when
    /// bidirectional, and verify the store returned the expected pair.
    /// MERGE keeps re-wiring idempotent for reused nodes such as UNION
    /// members.
    async fn wire_edge_pair(
        &self,
        parent_id: i64,
        child_id: i64,
        kind: EntityKind,
        report: &mut SyncReport,
    ) -> SyncResult<()> {
        let (forward, inverse) = kind.relationship_pair();
        let forward = self.bidirectional.then_some(forward.as_str());
        let expected = if forward.is_some() { 2 } else { 1 };

        let query = Query::new(edge_pair_statement(inverse.as_str(), forward))
            .param("parent", parent_id)
            .param("child", child_id);

        let wiring_failure = || SyncError::RelationshipWiring {
            parent: parent_id,
            child: child_id,
            label: inverse.as_str(),
        };

        let rows = self.client.query(query).await?;
        let row = rows.first().ok_or_else(wiring_failure)?;

        let mut created = usize::from(row.get::<i64>("first").is_ok());
        if expected == 2 {
            created += usize::from(row.get::<i64>("second").is_ok());
        }
        if created != expected {
            return Err(wiring_failure());
        }

        report.relationships_created += created;
        Ok(())
    }
}

struct ExistingNode {
    id: i64,
    label: String,
    name: String,
    hash: String,
}

/// `CREATE (n:LABEL {k: $k, ..., hash: $hash}) RETURN id(n) AS id`.
/// Labels and property keys come from static enums and descriptors; all
/// values are bound as parameters.
fn create_node_statement(label: &str, props: &[(&'static str, Option<String>)]) -> String {
    let mut assignments: Vec<String> = props
        .iter()
        .map(|(key, _)| format!("{key}: ${key}"))
        .collect();
    assignments.push("hash: $hash".to_string());
    format!(
        "CREATE (n:{label} {{{}}}) RETURN id(n) AS id",
        assignments.join(", ")
    )
}

/// Inverse edge always, forward edge only when requested.
fn edge_pair_statement(inverse: &str, forward: Option<&str>) -> String {
    let mut cypher = format!(
        "MATCH (a), (b) WHERE id(a) = $parent AND id(b) = $child MERGE (b)-[r1:{inverse}]->(a)"
    );
    match forward {
        Some(forward) => {
            cypher.push_str(&format!(
                " MERGE (a)-[r2:{forward}]->(b) RETURN id(r1) AS first, id(r2) AS second"
            ));
        }
        None => cypher.push_str(" RETURN id(r1) AS first"),
    }
    cypher
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_node_statement_binds_all_values() {
        let props = vec![
            ("name", Some("id".to_string())),
            ("description", None),
            ("isDeprecated", Some("false".to_string())),
        ];
        let statement = create_node_statement("FIELD", &props);
        assert_eq!(
            statement,
            "CREATE (n:FIELD {name: $name, description: $description, \
             isDeprecated: $isDeprecated, hash: $hash}) RETURN id(n) AS id"
        );
        // No raw values make it into the statement text.
        assert!(!statement.contains("false"));
    }

    #[test]
    fn edge_pair_statement_is_inverse_only_by_default() {
        let statement = edge_pair_statement("IS_FIELD_OF", None);
        assert!(statement.contains("MERGE (b)-[r1:IS_FIELD_OF]->(a)"));
        assert!(!statement.contains("r2"));
    }

    #[test]
    fn edge_pair_statement_adds_forward_edge_when_bidirectional() {
        let statement = edge_pair_statement("IS_FIELD_OF", Some("HAS_FIELD"));
        assert!(statement.contains("MERGE (b)-[r1:IS_FIELD_OF]->(a)"));
        assert!(statement.contains("MERGE (a)-[r2:HAS_FIELD]->(b)"));
        assert!(statement.contains("id(r2) AS second"));
    }
}
