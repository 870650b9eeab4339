//! Sub-schema extraction.
//!
//! Carves a minimal introspection document that still supports a chosen set
//! of operations: the reachability closure of every type referenced by the
//! requested operation fields, plus synthetic root objects holding only the
//! requested fields.

use std::collections::HashSet;

use tracing::debug;

use crate::error::CoreResult;
use crate::schema::model::{
    IntrospectionData, IntrospectionDocument, RootKind, SchemaData, TypeDescriptor, TypeKind,
    TypeRef,
};
use crate::schema::unwrap::unwrap_type;
use crate::schema::SchemaModel;

/// Build an introspection-shaped document supporting exactly `operations`.
///
/// The closure walk terminates because the type graph is finite and the
/// visited set blocks re-expansion of a type that has already been seen.
pub fn build_sub_schema(
    model: &SchemaModel,
    operations: &[(RootKind, String)],
) -> CoreResult<IntrospectionDocument> {
    let mut roots = [
        TypeDescriptor::empty_root(RootKind::Query.type_name()),
        TypeDescriptor::empty_root(RootKind::Mutation.type_name()),
        TypeDescriptor::empty_root(RootKind::Subscription.type_name()),
    ];

    let mut closure: HashSet<String> = HashSet::new();
    let mut frontier: Vec<String> = Vec::new();

    for (root, name) in operations {
        debug!(root = %root, operation = %name, "Seeding sub-schema operation");
        let operation = model.operation(*root, name)?;

        let slot = match root {
            RootKind::Query => 0,
            RootKind::Mutation => 1,
            RootKind::Subscription => 2,
        };
        if let Some(fields) = &mut roots[slot].fields {
            fields.push(operation.clone());
        }

        collect(&operation.type_ref, &mut closure, &mut frontier);
        for arg in &operation.args {
            collect(&arg.type_ref, &mut closure, &mut frontier);
        }
    }

    // Closure expansion over the seeded frontier.
    while let Some(name) = frontier.pop() {
        let descriptor = model.require_type(&name);
        for field in descriptor.fields.as_deref().unwrap_or_default() {
            collect(&field.type_ref, &mut closure, &mut frontier);
            for arg in &field.args {
                collect(&arg.type_ref, &mut closure, &mut frontier);
            }
        }
    }

    let mut types: Vec<TypeDescriptor> = model
        .types()
        .iter()
        .filter(|t| t.name.as_deref().is_some_and(|n| closure.contains(n)))
        .cloned()
        .collect();

    // Roots that retained no fields are omitted entirely.
    for root in roots {
        if root.fields.as_deref().is_some_and(|f| !f.is_empty()) {
            types.push(root);
        }
    }

    let source = model.data();
    Ok(IntrospectionDocument {
        data: IntrospectionData {
            schema: SchemaData {
                query_type: source.query_type.clone(),
                mutation_type: source.mutation_type.clone(),
                subscription_type: source.subscription_type.clone(),
                types,
                directives: source.directives.clone(),
            },
        },
    })
}

/// Add the unwrapped base type of a reference to the closure and frontier.
/// Wrapper layers and scalars never enter the set.
fn collect(type_ref: &TypeRef, closure: &mut HashSet<String>, frontier: &mut Vec<String>) {
    let resolved = unwrap_type(type_ref);
    if resolved.kind == TypeKind::Scalar {
        return;
    }
    if let Some(name) = resolved.name {
        if closure.insert(name.clone()) {
            frontier.push(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::test_fixtures::cyclic_schema;

    fn type_names(document: &IntrospectionDocument) -> Vec<String> {
        let mut names: Vec<String> = document
            .data
            .schema
            .types
            .iter()
            .filter_map(|t| t.name.clone())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn closure_terminates_on_cyclic_schema() {
        let model = cyclic_schema();
        let doc =
            build_sub_schema(&model, &[(RootKind::Query, "foo".to_string())]).unwrap();
        assert_eq!(type_names(&doc), ["Query", "TypeA", "TypeB"]);
    }

    #[test]
    fn synthetic_root_holds_only_requested_fields() {
        let model = cyclic_schema();
        let doc =
            build_sub_schema(&model, &[(RootKind::Query, "foo".to_string())]).unwrap();

        let query = doc
            .data
            .schema
            .types
            .iter()
            .find(|t| t.name.as_deref() == Some("Query"))
            .expect("synthetic Query root");
        let fields = query.fields.as_deref().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "foo");
    }

    #[test]
    fn empty_roots_are_omitted() {
        let model = cyclic_schema();
        let doc =
            build_sub_schema(&model, &[(RootKind::Query, "foo".to_string())]).unwrap();
        assert!(!doc
            .data
            .schema
            .types
            .iter()
            .any(|t| t.name.as_deref() == Some("Mutation")));
    }

    #[test]
    fn unknown_operation_fails() {
        let model = cyclic_schema();
        assert!(build_sub_schema(&model, &[(RootKind::Query, "nope".to_string())]).is_err());
    }

    #[test]
    fn output_round_trips_as_introspection_json() {
        let model = cyclic_schema();
        let doc =
            build_sub_schema(&model, &[(RootKind::Query, "foo".to_string())]).unwrap();
        let json = serde_json::to_string(&doc).unwrap();
        let reparsed: IntrospectionDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(type_names(&reparsed), type_names(&doc));
    }
}
