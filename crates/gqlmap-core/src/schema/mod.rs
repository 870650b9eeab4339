//! In-memory model of a loaded introspection schema.
//!
//! A [`SchemaModel`] owns the parsed document and two indices built once at
//! construction: type name → position, and (root kind, field name) →
//! position within that root object's field list. The schema is immutable
//! after load, so the indices are never rebuilt.

pub mod model;
pub mod unwrap;

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use model::{FieldDescriptor, IntrospectionDocument, RootKind, SchemaData, TypeDescriptor};

/// A loaded schema with its lookup indices.
#[derive(Debug, Clone)]
pub struct SchemaModel {
    data: SchemaData,
    type_index: HashMap<String, usize>,
    operation_index: HashMap<RootKind, HashMap<String, usize>>,
}

impl SchemaModel {
    /// Build the model and both indices from a parsed `__schema` payload.
    pub fn new(data: SchemaData) -> Self {
        let mut type_index = HashMap::new();
        for (position, descriptor) in data.types.iter().enumerate() {
            if let Some(name) = &descriptor.name {
                type_index.insert(name.clone(), position);
            }
        }

        let mut operation_index: HashMap<RootKind, HashMap<String, usize>> = HashMap::new();
        for root in RootKind::ALL {
            let root_name = root_object_name(&data, root);
            let Some(&position) = type_index.get(root_name) else {
                continue;
            };
            let Some(fields) = &data.types[position].fields else {
                continue;
            };
            let by_name = fields
                .iter()
                .enumerate()
                .map(|(i, field)| (field.name.clone(), i))
                .collect();
            operation_index.insert(root, by_name);
        }

        Self {
            data,
            type_index,
            operation_index,
        }
    }

    pub fn from_document(document: IntrospectionDocument) -> Self {
        Self::new(document.data.schema)
    }

    /// The underlying `__schema` payload, header included.
    pub fn data(&self) -> &SchemaData {
        &self.data
    }

    pub fn types(&self) -> &[TypeDescriptor] {
        &self.data.types
    }

    pub fn type_by_name(&self, name: &str) -> Option<&TypeDescriptor> {
        self.type_index.get(name).map(|&i| &self.data.types[i])
    }

    /// Look up a type by a name taken from this same document.
    ///
    /// Panics on a miss: every caller passes names collected from the loaded
    /// document, so a miss is a bug in the traversal, not bad input.
    pub fn require_type(&self, name: &str) -> &TypeDescriptor {
        self.type_by_name(name)
            .unwrap_or_else(|| panic!("type {name:?} not present in loaded schema"))
    }

    /// The root object backing a root kind, if the schema defines one.
    pub fn root_object(&self, root: RootKind) -> Option<&TypeDescriptor> {
        self.type_by_name(root_object_name(&self.data, root))
    }

    /// Resolve an operation field by root kind and field name.
    pub fn operation(&self, root: RootKind, name: &str) -> CoreResult<&FieldDescriptor> {
        let not_found = || CoreError::OperationNotFound {
            root: root.to_string(),
            name: name.to_string(),
        };

        let position = *self
            .operation_index
            .get(&root)
            .and_then(|by_name| by_name.get(name))
            .ok_or_else(not_found)?;

        let root_object = self.root_object(root).ok_or_else(not_found)?;
        let fields = root_object.fields.as_deref().unwrap_or_default();
        fields.get(position).ok_or_else(not_found)
    }
}

/// Root object name from the schema header, falling back to convention.
fn root_object_name(data: &SchemaData, root: RootKind) -> &str {
    let header = match root {
        RootKind::Query => data.query_type.as_ref(),
        RootKind::Mutation => data.mutation_type.as_ref(),
        RootKind::Subscription => data.subscription_type.as_ref(),
    };
    header.map(|r| r.name.as_str()).unwrap_or(root.type_name())
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    /// Schema with a type cycle: Query.foo -> TypeA, TypeA.bar -> TypeB,
    /// TypeB.baz -> TypeA. Shared by the closure and expansion tests.
    pub fn cyclic_schema() -> SchemaModel {
        let json = serde_json::json!({
            "queryType": { "name": "Query" },
            "mutationType": null,
            "subscriptionType": null,
            "types": [
                {
                    "kind": "OBJECT", "name": "Query",
                    "fields": [
                        {
                            "name": "foo",
                            "args": [],
                            "type": { "kind": "OBJECT", "name": "TypeA", "ofType": null },
                            "isDeprecated": false
                        }
                    ]
                },
                {
                    "kind": "OBJECT", "name": "TypeA",
                    "fields": [
                        {
                            "name": "bar",
                            "args": [],
                            "type": { "kind": "OBJECT", "name": "TypeB", "ofType": null },
                            "isDeprecated": false
                        },
                        {
                            "name": "id",
                            "args": [],
                            "type": { "kind": "SCALAR", "name": "ID", "ofType": null },
                            "isDeprecated": false
                        }
                    ]
                },
                {
                    "kind": "OBJECT", "name": "TypeB",
                    "fields": [
                        {
                            "name": "baz",
                            "args": [],
                            "type": { "kind": "OBJECT", "name": "TypeA", "ofType": null },
                            "isDeprecated": false
                        }
                    ]
                },
                { "kind": "SCALAR", "name": "ID" }
            ]
        });
        let data: SchemaData = serde_json::from_value(json).unwrap();
        SchemaModel::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::cyclic_schema;
    use super::*;
    use model::TypeKind;

    #[test]
    fn type_index_resolves_positions() {
        let model = cyclic_schema();
        assert_eq!(model.require_type("TypeA").kind, TypeKind::Object);
        assert!(model.type_by_name("Missing").is_none());
    }

    #[test]
    fn operation_index_resolves_fields() {
        let model = cyclic_schema();
        let op = model.operation(RootKind::Query, "foo").unwrap();
        assert_eq!(op.name, "foo");
    }

    #[test]
    fn unknown_operation_is_an_error() {
        let model = cyclic_schema();
        let err = model.operation(RootKind::Query, "nope").unwrap_err();
        assert!(matches!(err, CoreError::OperationNotFound { .. }));
    }

    #[test]
    fn missing_root_kind_is_an_error_not_a_panic() {
        let model = cyclic_schema();
        assert!(model.operation(RootKind::Mutation, "foo").is_err());
    }

    #[test]
    #[should_panic(expected = "not present in loaded schema")]
    fn require_type_panics_on_internal_miss() {
        cyclic_schema().require_type("Missing");
    }
}
