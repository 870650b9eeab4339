//! Serde model of a GraphQL introspection document.
//!
//! Shapes mirror the wire format of a standard introspection response so a
//! document can be loaded, carved down and written back without losing its
//! structure.

use serde::{Deserialize, Serialize};

/// Kind discriminator carried by every type and type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    /// Stable wire-format spelling, also used as a node label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::List => "LIST",
            TypeKind::NonNull => "NON_NULL",
        }
    }

    /// LIST and NON_NULL wrap an inner reference instead of naming a type.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, TypeKind::List | TypeKind::NonNull)
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root operation object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    Query,
    Mutation,
    Subscription,
}

impl RootKind {
    pub const ALL: [RootKind; 3] = [RootKind::Query, RootKind::Mutation, RootKind::Subscription];

    /// Name of the conventional root object ("Query", "Mutation", "Subscription").
    pub fn type_name(&self) -> &'static str {
        match self {
            RootKind::Query => "Query",
            RootKind::Mutation => "Mutation",
            RootKind::Subscription => "Subscription",
        }
    }

    /// Operation keyword as it appears in a request body.
    pub fn keyword(&self) -> &'static str {
        match self {
            RootKind::Query => "query",
            RootKind::Mutation => "mutation",
            RootKind::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for RootKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A possibly wrapped reference to a type.
///
/// Wrapper layers (LIST, NON_NULL) carry `of_type` and no name; the terminal
/// layer names a concrete type and has no `of_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<TypeRef>>,
}

/// A top-level type definition from the introspected schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<FieldDescriptor>>,
    #[serde(default)]
    pub input_fields: Option<Vec<InputValueDescriptor>>,
    #[serde(default)]
    pub interfaces: Option<Vec<TypeRef>>,
    #[serde(default)]
    pub enum_values: Option<Vec<EnumValueDescriptor>>,
    #[serde(default)]
    pub possible_types: Option<Vec<TypeRef>>,
}

impl TypeDescriptor {
    /// Empty root object used when carving a sub-schema.
    pub fn empty_root(name: &str) -> Self {
        Self {
            kind: TypeKind::Object,
            name: Some(name.to_string()),
            description: None,
            fields: Some(Vec::new()),
            input_fields: None,
            interfaces: Some(Vec::new()),
            enum_values: None,
            possible_types: None,
        }
    }
}

/// A field of an OBJECT or INTERFACE type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub args: Vec<InputValueDescriptor>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// A field argument or an INPUT_OBJECT input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValueDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub default_value: Option<String>,
}

/// A value of an ENUM type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValueDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// Reference to a root object, as found in the schema header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootTypeRef {
    pub name: String,
}

/// The `__schema` payload of an introspection response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaData {
    #[serde(default)]
    pub query_type: Option<RootTypeRef>,
    #[serde(default)]
    pub mutation_type: Option<RootTypeRef>,
    #[serde(default)]
    pub subscription_type: Option<RootTypeRef>,
    pub types: Vec<TypeDescriptor>,
    #[serde(default)]
    pub directives: Option<serde_json::Value>,
}

/// Full introspection response as sent by a GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntrospectionDocument {
    pub data: IntrospectionData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: SchemaData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_kind_round_trips_wire_spelling() {
        let kind: TypeKind = serde_json::from_str("\"INPUT_OBJECT\"").unwrap();
        assert_eq!(kind, TypeKind::InputObject);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"INPUT_OBJECT\"");
    }

    #[test]
    fn parses_wrapped_type_ref() {
        let json = serde_json::json!({
            "kind": "NON_NULL",
            "name": null,
            "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null }
        });
        let type_ref: TypeRef = serde_json::from_value(json).unwrap();
        assert_eq!(type_ref.kind, TypeKind::NonNull);
        assert!(type_ref.name.is_none());
        let inner = type_ref.of_type.expect("inner layer");
        assert_eq!(inner.name.as_deref(), Some("ID"));
    }

    #[test]
    fn parses_minimal_document() {
        let json = serde_json::json!({
            "data": { "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": null,
                "subscriptionType": null,
                "types": [{
                    "kind": "OBJECT",
                    "name": "Query",
                    "description": null,
                    "fields": [],
                    "inputFields": null,
                    "interfaces": [],
                    "enumValues": null,
                    "possibleTypes": null
                }]
            }}
        });
        let doc: IntrospectionDocument = serde_json::from_value(json).unwrap();
        assert_eq!(doc.data.schema.types.len(), 1);
        assert_eq!(doc.data.schema.query_type.unwrap().name, "Query");
    }
}
