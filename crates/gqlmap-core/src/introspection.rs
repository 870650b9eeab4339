//! Introspection document retrieval and persistence.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::{CoreError, CoreResult};
use crate::schema::model::IntrospectionDocument;

/// The standard full introspection query, deprecated members included.
pub const INTROSPECTION_QUERY: &str = "query IntrospectionQuery { __schema { queryType { name } mutationType { name } subscriptionType { name } types { ...FullType } directives { name description locations args { ...InputValue } } } } fragment FullType on __Type { kind name description fields(includeDeprecated: true) { name description args { ...InputValue } type { ...TypeRef } isDeprecated deprecationReason } inputFields { ...InputValue } interfaces { ...TypeRef } enumValues(includeDeprecated: true) { name description isDeprecated deprecationReason } possibleTypes { ...TypeRef } } fragment InputValue on __InputValue { name description type { ...TypeRef } defaultValue } fragment TypeRef on __Type { kind name ofType { kind name ofType { kind name ofType { kind name ofType { kind name ofType { kind name ofType { kind name ofType { kind name } } } } } } } }";

#[derive(Serialize)]
struct IntrospectionRequest {
    #[serde(rename = "operationName")]
    operation_name: &'static str,
    query: &'static str,
}

/// POST the introspection query to a GraphQL endpoint and decode the result.
pub async fn fetch_introspection(url: &str) -> CoreResult<IntrospectionDocument> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .unwrap_or_default();

    info!(url, "Running introspection query");

    let response = client
        .post(url)
        .json(&IntrospectionRequest {
            operation_name: "IntrospectionQuery",
            query: INTROSPECTION_QUERY,
        })
        .send()
        .await?;

    let body: serde_json::Value = response.json().await?;
    decode_document(body)
}

/// Decode a raw JSON value, verifying the `data.__schema` shape first so a
/// GraphQL error payload surfaces as a shape error instead of a serde trace.
pub fn decode_document(body: serde_json::Value) -> CoreResult<IntrospectionDocument> {
    if body.pointer("/data/__schema").is_none() {
        return Err(CoreError::shape("missing data.__schema"));
    }
    Ok(serde_json::from_value(body)?)
}

/// Load an introspection document from a JSON file.
pub fn load_document(path: &Path) -> CoreResult<IntrospectionDocument> {
    let raw = std::fs::read_to_string(path)?;
    decode_document(serde_json::from_str(&raw)?)
}

/// Save an introspection document as JSON.
pub fn save_document(path: &Path, document: &IntrospectionDocument) -> CoreResult<()> {
    let raw = serde_json::to_string(document)?;
    std::fs::write(path, raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_is_a_shape_error() {
        let body = serde_json::json!({ "errors": [{ "message": "introspection disabled" }] });
        let err = decode_document(body).unwrap_err();
        assert!(matches!(err, CoreError::SchemaShape(_)));
    }

    #[test]
    fn minimal_schema_decodes() {
        let body = serde_json::json!({
            "data": { "__schema": { "queryType": { "name": "Query" }, "types": [] } }
        });
        let doc = decode_document(body).unwrap();
        assert!(doc.data.schema.types.is_empty());
    }
}
