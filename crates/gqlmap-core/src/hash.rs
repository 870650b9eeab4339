//! Content hashing for idempotent change detection.
//!
//! The hash covers an entity's own scalar properties only, never its nested
//! children, so editing a field does not invalidate its parent type's hash.
//! It is a cheap idempotency token, not an integrity guarantee.

use sha2::{Digest, Sha256};

use crate::schema::model::{FieldDescriptor, InputValueDescriptor, TypeDescriptor};

/// Entities that can render their own scalar properties for hashing.
pub trait ScalarProps {
    /// Scalar properties in a stable order. Absent values still contribute
    /// their key so that setting a property to the empty string and leaving
    /// it unset hash differently.
    fn scalar_properties(&self) -> Vec<(&'static str, Option<String>)>;
}

impl ScalarProps for TypeDescriptor {
    fn scalar_properties(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
        ]
    }
}

impl ScalarProps for FieldDescriptor {
    fn scalar_properties(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("name", Some(self.name.clone())),
            ("description", self.description.clone()),
            ("isDeprecated", Some(self.is_deprecated.to_string())),
            ("deprecationReason", self.deprecation_reason.clone()),
        ]
    }
}

impl ScalarProps for InputValueDescriptor {
    fn scalar_properties(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("name", Some(self.name.clone())),
            ("description", self.description.clone()),
            ("defaultValue", self.default_value.clone()),
        ]
    }
}

/// Digest a kind label plus scalar properties into a lowercase hex token.
pub fn hash_properties(kind: &str, props: &[(&'static str, Option<String>)]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(kind.as_bytes());
    for (key, value) in props {
        hasher.update(b"|");
        hasher.update(key.as_bytes());
        if let Some(v) = value {
            hasher.update(b"=");
            hasher.update(v.as_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}

/// Content hash of a top-level type definition.
pub fn type_hash(descriptor: &TypeDescriptor) -> String {
    hash_properties(descriptor.kind.as_str(), &descriptor.scalar_properties())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::model::TypeKind;

    fn object(name: &str, description: Option<&str>) -> TypeDescriptor {
        TypeDescriptor {
            kind: TypeKind::Object,
            name: Some(name.to_string()),
            description: description.map(String::from),
            fields: None,
            input_fields: None,
            interfaces: None,
            enum_values: None,
            possible_types: None,
        }
    }

    #[test]
    fn identical_scalar_content_hashes_identically() {
        let a = object("User", Some("a user"));
        let b = object("User", Some("a user"));
        assert_eq!(type_hash(&a), type_hash(&b));
    }

    #[test]
    fn description_change_changes_hash() {
        let a = object("User", Some("a user"));
        let b = object("User", Some("an account"));
        assert_ne!(type_hash(&a), type_hash(&b));
    }

    #[test]
    fn absent_and_empty_description_hash_differently() {
        let absent = object("User", None);
        let empty = object("User", Some(""));
        assert_ne!(type_hash(&absent), type_hash(&empty));
    }

    #[test]
    fn nested_children_do_not_affect_hash() {
        let bare = object("User", None);
        let mut with_fields = object("User", None);
        with_fields.fields = Some(vec![FieldDescriptor {
            name: "id".to_string(),
            description: None,
            args: Vec::new(),
            type_ref: crate::schema::model::TypeRef {
                kind: TypeKind::Scalar,
                name: Some("ID".to_string()),
                of_type: None,
            },
            is_deprecated: false,
            deprecation_reason: None,
        }]);
        assert_eq!(type_hash(&bare), type_hash(&with_fields));
    }

    #[test]
    fn kind_label_participates_in_hash() {
        let field_props = vec![("name", Some("id".to_string()))];
        assert_ne!(
            hash_properties("FIELD", &field_props),
            hash_properties("ARG", &field_props)
        );
    }
}
