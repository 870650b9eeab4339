//! Reduction of wrapped type references to their base type.

use crate::schema::model::{TypeKind, TypeRef};

/// A type reference with its LIST/NON_NULL wrapper layers peeled off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTypeRef {
    pub kind: TypeKind,
    pub name: Option<String>,
    /// True when any layer of the wrapper chain was a LIST.
    pub is_list: bool,
}

/// Reduce a possibly wrapped reference to (base kind, base name, is_list).
///
/// A LIST layer marks the result as a list for the rest of the chain;
/// NON_NULL layers are transparent. Wrapper chains are finite by
/// construction, so the recursion always terminates at the first layer
/// without an inner reference.
pub fn unwrap_type(type_ref: &TypeRef) -> ResolvedTypeRef {
    unwrap_inner(type_ref, false)
}

fn unwrap_inner(type_ref: &TypeRef, is_list: bool) -> ResolvedTypeRef {
    let is_list = is_list || type_ref.kind == TypeKind::List;

    match &type_ref.of_type {
        Some(inner) => unwrap_inner(inner, is_list),
        None => ResolvedTypeRef {
            kind: type_ref.kind,
            name: type_ref.name.clone(),
            is_list,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(kind: TypeKind, name: &str) -> TypeRef {
        TypeRef {
            kind,
            name: Some(name.to_string()),
            of_type: None,
        }
    }

    fn wrapped(kind: TypeKind, inner: TypeRef) -> TypeRef {
        TypeRef {
            kind,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    #[test]
    fn bare_scalar_is_not_a_list() {
        let resolved = unwrap_type(&named(TypeKind::Scalar, "Int"));
        assert_eq!(resolved.kind, TypeKind::Scalar);
        assert_eq!(resolved.name.as_deref(), Some("Int"));
        assert!(!resolved.is_list);
    }

    #[test]
    fn list_of_non_null_scalar() {
        let type_ref = wrapped(
            TypeKind::List,
            wrapped(TypeKind::NonNull, named(TypeKind::Scalar, "Int")),
        );
        let resolved = unwrap_type(&type_ref);
        assert_eq!(resolved.kind, TypeKind::Scalar);
        assert_eq!(resolved.name.as_deref(), Some("Int"));
        assert!(resolved.is_list);
    }

    #[test]
    fn non_null_alone_does_not_make_a_list() {
        let type_ref = wrapped(TypeKind::NonNull, named(TypeKind::Scalar, "String"));
        let resolved = unwrap_type(&type_ref);
        assert_eq!(resolved.kind, TypeKind::Scalar);
        assert_eq!(resolved.name.as_deref(), Some("String"));
        assert!(!resolved.is_list);
    }

    #[test]
    fn non_null_list_of_non_null_object() {
        let type_ref = wrapped(
            TypeKind::NonNull,
            wrapped(
                TypeKind::List,
                wrapped(TypeKind::NonNull, named(TypeKind::Object, "User")),
            ),
        );
        let resolved = unwrap_type(&type_ref);
        assert_eq!(resolved.kind, TypeKind::Object);
        assert_eq!(resolved.name.as_deref(), Some("User"));
        assert!(resolved.is_list);
    }
}
