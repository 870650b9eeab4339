//! # gqlmap core
//!
//! Schema model and analysis for GraphQL attack-surface mapping: parses an
//! introspection document, carves minimal sub-schemas for an operation set,
//! and synthesizes fully expanded request bodies without recursing through
//! cyclic type references.

pub mod error;
pub mod expand;
pub mod hash;
pub mod introspection;
pub mod schema;
pub mod subschema;

pub use error::{CoreError, CoreResult};
pub use expand::{expand_operation, ExpandOptions};
pub use hash::{hash_properties, type_hash, ScalarProps};
pub use schema::model::{
    FieldDescriptor, IntrospectionDocument, RootKind, TypeDescriptor, TypeKind, TypeRef,
};
pub use schema::unwrap::{unwrap_type, ResolvedTypeRef};
pub use schema::SchemaModel;
pub use subschema::build_sub_schema;
