//! Request body expansion.
//!
//! Synthesizes a maximally expanded selection set for one operation. Type
//! references in a schema form cycles, so expansion keeps a visited set of
//! content hashes; a type already seen contributes no nested block.

use std::collections::HashSet;

use tracing::debug;

use crate::error::CoreResult;
use crate::hash::type_hash;
use crate::schema::model::{RootKind, TypeDescriptor, TypeKind, TypeRef};
use crate::schema::unwrap::unwrap_type;
use crate::schema::SchemaModel;

/// Options controlling the expansion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandOptions {
    /// Fork the visited set per sibling branch. A type may then reappear in
    /// sibling subtrees while repetition along any single root-to-leaf path
    /// stays forbidden. The shared default is more conservative and yields a
    /// smaller body.
    pub deep_copy_hashes: bool,
}

/// Expand one operation into a whitespace-joined request body.
pub fn expand_operation(
    model: &SchemaModel,
    root: RootKind,
    name: &str,
    options: &ExpandOptions,
) -> CoreResult<String> {
    let operation = model.operation(root, name)?;

    let mut tokens: Vec<String> = vec![
        root.keyword().to_string(),
        "TestOperation".to_string(),
        "{".to_string(),
    ];

    let mut visited = HashSet::new();
    tokens.extend(expand_field(
        model,
        &operation.name,
        &operation.type_ref,
        &mut visited,
        options,
    ));

    tokens.push("}".to_string());
    Ok(tokens.join(" "))
}

/// Expand a single field (or the operation field itself).
///
/// INTERFACE and INPUT_OBJECT targets are never expanded; SCALAR and ENUM
/// fields contribute only their own name. A field whose nested block comes
/// back empty is omitted entirely.
fn expand_field(
    model: &SchemaModel,
    name: &str,
    type_ref: &TypeRef,
    visited: &mut HashSet<String>,
    options: &ExpandOptions,
) -> Vec<String> {
    let resolved = unwrap_type(type_ref);

    if matches!(resolved.kind, TypeKind::Interface | TypeKind::InputObject) {
        return Vec::new();
    }

    if matches!(resolved.kind, TypeKind::Scalar | TypeKind::Enum) {
        return vec![name.to_string()];
    }

    let Some(type_name) = &resolved.name else {
        return Vec::new();
    };
    let descriptor = model.require_type(type_name);

    let body = expand_object(model, descriptor, visited, options);
    if body.is_empty() {
        return Vec::new();
    }

    let mut tokens = vec![name.to_string()];
    tokens.extend(body);
    tokens
}

/// Expand a type into a braced selection block, or nothing when the type was
/// already expanded on this path or every child came back empty.
fn expand_object(
    model: &SchemaModel,
    descriptor: &TypeDescriptor,
    visited: &mut HashSet<String>,
    options: &ExpandOptions,
) -> Vec<String> {
    if !visited.insert(type_hash(descriptor)) {
        return Vec::new();
    }

    let mut fields_body: Vec<String> = Vec::new();

    if descriptor.kind == TypeKind::Union {
        // One inline fragment per possible type, keeping only non-empty ones.
        for member in descriptor.possible_types.as_deref().unwrap_or_default() {
            let Some(member_name) = &member.name else {
                continue;
            };
            let member_descriptor = model.require_type(member_name);
            let body = fork(visited, options, |v| {
                expand_object(model, member_descriptor, v, options)
            });
            if !body.is_empty() {
                fields_body.push(format!("... on {member_name}"));
                fields_body.extend(body);
            }
        }
    } else {
        for field in descriptor.fields.as_deref().unwrap_or_default() {
            if field.is_deprecated {
                continue;
            }
            let body = fork(visited, options, |v| {
                expand_field(model, &field.name, &field.type_ref, v, options)
            });
            fields_body.extend(body);
        }
    }

    if fields_body.is_empty() {
        debug!(name = descriptor.name.as_deref().unwrap_or("?"), "Empty expansion block");
        return Vec::new();
    }

    let mut tokens = vec!["{".to_string()];
    tokens.extend(fields_body);
    tokens.push("}".to_string());
    tokens
}

/// Run `f` against a per-sibling fork of the visited set, or the shared set.
fn fork<F>(visited: &mut HashSet<String>, options: &ExpandOptions, f: F) -> Vec<String>
where
    F: FnOnce(&mut HashSet<String>) -> Vec<String>,
{
    if options.deep_copy_hashes {
        let mut forked = visited.clone();
        f(&mut forked)
    } else {
        f(visited)
    }
}
