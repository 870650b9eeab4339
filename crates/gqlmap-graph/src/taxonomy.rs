//! Structural entity kinds and their relationship labels.
//!
//! Every child category maps to a (forward, inverse) label pair. Edges are
//! materialized in the inverse (child→parent) direction; the forward edge is
//! only created when a bidirectional pair is explicitly requested, since
//! symmetric pairs put cycles on every root-to-leaf walk.

/// Relationship labels persisted in the graph store.
///
/// Pairing convention: if `(a)-[:OF_TYPE]->(b)` then `(b)-[:IS_TYPE_FOR]->(a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    HasField,
    IsFieldOf,
    HasArg,
    IsArgOf,
    HasInputField,
    IsInputFieldOf,
    HasPossibleType,
    IsPossibleTypeOf,
    HasInterface,
    IsInterfaceFor,
    OfType,
    IsTypeFor,
    IsListOf,
    IsItemFromList,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::HasField => "HAS_FIELD",
            Relationship::IsFieldOf => "IS_FIELD_OF",
            Relationship::HasArg => "HAS_ARG",
            Relationship::IsArgOf => "IS_ARG_OF",
            Relationship::HasInputField => "HAS_INPUT_FIELD",
            Relationship::IsInputFieldOf => "IS_INPUT_FIELD_OF",
            Relationship::HasPossibleType => "HAS_POSSIBLE_TYPE",
            Relationship::IsPossibleTypeOf => "IS_POSSIBLE_TYPE_OF",
            Relationship::HasInterface => "HAS_INTERFACE",
            Relationship::IsInterfaceFor => "IS_INTERFACE_FOR",
            Relationship::OfType => "OF_TYPE",
            Relationship::IsTypeFor => "IS_TYPE_FOR",
            Relationship::IsListOf => "IS_LIST_OF",
            Relationship::IsItemFromList => "IS_ITEM_FROM_LIST",
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural kind of a child entity being wired under a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Field,
    Arg,
    InputField,
    PossibleType,
    Interface,
    Type,
    List,
}

impl EntityKind {
    /// Node label for occurrence entities of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Field => "FIELD",
            EntityKind::Arg => "ARG",
            EntityKind::InputField => "INPUT_FIELD",
            EntityKind::PossibleType => "POSSIBLE_TYPE",
            EntityKind::Interface => "INTERFACE",
            EntityKind::Type => "TYPE",
            EntityKind::List => "LIST",
        }
    }

    /// The (forward, inverse) relationship label pair for this kind.
    pub fn relationship_pair(&self) -> (Relationship, Relationship) {
        match self {
            EntityKind::Field => (Relationship::HasField, Relationship::IsFieldOf),
            EntityKind::Arg => (Relationship::HasArg, Relationship::IsArgOf),
            EntityKind::InputField => (Relationship::HasInputField, Relationship::IsInputFieldOf),
            EntityKind::PossibleType => {
                (Relationship::HasPossibleType, Relationship::IsPossibleTypeOf)
            }
            EntityKind::Interface => (Relationship::HasInterface, Relationship::IsInterfaceFor),
            EntityKind::Type => (Relationship::OfType, Relationship::IsTypeFor),
            EntityKind::List => (Relationship::IsListOf, Relationship::IsItemFromList),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_distinct_label_pair() {
        let kinds = [
            EntityKind::Field,
            EntityKind::Arg,
            EntityKind::InputField,
            EntityKind::PossibleType,
            EntityKind::Interface,
            EntityKind::Type,
            EntityKind::List,
        ];
        let mut seen = std::collections::HashSet::new();
        for kind in kinds {
            let (forward, inverse) = kind.relationship_pair();
            assert_ne!(forward, inverse);
            assert!(seen.insert(forward.as_str()));
            assert!(seen.insert(inverse.as_str()));
        }
    }

    #[test]
    fn type_pair_matches_store_convention() {
        let (forward, inverse) = EntityKind::Type.relationship_pair();
        assert_eq!(forward.as_str(), "OF_TYPE");
        assert_eq!(inverse.as_str(), "IS_TYPE_FOR");
    }

    #[test]
    fn list_pair_matches_store_convention() {
        let (forward, inverse) = EntityKind::List.relationship_pair();
        assert_eq!(forward.as_str(), "IS_LIST_OF");
        assert_eq!(inverse.as_str(), "IS_ITEM_FROM_LIST");
    }
}
