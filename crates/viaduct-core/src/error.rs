//! Error types for viaduct-core operations.

use thiserror::Error;

use crate::identifier::Id;

/// Structural errors raised by diagram graph mutations.
///
/// These are fatal to the operation that raised them and propagate to the
/// caller; the graph is left unchanged by the failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The id is already used by a node or an edge in this graph.
    #[error("duplicate element id `{0}`")]
    DuplicateId(Id),

    /// An edge referenced a node that does not exist.
    #[error("edge `{edge}` references missing node `{node}`")]
    DanglingEndpoint { edge: Id, node: Id },

    /// A removal or lookup named an id that is not in the graph.
    #[error("no element with id `{0}`")]
    MissingElement(Id),
}

/// Errors raised by element registry lookups and tag parsing.
///
/// An unknown type tag signals a configuration or version mismatch between
/// the document and the registry, not a user mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown element type `{0}`")]
    UnknownType(String),
}
