//! Error taxonomy shared by every routegraph operation.
//!
//! All validation happens before any mutation, so a returned error never leaves a graph or
//! registry in a partially-updated state. Every failure is deterministic; retrying the same call
//! with the same arguments cannot succeed.

use thiserror::Error;

/// Errors produced by graph construction, mutation, lookup, and search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A structurally invalid argument: vertex count below 2, index out of range, self-loop
    /// insertion, or a negative/non-finite edge weight.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A name lookup missed: no vertex carries the given name.
    #[error("no vertex named {0:?}")]
    NodeNotFound(String),

    /// Registering a name that is already bound to a different vertex.
    #[error("name {name:?} is already registered to vertex {index}")]
    DuplicateName {
        /// The conflicting name.
        name: String,
        /// The vertex the name is already bound to.
        index: usize,
    },

    /// Registering a second name for a vertex that already has one.
    #[error("vertex {index} is already named {name:?}")]
    DuplicateIndex {
        /// The vertex that already carries a name.
        index: usize,
        /// The name it already carries.
        name: String,
    },

    /// No path exists between the requested endpoints.
    #[error("no path from vertex {start} to vertex {end}")]
    Unreachable {
        /// The query's start vertex.
        start: usize,
        /// The query's end vertex.
        end: usize,
    },
}

impl GraphError {
    /// Shorthand for building an [`GraphError::InvalidArgument`] from anything displayable.
    pub(crate) fn invalid(reason: impl ToString) -> Self {
        Self::InvalidArgument(reason.to_string())
    }
}
