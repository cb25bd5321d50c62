//! Bidirectional vertex index ↔ name registry.
//!
//! The original formulation of this lookup is a single index→name table searched linearly by
//! value whenever a name has to be resolved. We instead keep two synchronized maps under one
//! invariant-enforcing type, so both directions resolve in O(1).

use std::collections::HashMap;

use crate::error::GraphError;

/// Bijective mapping between stable vertex indices and optional human-readable names.
///
/// Invariant: `index_to_name` and `name_to_index` are exact mirrors of each other — no two
/// vertices share a name, and no vertex carries two names. Both maps are only ever written
/// through [`VertexRegistry::register`], which checks the invariant first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexRegistry {
    /// Forward direction: vertex index to its registered name.
    index_to_name: HashMap<usize, String>,
    /// Reverse direction: registered name back to its vertex index.
    name_to_index: HashMap<String, usize>,
}

impl VertexRegistry {
    /// Creates an empty registry. Graphs with no named vertices are valid and simply never
    /// register anything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateName`] if the name is already bound to a different index,
    /// or [`GraphError::DuplicateIndex`] if the index already carries a name. Re-registering the
    /// identical `(index, name)` pair is a no-op.
    pub fn register(&mut self, index: usize, name: impl Into<String>) -> Result<(), GraphError> {
        let name = name.into();

        if let Some(&existing) = self.name_to_index.get(&name) {
            if existing == index {
                return Ok(());
            }
            return Err(GraphError::DuplicateName { name, index: existing });
        }
        if let Some(existing) = self.index_to_name.get(&index) {
            return Err(GraphError::DuplicateIndex { index, name: existing.clone() });
        }

        self.index_to_name.insert(index, name.clone());
        self.name_to_index.insert(name, index);
        Ok(())
    }

    /// Resolves a name to its vertex index.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if no vertex carries `name`.
    pub fn name_to_index(&self, name: &str) -> Result<usize, GraphError> {
        self.name_to_index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(name.to_owned()))
    }

    /// Resolves a vertex index to its registered name, falling back to the index's decimal string
    /// when the vertex is unnamed.
    #[must_use]
    pub fn index_to_name(&self, index: usize) -> String {
        self.index_to_name
            .get(&index)
            .map_or_else(|| index.to_string(), Clone::clone)
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index_to_name.len()
    }

    /// Whether any name has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index_to_name.is_empty()
    }
}
