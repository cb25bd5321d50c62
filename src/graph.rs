//! The weighted undirected graph and its dense adjacency matrix.
//!
//! Cells hold `Option<OrderedFloat<f64>>` rather than a raw weight with `0.0` doubling as "no
//! edge": absence and a genuine zero-weight edge are distinct values. The matrix stays symmetric
//! by construction — [`WeightedGraph::add_edge`] is the only writer and always writes both
//! directions — and the diagonal is permanently `None` because self-loop insertion is rejected
//! up front.

use std::fmt::Write as _;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::error::GraphError;
use crate::registry::VertexRegistry;

/// An undirected graph over vertices `0..vertex_count` with non-negative finite edge weights.
///
/// The graph owns its adjacency matrix and an embedded [`VertexRegistry`]; the registry stays
/// empty unless names are registered, and every operation works on bare indices as well.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph {
    /// Number of vertices; fixed at construction, always at least 2.
    vertex_count: usize,
    /// Row-major `vertex_count × vertex_count` adjacency matrix. `None` means "no edge".
    matrix: Vec<Option<OrderedFloat<f64>>>,
    /// Optional vertex names; empty for purely index-addressed graphs.
    registry: VertexRegistry,
}

impl WeightedGraph {
    /// Creates a graph with `vertex_count` unnamed vertices and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] when `vertex_count < 2` — a graph that cannot hold
    /// a single edge is never useful to a caller.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count < 2 {
            return Err(GraphError::invalid(format!(
                "number of vertices must be at least 2, got {vertex_count}"
            )));
        }
        Ok(Self {
            vertex_count,
            matrix: vec![None; vertex_count * vertex_count],
            registry: VertexRegistry::new(),
        })
    }

    /// Creates a graph with one named vertex per entry of `names`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] when fewer than 2 names are supplied, or
    /// [`GraphError::DuplicateName`] when two entries collide.
    pub fn with_names<I, S>(names: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut graph = Self::new(names.len())?;
        for (index, name) in names.into_iter().enumerate() {
            graph.registry.register(index, name)?;
        }
        Ok(graph)
    }

    /// Registers `name` for an existing vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] when `index` is out of range, and the registry's
    /// duplicate errors on conflicts.
    pub fn register_name(&mut self, index: usize, name: impl Into<String>) -> Result<(), GraphError> {
        self.check_index(index)?;
        self.registry.register(index, name)
    }

    /// Inserts (or overwrites) the undirected edge `a – b` with the given weight.
    ///
    /// Both matrix directions are written in one call, so the symmetry invariant can never be
    /// observed broken. Re-inserting an existing pair overwrites the previous weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] when either endpoint is out of range, when
    /// `a == b` (self-loops are unsupported), or when the weight is negative or non-finite.
    /// Validation runs before any write.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: f64) -> Result<(), GraphError> {
        self.check_index(a)?;
        self.check_index(b)?;
        if a == b {
            return Err(GraphError::invalid(format!("self-loop on vertex {a} is not supported")));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::invalid(format!(
                "edge weight must be a non-negative finite number, got {weight}"
            )));
        }

        let cell = Some(OrderedFloat(weight));
        self.matrix[a * self.vertex_count + b] = cell;
        self.matrix[b * self.vertex_count + a] = cell;
        Ok(())
    }

    /// Name-resolving variant of [`WeightedGraph::add_edge`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] when either name is unregistered, then validates as
    /// [`WeightedGraph::add_edge`] does.
    pub fn add_edge_named(&mut self, a: &str, b: &str, weight: f64) -> Result<(), GraphError> {
        let a = self.registry.name_to_index(a)?;
        let b = self.registry.name_to_index(b)?;
        self.add_edge(a, b, weight)
    }

    /// Returns the weight of the edge `i – j`, or `None` when no such edge exists (including
    /// out-of-range probes and the diagonal).
    #[must_use]
    pub fn weight(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.vertex_count || j >= self.vertex_count {
            return None;
        }
        self.matrix[i * self.vertex_count + j].map(OrderedFloat::into_inner)
    }

    /// Iterates the neighbors of `v` as `(neighbor, weight)` pairs in increasing index order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.vertex_count).filter_map(move |u| self.weight(v, u).map(|w| (u, w)))
    }

    /// Iterates every edge exactly once as `(i, j, weight)` with `i < j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.vertex_count)
            .tuple_combinations()
            .filter_map(move |(i, j)| self.weight(i, j).map(|w| (i, j, w)))
    }

    /// Number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Resolves a vertex name to its index.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if no vertex carries `name`.
    pub fn name_to_index(&self, name: &str) -> Result<usize, GraphError> {
        self.registry.name_to_index(name)
    }

    /// Resolves a vertex index to its name, falling back to the index's decimal string for
    /// unnamed vertices.
    #[must_use]
    pub fn index_to_name(&self, index: usize) -> String {
        self.registry.index_to_name(index)
    }

    /// Renders the topology as an undirected Graphviz DOT document, labelling vertices with their
    /// names and edges with their weights.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::from("graph {\n");
        for v in 0..self.vertex_count {
            // writeln! into a String cannot fail
            let _ = writeln!(out, "    {v} [label={:?}];", self.index_to_name(v));
        }
        for (i, j, weight) in self.edges() {
            let _ = writeln!(out, "    {i} -- {j} [label=\"{weight}\"];");
        }
        out.push_str("}\n");
        out
    }

    /// Validates that `index` addresses a vertex of this graph.
    pub(crate) fn check_index(&self, index: usize) -> Result<(), GraphError> {
        if index >= self.vertex_count {
            return Err(GraphError::invalid(format!(
                "vertex index {index} is out of range for a graph with {} vertices",
                self.vertex_count
            )));
        }
        Ok(())
    }
}
