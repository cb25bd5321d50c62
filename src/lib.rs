#![deny(
    // Overly strict on purpose: less a promise that everything is perfect, more a mechanism to
    // force inline allows wherever we think a lint is wrong, so those spots are easy to audit.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! # routegraph – weighted undirected graphs with shortest-route queries
//!
//! routegraph models a small, dense, undirected road-map-style graph and answers single-pair
//! shortest-path queries over it with Dijkstra's algorithm.
//!
//! ## Query pipeline
//! 1. Graph construction – build a [`WeightedGraph`] by hand
//!    ([`WeightedGraph::new`]/[`WeightedGraph::with_names`] plus
//!    [`add_edge`](WeightedGraph::add_edge)), or let [`random`] flip a coin per vertex pair and
//!    produce one for you.
//! 2. Naming (optional) – attach unique human-readable names to vertex indices; lookups resolve in
//!    both directions through the embedded [`VertexRegistry`].
//! 3. Search ([`shortest_path`]) – run Dijkstra over the adjacency matrix and reconstruct the
//!    ordered vertex sequence from the predecessor array, returned as a [`Route`].
//!
//! The search is a pure function of the graph and the two endpoints: no state is kept between
//! calls, and the graph is never mutated by a query. Disconnected endpoints are reported as an
//! explicit [`GraphError::Unreachable`] rather than a degenerate one-vertex route.
//!
//! Rendering, input handling, and any other presentation concern live strictly outside this crate;
//! the bundled binary is one such consumer.

pub mod error;
pub mod graph;
pub mod logging;
pub mod random;
pub mod registry;
pub mod shortest_path;

pub use error::GraphError;
pub use graph::WeightedGraph;
pub use random::RandomGraphGenerator;
pub use registry::VertexRegistry;
pub use shortest_path::{
    shortest_path,
    shortest_path_named,
    shortest_path_with,
    Route,
    SearchStrategy,
};
