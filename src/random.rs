//! Random graph generation for tests and demos.
//!
//! Every unordered vertex pair gets a fair coin flip; heads inserts an edge whose weight is an
//! integer drawn uniformly from 1..=10, widened to `f64`. Generated graphs carry no connectivity
//! guarantee — a query over one must be prepared for [`crate::GraphError::Unreachable`].
//!
//! Randomness is injectable: tests pass a seeded generator so specific topologies are
//! reproducible, instead of the implicit global random state this design replaces.

use rand::rngs::StdRng;
use rand::{
    Rng,
    SeedableRng,
};
use tracing::debug;

use crate::error::GraphError;
use crate::graph::WeightedGraph;

/// Probability that any given vertex pair is connected.
const EDGE_PROBABILITY: f64 = 0.5;
/// Inclusive integer bounds for generated edge weights.
const WEIGHT_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// Builds a fresh random graph from the supplied randomness source.
///
/// # Errors
///
/// Returns [`GraphError::InvalidArgument`] when `vertex_count < 2`.
pub fn generate_with<R: Rng>(rng: &mut R, vertex_count: usize) -> Result<WeightedGraph, GraphError> {
    let mut graph = WeightedGraph::new(vertex_count)?;
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(EDGE_PROBABILITY) {
                graph.add_edge(i, j, f64::from(rng.gen_range(WEIGHT_RANGE)))?;
            }
        }
    }
    debug!(vertex_count, edges = graph.edge_count(), "generated random graph");
    Ok(graph)
}

/// A reusable random-graph source wrapping its own RNG.
///
/// Successive [`generate`](RandomGraphGenerator::generate) calls advance the RNG, so one seeded
/// generator yields a reproducible *sequence* of graphs.
#[derive(Debug, Clone)]
pub struct RandomGraphGenerator {
    /// The owned randomness source.
    rng: StdRng,
}

impl RandomGraphGenerator {
    /// Creates a generator whose output is fully determined by `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Creates a generator seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Builds a fresh, independent random graph with `vertex_count` vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] when `vertex_count < 2`.
    pub fn generate(&mut self, vertex_count: usize) -> Result<WeightedGraph, GraphError> {
        generate_with(&mut self.rng, vertex_count)
    }
}

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn same_seed_reproduces_the_same_graph() {
        let first = RandomGraphGenerator::from_seed(42).generate(12).unwrap();
        let second = RandomGraphGenerator::from_seed(42).generate(12).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_disagree_eventually() {
        // With 45 pair flips the chance of two seeds colliding by accident is negligible.
        let first = RandomGraphGenerator::from_seed(1).generate(10).unwrap();
        let second = RandomGraphGenerator::from_seed(2).generate(10).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn generated_graphs_are_symmetric_without_self_loops() {
        let graph = RandomGraphGenerator::from_seed(7).generate(15).unwrap();

        for (i, j) in (0..graph.vertex_count()).tuple_combinations() {
            assert_eq!(graph.weight(i, j), graph.weight(j, i));
        }
        for v in 0..graph.vertex_count() {
            assert_eq!(graph.weight(v, v), None);
        }
    }

    #[test]
    fn weights_stay_within_the_advertised_range() {
        let graph = RandomGraphGenerator::from_seed(3).generate(20).unwrap();
        assert!(graph.edge_count() > 0);
        for (_, _, weight) in graph.edges() {
            assert!((1.0..=10.0).contains(&weight));
            assert!((weight.fract() - 0.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn degenerate_vertex_counts_are_rejected() {
        let mut generator = RandomGraphGenerator::from_seed(0);
        assert!(matches!(generator.generate(1), Err(GraphError::InvalidArgument(_))));
    }
}
