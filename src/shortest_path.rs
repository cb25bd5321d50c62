//! Single-pair shortest-path search over a [`WeightedGraph`].
//!
//! Every query runs Dijkstra's algorithm from scratch: three working arrays sized by the vertex
//! count, a read-only borrow of the graph, and nothing cached between calls. Two interchangeable
//! strategies compute the same distances; [`SearchStrategy::DenseScan`] is the default because
//! the target graphs are dense and small (tens of vertices), where the O(V²) scan beats heap
//! bookkeeping.

use ordered_float::OrderedFloat;
use serde::Serialize;
use tracing::{
    debug,
    instrument,
};

use crate::error::GraphError;
use crate::graph::WeightedGraph;

/// An ordered start→end vertex sequence together with its total weight.
///
/// Consecutive vertices are always connected by an edge of the queried graph. A route from a
/// vertex to itself is the single-element sequence with weight zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Vertex indices from start to end, inclusive.
    pub vertices: Vec<usize>,
    /// Sum of the weights of the traversed edges.
    pub total_weight: f64,
}

impl Route {
    /// Renders the route through the graph's vertex names, e.g. `"Beirut -> Sidon -> Naqoura"`.
    #[must_use]
    pub fn display_named(&self, graph: &WeightedGraph) -> String {
        self.vertices
            .iter()
            .map(|&v| graph.index_to_name(v))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Selects how the next closest unvisited vertex is found during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Linear scan over all vertices per round: O(V²) total, no allocation churn, and the right
    /// fit for the dense adjacency matrix underneath.
    #[default]
    DenseScan,
    /// Lazy-deletion binary heap: O(E log V), worthwhile once graphs grow sparse and large.
    BinaryHeap,
}

/// Computed distance and predecessor arrays for one source vertex.
struct SearchArrays {
    /// Tentative (then final) distance from the source per vertex; `+inf` where unreachable.
    distance: Vec<OrderedFloat<f64>>,
    /// The prior vertex on the shortest known route from the source, `None` for the source
    /// itself and for unreachable vertices.
    predecessor: Vec<Option<usize>>,
}

/// Computes the shortest route from `start` to `end` using the default strategy.
///
/// # Errors
///
/// Returns [`GraphError::InvalidArgument`] when either endpoint is out of range (checked before
/// any computation), or [`GraphError::Unreachable`] when no path connects the endpoints.
pub fn shortest_path(graph: &WeightedGraph, start: usize, end: usize) -> Result<Route, GraphError> {
    shortest_path_with(graph, start, end, SearchStrategy::default())
}

/// Name-resolving variant of [`shortest_path`].
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] when either name is unregistered, plus everything
/// [`shortest_path`] can return.
pub fn shortest_path_named(graph: &WeightedGraph, start: &str, end: &str) -> Result<Route, GraphError> {
    let start = graph.name_to_index(start)?;
    let end = graph.name_to_index(end)?;
    shortest_path(graph, start, end)
}

/// Computes the shortest route from `start` to `end` with an explicit [`SearchStrategy`].
///
/// # Errors
///
/// As [`shortest_path`].
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn shortest_path_with(
    graph: &WeightedGraph,
    start: usize,
    end: usize,
    strategy: SearchStrategy,
) -> Result<Route, GraphError> {
    graph.check_index(start)?;
    graph.check_index(end)?;

    if start == end {
        return Ok(Route { vertices: vec![start], total_weight: 0.0 });
    }

    let arrays = match strategy {
        SearchStrategy::DenseScan => dense_scan(graph, start),
        SearchStrategy::BinaryHeap => heap_search(graph, start),
    };

    let total = arrays.distance[end];
    if !total.is_finite() {
        debug!(start, end, "target not reached");
        return Err(GraphError::Unreachable { start, end });
    }

    // Walk the predecessor chain back from the target, then flip into start→end order. The
    // chain is acyclic and rooted at `start` whenever the target distance is finite.
    let mut vertices = vec![end];
    let mut current = end;
    while let Some(previous) = arrays.predecessor[current] {
        vertices.push(previous);
        current = previous;
    }
    vertices.reverse();
    debug_assert_eq!(vertices.first(), Some(&start));

    debug!(start, end, hops = vertices.len() - 1, total = total.into_inner(), "route found");
    Ok(Route { vertices, total_weight: total.into_inner() })
}

/// Allocates the per-query arrays with `distance[start]` already seeded to zero.
fn seed_arrays(vertex_count: usize, start: usize) -> SearchArrays {
    let mut distance = vec![OrderedFloat(f64::INFINITY); vertex_count];
    distance[start] = OrderedFloat(0.0);
    SearchArrays { distance, predecessor: vec![None; vertex_count] }
}

/// Dense Dijkstra: per round, a linear scan picks the unvisited vertex with the smallest finite
/// distance. Strict less-than keeps the first (lowest-index) minimum, and relaxation updates only
/// on strict improvement, so equal-cost routes keep the earlier predecessor.
fn dense_scan(graph: &WeightedGraph, start: usize) -> SearchArrays {
    let n = graph.vertex_count();
    let mut arrays = seed_arrays(n, start);
    let mut visited = vec![false; n];

    for _ in 0..n {
        let mut closest: Option<usize> = None;
        for v in 0..n {
            if !visited[v]
                && arrays.distance[v].is_finite()
                && closest.map_or(true, |u| arrays.distance[v] < arrays.distance[u])
            {
                closest = Some(v);
            }
        }
        // Every vertex still unvisited is unreachable from the source.
        let Some(u) = closest else { break };
        visited[u] = true;

        for (v, weight) in graph.neighbors(u) {
            if visited[v] {
                continue;
            }
            let candidate = arrays.distance[u] + weight;
            if candidate < arrays.distance[v] {
                arrays.distance[v] = candidate;
                arrays.predecessor[v] = Some(u);
            }
        }
    }
    arrays
}

/// Heap-based Dijkstra with lazy deletion: superseded queue entries are detected by comparing
/// against the current distance array and skipped.
fn heap_search(graph: &WeightedGraph, start: usize) -> SearchArrays {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    let mut arrays = seed_arrays(graph.vertex_count(), start);
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), start)));

    while let Some(Reverse((dist, u))) = heap.pop() {
        if dist > arrays.distance[u] {
            continue; // stale entry
        }
        for (v, weight) in graph.neighbors(u) {
            let candidate = dist + weight;
            if candidate < arrays.distance[v] {
                arrays.distance[v] = candidate;
                arrays.predecessor[v] = Some(u);
                heap.push(Reverse((candidate, v)));
            }
        }
    }
    arrays
}

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// 5-vertex graph where the cheapest 0→4 route threads 0,2,1,3,4 (weight 7) and the direct
    /// 0,1,3,4 alternative costs 8.
    fn sample_graph() -> WeightedGraph {
        let mut graph = WeightedGraph::new(5).unwrap();
        graph.add_edge(0, 1, 4.0).unwrap();
        graph.add_edge(0, 2, 1.0).unwrap();
        graph.add_edge(2, 1, 2.0).unwrap();
        graph.add_edge(1, 3, 1.0).unwrap();
        graph.add_edge(2, 3, 5.0).unwrap();
        graph.add_edge(3, 4, 3.0).unwrap();
        graph
    }

    #[rstest]
    #[case::dense(SearchStrategy::DenseScan)]
    #[case::heap(SearchStrategy::BinaryHeap)]
    fn finds_the_cheaper_indirect_route(#[case] strategy: SearchStrategy) {
        let graph = sample_graph();
        let route = shortest_path_with(&graph, 0, 4, strategy).unwrap();

        assert_eq!(route.vertices, vec![0, 2, 1, 3, 4]);
        assert!((route.total_weight - 7.0).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case::dense(SearchStrategy::DenseScan)]
    #[case::heap(SearchStrategy::BinaryHeap)]
    fn self_route_is_a_single_vertex(#[case] strategy: SearchStrategy) {
        let graph = sample_graph();
        let route = shortest_path_with(&graph, 3, 3, strategy).unwrap();

        assert_eq!(route.vertices, vec![3]);
        assert!((route.total_weight - 0.0).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case::dense(SearchStrategy::DenseScan)]
    #[case::heap(SearchStrategy::BinaryHeap)]
    fn isolated_target_is_unreachable(#[case] strategy: SearchStrategy) {
        // Vertex 5 has no edges at all.
        let mut graph = WeightedGraph::new(6).unwrap();
        graph.add_edge(0, 1, 4.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();

        assert_eq!(
            shortest_path_with(&graph, 0, 5, strategy),
            Err(GraphError::Unreachable { start: 0, end: 5 })
        );
    }

    #[test]
    fn out_of_range_endpoints_fail_before_searching() {
        let graph = sample_graph();
        assert!(matches!(shortest_path(&graph, 0, 9), Err(GraphError::InvalidArgument(_))));
        assert!(matches!(shortest_path(&graph, 9, 0), Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn zero_weight_edges_participate_in_routes() {
        let mut graph = WeightedGraph::new(3).unwrap();
        graph.add_edge(0, 1, 0.0).unwrap();
        graph.add_edge(1, 2, 2.0).unwrap();

        let route = shortest_path(&graph, 0, 2).unwrap();
        assert_eq!(route.vertices, vec![0, 1, 2]);
        assert!((route.total_weight - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn named_query_resolves_through_the_registry() {
        let mut graph = WeightedGraph::with_names(["Beirut", "Sidon", "Naqoura"]).unwrap();
        graph.add_edge_named("Beirut", "Sidon", 2.0).unwrap();
        graph.add_edge_named("Sidon", "Naqoura", 2.0).unwrap();

        let route = shortest_path_named(&graph, "Beirut", "Naqoura").unwrap();
        assert_eq!(route.display_named(&graph), "Beirut -> Sidon -> Naqoura");
        assert!((route.total_weight - 4.0).abs() < f64::EPSILON);

        assert!(matches!(
            shortest_path_named(&graph, "Beirut", "Unknown"),
            Err(GraphError::NodeNotFound(_))
        ));
    }

    #[test]
    fn equal_cost_tie_keeps_the_earlier_predecessor() {
        // Two routes 0→3 of identical weight 2: via 1 and via 2. The dense scan relaxes via the
        // lower-indexed intermediate first and strict improvement never swaps it out.
        let mut graph = WeightedGraph::new(4).unwrap();
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(0, 2, 1.0).unwrap();
        graph.add_edge(1, 3, 1.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();

        let route = shortest_path_with(&graph, 0, 3, SearchStrategy::DenseScan).unwrap();
        assert_eq!(route.vertices, vec![0, 1, 3]);
    }
}
