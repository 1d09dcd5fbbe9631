/*!
Helpers shared by the unit tests of this crate.
*/

use itertools::Itertools;

use crate::{dynamics::Opinion, ops::*, repr::Graph, *};

/// Asserts that every neighborhood is mirrored, free of self-loops and that the cached edge count
/// matches the neighborhoods.
pub fn assert_well_formed(graph: &Graph) {
    let mut half_edges = 0usize;
    for u in graph.vertices() {
        for v in graph.neighbors_of(u) {
            assert_ne!(u, v, "self-loop at {u}");
            assert!(graph.has_node(v), "neighbor {v} of {u} is not a node");
            assert!(graph.has_edge(v, u), "edge {} is not mirrored", Edge(u, v));
            half_edges += 1;
        }
    }

    assert_eq!(half_edges, 2 * graph.number_of_edges() as usize);
}

/// Recomputes all edges whose endpoints disagree, sorted and normalized
pub fn brute_force_conflicts(graph: &Graph, values: &[Opinion]) -> Vec<Edge> {
    graph
        .edges(true)
        .filter(|&Edge(u, v)| values[u as usize] != values[v as usize])
        .sorted_unstable()
        .collect()
}

/// A clique on the nodes `offset..offset + n`
pub fn clique_edges(n: NumNodes, offset: Node) -> Vec<Edge> {
    (offset..offset + n)
        .tuple_combinations()
        .map(|(u, v)| Edge(u, v))
        .collect()
}

/// Floating point comparison with an absolute tolerance
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
