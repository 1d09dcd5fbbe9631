/*!
Distance metrics based on breadth-first search.

Unreachable pairs and disconnected graphs are reported as `None` rather than with a sentinel.
*/

use super::*;

/// Shortest-path based metrics of unweighted graphs.
pub trait Distances: Connectivity + AdjacencyTest {
    /// Returns the number of edges on a shortest path between `u` and `v`,
    /// `Some(0)` if `u == v` and `None` if `v` is not reachable from `u`.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if either node is absent.
    fn shortest_path_length(&self, u: Node, v: Node) -> Result<Option<NumNodes>> {
        self.require_nodes([u, v])?;

        Ok(self
            .bfs_layers(u)
            .position(|layer| layer.contains(&v))
            .map(|d| d as NumNodes))
    }

    /// Returns the largest distance from `u` to any node of its connected component.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if `u` is absent.
    fn eccentricity(&self, u: Node) -> Result<NumNodes> {
        self.require_nodes([u])?;
        Ok(self.bfs_layers(u).count() as NumNodes - 1)
    }

    /// Returns the maximum over all connected components of the double-sweep estimate of the
    /// component's diameter: the eccentricity of a node farthest away from the node the
    /// component's BFS started in.
    ///
    /// The estimate is exact for trees and a lower bound in general, at least half of the true
    /// diameter. It is deliberately not replaced by an all-pairs search: callers and tests rely on
    /// the values of this two-BFS heuristic, and the exact diameter is available as the maximum
    /// [`Distances::eccentricity`] over all nodes. Returns `0` for graphs without edges.
    fn diameter(&self) -> NumNodes {
        self.components()
            .filter_map(|cc| cc.last().copied())
            .map(|far| self.bfs_layers(far).count() as NumNodes - 1)
            .max()
            .unwrap_or(0)
    }

    /// Returns the mean distance over all ordered pairs of distinct nodes.
    ///
    /// Returns `None` if the graph is disconnected or has fewer than two nodes, as the mean is
    /// undefined then. Runs one BFS per node.
    fn avg_shortest_path_length(&self) -> Option<f64> {
        let n = self.number_of_nodes() as u64;
        if n < 2 || !self.is_connected() {
            return None;
        }

        let total: u64 = self
            .vertices()
            .map(|u| {
                self.bfs_layers(u)
                    .enumerate()
                    .map(|(rank, layer)| rank as u64 * layer.len() as u64)
                    .sum::<u64>()
            })
            .sum();

        Some(total as f64 / (n * (n - 1)) as f64)
    }
}

impl<G> Distances for G where G: AdjacencyList + AdjacencyTest + Sized {}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{
        gens::RandomGraph,
        testing::{assert_close, clique_edges},
    };

    fn path() -> Graph {
        Graph::from_edges(3, [(0, 1), (1, 2)])
    }

    fn cycle() -> Graph {
        Graph::from_edges(5, [(0, 1), (1, 2), (3, 2), (3, 4), (0, 4)])
    }

    #[test]
    fn shortest_path_length() {
        let mut graph = path();
        assert_eq!(graph.shortest_path_length(0, 2), Ok(Some(2)));
        assert_eq!(graph.shortest_path_length(1, 1), Ok(Some(0)));

        graph.add_edge(0, 2);
        assert_eq!(graph.shortest_path_length(0, 2), Ok(Some(1)));

        graph.add_node(7);
        assert_eq!(graph.shortest_path_length(0, 7), Ok(None));
        assert_eq!(
            graph.shortest_path_length(0, 8),
            Err(GraphError::NodeNotFound(8))
        );

        let graph = cycle();
        assert_eq!(graph.shortest_path_length(0, 4), Ok(Some(1)));
        assert_eq!(graph.shortest_path_length(0, 3), Ok(Some(2)));
    }

    #[test]
    fn eccentricity() {
        let mut graph = path();
        assert_eq!(graph.eccentricity(0), Ok(2));
        assert_eq!(graph.eccentricity(1), Ok(1));

        graph.add_edge(0, 2);
        assert_eq!(graph.eccentricity(0), Ok(1));
        assert_eq!(graph.eccentricity(3), Err(GraphError::NodeNotFound(3)));

        assert_eq!(cycle().eccentricity(0), Ok(2));
        assert_eq!(Graph::new(1).eccentricity(0), Ok(0));
    }

    #[test]
    fn diameter() {
        let mut graph = path();
        assert_eq!(graph.diameter(), 2);

        graph.add_edge(0, 2);
        assert_eq!(graph.diameter(), 1);

        // star around 4
        graph.add_edges([(3, 4), (5, 4), (6, 4), (7, 4), (8, 4)]);
        assert_eq!(graph.diameter(), 2);

        // path of length 4
        graph.add_edges([(9, 10), (11, 10), (11, 12), (12, 13)]);
        assert_eq!(graph.diameter(), 4);

        assert_eq!(cycle().diameter(), 2);
        assert_eq!(Graph::new(4).diameter(), 0);
        assert_eq!(Graph::empty().diameter(), 0);
    }

    #[test]
    fn diameter_is_a_double_sweep_estimate() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for _ in 0..20 {
            let graph = Graph::gnp(rng, 40, 0.08).unwrap();
            let exact = graph
                .vertices()
                .map(|u| graph.eccentricity(u).unwrap())
                .max()
                .unwrap_or(0);

            let estimate = graph.diameter();
            assert!(estimate <= exact);
            assert!(2 * estimate >= exact);

            let far = graph
                .components()
                .filter_map(|cc| cc.last().copied())
                .map(|u| graph.eccentricity(u).unwrap())
                .max()
                .unwrap_or(0);
            assert_eq!(estimate, far);
        }
    }

    #[test]
    fn avg_shortest_path_length() {
        let mut graph = path();
        assert_close(graph.avg_shortest_path_length().unwrap(), 8.0 / 6.0);

        graph.add_edge(0, 2);
        assert_close(graph.avg_shortest_path_length().unwrap(), 1.0);

        let clique = Graph::from_edges(10, clique_edges(10, 0));
        assert_close(clique.avg_shortest_path_length().unwrap(), 1.0);

        // diamond 0 - {1, 2} - 7
        let mut diamond = Graph::empty();
        diamond.add_edges([(0, 1), (0, 2), (7, 1), (7, 2)]);
        assert_close(diamond.avg_shortest_path_length().unwrap(), 4.0 / 3.0);

        graph.add_node(3);
        assert_eq!(graph.avg_shortest_path_length(), None);
        assert_eq!(Graph::new(1).avg_shortest_path_length(), None);
    }
}
