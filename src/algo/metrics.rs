/*!
Degree, clustering and assortativity statistics.

All averages over nodes are unweighted means; they are `0` for graphs without nodes.
*/

use super::*;

/// Structural statistics of undirected graphs.
pub trait GraphMetrics: AdjacencyList + AdjacencyTest {
    /// Sum of all degrees, i.e. twice the number of edges
    fn degree_sum(&self) -> u64 {
        self.degrees().map(|d| d as u64).sum()
    }

    /// Number of edges derived from the degrees
    fn edges_count(&self) -> NumEdges {
        (self.degree_sum() / 2) as NumEdges
    }

    /// Mean degree over all nodes
    fn average_degree(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.degree_sum() as f64 / self.number_of_nodes() as f64
    }

    /// Returns `m / (n * (n - 1))`: the number of edges relative to the number of ordered pairs
    /// of distinct nodes. `0` for graphs with fewer than two nodes.
    fn network_density(&self) -> f64 {
        let n = self.number_of_nodes() as f64;
        if n < 2.0 {
            return 0.0;
        }
        self.edges_count() as f64 / (n * (n - 1.0))
    }

    /// Number of nodes with exactly `degree` neighbors
    fn nodes_with_degree(&self, degree: NumNodes) -> NumNodes {
        self.degrees().filter(|&d| d == degree).count() as NumNodes
    }

    /// Local clustering coefficient of `u`: the fraction of pairs of neighbors of `u` that are
    /// adjacent themselves. `0` if `u` has fewer than two neighbors.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if `u` is absent.
    fn clustering_coeff(&self, u: Node) -> Result<f64> {
        self.require_nodes([u])?;

        let deg = self.degree_of(u) as u64;
        if deg < 2 {
            return Ok(0.0);
        }

        // every triangle through `u` is found from both of its other corners
        let closed: u64 = self
            .neighbors_of(u)
            .map(|v| self.neighbors_of(u).filter(|&w| self.has_edge(v, w)).count() as u64)
            .sum();

        Ok(closed as f64 / (deg * (deg - 1)) as f64)
    }

    /// Mean local clustering coefficient over all nodes
    fn avg_clustering_coeff(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }

        let sum: f64 = self
            .vertices()
            .filter_map(|u| self.clustering_coeff(u).ok())
            .sum();
        sum / self.number_of_nodes() as f64
    }

    /// Degree assortativity: the Pearson correlation of the degrees at both ends of an edge.
    ///
    /// Every edge is sampled in both directions and the average degree serves as mean of both
    /// marginals. Returns `0` if one of the accumulated sums vanishes, e.g. for regular graphs.
    fn degree_assortativity(&self) -> f64 {
        let avg = self.average_degree();

        let mut cov = 0.0;
        let mut var_u = 0.0;
        let mut var_v = 0.0;
        for Edge(u, v) in self.edges(false) {
            let du = self.degree_of(u) as f64 - avg;
            let dv = self.degree_of(v) as f64 - avg;
            cov += du * dv;
            var_u += du * du;
            var_v += dv * dv;
        }

        if cov == 0.0 || var_u == 0.0 || var_v == 0.0 {
            return 0.0;
        }
        cov / var_u.sqrt() / var_v.sqrt()
    }
}

impl<G> GraphMetrics for G where G: AdjacencyList + AdjacencyTest {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_close, clique_edges};

    #[test]
    fn average_degree() {
        let mut graph = Graph::empty();
        assert_eq!(graph.average_degree(), 0.0);

        graph.add_edge(0, 1);
        assert_close(graph.average_degree(), 1.0);

        graph.add_edge(1, 2);
        assert_close(graph.average_degree(), 4.0 / 3.0);

        graph.add_edge(0, 2);
        assert_close(graph.average_degree(), 2.0);

        for u in 3..6 {
            graph.add_node(u);
        }
        assert_close(graph.average_degree(), 1.0);
        assert_eq!(graph.degree_sum(), 6);
        assert_eq!(graph.edges_count(), 3);
        assert_close(graph.network_density(), 3.0 / 30.0);
    }

    #[test]
    fn nodes_with_degree() {
        let mut graph = Graph::empty();
        graph.add_node(0);
        assert_eq!(graph.nodes_with_degree(0), 1);

        let graph = Graph::from_edges(5, [(0, 1), (0, 2), (0, 3)]);
        assert_eq!(graph.nodes_with_degree(0), 1);
        assert_eq!(graph.nodes_with_degree(1), 3);
        assert_eq!(graph.nodes_with_degree(3), 1);
        assert_eq!(graph.degree_distribution(), vec![(0, 1), (1, 3), (3, 1)]);
        assert_eq!(graph.max_degree(), 3);
    }

    #[test]
    fn clustering_coeff() {
        let coeffs = |graph: &Graph| -> Vec<f64> {
            (0..5).map(|u| graph.clustering_coeff(u).unwrap()).collect()
        };
        let assert_coeffs = |graph: &Graph, expected: [f64; 5], avg: f64| {
            for (actual, expected) in coeffs(graph).into_iter().zip(expected) {
                assert_close(actual, expected);
            }
            assert_close(graph.avg_clustering_coeff(), avg);
        };

        // star around 0
        let mut graph = Graph::from_edges(5, [(0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_coeffs(&graph, [0.0; 5], 0.0);

        graph.add_edge(1, 2);
        assert_coeffs(&graph, [1.0 / 6.0, 1.0, 1.0, 0.0, 0.0], 13.0 / 30.0);

        graph.add_edge(1, 3);
        assert_coeffs(&graph, [1.0 / 3.0, 2.0 / 3.0, 1.0, 1.0, 0.0], 0.6);

        graph.add_edge(1, 4);
        assert_coeffs(&graph, [0.5, 0.5, 1.0, 1.0, 1.0], 0.8);

        graph.add_edge(2, 3);
        assert_coeffs(&graph, [2.0 / 3.0, 2.0 / 3.0, 1.0, 1.0, 1.0], 26.0 / 30.0);

        graph.add_edge(2, 4);
        assert_coeffs(&graph, [5.0 / 6.0, 5.0 / 6.0, 5.0 / 6.0, 1.0, 1.0], 0.9);

        graph.add_edge(4, 3);
        assert_coeffs(&graph, [1.0; 5], 1.0);

        assert_eq!(
            graph.clustering_coeff(5),
            Err(GraphError::NodeNotFound(5))
        );
    }

    #[test]
    fn degree_assortativity() {
        let mut graph = Graph::from_edges(100, clique_edges(100, 0));
        assert_close(graph.degree_assortativity(), 0.0);

        for i in 0..100 {
            graph.add_edge(100 + i, 200 + i);
        }
        assert!((graph.degree_assortativity() - 1.0).abs() < 1e-8);

        // center deviates by 10/3 from the average degree, leaves by -2/3
        let star = Graph::from_edges(6, (1..6).map(|v| (0, v)));
        assert_close(star.degree_assortativity(), -5.0 / 13.0);

        assert_eq!(Graph::empty().degree_assortativity(), 0.0);
    }
}
