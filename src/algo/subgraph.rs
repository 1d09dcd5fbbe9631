/*!
# Subgraph Algorithms

Provides extraction of vertex-induced subgraphs and the disjoint union of two graphs.
*/

use super::*;

/// A trait for creating subgraphs and combining graphs.
pub trait Subgraph:
    AdjacencyList + AdjacencyTest + GraphEdgeEditing + GraphNodeEditing + Sized
{
    /// Creates the **vertex-induced subgraph** on `vertices`.
    ///
    /// Node ids are kept as they are; members of `vertices` that are not part of the graph are
    /// ignored.
    fn induced_subgraph<S>(&self, vertices: &S) -> Self
    where
        S: Set<Node>,
    {
        let mut subgraph = Self::new(0);

        for u in vertices.iter().filter(|&u| self.has_node(u)) {
            subgraph.add_node(u);
            for v in self.neighbors_of(u) {
                if u < v && vertices.contains(&v) {
                    subgraph.add_edge(u, v);
                }
            }
        }

        subgraph
    }

    /// Adds a copy of `other` to the graph whose ids are shifted by the current number of nodes.
    ///
    /// For graphs with ids `0..n` the result has ids `0..n+n'`, holds the edges of both graphs and
    /// no edge between the two id ranges. Ids of non-contiguous graphs may coincide after shifting,
    /// in which case the corresponding nodes are identified.
    ///
    /// Fails with [`GraphError::InvalidArgument`] if a shifted id of `other` does not fit into
    /// [`Node`]; the graph is left unchanged then.
    fn merge(&mut self, other: &Self) -> Result<()> {
        let shift = self.number_of_nodes();

        if let Some(u) = other.vertices().find(|u| u.checked_add(shift).is_none()) {
            return Err(GraphError::invalid(
                "other",
                format!("node {u} shifted by {shift} exceeds the id range"),
            ));
        }

        for u in other.vertices() {
            self.add_node(u + shift);
        }

        for Edge(u, v) in other.edges(true) {
            self.add_edge(u + shift, v + shift);
        }

        Ok(())
    }
}

impl<G> Subgraph for G where
    G: AdjacencyList + AdjacencyTest + GraphEdgeEditing + GraphNodeEditing + Sized
{
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::{assert_well_formed, clique_edges};

    #[test]
    fn induced_subgraph() {
        let graph = Graph::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 0), (4, 5), (1, 4)]);

        let sub = graph.induced_subgraph(&FxHashSet::from_iter([0, 1, 2, 4, 17]));
        assert_eq!(sub.ordered_vertices(), vec![0, 1, 2, 4]);
        assert_eq!(
            sub.ordered_edges(true),
            vec![Edge(0, 1), Edge(1, 2), Edge(1, 4)]
        );
        assert_well_formed(&sub);
    }

    #[test]
    fn merge_shifts_ids() {
        let mut a = Graph::from_edges(5, clique_edges(5, 0));
        let b = Graph::from_edges(4, [(0, 1), (2, 3)]);

        a.merge(&b).unwrap();
        assert_eq!(a.number_of_nodes(), 9);
        assert_eq!(a.number_of_edges(), 12);
        assert!(a.has_edge(5, 6) && a.has_edge(7, 8));
        assert!(
            a.edges(true)
                .all(|Edge(u, v)| (u < 5) == (v < 5))
        );
        assert_well_formed(&a);

        let mut empty = Graph::empty();
        empty.merge(&b).unwrap();
        assert_eq!(empty.ordered_edges(true), b.ordered_edges(true));
        assert_eq!(empty.ordered_vertices(), (0..4).collect_vec());
    }

    #[test]
    fn merge_rejects_overflowing_ids() {
        let mut graph = Graph::from_edges(2, [(0, 1)]);
        let before = graph.clone();

        let mut other = Graph::new(1);
        other.add_edge(0, Node::MAX);

        assert!(matches!(
            graph.merge(&other),
            Err(GraphError::InvalidArgument { name: "other", .. })
        ));
        assert_eq!(graph.ordered_vertices(), before.ordered_vertices());
        assert_eq!(graph.ordered_edges(true), before.ordered_edges(true));

        // the largest id still fits if nothing is shifted
        let mut empty = Graph::empty();
        empty.merge(&other).unwrap();
        assert!(empty.has_edge(0, Node::MAX));
    }
}
