use itertools::Itertools;

use crate::{error::*, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in unspecified (but deterministic) order.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns V in increasing order
    fn ordered_vertices(&self) -> Vec<Node> {
        self.vertices().sorted_unstable().collect()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u` is not part of the graph **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u` is not part of the graph **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes in the order of [`GraphNodeOrder::vertices`]
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns a distribution `(degree, number of nodes)` sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over edges incident to a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u` is not part of the graph **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then every undirected edge is reported exactly once as `(u, v)` with `u < v`.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted_unstable().collect()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if `u` is part of the graph
    fn has_node(&self, u: Node) -> bool;

    /// Returns *true* if the edge `{u, v}` exists in the graph.
    /// Absent endpoints are not an error: the edge then simply does not exist.
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns [`GraphError::NodeNotFound`] for the first of the given nodes that is absent
    fn require_nodes<const N: usize>(&self, nodes: [Node; N]) -> Result<()> {
        match nodes.into_iter().find(|&u| !self.has_node(u)) {
            Some(u) => Err(GraphError::NodeNotFound(u)),
            None => Ok(()),
        }
    }
}

/// Trait for creating a new graph
pub trait GraphNew {
    /// Creates a graph with the `n` singleton nodes `0..n`
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge `{u, v}` to the graph, creating missing endpoints.
    /// Returns *true* exactly if the edge was present previously.
    ///
    /// Self-loops are never stored: for `u == v` only the node is created and *true* is returned.
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds the edge `{u, v}` to the graph, creating missing endpoints. Idempotent.
    fn add_edge(&mut self, u: Node, v: Node) {
        self.try_add_edge(u, v);
    }

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }

    /// Removes the edge `{u, v}` from the graph.
    /// Returns *true* if the edge was present and *false* otherwise.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if an endpoint is absent; no node is ever created.
    fn remove_edge(&mut self, u: Node, v: Node) -> Result<bool>;
}

/// Provides functions to insert/delete nodes
pub trait GraphNodeEditing {
    /// Ensures that `u` is part of the graph.
    /// Returns *true* if `u` was present previously.
    fn add_node(&mut self, u: Node) -> bool;

    /// Removes `u` and all its incident edges from the graph.
    /// Fails with [`GraphError::NodeNotFound`] if `u` is absent.
    fn remove_node(&mut self, u: Node) -> Result<()>;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph with nodes `0..n` and the given edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
