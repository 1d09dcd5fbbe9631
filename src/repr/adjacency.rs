use fxhash::{FxHashMap, FxHashSet};

use super::*;

/// An undirected, unweighted graph stored as a map from node id to its set of neighbors.
///
/// Node ids need not be contiguous. The representation maintains three invariants which are never
/// exposed to raw mutation:
/// - *symmetry*: `v ∈ N(u) ⟺ u ∈ N(v)`,
/// - *no self-loops*: `u ∉ N(u)`,
/// - every node has a (possibly empty) neighbor set, so isolated nodes are representable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nbs: FxHashMap<Node, FxHashSet<Node>>,
    num_edges: NumEdges,
}

impl Graph {
    /// Creates a graph without any nodes
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the neighbor set of `u` or `None` if `u` is not part of the graph
    pub fn neighborhood(&self, u: Node) -> Option<&FxHashSet<Node>> {
        self.nbs.get(&u)
    }

    /// Returns the largest node id in use or `None` for an empty graph
    pub fn max_node(&self) -> Option<Node> {
        self.nbs.keys().copied().max()
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.nbs.keys().copied()
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for Graph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[&u].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[&u].len() as NumNodes
    }
}

impl AdjacencyTest for Graph {
    fn has_node(&self, u: Node) -> bool {
        self.nbs.contains_key(&u)
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs.get(&u).is_some_and(|nbs| nbs.contains(&v))
    }
}

impl GraphNew for Graph {
    fn new(n: NumNodes) -> Self {
        let mut nbs = FxHashMap::default();
        nbs.reserve(n as usize);
        for u in 0..n {
            nbs.insert(u, FxHashSet::default());
        }

        Self { nbs, num_edges: 0 }
    }
}

impl GraphEdgeEditing for Graph {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if u == v {
            self.add_node(u);
            return true;
        }

        if !self.nbs.entry(u).or_default().insert(v) {
            return true;
        }

        let inserted = self.nbs.entry(v).or_default().insert(u);
        debug_assert!(inserted, "neighborhoods of {u} and {v} were asymmetric");
        self.num_edges += 1;
        false
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.require_nodes([u, v])?;

        if u == v || !self.nbs.get_mut(&u).is_some_and(|nbs| nbs.remove(&v)) {
            return Ok(false);
        }

        let removed = self.nbs.get_mut(&v).is_some_and(|nbs| nbs.remove(&u));
        debug_assert!(removed, "neighborhoods of {u} and {v} were asymmetric");
        self.num_edges -= 1;
        Ok(true)
    }
}

impl GraphNodeEditing for Graph {
    fn add_node(&mut self, u: Node) -> bool {
        if self.nbs.contains_key(&u) {
            true
        } else {
            self.nbs.insert(u, FxHashSet::default());
            false
        }
    }

    fn remove_node(&mut self, u: Node) -> Result<()> {
        let nbs = self.nbs.remove(&u).ok_or(GraphError::NodeNotFound(u))?;

        for v in &nbs {
            if let Some(other) = self.nbs.get_mut(v) {
                other.remove(&u);
            }
        }

        self.num_edges -= nbs.len() as NumEdges;
        Ok(())
    }
}
