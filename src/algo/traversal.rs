/*!
Graph traversal algorithms.

This module provides:
- [`Bfs`], a breadth-first search iterator that can be restarted in unvisited components.
- [`BfsLayers`], a breadth-first search that yields one distance layer at a time. Most distance
  metrics in this crate are sums or maxima over these layers.
- A high-level [`Traversal`] trait that exposes traversal algorithms directly as methods on graphs.

All traversals panic if started at a node that is not part of the graph; fallible wrappers check
membership first (see [`Distances`](super::Distances)).
*/

use std::collections::VecDeque;

use super::*;

/// Breadth-first search iterator over the nodes reachable from a start node.
///
/// Maintains a queue of nodes to visit and the set of nodes discovered so far. Every node is
/// yielded at most once. Once exhausted, the search can be continued in another component with
/// [`Bfs::try_restart_at_unvisited`].
pub struct Bfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: FxHashSet<Node>,
    queue: VecDeque<Node>,
}

impl<'a, G> Bfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics during iteration if `start` is not part of the graph **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        }
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.queue.is_empty());
        let node = self.graph.vertices().find(|u| !self.visited.contains(u));
        match node {
            None => false,
            Some(x) => {
                self.visited.insert(x);
                self.queue.push_back(x);
                true
            }
        }
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if self.visited.insert(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len().saturating_sub(self.visited.len()) + self.queue.len()),
        )
    }
}

/// Breadth-first search that yields the nodes grouped by their distance to the start node.
///
/// The `i`-th layer (starting at `0`) contains exactly the nodes at distance `i`; the first layer
/// is `[start]`. The number of layers is thus the eccentricity of the start node plus one.
pub struct BfsLayers<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: FxHashSet<Node>,
    frontier: Vec<Node>,
}

impl<'a, G> BfsLayers<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new layered search starting from `start`.
    /// ** Panics during iteration if `start` is not part of the graph **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(start);
        Self {
            graph,
            visited,
            frontier: vec![start],
        }
    }
}

impl<G> Iterator for BfsLayers<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frontier.is_empty() {
            return None;
        }

        let mut next = Vec::new();
        for &u in &self.frontier {
            for v in self.graph.neighbors_of(u) {
                if self.visited.insert(v) {
                    next.push(v);
                }
            }
        }

        Some(std::mem::replace(&mut self.frontier, next))
    }
}

/// Provides convenient traversal methods (BFS, BFS layers)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use netsci::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns an iterator over the BFS distance layers around `start`.
    ///
    /// # Examples
    /// ```
    /// use netsci::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(4, [(0, 1), (0, 2), (2, 3)]);
    ///
    /// let layers: Vec<Vec<Node>> = g.bfs_layers(3).collect();
    /// assert_eq!(layers, vec![vec![3], vec![2], vec![0], vec![1]]);
    /// ```
    fn bfs_layers(&self, start: Node) -> BfsLayers<'_, Self> {
        BfsLayers::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = Graph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let order: Vec<Node> = graph.bfs(1).collect();
        assert_eq!(order.len(), 6);

        assert_eq!(order[0], 1);
        assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
        assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
        assert_eq!(order[5], 3);
    }

    #[test]
    fn bfs_layers() {
        // cycle 0 - 1 - 2 - 3 - 4 - 0
        let graph = Graph::from_edges(5, [(0, 1), (1, 2), (3, 2), (3, 4), (0, 4)]);

        let layers = graph
            .bfs_layers(0)
            .map(|layer| layer.into_iter().sorted().collect_vec())
            .collect_vec();
        assert_eq!(layers, vec![vec![0], vec![1, 4], vec![2, 3]]);

        let mut isolated = Graph::new(1);
        isolated.add_node(9);
        assert_eq!(isolated.bfs_layers(9).collect_vec(), vec![vec![9]]);
    }

    #[test]
    fn restart_at_unvisited() {
        let graph = Graph::from_edges(4, [(0, 1), (2, 3)]);

        let mut bfs = graph.bfs(0);
        assert_eq!(bfs.by_ref().sorted().collect_vec(), vec![0, 1]);

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().sorted().collect_vec(), vec![2, 3]);
        assert!(!bfs.try_restart_at_unvisited());
        assert_eq!(bfs.next(), None);
    }
}
