use itertools::Itertools;

use super::*;

/// Connected components of undirected graphs.
pub trait Connectivity: Traversal + Sized {
    /// Returns an iterator over the connected components of the graph.
    /// Each component is reported in BFS order from its first discovered node.
    fn components(&self) -> ConnectedComponents<'_, Self>;

    /// Maps a representative of every connected component to the component's size.
    ///
    /// The representative is the node visited last by the BFS that discovered the component,
    /// i.e. a node farthest away from where the search started. If `skip_singles` is set,
    /// isolated nodes are left out.
    fn connected_components(&self, skip_singles: bool) -> FxHashMap<Node, NumNodes> {
        self.components()
            .filter(|cc| !skip_singles || cc.len() > 1)
            .filter_map(|cc| cc.last().map(|&rep| (rep, cc.len() as NumNodes)))
            .collect()
    }

    /// Returns the size of the largest connected component (`0` for an empty graph)
    fn size_lcc(&self) -> NumNodes {
        self.components()
            .map(|cc| cc.len() as NumNodes)
            .max()
            .unwrap_or(0)
    }

    /// Returns *true* if the graph consists of a single connected component.
    /// The empty graph is considered connected.
    fn is_connected(&self) -> bool {
        self.size_lcc() == self.number_of_nodes()
    }

    /// Returns the subgraph induced by a largest connected component.
    /// Node ids are kept; ties between equally large components are broken arbitrarily.
    fn largest_connected_component(&self) -> Self
    where
        Self: Subgraph,
    {
        let lcc = self
            .components()
            .max_by_key(|cc| cc.len())
            .unwrap_or_default();

        self.induced_subgraph(&lcc.into_iter().collect::<FxHashSet<Node>>())
    }
}

impl<G> Connectivity for G
where
    G: AdjacencyList + Sized,
{
    fn components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }
}

/// Iterator over the connected components of a graph.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<Bfs<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: graph.vertices().next().map(|start| graph.bfs(start)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                self.bfs = None;
                return None;
            }
        }
    }
}
