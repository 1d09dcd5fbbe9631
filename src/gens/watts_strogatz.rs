use itertools::Itertools;

use super::*;

/// Generator for small-world graphs in the model of Watts and Strogatz.
///
/// The generator first builds a ring lattice in which every node `i` is connected to
/// `i + 1, ..., i + k` (modulo `n`), i.e. to its `k` nearest nodes on each side; for `k = 0` the
/// lattice is a plain ring. Afterwards, the nodes are processed in increasing order: every edge
/// incident to node `i` at that time is, with probability `rewire_prob`, removed and replaced by an
/// edge from `i` to a uniformly random other node. A lattice edge thus gets a chance from each of
/// its endpoints, and survives with probability `(1 - rewire_prob)^2`.
///
/// Rewiring onto an already existing edge does not create a parallel edge, so the number of edges
/// can drop slightly below the lattice's. Lattice widths `k >= n / 2` yield the complete graph.
#[derive(Debug, Copy, Clone, Default)]
pub struct WattsStrogatz {
    n: NumNodes,
    k: NumNodes,
    rewire_prob: f64,
}

impl WattsStrogatz {
    /// Creates a new generator for the empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number `k` of lattice neighbors on each side of a node
    pub fn neighbors(mut self, k: NumNodes) -> Self {
        self.k = k;
        self
    }

    /// Sets the probability with which a lattice edge is rewired
    pub fn rewire_prob(mut self, p: f64) -> Self {
        self.rewire_prob = p;
        self
    }

    /// Lattice edges `(i, i + j mod n)` for `1 <= j <= k`
    fn lattice_edges(&self) -> Vec<Edge> {
        let n = self.n;
        if n < 2 {
            return Vec::new();
        }

        let width = self.k.clamp(1, n - 1) as u64;
        let n = n as u64;
        (0..n)
            .flat_map(|i| (i + 1..=i + width).map(move |j| Edge(i as Node, (j % n) as Node)))
            .unique_by(|e| e.normalized())
            .collect()
    }
}

impl NumNodesGen for WattsStrogatz {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for WattsStrogatz {
    fn build<R>(&self, rng: &mut R) -> Result<Graph>
    where
        R: Rng,
    {
        check_probability("rewire_prob", self.rewire_prob)?;

        let mut graph = Graph::new(self.n);
        graph.add_edges(self.lattice_edges());

        let mut rewired = 0usize;
        for i in 0..self.n {
            let neighbors = graph.neighbors_of(i).sorted_unstable().collect_vec();
            for w in neighbors {
                if !rng.random_bool(self.rewire_prob) {
                    continue;
                }

                // `i` has a neighbor, so there is always another node
                let mut target = rng.random_range(0..self.n - 1);
                if target >= i {
                    target += 1;
                }

                graph.remove_edge(i, w)?;
                graph.add_edge(i, target);
                rewired += 1;
            }
        }

        debug!(rewired, "rewired edges");
        log_generated("watts_strogatz", &graph);
        Ok(graph)
    }
}
