use rand::distr::weighted::{Error as WeightError, WeightedIndex};

use super::*;

/// Generator for scale-free graphs grown by preferential attachment (Barabási–Albert).
///
/// Growth starts from a complete graph on `min(n, core)` nodes. Every further node `i` then
/// attaches `edges_per_node` edges to earlier nodes `0..i`, each target drawn with probability
/// proportional to `deg^e` where `e` is the degree exponent (`1` by default, `2` gives the
/// quadratic variant).
///
/// The weights are computed once per new node, *before* its batch of edges; drawing the same
/// target twice does not create a parallel edge, so a node may end up with fewer than
/// `edges_per_node` edges. In particular, `edges_per_node` may exceed the core size: early nodes
/// then simply connect to all of their predecessors. If all earlier nodes are isolated, targets are
/// drawn uniformly.
///
/// Fails with [`GraphError::InvalidArgument`] if the exponent is negative or not finite.
#[derive(Debug, Copy, Clone)]
pub struct BarabasiAlbert {
    n: NumNodes,
    edges_per_node: NumNodes,
    core: NumNodes,
    exponent: f64,
}

impl Default for BarabasiAlbert {
    fn default() -> Self {
        Self {
            n: 0,
            edges_per_node: 1,
            core: 1,
            exponent: 1.0,
        }
    }
}

impl BarabasiAlbert {
    /// Creates a new generator with one edge per node, a single core node and linear preference
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of edges every new node attaches
    pub fn edges_per_node(mut self, m: NumNodes) -> Self {
        self.edges_per_node = m;
        self
    }

    /// Sets the exponent applied to degrees before sampling
    pub fn degree_exponent(mut self, e: f64) -> Self {
        self.exponent = e;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.exponent.is_finite() || self.exponent < 0.0 {
            return Err(GraphError::invalid(
                "degree_exponent",
                format!("{} is not a non-negative number", self.exponent),
            ));
        }

        Ok(())
    }
}

impl NumNodesGen for BarabasiAlbert {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl CoreSizeGen for BarabasiAlbert {
    fn set_core(&mut self, core: NumNodes) {
        self.core = core;
    }
}

impl GraphGenerator for BarabasiAlbert {
    fn build<R>(&self, rng: &mut R) -> Result<Graph>
    where
        R: Rng,
    {
        self.validate()?;

        let core = self.n.min(self.core);
        let mut graph = Graph::new(self.n);
        graph.connect_clique(0..core);

        if self.edges_per_node == 0 {
            log_generated("barabasi_albert", &graph);
            return Ok(graph);
        }

        // node 0 has no predecessors to attach to
        for i in core.max(1)..self.n {
            let weights = (0..i).map(|u| (graph.degree_of(u) as f64).powf(self.exponent));

            match WeightedIndex::new(weights) {
                Ok(distr) => {
                    for _ in 0..self.edges_per_node {
                        let target = rng.sample(&distr) as Node;
                        graph.add_edge(i, target);
                    }
                }
                Err(WeightError::InsufficientNonZero) => {
                    for _ in 0..self.edges_per_node {
                        let target = rng.random_range(0..i);
                        graph.add_edge(i, target);
                    }
                }
                Err(err) => return Err(GraphError::invalid("degree_exponent", err.to_string())),
            }
        }

        log_generated("barabasi_albert", &graph);
        Ok(graph)
    }
}
