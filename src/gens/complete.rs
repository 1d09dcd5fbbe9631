use super::*;

/// Generator for the complete graph `K_n` on the nodes `0..n`.
///
/// As the result is deterministic, [`Complete::generate`] needs no random source; the
/// [`GraphGenerator`] implementation ignores its `rng`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Complete {
    n: NumNodes,
}

impl Complete {
    /// Creates a new generator for the empty complete graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds `K_n`
    pub fn generate(&self) -> Graph {
        let mut graph = Graph::new(self.n);
        graph.connect_clique(0..self.n);

        log_generated("complete", &graph);
        graph
    }
}

impl NumNodesGen for Complete {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for Complete {
    fn build<R>(&self, _rng: &mut R) -> Result<Graph>
    where
        R: Rng,
    {
        Ok(self.generate())
    }
}
