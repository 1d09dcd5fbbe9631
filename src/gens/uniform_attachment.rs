use super::*;

/// Growth model without preference: like [`BarabasiAlbert`], but targets are drawn uniformly.
///
/// Starting from a complete graph on `min(n, core)` nodes, every further node `i` draws a number of
/// attempts `m` uniformly from `[m_min, m_max)` and connects to `m` uniformly random earlier nodes
/// `0..i`. Repeated targets are idempotent.
#[derive(Debug, Copy, Clone)]
pub struct UniformAttachment {
    n: NumNodes,
    core: NumNodes,
    m_min: NumNodes,
    m_max: NumNodes,
}

impl Default for UniformAttachment {
    fn default() -> Self {
        Self {
            n: 0,
            core: 1,
            m_min: 1,
            m_max: 2,
        }
    }
}

impl UniformAttachment {
    /// Creates a new generator attaching exactly one edge per node
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the half-open range `[m_min, m_max)` from which the number of attempts per node is drawn
    pub fn attachments(mut self, m_min: NumNodes, m_max: NumNodes) -> Self {
        self.m_min = m_min;
        self.m_max = m_max;
        self
    }
}

impl NumNodesGen for UniformAttachment {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl CoreSizeGen for UniformAttachment {
    fn set_core(&mut self, core: NumNodes) {
        self.core = core;
    }
}

impl GraphGenerator for UniformAttachment {
    fn build<R>(&self, rng: &mut R) -> Result<Graph>
    where
        R: Rng,
    {
        if self.m_min >= self.m_max {
            return Err(GraphError::invalid(
                "attachments",
                format!("[{}, {}) is empty", self.m_min, self.m_max),
            ));
        }

        let core = self.n.min(self.core);
        let mut graph = Graph::new(self.n);
        graph.connect_clique(0..core);

        // node 0 has no earlier nodes to attach to
        for i in core.max(1)..self.n {
            let attempts = rng.random_range(self.m_min..self.m_max);
            for _ in 0..attempts {
                let target = rng.random_range(0..i);
                graph.add_edge(i, target);
            }
        }

        log_generated("uniform_attachment", &graph);
        Ok(graph)
    }
}
