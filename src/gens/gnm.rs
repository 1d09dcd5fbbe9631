use super::*;

/// Generator for uniform `G(n,m)` random graphs with `n` nodes and exactly `m` edges.
///
/// Edges are found by rejection sampling: a uniformly random pair of nodes is drawn until it is
/// neither a self-pair nor an existing edge. This is fast as long as the graph stays sparse; for
/// `m` close to `n (n - 1) / 2` the expected number of draws per edge grows accordingly.
///
/// Fails with [`GraphError::InvalidArgument`] if `m > n (n - 1) / 2`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnm {
    n: NumNodes,
    m: NumEdges,
}

impl Gnm {
    /// Creates a new empty `G(n,m)` generator
    pub fn new() -> Self {
        Self::default()
    }

    fn validate(&self) -> Result<()> {
        let n = self.n as u64;
        let max_edges = n * n.saturating_sub(1) / 2;
        if self.m as u64 > max_edges {
            return Err(GraphError::invalid(
                "edges",
                format!("{} edges do not fit into {} nodes", self.m, self.n),
            ));
        }
        Ok(())
    }
}

impl NumNodesGen for Gnm {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for Gnm {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl GraphGenerator for Gnm {
    fn build<R>(&self, rng: &mut R) -> Result<Graph>
    where
        R: Rng,
    {
        self.validate()?;

        let mut graph = Graph::new(self.n);
        while graph.number_of_edges() < self.m {
            let u = rng.random_range(0..self.n);
            let v = rng.random_range(0..self.n);
            // self-pairs and existing edges are rejected by `try_add_edge`
            graph.try_add_edge(u, v);
        }

        log_generated("gnm", &graph);
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::assert_well_formed;

    #[test]
    fn exact_number_of_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for (n, m) in [(0, 0), (1, 0), (2, 1), (10, 0), (10, 20), (10, 45), (100, 500)] {
            let graph = Gnm::new().nodes(n).edges(m).build(rng).unwrap();
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.number_of_edges(), m);
            assert_well_formed(&graph);
        }
    }

    #[test]
    fn too_many_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        for (n, m) in [(0, 1), (1, 1), (10, 46)] {
            assert!(matches!(
                Gnm::new().nodes(n).edges(m).build(rng),
                Err(GraphError::InvalidArgument { name: "edges", .. })
            ));
        }
    }
}
