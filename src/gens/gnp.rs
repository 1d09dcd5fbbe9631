use super::*;

/// `G(n,p)` graphs attempt every *ordered* pair `(u, v)` with `u != v` independently with
/// probability `p`.
///
/// As the graph is undirected, each unordered pair gets two chances and ends up connected with
/// probability `1 - (1 - p)^2`. Instead of flipping a coin for each of the `n^2` pairs, the indices
/// of successful attempts are skip-sampled with a [`GeometricJumper`]; pairs on the diagonal are
/// discarded.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for Gnp {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl ProbabilityGen for Gnp {
    fn set_prob(&mut self, p: f64) {
        self.p = p;
    }
}

impl GraphGenerator for Gnp {
    fn build<R>(&self, rng: &mut R) -> Result<Graph>
    where
        R: Rng,
    {
        check_probability("prob", self.p)?;

        let n = self.n as u64;
        let jumper = GeometricJumper::new(self.p, n * n)?;

        let mut graph = Graph::new(self.n);
        for x in jumper.iter(rng) {
            let (u, v) = ((x / n) as Node, (x % n) as Node);
            if u != v {
                graph.add_edge(u, v);
            }
        }

        log_generated("gnp", &graph);
        Ok(graph)
    }
}
