use rand::seq::IteratorRandom;

use super::*;

/// Push/pull voter model on an owned [`Graph`].
///
/// The graph must consist of exactly the nodes `0..n`; it is never copied and can be recovered with
/// [`VoteGraph::into_graph`]. Both voting steps fail with [`GraphError::IsolatedNode`] if they pick a
/// node without neighbors and with [`GraphError::EmptyGraph`] on a graph without nodes, leaving all
/// opinions untouched in either case.
#[derive(Debug, Clone)]
pub struct VoteGraph {
    pub(super) graph: Graph,
    pub(super) values: Vec<Opinion>,
}

impl VoteGraph {
    /// Wraps `graph` and assigns uniformly random opinions
    pub fn new<R: Rng>(graph: Graph, rng: &mut R) -> Result<Self> {
        check_contiguous(&graph)?;
        let values = random_opinions(rng, graph.number_of_nodes());
        Ok(Self { graph, values })
    }

    /// Wraps `graph` with explicitly given opinions, one per node
    pub fn with_values(graph: Graph, values: Vec<Opinion>) -> Result<Self> {
        check_contiguous(&graph)?;
        check_opinions(&graph, &values)?;
        Ok(Self { graph, values })
    }

    /// Reassigns every opinion independently and uniformly at random
    pub fn generate_values<R: Rng>(&mut self, rng: &mut R) -> &[Opinion] {
        self.values = random_opinions(rng, self.graph.number_of_nodes());
        &self.values
    }

    /// Replaces all opinions. On failure, the current opinions are kept.
    pub fn set_values(&mut self, values: Vec<Opinion>) -> Result<()> {
        check_opinions(&self.graph, &values)?;
        self.values = values;
        Ok(())
    }

    /// Opinions indexed by node id
    pub fn values(&self) -> &[Opinion] {
        &self.values
    }

    /// The underlying graph
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Releases the underlying graph
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// *Pull* step: a uniformly random listener adopts the opinion of a uniformly random neighbor.
    /// Returns the listener's new opinion.
    pub fn vote_pull<R: Rng>(&mut self, rng: &mut R) -> Result<Opinion> {
        let listener = self.random_node(rng)?;
        let speaker = self.random_neighbor(listener, rng)?;
        Ok(self.adopt(listener, speaker))
    }

    /// *Push* step: a uniformly random speaker imposes its opinion on a uniformly random neighbor.
    /// Returns the listener's new opinion.
    pub fn vote_push<R: Rng>(&mut self, rng: &mut R) -> Result<Opinion> {
        let speaker = self.random_node(rng)?;
        let listener = self.random_neighbor(speaker, rng)?;
        Ok(self.adopt(listener, speaker))
    }

    /// Returns *true* if all nodes share the same opinion (trivially for an empty graph)
    pub fn is_homogenized(&self) -> bool {
        self.values.windows(2).all(|w| w[0] == w[1])
    }

    fn random_node<R: Rng>(&self, rng: &mut R) -> Result<Node> {
        match self.graph.number_of_nodes() {
            0 => Err(GraphError::EmptyGraph),
            n => Ok(rng.random_range(0..n)),
        }
    }

    fn random_neighbor<R: Rng>(&self, u: Node, rng: &mut R) -> Result<Node> {
        self.graph
            .neighbors_of(u)
            .choose(rng)
            .ok_or(GraphError::IsolatedNode(u))
    }

    /// Copies the opinion of `speaker` to `listener` and returns it
    pub(super) fn adopt(&mut self, listener: Node, speaker: Node) -> Opinion {
        let value = self.values[speaker as usize];
        self.values[listener as usize] = value;
        trace!(listener, speaker, value, "vote");
        value
    }
}
