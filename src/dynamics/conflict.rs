use super::*;
use crate::utils::{IndexedSet, Set};

/// Voter model that tracks its *conflict edges*: all edges whose endpoints hold different opinions.
///
/// The set is computed once on construction and afterwards updated by [`ConflictVoteGraph::vote`]
/// and [`ConflictVoteGraph::remove_edge`] in time proportional to the listener's degree. Conflict
/// edges are stored normalized and can be sampled uniformly in constant time.
///
/// The wrapped [`VoteGraph`] is not accessible mutably, since its push/pull steps would bypass the
/// conflict bookkeeping.
#[derive(Debug, Clone)]
pub struct ConflictVoteGraph {
    votes: VoteGraph,
    conflicts: IndexedSet<Edge>,
}

impl ConflictVoteGraph {
    /// Wraps `graph` and assigns uniformly random opinions
    pub fn new<R: Rng>(graph: Graph, rng: &mut R) -> Result<Self> {
        Ok(Self::from_votes(VoteGraph::new(graph, rng)?))
    }

    /// Wraps `graph` with explicitly given opinions, one per node
    pub fn with_values(graph: Graph, values: Vec<Opinion>) -> Result<Self> {
        Ok(Self::from_votes(VoteGraph::with_values(graph, values)?))
    }

    fn from_votes(votes: VoteGraph) -> Self {
        let mut cvg = Self {
            votes,
            conflicts: IndexedSet::default(),
        };
        cvg.recompute_conflicts();
        cvg
    }

    /// Classifies every edge from scratch
    fn recompute_conflicts(&mut self) {
        let values = &self.votes.values;
        self.conflicts = self
            .votes
            .graph
            .edges(true)
            .filter(|&Edge(u, v)| values[u as usize] != values[v as usize])
            .collect();

        trace!(conflicts = self.conflicts.len(), "recomputed conflict edges");
    }

    /// Reassigns every opinion independently and uniformly at random and recomputes the
    /// conflict edges
    pub fn generate_values<R: Rng>(&mut self, rng: &mut R) -> &[Opinion] {
        self.votes.generate_values(rng);
        self.recompute_conflicts();
        self.values()
    }

    /// Replaces all opinions and recomputes the conflict edges.
    /// On failure, opinions and conflict edges are kept.
    pub fn set_values(&mut self, values: Vec<Opinion>) -> Result<()> {
        self.votes.set_values(values)?;
        self.recompute_conflicts();
        Ok(())
    }

    /// Opinions indexed by node id
    pub fn values(&self) -> &[Opinion] {
        self.votes.values()
    }

    /// The underlying graph
    pub fn graph(&self) -> &Graph {
        self.votes.graph()
    }

    /// Releases the underlying graph
    pub fn into_graph(self) -> Graph {
        self.votes.into_graph()
    }

    /// Returns *true* if all nodes share the same opinion
    pub fn is_homogenized(&self) -> bool {
        self.votes.is_homogenized()
    }

    /// Returns *true* if at least one edge connects nodes of different opinions
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Number of conflict edges
    pub fn num_conflict_edges(&self) -> usize {
        self.conflicts.len()
    }

    /// Iterator over all conflict edges (normalized, in unspecified order)
    pub fn conflict_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.conflicts.iter()
    }

    /// Returns a uniformly random conflict edge.
    /// Fails with [`GraphError::NoConflictEdges`] if there is none.
    pub fn random_conflict_edge<R: Rng>(&self, rng: &mut R) -> Result<Edge> {
        self.conflicts
            .random_element(rng)
            .ok_or(GraphError::NoConflictEdges)
    }

    /// Votes along `edge`: one endpoint, chosen by a fair coin, adopts the opinion of the other.
    /// Afterwards all edges of the listener are re-classified. Returns the new opinion.
    ///
    /// Fails with [`GraphError::EdgeNotFound`] if `edge` is not part of the graph.
    pub fn vote<R: Rng>(&mut self, edge: Edge, rng: &mut R) -> Result<Opinion> {
        let Edge(u, v) = edge;
        if !self.votes.graph.has_edge(u, v) {
            return Err(GraphError::EdgeNotFound(edge));
        }

        let (listener, speaker) = if rng.random_bool(0.5) { (u, v) } else { (v, u) };
        let value = self.votes.adopt(listener, speaker);
        self.conflicts.remove(&edge.normalized());

        let values = &self.votes.values;
        for w in self.votes.graph.neighbors_of(listener) {
            let nb_edge = Edge(listener, w).normalized();
            if values[w as usize] != value {
                self.conflicts.insert(nb_edge);
            } else {
                self.conflicts.remove(&nb_edge);
            }
        }

        trace!(conflicts = self.conflicts.len(), "conflict edges after vote");
        Ok(value)
    }

    /// Removes `edge` from the graph and from the conflict edges. Opinions are not affected.
    ///
    /// Fails with [`GraphError::EdgeNotFound`] if `edge` is not part of the graph.
    pub fn remove_edge(&mut self, edge: Edge) -> Result<()> {
        let Edge(u, v) = edge;
        if !self.votes.graph.has_edge(u, v) {
            return Err(GraphError::EdgeNotFound(edge));
        }

        self.votes.graph.remove_edge(u, v)?;
        self.conflicts.remove(&edge.normalized());

        trace!(%edge, conflicts = self.conflicts.len(), "removed edge");
        Ok(())
    }
}
