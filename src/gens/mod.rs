/*!
# Graph Generators

This module provides builder-style generators for the random graph models of this crate.

Each generator allows parameterized control over the model (number of nodes, edges, rewiring
probability, ...). The typical usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using the builder methods (e.g., `.nodes(n).prob(p)`).
3. Sample a graph via [`GraphGenerator::build`], which validates the configuration first and fails
   with [`GraphError::InvalidArgument`] before any graph is created.

In addition, the [`RandomGraph`] trait offers one-call constructors such as `Graph::gnm(rng, n, m)`.

Supported models include:
- Complete graphs
- G(n,m): uniform random graphs with a fixed number of nodes and edges
- G(n,p): independent edges, attempted once per ordered pair of nodes
- Watts–Strogatz: ring lattices with random rewiring
- Barabási–Albert: growth with preferential attachment
- Uniform attachment: growth with uniformly chosen targets

All generators produce nodes `0..n`. Every model except [`Complete`] draws its randomness from an
injected `rng`.
*/

use rand::Rng;
use tracing::debug;

use crate::{error::*, prelude::*, utils::*};

mod barabasi_albert;
mod complete;
mod gnm;
mod gnp;
mod substructures;
mod uniform_attachment;
mod watts_strogatz;

pub use barabasi_albert::*;
pub use complete::*;
pub use gnm::*;
pub use gnp::*;
pub use substructures::*;
pub use uniform_attachment::*;
pub use watts_strogatz::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Sets the number of edges in the graph generator.
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// Trait for generators that are parameterized by a single probability.
pub trait ProbabilityGen: Sized {
    /// Sets the probability. Validation is deferred to [`GraphGenerator::build`].
    fn set_prob(&mut self, p: f64);

    /// Sets the probability. Validation is deferred to [`GraphGenerator::build`].
    fn prob(mut self, p: f64) -> Self {
        self.set_prob(p);
        self
    }
}

/// Trait for generators that are parameterized by the size of an initial clique.
pub trait CoreSizeGen: Sized {
    /// Sets the number of nodes of the initial complete graph.
    fn set_core(&mut self, core: NumNodes);

    /// Sets the number of nodes of the initial complete graph.
    fn core(mut self, core: NumNodes) -> Self {
        self.set_core(core);
        self
    }
}

/// General trait for a configurable random graph generator.
pub trait GraphGenerator {
    /// Validates the configuration and samples a graph
    fn build<R>(&self, rng: &mut R) -> Result<Graph>
    where
        R: Rng;
}

/// Trait for building graphs from the random models in one call.
pub trait RandomGraph: Sized {
    /// Creates the complete graph on `n` nodes.
    fn complete(n: NumNodes) -> Self;

    /// Creates a random `G(n,m)` graph with exactly `m` edges.
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self>
    where
        R: Rng;

    /// Creates a random `G(n,p)` graph, see [`Gnp`].
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng;

    /// Creates a Watts–Strogatz graph from a ring lattice connecting every node to its `k`
    /// nearest nodes on each side.
    fn watts_strogatz<R>(rng: &mut R, n: NumNodes, k: NumNodes, rewire_prob: f64) -> Result<Self>
    where
        R: Rng;

    /// Creates a Barabási–Albert graph in which every node after the initial clique attaches
    /// `edges_per_node` edges.
    fn barabasi_albert<R>(
        rng: &mut R,
        n: NumNodes,
        edges_per_node: NumNodes,
        core: NumNodes,
    ) -> Result<Self>
    where
        R: Rng;
}

impl RandomGraph for Graph {
    fn complete(n: NumNodes) -> Self {
        Complete::new().nodes(n).generate()
    }

    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self>
    where
        R: Rng,
    {
        Gnm::new().nodes(n).edges(m).build(rng)
    }

    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng,
    {
        Gnp::new().nodes(n).prob(p).build(rng)
    }

    fn watts_strogatz<R>(rng: &mut R, n: NumNodes, k: NumNodes, rewire_prob: f64) -> Result<Self>
    where
        R: Rng,
    {
        WattsStrogatz::new()
            .nodes(n)
            .neighbors(k)
            .rewire_prob(rewire_prob)
            .build(rng)
    }

    fn barabasi_albert<R>(
        rng: &mut R,
        n: NumNodes,
        edges_per_node: NumNodes,
        core: NumNodes,
    ) -> Result<Self>
    where
        R: Rng,
    {
        BarabasiAlbert::new()
            .nodes(n)
            .edges_per_node(edges_per_node)
            .core(core)
            .build(rng)
    }
}

/// Rejects probabilities outside of `[0, 1]`
fn check_probability(name: &'static str, p: f64) -> Result<()> {
    if p.is_valid_probility() {
        Ok(())
    } else {
        Err(GraphError::invalid(name, format!("{p} is not within [0, 1]")))
    }
}

fn log_generated(model: &'static str, graph: &Graph) {
    debug!(
        model,
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "generated graph"
    );
}
