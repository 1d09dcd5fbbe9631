/*!
`netsci` is a small network-science toolkit: it builds undirected, unweighted graphs under classic
random models, measures their structure and runs opinion dynamics on top of them.

# Representation

We represent **nodes** as `u32` identifiers. In contrast to array based graph libraries, the
identifiers need not be contiguous: nodes can be removed at any time without renumbering the rest.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; as all graphs are undirected,
`Edge(u, v)` and `Edge(v, u)` describe the same connection and [`Edge::normalized`] yields the
canonical form.

The only storage backend is the adjacency-set [`Graph`](crate::repr::Graph) found in [`repr`].

# Design

Generators are configurable structs that are altered with the *Builder* / *Setter* pattern before
a graph is built from them, e.g. `WattsStrogatz::new().nodes(100).neighbors(2).rewire_prob(0.1)`.
Analytic algorithms are implemented via extension traits on the graph itself, so
`graph.diameter()` or `graph.find_communities()` work without any further setup.

All randomness is injected: every random operation takes `rng: &mut impl Rng`, which makes
experiments reproducible with a seeded generator.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, the error type, basic graph operations and the graph itself,
- [`algo`] includes algorithm traits such as BFS layers, connected components, distances, clustering,
  assortativity and greedy community detection,
- [`gens`] includes the random graph models (complete, `G(n,m)`, `G(n,p)`, Watts–Strogatz,
  Barabási–Albert and uniform attachment),
- [`dynamics`] includes the voter models [`VoteGraph`](crate::dynamics::VoteGraph) and
  [`ConflictVoteGraph`](crate::dynamics::ConflictVoteGraph).

In most use-cases, `use netsci::{prelude::*, algo::*};` suffices for your needs.

# Logging

The crate emits [`tracing`] events (generator results, community contraction passes and single
dynamics steps) but never installs a subscriber itself.
*/

pub mod algo;
pub mod dynamics;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::GraphError;
pub use node::*;

/// `netsci::prelude` includes definitions for nodes and edges, the error type, all basic graph operation traits as well as the graph itself.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
