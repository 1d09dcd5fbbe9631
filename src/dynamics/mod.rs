/*!
# Opinion Dynamics

Binary voter models running on top of a [`Graph`]. Every node holds an [`Opinion`] from `{0, 1}`
stored in an array indexed by node id, so the graphs used here must have exactly the nodes `0..n`.

- [`VoteGraph`] implements the classic *push* and *pull* voter models in which a random node copies
  (or imposes) the opinion of a random neighbor.
- [`ConflictVoteGraph`] additionally maintains the set of *conflict edges*, i.e. edges whose
  endpoints disagree. A step either resolves a conflict by voting along it or severs it by removing
  the edge. The set is updated incrementally and always equals its brute-force recomputation.

The models never decide on termination themselves: callers loop until
[`VoteGraph::is_homogenized`] or until [`ConflictVoteGraph::has_conflicts`] is *false*, imposing an
iteration cap if needed.

# Example
```
use netsci::{prelude::*, gens::*, dynamics::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(42);
let mut votes = VoteGraph::new(Graph::complete(10), rng).unwrap();

let mut steps = 0;
while !votes.is_homogenized() && steps < 100_000 {
    votes.vote_pull(rng).unwrap();
    steps += 1;
}
assert!(votes.is_homogenized());
```
*/

use rand::Rng;
use tracing::trace;

use crate::{error::*, prelude::*};

mod conflict;
mod vote;

pub use conflict::*;
pub use vote::*;

/// Binary opinion held by a node
pub type Opinion = u8;

/// Draws `n` opinions independently and uniformly from `{0, 1}`
fn random_opinions<R: Rng>(rng: &mut R, n: NumNodes) -> Vec<Opinion> {
    (0..n).map(|_| rng.random_range(0..=1)).collect()
}

/// Checks that the ids of `graph` are exactly `0..n`
fn check_contiguous(graph: &Graph) -> Result<()> {
    let n = graph.number_of_nodes();
    match graph.max_node() {
        Some(max) if max as u64 + 1 != n as u64 => Err(GraphError::invalid(
            "graph",
            format!("node ids must be 0..{n}, found id {max}"),
        )),
        _ => Ok(()),
    }
}

/// Checks that `values` holds one opinion from `{0, 1}` per node
fn check_opinions(graph: &Graph, values: &[Opinion]) -> Result<()> {
    if values.len() != graph.len() {
        return Err(GraphError::invalid(
            "values",
            format!("expected {} opinions, got {}", graph.len(), values.len()),
        ));
    }

    if let Some(x) = values.iter().find(|&&x| x > 1) {
        return Err(GraphError::invalid(
            "values",
            format!("opinion {x} is not within {{0, 1}}"),
        ));
    }

    Ok(())
}
