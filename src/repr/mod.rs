/*!
# Graph Representation

This crate uses a single representation, the adjacency-set [`Graph`]. Nodes are arbitrary `u32`
identifiers mapped to a hash set of their neighbors, which makes node and edge removal cheap and
allows the dynamics in [`crate::dynamics`] to cut edges while a simulation is running.

All access goes through the traits in [`crate::ops`]; the underlying map is never exposed mutably,
so the symmetry and no-self-loop invariants hold for every reachable state.
*/

use crate::{error::*, ops::*, *};

mod adjacency;

pub use adjacency::*;
