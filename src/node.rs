/*!
# Node Representation

Nodes are plain `u32` identifiers. In contrast to compact `0..n` representations, a [`Graph`](crate::repr::Graph)
does not require its identifiers to be contiguous: removing a node leaves a gap, and generators are
free to pick any id. Components that index arrays by node id (such as the opinion dynamics) check
contiguity themselves.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

