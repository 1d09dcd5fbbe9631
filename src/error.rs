//! Error type shared by graph mutation, analysis, generation and dynamics.

use thiserror::Error;

use crate::{Edge, Node};

/// Result alias for `netsci`.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors returned by fallible graph operations.
///
/// Every operation returning an error leaves the structure it was called on untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An operation addressed a node that is not part of the graph.
    #[error("node {0} is not part of the graph")]
    NodeNotFound(Node),

    /// An operation addressed an edge that is not part of the graph.
    #[error("edge {0} is not part of the graph")]
    EdgeNotFound(Edge),

    /// A parameter was outside of its admissible range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// What is wrong with the supplied value.
        reason: String,
    },

    /// A voting step selected a node without neighbors.
    #[error("node {0} has no neighbors to vote with")]
    IsolatedNode(Node),

    /// A node had to be sampled from a graph without nodes.
    #[error("the graph has no nodes")]
    EmptyGraph,

    /// A conflict edge was requested while every edge is in agreement.
    #[error("there are no conflict edges left")]
    NoConflictEdges,
}

impl GraphError {
    /// Shorthand for [`GraphError::InvalidArgument`]
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GraphError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::NodeNotFound(4).to_string(),
            "node 4 is not part of the graph"
        );
        assert_eq!(
            GraphError::EdgeNotFound(Edge(1, 2)).to_string(),
            "edge (1,2) is not part of the graph"
        );
        assert_eq!(
            GraphError::invalid("prob", "must lie in [0, 1]").to_string(),
            "invalid argument `prob`: must lie in [0, 1]"
        );
    }
}
