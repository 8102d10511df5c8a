//! Precondition failures reported by [`Graph`](crate::Graph) operations.

/// A graph operation was called with a node that does not exist.
///
/// Each variant names the operation whose precondition was violated. Outcomes
/// that a caller is expected to handle routinely (duplicate insertion, missing
/// edge on erase) are not errors and are reported as `bool` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphError {
    /// `insert_edge` was given a source or destination that is not a node.
    InsertEdge,
    /// `replace_node` was given an old value that is not a node.
    ReplaceNode,
    /// `merge_replace_node` was given an old or new value that is not a node.
    MergeReplaceNode,
    /// `erase_edge` was given a source or destination that is not a node.
    EraseEdge,
    /// `weights` was given a source or destination that is not a node.
    Weights,
    /// `connections` was given a source that is not a node.
    Connections,
}

impl GraphError {
    /// Name of the operation that rejected its arguments.
    pub fn operation(self) -> &'static str {
        match self {
            Self::InsertEdge => "insert_edge",
            Self::ReplaceNode => "replace_node",
            Self::MergeReplaceNode => "merge_replace_node",
            Self::EraseEdge => "erase_edge",
            Self::Weights => "weights",
            Self::Connections => "connections",
        }
    }
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InsertEdge => {
                f.write_str("cannot call Graph::insert_edge when either src or dst node does not exist")
            }
            Self::ReplaceNode => f.write_str("cannot call Graph::replace_node on a node that doesn't exist"),
            Self::MergeReplaceNode => f.write_str(
                "cannot call Graph::merge_replace_node on old or new data if they don't exist in the graph",
            ),
            Self::EraseEdge => f.write_str(
                "cannot call Graph::erase_edge on src or dst if they don't exist in the graph",
            ),
            Self::Weights => {
                f.write_str("cannot call Graph::weights if src or dst node don't exist in the graph")
            }
            Self::Connections => {
                f.write_str("cannot call Graph::connections if src doesn't exist in the graph")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Result alias for fallible graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
