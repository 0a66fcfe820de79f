use thiserror::Error;

use crate::NodeRef;

/// Result type for fallible tree operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by [`AvlTree`](crate::AvlTree) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The key passed to a remove call is not present in the tree.
    #[error("key not found")]
    NotFound,

    /// The handle refers to a node that has since been removed from the tree.
    #[error("stale node handle {0}")]
    StaleHandle(NodeRef),
}
