//! Error types for [`OrderedTree`](super::OrderedTree) accessors.
//!
//! Only precondition violations are reported here. Rejecting a duplicate key
//! on insert is normal behavior and never produces an error.

use thiserror::Error;

/// Errors returned by the checked accessors of an `OrderedTree`.
///
/// # Examples
///
/// ```rust
/// use ordered_tree::tree::{OrderedTree, TreeError};
///
/// let tree: OrderedTree<i32, i32> = OrderedTree::new();
/// assert_eq!(tree.min(), Err(TreeError::EmptyTree { operation: "min" }));
/// assert_eq!(tree.find(&1), Err(TreeError::KeyNotFound));
/// assert_eq!(
///     TreeError::EmptyTree { operation: "root" }.to_string(),
///     "root called on an empty tree"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The operation needs at least one entry but the tree is empty.
    #[error("{operation} called on an empty tree")]
    EmptyTree {
        /// The accessor that was called (`"root"`, `"min"` or `"max"`).
        operation: &'static str,
    },

    /// No entry with the requested key exists.
    #[error("key not found in tree")]
    KeyNotFound,
}

/// Result type for fallible tree accessors.
pub type TreeResult<T> = Result<T, TreeError>;
