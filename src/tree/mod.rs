//! Ordered key-value container backed by an unbalanced binary search tree.
//!
//! - [`OrderedTree`]: The container itself
//! - [`TreeError`]: Precondition violations reported by checked accessors
//! - [`OrderedTreeIterator`], [`OrderedTreeIterMut`], [`OrderedTreeIntoIterator`]:
//!   In-order iterators
//!
//! # Ownership
//!
//! Every node owns its left and right subtrees exclusively. There are no
//! parent pointers and no reference counting: moving a subtree means moving
//! the `Box` that holds it.
//!
//! # Examples
//!
//! ```rust
//! use ordered_tree::tree::{OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::new();
//! tree.insert(5, "five");
//! tree.insert(3, "three");
//! tree.insert(8, "eight");
//!
//! assert_eq!(tree.min(), Ok((&3, &"three")));
//! assert_eq!(tree.max(), Ok((&8, &"eight")));
//!
//! // Copies are independent of the original
//! let mut copy = tree.clone();
//! copy.erase(&3);
//! assert!(tree.contains_key(&3));
//! assert!(!copy.contains_key(&3));
//!
//! // Checked accessors report precondition violations
//! tree.clear();
//! assert_eq!(tree.max(), Err(TreeError::EmptyTree { operation: "max" }));
//! ```

mod error;
mod iter;
mod level_order;
mod node;
mod ordered_tree;

pub use error::TreeError;
pub use error::TreeResult;
pub use iter::OrderedTreeIntoIterator;
pub use iter::OrderedTreeIterMut;
pub use iter::OrderedTreeIterator;
pub use ordered_tree::OrderedTree;
