//! # ordered-tree
//!
//! An ordered key-value container backed by an unbalanced binary search tree.
//!
//! ## Overview
//!
//! [`OrderedTree`](tree::OrderedTree) keeps its entries sorted by key. Every
//! node exclusively owns its two subtrees, so the whole structure is a plain
//! ownership tree with no shared or back references.
//!
//! - **Insert**: recursive descent; duplicate keys are rejected, never overwritten
//! - **Erase**: two-child nodes are replaced by their in-order successor
//! - **Lookup**: checked accessors returning [`TreeError`](tree::TreeError)
//! - **Diagnostics**: breadth-first, level-by-level rendering of values
//!
//! ## Feature Flags
//!
//! - `tree`: The container (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` implementations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ordered_tree::prelude::*;
//!
//! let mut tree: OrderedTree<i32, &str> =
//!     [(5, "five"), (3, "three"), (8, "eight")].into_iter().collect();
//!
//! assert_eq!(tree.min(), Ok((&3, &"three")));
//! assert_eq!(tree.erase(&5), Some("five"));
//! assert_eq!(tree.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use ordered_tree::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "tree")]
    pub use crate::tree::*;
}

#[cfg(feature = "tree")]
pub mod tree;
