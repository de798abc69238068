//! Ordered key-value container backed by an unbalanced binary search tree.
//!
//! This module provides [`OrderedTree`], a mutable ordered map whose nodes
//! exclusively own their subtrees.
//!
//! # Overview
//!
//! - O(height) `find`, `insert`, `erase`
//! - O(height) `min`/`max`
//! - O(1) `len`, `is_empty` and `root`
//!
//! No rebalancing is ever performed, so the height depends on the insertion
//! order. Inserting keys in sorted order produces a list-shaped tree whose
//! height equals its length.
//!
//! # Examples
//!
//! ```rust
//! use ordered_tree::tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key, key * 10);
//! }
//!
//! let keys: Vec<&i32> = tree.keys().collect();
//! assert_eq!(keys, vec![&1, &3, &4, &5, &7, &8, &9]);
//!
//! // Erasing a node with two children promotes its in-order successor
//! assert_eq!(tree.erase(&5), Some(50));
//! assert_eq!(tree.root(), Ok((&7, &70)));
//! ```
//!
//! # Internal Structure
//!
//! The tree maintains the following invariants:
//! 1. Every key in a node's left subtree is strictly less than the node's key
//! 2. Every key in a node's right subtree is strictly greater than the node's key
//! 3. The stored length equals the number of reachable nodes

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::Index;

use super::error::{TreeError, TreeResult};
use super::iter::{OrderedTreeIntoIterator, OrderedTreeIterMut, OrderedTreeIterator};
use super::node::{self, Link, Node};

// =============================================================================
// Insert Payload
// =============================================================================

/// How an inserted pair is transferred into a freshly created leaf.
///
/// Owned pairs are moved into the leaf; borrowed pairs are cloned, and only
/// once the descent has found an absent position.
trait InsertPayload<K, V> {
    fn key(&self) -> &K;

    fn into_entry(self) -> (K, V);
}

impl<K, V> InsertPayload<K, V> for (K, V) {
    fn key(&self) -> &K {
        &self.0
    }

    fn into_entry(self) -> (K, V) {
        self
    }
}

impl<K: Clone, V: Clone> InsertPayload<K, V> for &(K, V) {
    fn key(&self) -> &K {
        &self.0
    }

    fn into_entry(self) -> (K, V) {
        self.clone()
    }
}

// =============================================================================
// OrderedTree Definition
// =============================================================================

/// An ordered map backed by an unbalanced binary search tree.
///
/// Keys must implement `Ord`. Each key is stored at most once: inserting a
/// key that is already present leaves the stored value untouched.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `find`/`get`   | O(height)         |
/// | `insert`       | O(height)         |
/// | `erase`        | O(height)         |
/// | `contains_key` | O(height)         |
/// | `min`/`max`    | O(height)         |
/// | `root`         | O(1)              |
/// | `len`          | O(1)              |
/// | `clear`        | O(N)              |
///
/// # Examples
///
/// ```rust
/// use ordered_tree::tree::OrderedTree;
///
/// let mut tree = OrderedTree::singleton(2, "two");
/// assert!(!tree.insert(2, "TWO")); // duplicates are rejected
/// assert_eq!(tree.find(&2), Ok(&"two"));
/// ```
pub struct OrderedTree<K, V> {
    /// Root node of the tree
    pub(super) root: Link<K, V>,
    /// Number of entries
    pub(super) length: usize,
}

impl<K, V> OrderedTree<K, V> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32, String> = OrderedTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the entry stored at the root.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree has no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::{OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.root(), Err(TreeError::EmptyTree { operation: "root" }));
    ///
    /// tree.insert(5, "five");
    /// tree.insert(3, "three");
    /// assert_eq!(tree.root(), Ok((&5, &"five")));
    /// ```
    pub fn root(&self) -> TreeResult<(&K, &V)> {
        self.root
            .as_deref()
            .map(|node| (&node.key, &node.value))
            .ok_or(TreeError::EmptyTree { operation: "root" })
    }

    /// Returns the entry with the minimum key.
    ///
    /// Descends strictly left from the root.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree has no entries.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32, &str> =
    ///     [(3, "three"), (1, "one"), (2, "two")].into_iter().collect();
    /// assert_eq!(tree.min(), Ok((&1, &"one")));
    /// ```
    pub fn min(&self) -> TreeResult<(&K, &V)> {
        self.root
            .as_deref()
            .map(Node::leftmost)
            .map(|node| (&node.key, &node.value))
            .ok_or(TreeError::EmptyTree { operation: "min" })
    }

    /// Returns the entry with the maximum key.
    ///
    /// Descends strictly right from the root.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree has no entries.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32, &str> =
    ///     [(3, "three"), (1, "one"), (2, "two")].into_iter().collect();
    /// assert_eq!(tree.max(), Ok((&3, &"three")));
    /// ```
    pub fn max(&self) -> TreeResult<(&K, &V)> {
        self.root
            .as_deref()
            .map(Node::rightmost)
            .map(|node| (&node.key, &node.value))
            .ok_or(TreeError::EmptyTree { operation: "max" })
    }

    /// Removes every entry, releasing child nodes before their parents.
    ///
    /// Teardown walks an explicit work-list, so even a list-shaped tree is
    /// released without deep recursion. Clearing an empty tree does nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<i32, i32> = (0..10).map(|key| (key, key)).collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert!(tree.min().is_err());
    /// ```
    pub fn clear(&mut self) {
        let released = node::release_subtree(self.root.take());
        self.length = 0;
        tracing::debug!(released, "cleared ordered tree");
    }

    /// Moves every entry out into a new tree, leaving this one empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut source = OrderedTree::singleton(1, "one");
    /// let target = source.take();
    ///
    /// assert_eq!(target.len(), 1);
    /// assert!(source.is_empty());
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Returns an iterator over entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32, char> = [(2, 'b'), (1, 'a')].into_iter().collect();
    /// let entries: Vec<(&i32, &char)> = tree.iter().collect();
    /// assert_eq!(entries, vec![(&1, &'a'), (&2, &'b')]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> OrderedTreeIterator<'_, K, V> {
        OrderedTreeIterator::new(&self.root, self.length)
    }

    /// Returns an iterator over entries in ascending key order, with mutable
    /// access to the values.
    pub fn iter_mut(&mut self) -> OrderedTreeIterMut<'_, K, V> {
        OrderedTreeIterMut::new(&mut self.root, self.length)
    }

    /// Returns an iterator over keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32, i32> = [(2, 20), (1, 10), (3, 30)].into_iter().collect();
    /// let sum: i32 = tree.values().sum();
    /// assert_eq!(sum, 60);
    /// ```
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over mutable values in ascending key order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.iter_mut().map(|(_, value)| value)
    }
}

impl<K: Ord, V> OrderedTree<K, V> {
    /// Creates a tree containing a single entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree = OrderedTree::singleton(42, "answer");
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.root(), Ok((&42, &"answer")));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self {
        Self {
            root: Some(Box::new(Node::leaf(key, value))),
            length: 1,
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree = OrderedTree::singleton("hello".to_string(), 42);
    /// assert_eq!(tree.get("hello"), Some(&42));
    /// assert_eq!(tree.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::find_node(&self.root, key).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::find_node_mut(&mut self.root, key).map(|node| &mut node.value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no entry has this key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::{OrderedTree, TreeError};
    ///
    /// let tree = OrderedTree::singleton(1, "one");
    /// assert_eq!(tree.find(&1), Ok(&"one"));
    /// assert_eq!(tree.find(&2), Err(TreeError::KeyNotFound));
    /// ```
    pub fn find<Q>(&self, key: &Q) -> TreeResult<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).ok_or(TreeError::KeyNotFound)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no entry has this key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::singleton(1, 10);
    /// *tree.find_mut(&1).unwrap() += 5;
    /// assert_eq!(tree.find(&1), Ok(&15));
    /// ```
    pub fn find_mut<Q>(&mut self, key: &Q) -> TreeResult<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_mut(key).ok_or(TreeError::KeyNotFound)
    }

    /// Returns `true` if the tree contains an entry for the specified key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::find_node(&self.root, key).is_some()
    }

    /// Recursive descent shared by the read-only lookups.
    fn find_node<'a, Q>(link: &'a Link<K, V>, key: &Q) -> Option<&'a Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        link.as_deref()
            .and_then(|node| match key.cmp(node.key.borrow()) {
                Ordering::Less => Self::find_node(&node.left, key),
                Ordering::Greater => Self::find_node(&node.right, key),
                Ordering::Equal => Some(node),
            })
    }

    /// Recursive descent shared by the mutable lookups.
    fn find_node_mut<'a, Q>(link: &'a mut Link<K, V>, key: &Q) -> Option<&'a mut Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = link.as_deref_mut()?;
        match key.cmp(node.key.borrow()) {
            Ordering::Less => Self::find_node_mut(&mut node.left, key),
            Ordering::Greater => Self::find_node_mut(&mut node.right, key),
            Ordering::Equal => Some(node),
        }
    }

    /// Inserts a key-value pair, moving it into the tree.
    ///
    /// If the key is already present the tree is left unchanged: the stored
    /// value is kept and the given pair is dropped.
    ///
    /// Returns `true` if a new entry was created.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.insert(2, "first"));
    /// assert!(!tree.insert(2, "second"));
    ///
    /// assert_eq!(tree.find(&2), Ok(&"first"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.insert_pair((key, value))
    }

    /// Inserts a `(key, value)` pair, moving it into the tree.
    ///
    /// Behaves exactly like [`insert`](Self::insert).
    pub fn insert_pair(&mut self, pair: (K, V)) -> bool {
        self.insert_payload(pair)
    }

    /// Inserts a copy of a borrowed `(key, value)` pair.
    ///
    /// The pair is cloned only if its key is not yet present; the caller's
    /// pair is never modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let pair = (1, "one".to_string());
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.insert_cloned(&pair));
    ///
    /// assert_eq!(tree.find(&1), Ok(&pair.1));
    /// ```
    pub fn insert_cloned(&mut self, pair: &(K, V)) -> bool
    where
        K: Clone,
        V: Clone,
    {
        self.insert_payload(pair)
    }

    fn insert_payload<P: InsertPayload<K, V>>(&mut self, payload: P) -> bool {
        let inserted = Self::insert_into_link(&mut self.root, payload);
        if inserted {
            self.length += 1;
            tracing::trace!(length = self.length, "inserted new leaf");
        }
        inserted
    }

    /// Recursive helper for insert.
    /// Returns `true` if a new leaf was created at an absent position.
    fn insert_into_link<P: InsertPayload<K, V>>(link: &mut Link<K, V>, payload: P) -> bool {
        match link {
            None => {
                let (key, value) = payload.into_entry();
                *link = Some(Box::new(Node::leaf(key, value)));
                true
            }
            Some(node) => match payload.key().cmp(&node.key) {
                Ordering::Less => Self::insert_into_link(&mut node.left, payload),
                Ordering::Greater => Self::insert_into_link(&mut node.right, payload),
                // Duplicate keys never overwrite the stored value
                Ordering::Equal => false,
            },
        }
    }

    /// Removes the entry for a key, returning its value.
    ///
    /// Does nothing and returns `None` if the key is absent. A node with two
    /// children takes over the entry of its in-order successor (the minimum
    /// of its right subtree), and the successor's node is removed instead, so
    /// exactly one node is released per successful erase.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<i32, &str> =
    ///     [(5, "five"), (3, "three"), (8, "eight"), (7, "seven")].into_iter().collect();
    ///
    /// assert_eq!(tree.erase(&5), Some("five"));
    /// assert_eq!(tree.erase(&5), None);
    /// assert_eq!(tree.root(), Ok((&7, &"seven")));
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn erase<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, removed) = Self::erase_from_link(self.root.take(), key);
        self.root = root;

        if removed.is_some() {
            self.length -= 1;
            tracing::trace!(length = self.length, "erased node");
        }
        removed
    }

    /// Recursive helper for erase.
    ///
    /// Takes ownership of a subtree and returns its (possibly new) root along
    /// with the removed value, so every parent rewires its link on the way
    /// back up.
    fn erase_from_link<Q>(link: Link<K, V>, key: &Q) -> (Link<K, V>, Option<V>)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(mut node) = link else {
            return (None, None);
        };

        match key.cmp(node.key.borrow()) {
            Ordering::Less => {
                let (left, removed) = Self::erase_from_link(node.left.take(), key);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::erase_from_link(node.right.take(), key);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => {
                if node.left.is_some()
                    && let Some(right) = node.right.as_deref_mut()
                {
                    // Promote the successor's pair into this node. The doomed
                    // pair lands in the leftmost node of the right subtree,
                    // where it is still smaller than every other key. The
                    // descent below must search for `key`, not `node.key`:
                    // `node.key` now holds the promoted successor.
                    right.exchange_with_leftmost(&mut node.key, &mut node.value);
                    tracing::trace!("promoted in-order successor");

                    let (right, removed) = Self::erase_from_link(node.right.take(), key);
                    node.right = right;
                    return (Some(node), removed);
                }

                let child = node.left.take().or_else(|| node.right.take());
                let Node { value, .. } = *node;
                (child, Some(value))
            }
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for OrderedTree<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for OrderedTree<K, V> {
    fn drop(&mut self) {
        node::release_subtree(self.root.take());
    }
}

impl<K: Clone, V: Clone> Clone for OrderedTree<K, V> {
    /// Deep-copies every node, preserving the shape of the tree.
    fn clone(&self) -> Self {
        Self {
            root: node::copy_subtree(&self.root),
            length: self.length,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = node::copy_subtree(&source.root);
        self.length = source.length;
    }
}

impl<K: Ord, V> From<(K, V)> for OrderedTree<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::singleton(key, value)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for pair in iter {
            self.insert_pair(pair);
        }
    }
}

impl<K, V> IntoIterator for OrderedTree<K, V> {
    type Item = (K, V);
    type IntoIter = OrderedTreeIntoIterator<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let length = mem::replace(&mut self.length, 0);
        OrderedTreeIntoIterator::new(self.root.take(), length)
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = OrderedTreeIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut OrderedTree<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = OrderedTreeIterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Two trees are equal when they hold the same entries, whatever their shape.
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedTree<K, V> {}

impl<K, Q, V> Index<&Q> for OrderedTree<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present. Use [`OrderedTree::find`] for a
    /// checked lookup.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not found in OrderedTree")
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for OrderedTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(OrderedTree<i32, String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(OrderedTree<i32, std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for OrderedTree<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    /// Serializes entries in level order, so that re-inserting them in the
    /// same order rebuilds a tree of identical shape.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use super::level_order::LevelStep;
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        self.walk_levels(|step| match step {
            LevelStep::Entry { key, value, .. } => map.serialize_entry(key, value),
            LevelStep::LevelEnd { .. } => Ok(()),
        })?;
        map.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedTreeVisitor<K, V> {
    key_marker: std::marker::PhantomData<K>,
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<K, V> OrderedTreeVisitor<K, V> {
    const fn new() -> Self {
        Self {
            key_marker: std::marker::PhantomData,
            value_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for OrderedTreeVisitor<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    type Value = OrderedTree<K, V>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        // Repeated keys keep their first value, as with `insert`.
        let mut tree = OrderedTree::new();
        while let Some((key, value)) = access.next_entry()? {
            tree.insert(key, value);
        }
        Ok(tree)
    }
}

/// Rebuilds a tree by inserting entries in the order they are read.
///
/// # Panics
///
/// Insertion recurses once per level, so a large map whose keys arrive in
/// sorted order builds a list-shaped tree and can overflow the stack.
/// Maps produced by `Serialize` are written in level order and rebuild the
/// tree at its original height.
#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for OrderedTree<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedTreeVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
