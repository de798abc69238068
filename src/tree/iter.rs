//! In-order iterators over an [`OrderedTree`](super::OrderedTree).
//!
//! Each iterator keeps an explicit stack holding the left spine of the part
//! of the tree not yet visited, so memory use is bounded by the tree height
//! and no recursion is involved.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::node::{self, Link, Node};

/// Inline stack capacity; trees at most this tall never touch the heap.
const SPINE_INLINE_CAPACITY: usize = 16;

// =============================================================================
// Borrowing Iterator
// =============================================================================

/// An iterator over key-value pairs of an [`OrderedTree`](super::OrderedTree),
/// in ascending key order.
pub struct OrderedTreeIterator<'a, K, V> {
    spine: SmallVec<[&'a Node<K, V>; SPINE_INLINE_CAPACITY]>,
    remaining: usize,
}

impl<'a, K, V> OrderedTreeIterator<'a, K, V> {
    pub(super) fn new(root: &'a Link<K, V>, length: usize) -> Self {
        let mut iterator = Self {
            spine: SmallVec::new(),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut link: &'a Link<K, V>) {
        while let Some(node) = link.as_deref() {
            self.spine.push(node);
            link = &node.left;
        }
    }
}

impl<'a, K, V> Iterator for OrderedTreeIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.spine.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for OrderedTreeIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for OrderedTreeIterator<'_, K, V> {}

impl<K, V> Clone for OrderedTreeIterator<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            spine: self.spine.clone(),
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// Mutable Iterator
// =============================================================================

/// An iterator over key-value pairs of an [`OrderedTree`](super::OrderedTree)
/// with mutable access to the values, in ascending key order.
pub struct OrderedTreeIterMut<'a, K, V> {
    spine: SmallVec<[(&'a K, &'a mut V, &'a mut Link<K, V>); SPINE_INLINE_CAPACITY]>,
    remaining: usize,
}

impl<'a, K, V> OrderedTreeIterMut<'a, K, V> {
    pub(super) fn new(root: &'a mut Link<K, V>, length: usize) -> Self {
        let mut iterator = Self {
            spine: SmallVec::new(),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator
    }

    /// Splits every node on the left spine into its entry and its right
    /// link, which are disjoint borrows.
    fn push_left_spine(&mut self, link: &'a mut Link<K, V>) {
        let mut current = link.as_deref_mut();
        while let Some(node) = current {
            let Node {
                key,
                value,
                left,
                right,
            } = node;
            self.spine.push((&*key, value, right));
            current = left.as_deref_mut();
        }
    }
}

impl<'a, K, V> Iterator for OrderedTreeIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value, right) = self.spine.pop()?;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for OrderedTreeIterMut<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for OrderedTreeIterMut<'_, K, V> {}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over key-value pairs of an
/// [`OrderedTree`](super::OrderedTree), in ascending key order.
///
/// Nodes on the stack have already been detached from their left subtree.
/// Dropping the iterator early releases whatever was not consumed without
/// recursion.
pub struct OrderedTreeIntoIterator<K, V> {
    spine: SmallVec<[Box<Node<K, V>>; SPINE_INLINE_CAPACITY]>,
    remaining: usize,
}

impl<K, V> OrderedTreeIntoIterator<K, V> {
    pub(super) fn new(root: Link<K, V>, length: usize) -> Self {
        let mut iterator = Self {
            spine: SmallVec::new(),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut link: Link<K, V>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.spine.push(node);
        }
    }
}

impl<K, V> Iterator for OrderedTreeIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.spine.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        let Node { key, value, .. } = *node;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for OrderedTreeIntoIterator<K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for OrderedTreeIntoIterator<K, V> {}

impl<K, V> Drop for OrderedTreeIntoIterator<K, V> {
    fn drop(&mut self) {
        while let Some(mut node) = self.spine.pop() {
            node::release_subtree(node.right.take());
        }
    }
}
