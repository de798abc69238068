//! Node storage and whole-subtree operations.
//!
//! Every node exclusively owns its children through `Box`, so a subtree
//! changes owner only by moving its `Link`.

use smallvec::SmallVec;

/// Inline capacity of the teardown work-list before it spills to the heap.
const TEARDOWN_INLINE_CAPACITY: usize = 32;

/// An owned, possibly absent subtree.
pub(super) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single entry of the tree together with its two owned subtrees.
pub(super) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Creates a node with no children.
    pub(super) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// Descends strictly left until no further child exists.
    pub(super) fn leftmost(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }

    /// Descends strictly right until no further child exists.
    pub(super) fn rightmost(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        current
    }

    /// Swaps the given pair with the pair stored in the leftmost node of this
    /// subtree.
    pub(super) fn exchange_with_leftmost(&mut self, key: &mut K, value: &mut V) {
        match self.left.as_deref_mut() {
            Some(left) => left.exchange_with_leftmost(key, value),
            None => {
                std::mem::swap(&mut self.key, key);
                std::mem::swap(&mut self.value, value);
            }
        }
    }
}

/// Deep-copies a subtree, preserving its shape.
///
/// Recursion depth equals the height of the subtree.
pub(super) fn copy_subtree<K: Clone, V: Clone>(link: &Link<K, V>) -> Link<K, V> {
    link.as_ref().map(|node| {
        Box::new(Node {
            key: node.key.clone(),
            value: node.value.clone(),
            left: copy_subtree(&node.left),
            right: copy_subtree(&node.right),
        })
    })
}

/// Releases every node of a subtree, children before parent.
///
/// Uses an explicit work-list instead of recursion, so the call stack stays
/// flat no matter how degenerate the subtree is. A node is dropped only once
/// both of its links are empty. Returns the number of released nodes.
pub(super) fn release_subtree<K, V>(link: Link<K, V>) -> usize {
    let mut pending: SmallVec<[Box<Node<K, V>>; TEARDOWN_INLINE_CAPACITY]> =
        link.into_iter().collect();
    let mut released = 0;

    while let Some(mut node) = pending.pop() {
        let left = node.left.take();
        let right = node.right.take();

        if left.is_none() && right.is_none() {
            drop(node);
            released += 1;
        } else {
            // Revisit the parent after its children are gone.
            pending.push(node);
            pending.extend(left);
            pending.extend(right);
        }
    }

    released
}
