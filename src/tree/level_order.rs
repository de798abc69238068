//! Breadth-first, level-by-level traversal of an [`OrderedTree`].
//!
//! The walk uses a FIFO queue seeded with the root followed by a level
//! delimiter. Real nodes are reported and their children enqueued; when the
//! delimiter comes back out of the queue the current level is finished, and
//! it is re-enqueued only if nodes remain for the next level.
//!
//! This is a diagnostic view: none of the other tree operations depend on it.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt::Display;
use std::io::{self, Write};

use super::OrderedTree;
use super::node::Node;

/// One event of the level-order walk.
pub(super) enum LevelStep<'a, K, V> {
    /// A node at the given depth, in queue order.
    Entry {
        depth: usize,
        key: &'a K,
        value: &'a V,
    },
    /// Every node at `depth` has been reported.
    LevelEnd { depth: usize },
}

impl<K, V> OrderedTree<K, V> {
    /// Drives the delimiter-based breadth-first walk, stopping at the first
    /// error returned by `visit`.
    pub(super) fn walk_levels<'a, E, F>(&'a self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(LevelStep<'a, K, V>) -> Result<(), E>,
    {
        let Some(root) = self.root.as_deref() else {
            return Ok(());
        };

        // `None` is the level delimiter.
        let mut queue: VecDeque<Option<&'a Node<K, V>>> = VecDeque::new();
        queue.push_back(Some(root));
        queue.push_back(None);
        let mut depth = 0;

        while let Some(slot) = queue.pop_front() {
            match slot {
                Some(node) => {
                    visit(LevelStep::Entry {
                        depth,
                        key: &node.key,
                        value: &node.value,
                    })?;
                    if let Some(left) = node.left.as_deref() {
                        queue.push_back(Some(left));
                    }
                    if let Some(right) = node.right.as_deref() {
                        queue.push_back(Some(right));
                    }
                }
                None => {
                    visit(LevelStep::LevelEnd { depth })?;
                    if queue.is_empty() {
                        break;
                    }
                    queue.push_back(None);
                    depth += 1;
                }
            }
        }

        Ok(())
    }

    /// Visits every entry breadth-first, passing its depth (the root is at
    /// depth 0), key and value.
    ///
    /// Within a level, entries are visited left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32, ()> = [5, 3, 8, 1].into_iter().map(|key| (key, ())).collect();
    ///
    /// let mut visited = Vec::new();
    /// tree.traverse_level_order(|depth, key, _| visited.push((depth, *key)));
    /// assert_eq!(visited, vec![(0, 5), (1, 3), (1, 8), (2, 1)]);
    /// ```
    pub fn traverse_level_order<F>(&self, mut visit: F)
    where
        F: FnMut(usize, &K, &V),
    {
        let Ok(()) = self.walk_levels::<Infallible, _>(|step| {
            if let LevelStep::Entry { depth, key, value } = step {
                visit(depth, key, value);
            }
            Ok(())
        });
    }

    /// Returns the number of levels in the tree, or 0 if it is empty.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let balanced: OrderedTree<i32, ()> = [2, 1, 3].into_iter().map(|key| (key, ())).collect();
    /// let degenerate: OrderedTree<i32, ()> = [1, 2, 3].into_iter().map(|key| (key, ())).collect();
    ///
    /// assert_eq!(balanced.height(), 2);
    /// assert_eq!(degenerate.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let mut levels = 0;
        let Ok(()) = self.walk_levels::<Infallible, _>(|step| {
            if let LevelStep::LevelEnd { depth } = step {
                levels = depth + 1;
            }
            Ok(())
        });
        levels
    }

    /// Writes the values level by level to `out`.
    ///
    /// Each level goes on its own line, with values separated by single
    /// spaces and no trailing space. Nothing is written for an empty tree.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error reported by `out`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32, i32> =
    ///     [5, 3, 8, 1, 4, 7, 9].into_iter().map(|key| (key, key)).collect();
    ///
    /// let mut buffer = Vec::new();
    /// tree.write_level_by_level(&mut buffer).unwrap();
    /// assert_eq!(String::from_utf8(buffer).unwrap(), "5\n3 8\n1 4 7 9\n");
    /// ```
    pub fn write_level_by_level<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
        V: Display,
    {
        let mut level_started = false;
        self.walk_levels(|step| match step {
            LevelStep::Entry { value, .. } => {
                if level_started {
                    out.write_all(b" ")?;
                }
                level_started = true;
                write!(out, "{value}")
            }
            LevelStep::LevelEnd { .. } => {
                level_started = false;
                out.write_all(b"\n")
            }
        })
    }

    /// Writes the values level by level to standard output.
    ///
    /// See [`write_level_by_level`](Self::write_level_by_level) for the format.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while writing to or flushing stdout.
    pub fn print_level_by_level(&self) -> io::Result<()>
    where
        V: Display,
    {
        let mut handle = io::stdout().lock();
        self.write_level_by_level(&mut handle)?;
        handle.flush()
    }
}
