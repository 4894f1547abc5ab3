//! An ordered set implemented with a plain, unbalanced binary search tree.
//!
//! The tree never restructures itself, so its shape is fully determined by the
//! insertion order. Feeding it sorted input degrades it into a chain of height `n - 1`.
//! All operations walk the tree with loops and explicit stacks, never recursion,
//! so such chains cannot exhaust the call stack.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use crate::error::EmptyTreeError;

/// An ordered set implemented with an unbalanced binary search tree.
///
/// ```
/// use avl_compare::BinarySearchTree;
/// let mut tree = BinarySearchTree::new();
/// tree.insert(1);
/// tree.insert(2);
/// tree.insert(3);
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.remove(&2), Some(2));
/// assert!(tree.get(&2).is_none());
/// ```
pub struct BinarySearchTree<T> {
    root: Link<T>,
    num_nodes: usize,
}

struct Node<T> {
    key: T,
    left: Link<T>,
    right: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// An iterator over the values of a binary search tree in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`BinarySearchTree`].
///
/// [`BinarySearchTree`]: struct.BinarySearchTree.html
/// [`iter`]: struct.BinarySearchTree.html#method.iter
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates an empty tree.
    /// No memory is allocated until the first value is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the tree contains no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree: -1 when empty, 0 for a single value.
    ///
    /// Heights are not cached, so this walks the whole tree level by level.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        height
    }

    /// Clears the tree, deallocating all memory.
    pub fn clear(&mut self) {
        // Unlink children before dropping a node, so no drop recurses down a long chain.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.num_nodes = 0;
    }

    /// Returns the smallest value in the tree.
    pub fn find_min(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root.as_deref().ok_or(EmptyTreeError)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// Returns the largest value in the tree.
    pub fn find_max(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root.as_deref().ok_or(EmptyTreeError)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.key)
    }

    /// Gets an iterator over the values of the tree in ascending order.
    ///
    /// The iterator borrows the tree, so the tree cannot be modified while a
    /// traversal is in progress. Call `iter` again to start a new traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.num_nodes)
    }

    // Unlinks the smallest node below `link` and returns its value.
    fn take_min(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let Node { key, right, .. } = *link.take()?;
        *link = right;
        Some(key)
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Returns a reference to the value in the tree that is equal to the given value.
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering
    /// on the borrowed form *must* match the ordering on the value type.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Returns true if the tree contains a value.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Inserts a value as a new leaf.
    /// Returns false and leaves the tree untouched if an equal value is already present.
    pub fn insert(&mut self, key: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Equal => return false,
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Box::new(Node {
            key,
            left: None,
            right: None,
        }));
        self.num_nodes += 1;
        true
    }

    /// Removes a value from the tree.
    /// Returns the value if it was previously in the tree.
    ///
    /// A node with two children keeps its place in the tree: it takes over the value
    /// of its in-order successor, and the successor's node is unlinked instead.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let link = Self::find_link(&mut self.root, key)?;
        let removed = match link {
            Some(node) if node.left.is_some() && node.right.is_some() => {
                let successor = Self::take_min(&mut node.right)?;
                mem::replace(&mut node.key, successor)
            }
            _ => {
                let Node { key, left, right } = *link.take()?;
                *link = left.or(right);
                key
            }
        };
        debug_assert!(self.num_nodes >= 1);
        self.num_nodes -= 1;
        Some(removed)
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // In-order traversal must be strictly ascending
        let mut num_nodes = 0;
        let mut previous: Option<&T> = None;
        for key in self.iter() {
            if let Some(previous) = previous {
                assert!(previous < key);
            }
            previous = Some(key);
            num_nodes += 1;
        }

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(self.is_empty(), self.num_nodes == 0);
    }

    // Returns the link that holds the node equal to `key`.
    fn find_link<'a, Q>(mut link: &'a mut Link<T>, key: &Q) -> Option<&'a mut Link<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        loop {
            let ordering = key.cmp(link.as_ref()?.key.borrow());
            link = match ordering {
                Ordering::Equal => return Some(link),
                Ordering::Less => &mut link.as_mut()?.left,
                Ordering::Greater => &mut link.as_mut()?.right,
            };
        }
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
