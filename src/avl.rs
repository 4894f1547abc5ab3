//! An ordered set implemented with an AVL tree.

use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use crate::error::EmptyTreeError;

/// Maximum height difference tolerated between the two subtrees of a node.
const ALLOWED_IMBALANCE: isize = 1;

/// An ordered set implemented with an AVL tree.
///
/// Every insert and remove rebalances the path back to the root, so the height
/// of a tree with `n` values stays below `1.44 * log2(n + 2)`.
///
/// ```
/// use avl_compare::AvlTree;
/// let mut tree = AvlTree::new();
/// tree.insert(5);
/// tree.insert(3);
/// tree.insert(8);
/// assert_eq!(tree.find_min(), Ok(&3));
/// assert_eq!(tree.remove(&3), Some(3));
/// assert!(!tree.contains(&3));
/// ```
#[derive(Clone)]
pub struct AvlTree<T> {
    root: Link<T>,
    num_nodes: usize,
}

#[derive(Clone)]
struct Node<T> {
    key: T,
    left: Link<T>,
    right: Link<T>,
    height: isize,
}

type Link<T> = Option<Box<Node<T>>>;

/// An iterator over the values of an AVL tree in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`AvlTree`].
///
/// [`AvlTree`]: struct.AvlTree.html
/// [`iter`]: struct.AvlTree.html#method.iter
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<T> AvlTree<T> {
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
    pub fn height(&self) -> isize {
        height(&self.root)
    }

    /// Clears the tree, deallocating all memory.
    pub fn clear(&mut self) {
        log::debug!("clearing AVL tree with {} nodes", self.num_nodes);
        self.root = None;
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

    fn adjust_height(node: &mut Node<T>) {
        node.height = 1 + cmp::max(height(&node.left), height(&node.right));
    }

    // k2 is the unbalanced node, k1 its left child.
    fn rotate_right(mut k2: Box<Node<T>>) -> Box<Node<T>> {
        let mut k1 = match k2.left.take() {
            Some(k1) => k1,
            None => return k2,
        };
        k2.left = k1.right.take();
        Self::adjust_height(&mut k2);
        k1.right = Some(k2);
        Self::adjust_height(&mut k1);
        k1
    }

    // k1 is the unbalanced node, k2 its right child.
    fn rotate_left(mut k1: Box<Node<T>>) -> Box<Node<T>> {
        let mut k2 = match k1.right.take() {
            Some(k2) => k2,
            None => return k1,
        };
        k1.right = k2.left.take();
        Self::adjust_height(&mut k1);
        k2.left = Some(k1);
        Self::adjust_height(&mut k2);
        k2
    }

    fn rotate_left_right(mut node: Box<Node<T>>) -> Box<Node<T>> {
        node.left = node.left.take().map(Self::rotate_left);
        Self::rotate_right(node)
    }

    fn rotate_right_left(mut node: Box<Node<T>>) -> Box<Node<T>> {
        node.right = node.right.take().map(Self::rotate_right);
        Self::rotate_left(node)
    }

    /// Restores the AVL condition at the given node if necessary and adjusts its height.
    /// Both subtrees must already be balanced and their heights must not differ by more than 2,
    /// which always holds after a single insert or remove below this node.
    /// Returns the new root of the subtree.
    fn balance(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let left_height = height(&node.left);
        let right_height = height(&node.right);
        debug_assert!(left_height <= right_height + 2);
        debug_assert!(right_height <= left_height + 2);

        if left_height - right_height > ALLOWED_IMBALANCE {
            let outer_is_taller = node
                .left
                .as_ref()
                .map_or(true, |left| height(&left.left) >= height(&left.right));
            node = if outer_is_taller {
                log::trace!("single right rotation at height {}", node.height);
                Self::rotate_right(node)
            } else {
                log::trace!("left-right rotation at height {}", node.height);
                Self::rotate_left_right(node)
            };
        } else if right_height - left_height > ALLOWED_IMBALANCE {
            let outer_is_taller = node
                .right
                .as_ref()
                .map_or(true, |right| height(&right.right) >= height(&right.left));
            node = if outer_is_taller {
                log::trace!("single left rotation at height {}", node.height);
                Self::rotate_left(node)
            } else {
                log::trace!("right-left rotation at height {}", node.height);
                Self::rotate_right_left(node)
            };
        }

        Self::adjust_height(&mut node);
        node
    }

    /// Unlinks the smallest node of a subtree, rebalancing every node on the way back up.
    /// Returns the new root of the subtree and the value of the unlinked node.
    fn remove_min(mut node: Box<Node<T>>) -> (Link<T>, T) {
        match node.left.take() {
            None => {
                let Node { key, right, .. } = *node;
                (right, key)
            }
            Some(left) => {
                let (left, min) = Self::remove_min(left);
                node.left = left;
                (Some(Self::balance(node)), min)
            }
        }
    }
}

impl<T: Ord> AvlTree<T> {
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

    /// Inserts a value into the tree.
    /// Returns false and leaves the tree untouched if an equal value is already present.
    pub fn insert(&mut self, key: T) -> bool {
        let mut inserted = false;
        self.root = Self::insert_into(self.root.take(), key, &mut inserted);
        if inserted {
            self.num_nodes += 1;
        }
        inserted
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
        let mut removed = None;
        self.root = Self::remove_from(self.root.take(), key, &mut removed);
        if removed.is_some() {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
        }
        removed
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Check tree nodes
        let mut num_nodes = 0;
        if let Some(root) = self.root.as_deref() {
            Self::check_node(root, &mut num_nodes);
        }

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);

        // Check ordering across subtrees
        let mut iter = self.iter();
        if let Some(mut previous) = iter.next() {
            for key in iter {
                assert!(previous < key);
                previous = key;
            }
        }
    }

    /// Checks the subtree below `node` and returns its recomputed height.
    #[cfg(any(test, feature = "consistency_check"))]
    fn check_node(node: &Node<T>, num_nodes: &mut usize) -> isize {
        let left_height = match node.left.as_deref() {
            None => -1,
            Some(left) => {
                assert!(left.key < node.key);
                Self::check_node(left, num_nodes)
            }
        };
        let right_height = match node.right.as_deref() {
            None => -1,
            Some(right) => {
                assert!(right.key > node.key);
                Self::check_node(right, num_nodes)
            }
        };

        // Check cached height
        assert_eq!(node.height, 1 + cmp::max(left_height, right_height));

        // Check AVL condition (nearly balance)
        assert!(left_height <= right_height + ALLOWED_IMBALANCE);
        assert!(right_height <= left_height + ALLOWED_IMBALANCE);

        *num_nodes += 1;
        node.height
    }

    fn insert_into(link: Link<T>, key: T, inserted: &mut bool) -> Link<T> {
        let mut node = match link {
            None => {
                *inserted = true;
                return Some(Node::create(key));
            }
            Some(node) => node,
        };
        match key.cmp(&node.key) {
            Ordering::Less => node.left = Self::insert_into(node.left.take(), key, inserted),
            Ordering::Greater => node.right = Self::insert_into(node.right.take(), key, inserted),
            Ordering::Equal => return Some(node),
        }
        Some(Self::balance(node))
    }

    fn remove_from<Q>(link: Link<T>, key: &Q, removed: &mut Option<T>) -> Link<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = link?;
        match key.cmp(node.key.borrow()) {
            Ordering::Less => node.left = Self::remove_from(node.left.take(), key, removed),
            Ordering::Greater => node.right = Self::remove_from(node.right.take(), key, removed),
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, child) | (child, None) => {
                    *removed = Some(node.key);
                    return child;
                }
                (Some(left), Some(right)) => {
                    let (right, successor) = Self::remove_min(right);
                    *removed = Some(mem::replace(&mut node.key, successor));
                    node.left = Some(left);
                    node.right = right;
                }
            },
        }
        Some(Self::balance(node))
    }
}

impl<T> Node<T> {
    fn create(key: T) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 0,
        })
    }
}

fn height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |node| node.height)
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
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

#[cfg(test)]
mod tests {
    use super::AvlTree;
    use crate::EmptyTreeError;

    const N: i32 = 1_000;
    const LARGE_N: i32 = 10_000_000;

    fn preorder<T: Copy>(tree: &AvlTree<T>) -> Vec<T> {
        let mut keys = Vec::new();
        let mut stack: Vec<&super::Node<T>> = tree.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            keys.push(node.key);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        keys
    }

    #[test]
    fn test_new() {
        let tree_i32 = AvlTree::<i32>::new();
        assert!(tree_i32.is_empty());
        assert_eq!(tree_i32.height(), -1);
        tree_i32.check_consistency();

        let tree_i8 = AvlTree::<i8>::new();
        assert!(tree_i8.is_empty());
        tree_i8.check_consistency();

        let tree_string = AvlTree::<String>::new();
        assert!(tree_string.is_empty());
        tree_string.check_consistency();
    }

    #[test]
    fn test_rebalance_insert() {
        {
            //     3 ->   2
            //    /      / \
            //   2      1   3
            //  /
            // 1
            let tree: AvlTree<_> = [3, 2, 1].into_iter().collect();
            tree.check_consistency();
            assert_eq!(tree.height(), 1);
            assert_eq!(preorder(&tree), vec![2, 1, 3]);
        }
        {
            //   3  ->   2
            //  /       / \
            // 1       1   3
            //  \
            //   2
            let tree: AvlTree<_> = [3, 1, 2].into_iter().collect();
            tree.check_consistency();
            assert_eq!(tree.height(), 1);
            assert_eq!(preorder(&tree), vec![2, 1, 3]);
        }
        {
            // 1 ->    2
            //  \     / \
            //   2   1   3
            //    \
            //     3
            let tree: AvlTree<_> = [1, 2, 3].into_iter().collect();
            tree.check_consistency();
            assert_eq!(tree.height(), 1);
            assert_eq!(preorder(&tree), vec![2, 1, 3]);
        }
        {
            // 1   ->  2
            //  \     / \
            //   3   1   3
            //  /
            // 2
            let tree: AvlTree<_> = [1, 3, 2].into_iter().collect();
            tree.check_consistency();
            assert_eq!(tree.height(), 1);
            assert_eq!(preorder(&tree), vec![2, 1, 3]);
        }
    }

    #[test]
    fn test_rebalance_remove() {
        {
            //     3   ->     3 ->   2
            //    / \        /      / \
            //   2   4      2      1   3
            //  /          /
            // 1          1
            let mut tree: AvlTree<_> = [3, 2, 4, 1].into_iter().collect();
            tree.check_consistency();
            assert_eq!(tree.height(), 2);
            assert_eq!(tree.remove(&4), Some(4));
            tree.check_consistency();
            assert_eq!(tree.height(), 1);
            assert_eq!(preorder(&tree), vec![2, 1, 3]);
        }
        {
            //   3   ->   3  ->   2
            //  / \      /       / \
            // 1   4    1       1   3
            //  \        \
            //   2        2
            let mut tree: AvlTree<_> = [3, 1, 4, 2].into_iter().collect();
            assert_eq!(tree.remove(&4), Some(4));
            tree.check_consistency();
            assert_eq!(tree.height(), 1);
            assert_eq!(preorder(&tree), vec![2, 1, 3]);
        }
        {
            //   1     -> 1     ->    2
            //  / \        \         / \
            // 0   2        2       1   3
            //      \        \
            //       3        3
            let mut tree: AvlTree<_> = [1, 0, 2, 3].into_iter().collect();
            assert_eq!(tree.remove(&0), Some(0));
            tree.check_consistency();
            assert_eq!(tree.height(), 1);
            assert_eq!(preorder(&tree), vec![2, 1, 3]);
        }
        {
            //   1   ->  1   ->  2
            //  / \       \     / \
            // 0   3       3   1   3
            //    /       /
            //   2       2
            let mut tree: AvlTree<_> = [1, 0, 3, 2].into_iter().collect();
            assert_eq!(tree.remove(&0), Some(0));
            tree.check_consistency();
            assert_eq!(tree.height(), 1);
            assert_eq!(preorder(&tree), vec![2, 1, 3]);
        }
    }

    #[test]
    fn test_rebalance_successor_path() {
        //         4                  5
        //       /   \              /   \
        //      2     6            2     8
        //     / \   / \    ->    / \   / \
        //    1   3 5   8        1   3 6   9
        //   /         / \      /       \
        //  0         7   9    0         7
        //
        // 5 moves up into the root; unlinking it leaves 6 right-heavy.
        let mut tree: AvlTree<_> = [4, 2, 6, 1, 3, 5, 8, 0, 7, 9].into_iter().collect();
        tree.check_consistency();
        assert_eq!(preorder(&tree), vec![4, 2, 1, 0, 3, 6, 5, 8, 7, 9]);

        assert_eq!(tree.remove(&4), Some(4));
        tree.check_consistency();
        assert_eq!(preorder(&tree), vec![5, 2, 1, 0, 3, 8, 6, 7, 9]);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_rebalance_cascade() {
        //            8                        5
        //         /     \                  /     \
        //        5       10               3       8
        //       / \     /  \             / \     / \
        //      3   6   9    11    ->    2   4   6   11
        //     / \   \         \        /         \  / \
        //    2   4   7         12     1           7 10 12
        //   /
        //  1
        //
        // Removing 9 rotates at 10, which in turn leaves the root left-heavy.
        let mut tree: AvlTree<_> = [8, 5, 10, 3, 6, 9, 11, 2, 4, 7, 12, 1]
            .into_iter()
            .collect();
        tree.check_consistency();
        assert_eq!(tree.height(), 4);

        assert_eq!(tree.remove(&9), Some(9));
        tree.check_consistency();
        assert_eq!(tree.height(), 3);
        assert_eq!(preorder(&tree), vec![5, 3, 2, 1, 4, 8, 6, 7, 11, 10, 12]);
    }

    #[test]
    fn test_remove_two_children() {
        let mut tree: AvlTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
        assert_eq!(tree.remove(&3), Some(3));
        tree.check_consistency();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 4, 5, 7, 8, 9]);
        assert_eq!(preorder(&tree), vec![5, 4, 1, 8, 7, 9]);
        assert!(tree.get(&6).is_none());
        assert_eq!(tree.remove(&6), None);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_find_min_max() {
        let mut tree = AvlTree::new();
        assert_eq!(tree.find_min(), Err(EmptyTreeError));
        assert_eq!(tree.find_max(), Err(EmptyTreeError));

        tree.extend([5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(tree.find_min(), Ok(&1));
        assert_eq!(tree.find_max(), Ok(&9));

        tree.remove(&1);
        tree.remove(&9);
        assert_eq!(tree.find_min(), Ok(&3));
        assert_eq!(tree.find_max(), Ok(&8));

        tree.clear();
        assert_eq!(tree.find_min(), Err(EmptyTreeError));
    }

    #[test]
    fn test_insert() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0);
        let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
        values.sort();
        values.dedup();

        let mut tree = AvlTree::new();
        for value in &values {
            assert!(tree.insert(*value));
            tree.check_consistency();
        }
        assert!(tree.len() == values.len());

        for value in &values {
            assert!(!tree.insert(*value));
        }
        assert!(tree.len() == values.len());
        tree.check_consistency();
    }

    #[test]
    #[ignore]
    fn test_insert_large() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0);

        let mut tree = AvlTree::new();
        for value in (0..LARGE_N).map(|_| rng.gen::<i32>()) {
            tree.insert(value);
        }
        tree.check_consistency();
    }

    #[test]
    fn test_insert_sorted_range() {
        let mut tree = AvlTree::new();
        for value in 0..N {
            assert!(tree.insert(value));
            tree.check_consistency();
        }
        assert!(tree.len() == N as usize);

        // Worst case AVL height
        let bound = 1.44 * ((N + 2) as f64).log2() - 0.33;
        assert!(tree.height() > 0);
        assert!((tree.height() as f64) <= bound);
    }

    #[test]
    fn test_insert_shuffled_range() {
        use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

        let mut values: Vec<i32> = (0..N).collect();
        let mut rng = StdRng::seed_from_u64(0);
        values.shuffle(&mut rng);

        let mut tree = AvlTree::new();
        for value in &values {
            assert!(tree.insert(*value));
            tree.check_consistency();
        }
        assert!(tree.len() == values.len());

        for value in &values {
            assert!(!tree.insert(*value));
        }
        assert!(tree.len() == values.len());
        assert!(tree.get(&-42).is_none());
    }

    #[test]
    fn test_get() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0);
        let values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();

        let mut tree = AvlTree::new();
        assert!(tree.get(&42).is_none());
        for value in &values {
            tree.insert(*value);
        }

        for value in &values {
            assert_eq!(tree.get(value), Some(value));
            assert!(tree.contains(value));
        }
    }

    #[test]
    fn test_get_borrowed() {
        let tree: AvlTree<String> = ["pear", "apple", "fig"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(tree.get("fig").map(String::as_str), Some("fig"));
        assert!(!tree.contains("plum"));
    }

    #[test]
    fn test_clear() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0);
        let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
        values.sort();
        values.dedup();

        let mut tree: AvlTree<_> = values.iter().copied().collect();
        assert!(!tree.is_empty());
        assert!(tree.len() == values.len());

        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.len() == 0);
        assert_eq!(tree.height(), -1);

        for value in &values {
            assert!(tree.insert(*value));
        }
        assert!(!tree.is_empty());
        assert!(tree.len() == values.len());
        tree.check_consistency();
    }

    #[test]
    fn test_remove() {
        use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0);
        let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
        values.sort();
        values.dedup();

        let mut tree: AvlTree<_> = values.iter().copied().collect();

        values.shuffle(&mut rng);
        for value in &values {
            assert!(tree.get(value).is_some());
            assert_eq!(tree.remove(value), Some(*value));
            assert!(tree.get(value).is_none());
            assert_eq!(tree.remove(value), None);
            tree.check_consistency();
        }
        assert!(tree.is_empty());
        assert!(tree.len() == 0);
    }

    #[test]
    fn test_iter() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0);
        let mut values: Vec<i32> = (0..N).map(|_| rng.gen_range(0..N)).collect();

        let tree: AvlTree<_> = values.iter().copied().collect();

        values.sort();
        values.dedup();

        let iter = tree.iter();
        assert_eq!(iter.len(), values.len());
        assert!(iter.eq(values.iter()));

        // A fresh traversal starts from the smallest value again
        let mut value_iter = values.iter();
        for value_in_tree in &tree {
            assert_eq!(Some(value_in_tree), value_iter.next());
        }
        assert!(value_iter.next().is_none());

        assert!(AvlTree::<i32>::new().iter().next().is_none());
    }

    #[test]
    fn test_debug() {
        let tree: AvlTree<_> = [2, 3, 1].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "{1, 2, 3}");
    }

    #[test]
    #[ignore]
    fn test_large() {
        use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0);
        let mut values: Vec<i32> = (0..LARGE_N).map(|_| rng.gen_range(0..LARGE_N)).collect();

        let mut tree: AvlTree<_> = values.iter().copied().collect();
        tree.check_consistency();

        values.shuffle(&mut rng);
        values.resize(values.len() / 2, 0);
        for value in &values {
            tree.remove(value);
        }
        tree.check_consistency();
    }
}
