//! Two ordered sets over the same API: an [`AvlTree`] that rebalances itself after
//! every insert and remove, and a plain [`BinarySearchTree`] that never does.
//!
//! Feeding both the same sequence of values shows what the rebalancing buys:
//! sorted input turns the unbalanced tree into a chain, while the AVL tree keeps
//! logarithmic height.
//!
//! ```
//! use avl_compare::{AvlTree, BinarySearchTree, SearchTree};
//!
//! fn build<S: SearchTree<u32>>(n: u32) -> S {
//!     let mut tree = S::default();
//!     for value in 0..n {
//!         tree.insert(value);
//!     }
//!     tree
//! }
//!
//! let avl: AvlTree<u32> = build(1_000);
//! let bst: BinarySearchTree<u32> = build(1_000);
//! assert_eq!(bst.height(), 999);
//! assert!(avl.height() < 15);
//! assert!(avl.iter().eq(bst.iter()));
//! ```

pub mod avl;
pub mod bst;
mod error;

pub use avl::AvlTree;
pub use bst::BinarySearchTree;
pub use error::EmptyTreeError;

/// The operations shared by both trees.
///
/// Lets comparison code build, query and shrink either tree through one interface.
pub trait SearchTree<T: Ord>: Default {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Inserts a value. Returns false if an equal value was already present.
    fn insert(&mut self, key: T) -> bool;

    /// Returns the stored value equal to `key`.
    fn get(&self, key: &T) -> Option<&T>;

    /// Removes a value, returning it if it was present.
    fn remove(&mut self, key: &T) -> Option<T>;

    fn find_min(&self) -> Result<&T, EmptyTreeError>;

    fn find_max(&self) -> Result<&T, EmptyTreeError>;

    fn len(&self) -> usize;

    /// Height of the tree, -1 when empty.
    fn height(&self) -> isize;

    /// Iterates over all values in ascending order.
    fn iter(&self) -> Self::Iter<'_>;

    fn contains(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> SearchTree<T> for AvlTree<T> {
    type Iter<'a> = avl::Iter<'a, T> where T: 'a;

    fn insert(&mut self, key: T) -> bool {
        AvlTree::insert(self, key)
    }

    fn get(&self, key: &T) -> Option<&T> {
        AvlTree::get(self, key)
    }

    fn remove(&mut self, key: &T) -> Option<T> {
        AvlTree::remove(self, key)
    }

    fn find_min(&self) -> Result<&T, EmptyTreeError> {
        AvlTree::find_min(self)
    }

    fn find_max(&self) -> Result<&T, EmptyTreeError> {
        AvlTree::find_max(self)
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }

    fn height(&self) -> isize {
        AvlTree::height(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        AvlTree::iter(self)
    }
}

impl<T: Ord> SearchTree<T> for BinarySearchTree<T> {
    type Iter<'a> = bst::Iter<'a, T> where T: 'a;

    fn insert(&mut self, key: T) -> bool {
        BinarySearchTree::insert(self, key)
    }

    fn get(&self, key: &T) -> Option<&T> {
        BinarySearchTree::get(self, key)
    }

    fn remove(&mut self, key: &T) -> Option<T> {
        BinarySearchTree::remove(self, key)
    }

    fn find_min(&self) -> Result<&T, EmptyTreeError> {
        BinarySearchTree::find_min(self)
    }

    fn find_max(&self) -> Result<&T, EmptyTreeError> {
        BinarySearchTree::find_max(self)
    }

    fn len(&self) -> usize {
        BinarySearchTree::len(self)
    }

    fn height(&self) -> isize {
        BinarySearchTree::height(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BinarySearchTree::iter(self)
    }
}
