//! Owning handles for built trees.
//!
//! Builders hand back a [`BinaryTree`] or a [`MultiwayTree`]. Whoever holds the handle owns every
//! node in it. [`BinaryTree::teardown`] and [`MultiwayTree::teardown`] release the whole tree
//! explicitly; dropping a handle runs the same routine.
//!
//! # Examples
//!
//! ```
//! use search_trees::avl::build_avl_tree;
//!
//! let tree = build_avl_tree(&[3, 1, 2]);
//! assert_eq!(tree.root().map(|root| root.key()), Some(2));
//!
//! // Every node is released, and we learn how many there were.
//! assert_eq!(tree.teardown(), 3);
//! ```

use std::fmt;

use crate::btree::{self, MIN_DEGREE};
use crate::error::Error;
use crate::node::{BinaryNode, Link, MultiwayNode};
use crate::{avl, properties, random};

/// An owned binary search tree. Which shape it has depends on the builder that produced it.
#[derive(Default)]
pub struct BinaryTree {
    root: Link,
}

impl Drop for BinaryTree {
    fn drop(&mut self) {
        release_binary(self.root.take());
    }
}

impl fmt::Debug for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree").field("root", &self.root).finish()
    }
}

impl BinaryTree {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    pub(crate) fn from_root(root: Link) -> Self {
        Self { root }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&BinaryNode> {
        self.root.as_deref()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` with plain BST insertion and no rebalancing. Duplicates are ignored.
    pub fn insert_unbalanced(&mut self, key: i32) {
        self.root = random::insert_node(self.root.take(), key);
    }

    /// Inserts `key` and rebalances on the way back up so the AVL invariant holds afterwards.
    /// Duplicates are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// for key in [1, 2, 3] {
    ///     tree.insert_avl(key);
    /// }
    ///
    /// assert_eq!(tree.root().map(|root| root.key()), Some(2));
    /// assert_eq!(tree.root().map(|root| root.height()), Some(2));
    /// ```
    pub fn insert_avl(&mut self, key: i32) {
        self.root = Some(avl::insert_avl(self.root.take(), key));
    }

    /// Finds the node holding `key`.
    pub fn search(&self, key: i32) -> Option<&BinaryNode> {
        properties::search_node(self.root(), key)
    }

    /// Releases every node of the tree and returns how many there were.
    pub fn teardown(mut self) -> usize {
        release_binary(self.root.take())
    }
}

/// Frees a binary subtree with an explicit stack. Every node is detached from its children
/// before it is dropped, so no drop ever recurses.
fn release_binary(root: Link) -> usize {
    let mut released = 0;
    let mut pending: Vec<Box<BinaryNode>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
        released += 1;
    }
    released
}

/// An owned B-tree of a fixed minimum degree `t`.
pub struct MultiwayTree {
    root: Option<Box<MultiwayNode>>,
    min_degree: usize,
}

impl Drop for MultiwayTree {
    fn drop(&mut self) {
        release_multiway(self.root.take());
    }
}

impl fmt::Debug for MultiwayTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiwayTree")
            .field("min_degree", &self.min_degree)
            .field("root", &self.root)
            .finish()
    }
}

impl MultiwayTree {
    /// Generates a new, empty B-tree whose nodes hold at most `2 * min_degree - 1` keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMinDegree`] when `min_degree` is below 2.
    pub fn new(min_degree: usize) -> Result<Self, Error> {
        if min_degree < MIN_DEGREE {
            return Err(Error::InvalidMinDegree(min_degree));
        }
        Ok(Self {
            root: None,
            min_degree,
        })
    }

    /// The minimum degree `t` this tree was built with.
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&MultiwayNode> {
        self.root.as_deref()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key`, splitting overfull nodes so that no node keeps more than `2t - 1` keys.
    /// Duplicates are ignored.
    pub fn insert(&mut self, key: i32) {
        self.root = Some(btree::insert_db_node(self.root.take(), key, self.min_degree));
    }

    /// Finds the node holding `key` together with the key's index inside that node.
    pub fn search(&self, key: i32) -> Option<(&MultiwayNode, usize)> {
        properties::search_node_db(self.root(), key)
    }

    /// Releases every node of the tree and returns how many there were.
    pub fn teardown(mut self) -> usize {
        release_multiway(self.root.take())
    }
}

/// Frees a multiway subtree children first, then the node itself.
fn release_multiway(root: Option<Box<MultiwayNode>>) -> usize {
    let mut released = 0;
    let mut pending: Vec<Box<MultiwayNode>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.append(&mut node.children);
        released += 1;
    }
    released
}
