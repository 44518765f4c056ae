//! A plain BST grown by inserting keys in the order they arrive.
//!
//! Nothing is ever rebalanced, so the shape depends only on insertion order: a random order
//! gives an expected height of `O(lg N)`, sorted input degenerates into a list of height `N`.
//!
//! # Examples
//!
//! ```
//! use search_trees::random::build_random_search_tree;
//!
//! let tree = build_random_search_tree(&[1, 2, 3]);
//!
//! // Sorted input only ever goes right.
//! assert_eq!(tree.root().map(|root| root.height()), Some(3));
//! ```

use std::cmp::Ordering;

use crate::node::{BinaryNode, Link};
use crate::tree::BinaryTree;

/// Builds a BST by inserting every key of `data` in order, without rebalancing.
pub fn build_random_search_tree(data: &[i32]) -> BinaryTree {
    let root = data.iter().fold(None, |root, &key| insert_node(root, key));
    tracing::debug!(size = data.len(), "built random search tree");
    BinaryTree::from_root(root)
}

/// Inserts `key` into the subtree `root` and returns the subtree's root, which is a new node if
/// `root` was empty. A key that is already present is ignored.
pub fn insert_node(mut root: Link, key: i32) -> Link {
    insert_into(&mut root, key);
    root
}

/// Walks down to the empty slot `key` belongs in and links a new leaf there. Every node on the
/// way down is at least as tall as its distance to the new leaf, so heights are raised in the
/// same pass.
fn insert_into(root: &mut Link, key: i32) {
    let Some(leaf_depth) = free_slot_depth(root.as_deref(), key) else {
        return;
    };

    let mut depth = 0;
    let mut slot = root;
    while let Some(node) = slot {
        node.height = node.height.max(leaf_depth - depth + 1);
        depth += 1;
        slot = if key < node.key {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    *slot = Some(BinaryNode::new_boxed(key));
}

/// Depth of the empty slot `key` would be linked into, or `None` when `key` is already present.
fn free_slot_depth(mut node: Option<&BinaryNode>, key: i32) -> Option<usize> {
    let mut depth = 0;
    while let Some(n) = node {
        node = match key.cmp(&n.key) {
            Ordering::Less => n.left(),
            Ordering::Greater => n.right(),
            Ordering::Equal => return None,
        };
        depth += 1;
    }
    Some(depth)
}
