//! A self-balancing BST (specifically, an AVL tree).
//!
//! Keys go down the tree like in a plain BST. On the way back up every node on the path
//! recomputes its height and, if one side got two levels taller than the other, rotates to
//! restore `|height(left) - height(right)| <= 1`.
//!
//! # Examples
//!
//! ```
//! use search_trees::avl::build_avl_tree;
//!
//! // Sorted input would be a list in a plain BST.
//! let tree = build_avl_tree(&[1, 2, 3, 4, 5, 6, 7]);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.key(), 4);
//! assert_eq!(root.height(), 3);
//! ```

use std::cmp::Ordering;

use crate::node::{BinaryNode, Link};
use crate::tree::BinaryTree;

/// Builds an AVL tree by inserting every key of `data` in order.
pub fn build_avl_tree(data: &[i32]) -> BinaryTree {
    let mut tree = BinaryTree::new();
    for &key in data {
        tree.insert_avl(key);
    }
    tracing::debug!(size = data.len(), "built AVL tree");
    tree
}

/// Inserts `key` into the subtree `node` and returns the subtree's new root after rebalancing.
/// A key that is already present leaves the subtree unchanged.
pub fn insert_avl(node: Link, key: i32) -> Box<BinaryNode> {
    let Some(mut node) = node else {
        return BinaryNode::new_boxed(key);
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert_avl(node.left.take(), key)),
        Ordering::Greater => node.right = Some(insert_avl(node.right.take(), key)),
        Ordering::Equal => return node,
    }

    node.fix_height();
    let node = rebalance(node, key);

    // In tests, after balancing, assert that we've restored/maintained the AVL invariant.
    if cfg!(test) {
        assert!(node.balance_factor().abs() <= 1);
    }
    node
}

/// Picks one of the four rotation cases from the balance factor and where `key` went.
///
/// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
fn rebalance(mut node: Box<BinaryNode>, key: i32) -> Box<BinaryNode> {
    let balance = node.balance_factor();
    let left_key = node.left().map(BinaryNode::key);
    let right_key = node.right().map(BinaryNode::key);

    match (left_key, right_key) {
        // Left-left.
        (Some(left), _) if balance > 1 && key < left => rotate_right(node),
        // Right-right.
        (_, Some(right)) if balance < -1 && key > right => rotate_left(node),
        // Left-right.
        (Some(left), _) if balance > 1 && key > left => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        // Right-left.
        (_, Some(right)) if balance < -1 && key < right => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
        _ => node,
    }
}

/// Rotate `old_root` to the right. This moves the left child up vertically and `old_root` down
/// vertically. A node without a left child is returned unchanged.
///
/// # Diagram
///
/// ```text
///      old_root               new_root
///       /     \               /     \
///   new_root   z   rotate ->  x   old_root
///    /   \                         /   \
///   x     y                       y     z
/// ```
pub(crate) fn rotate_right(mut old_root: Box<BinaryNode>) -> Box<BinaryNode> {
    let Some(mut new_root) = old_root.left.take() else {
        return old_root;
    };
    tracing::trace!(pivot = old_root.key, promoted = new_root.key, "rotate right");

    old_root.left = new_root.right.take();
    old_root.fix_height();

    new_root.right = Some(old_root);
    new_root.fix_height();
    new_root
}

/// Mirror image of [`rotate_right`]: the right child moves up and `old_root` becomes its left
/// child. A node without a right child is returned unchanged.
pub(crate) fn rotate_left(mut old_root: Box<BinaryNode>) -> Box<BinaryNode> {
    let Some(mut new_root) = old_root.right.take() else {
        return old_root;
    };
    tracing::trace!(pivot = old_root.key, promoted = new_root.key, "rotate left");

    old_root.right = new_root.left.take();
    old_root.fix_height();

    new_root.left = Some(old_root);
    new_root.fix_height();
    new_root
}
