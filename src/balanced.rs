//! A perfectly-balanced BST, built in one pass from sorted keys.
//!
//! The middle key of every index range becomes the root of that range's subtree, so a tree of
//! `n` keys is `⌊log2 n⌋ + 1` levels tall, the least any binary tree of `n` nodes can be.
//!
//! # Examples
//!
//! ```
//! use search_trees::balanced::build_perfectly_balanced_tree;
//!
//! let tree = build_perfectly_balanced_tree(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.key(), 5);
//! assert_eq!(root.height(), 4);
//! ```

use crate::node::{BinaryNode, Link};
use crate::tree::BinaryTree;

/// Builds a perfectly-balanced BST from `sorted_data`.
///
/// The keys should be strictly ascending. When they are not, a warning is logged and the tree is
/// still built by picking the middle of each range, but it is no longer a search tree.
pub fn build_perfectly_balanced_tree(sorted_data: &[i32]) -> BinaryTree {
    if sorted_data.is_empty() {
        return BinaryTree::new();
    }

    if !sorted_data.windows(2).all(|pair| pair[0] < pair[1]) {
        tracing::warn!(
            len = sorted_data.len(),
            "keys for the perfectly-balanced tree are not strictly ascending"
        );
    }

    let tree = BinaryTree::from_root(build_range(sorted_data));
    tracing::debug!(size = sorted_data.len(), "built perfectly-balanced tree");
    tree
}

/// Builds the subtree for `keys`, rooted at its lower-middle element.
fn build_range(keys: &[i32]) -> Link {
    if keys.is_empty() {
        return None;
    }

    let mid = (keys.len() - 1) / 2;
    let mut root = BinaryNode::new_boxed(keys[mid]);
    root.left = build_range(&keys[..mid]);
    root.right = build_range(&keys[mid + 1..]);
    root.fix_height();
    Some(root)
}
