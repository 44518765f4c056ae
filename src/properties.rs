//! Read-only measurements of built trees.
//!
//! Every measurement has one entry point per node shape: the plain name takes a binary root,
//! the `_db` suffixed one takes a B-tree root. An empty tree is passed as `None` and measures as
//! size 0, height 0, checksum 0 and average height 0.0.
//!
//! Binary trees built without rebalancing can be as deep as they are large, so the binary
//! walks use an explicit stack instead of recursion. B-trees are `O(log N)` deep and are walked
//! recursively.
//!
//! The [`TreeProperties`] trait bundles the shape-independent measurements for both tree
//! handles.
//!
//! # Examples
//!
//! ```
//! use search_trees::properties::{calculate_check_sum, calculate_check_sum_db, TreeProperties};
//! use search_trees::{avl::build_avl_tree, btree::build_db_tree};
//!
//! let keys = [8, 3, 5, 1, 9];
//! let avl = build_avl_tree(&keys);
//! let db = build_db_tree(&keys, 2).unwrap();
//!
//! // Differently shaped trees holding the same keys share a checksum.
//! assert_eq!(calculate_check_sum(avl.root()), 26);
//! assert_eq!(calculate_check_sum_db(db.root()), 26);
//!
//! assert_eq!(avl.in_order(), db.in_order());
//! ```

use crate::node::{BinaryNode, MultiwayNode};
use crate::tree::{BinaryTree, MultiwayTree};

/// Measurements shared by every kind of tree in this crate.
pub trait TreeProperties {
    /// How many keys the tree holds.
    fn size(&self) -> usize;

    /// How many levels the tree has. An empty tree has a height of 0, a lone root a height of 1.
    fn height(&self) -> usize;

    /// The sum of all keys.
    fn check_sum(&self) -> i64;

    /// The mean depth of the leaves, with the root at depth 0.
    fn average_height(&self) -> f64;

    /// All keys in ascending order.
    fn in_order(&self) -> Vec<i32>;

    /// Whether `key` is stored in the tree.
    fn contains(&self, key: i32) -> bool;
}

impl TreeProperties for BinaryTree {
    fn size(&self) -> usize {
        calculate_size(self.root())
    }

    fn height(&self) -> usize {
        calculate_height(self.root())
    }

    fn check_sum(&self) -> i64 {
        calculate_check_sum(self.root())
    }

    fn average_height(&self) -> f64 {
        calculate_average_height(self.root())
    }

    fn in_order(&self) -> Vec<i32> {
        in_order_traversal(self.root())
    }

    fn contains(&self, key: i32) -> bool {
        self.search(key).is_some()
    }
}

impl TreeProperties for MultiwayTree {
    fn size(&self) -> usize {
        calculate_size_db(self.root())
    }

    fn height(&self) -> usize {
        calculate_height_db(self.root())
    }

    fn check_sum(&self) -> i64 {
        calculate_check_sum_db(self.root())
    }

    fn average_height(&self) -> f64 {
        calculate_average_height_db(self.root())
    }

    fn in_order(&self) -> Vec<i32> {
        in_order_traversal_db(self.root())
    }

    fn contains(&self, key: i32) -> bool {
        self.search(key).is_some()
    }
}

/// Pre-order walk over a binary tree, paired with each node's depth.
struct Nodes<'a> {
    pending: Vec<(&'a BinaryNode, usize)>,
}

impl<'a> Nodes<'a> {
    fn new(root: Option<&'a BinaryNode>) -> Self {
        Self {
            pending: root.map(|root| (root, 0)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = (&'a BinaryNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.pending.pop()?;
        self.pending
            .extend(node.right().map(|right| (right, depth + 1)));
        self.pending.extend(node.left().map(|left| (left, depth + 1)));
        Some((node, depth))
    }
}

/// Number of nodes in the tree.
pub fn calculate_size(root: Option<&BinaryNode>) -> usize {
    Nodes::new(root).count()
}

/// Number of nodes on the longest root-to-leaf path.
pub fn calculate_height(root: Option<&BinaryNode>) -> usize {
    Nodes::new(root)
        .map(|(_, depth)| depth + 1)
        .max()
        .unwrap_or(0)
}

/// Sum of all keys.
pub fn calculate_check_sum(root: Option<&BinaryNode>) -> i64 {
    Nodes::new(root).map(|(node, _)| i64::from(node.key)).sum()
}

/// Mean depth of the leaves. Internal nodes do not contribute.
pub fn calculate_average_height(root: Option<&BinaryNode>) -> f64 {
    let (total_depth, leaves) = Nodes::new(root)
        .filter(|(node, _)| node.is_leaf())
        .fold((0usize, 0usize), |(total, leaves), (_, depth)| {
            (total + depth, leaves + 1)
        });

    if leaves == 0 {
        0.0
    } else {
        total_depth as f64 / leaves as f64
    }
}

/// Keys in left-root-right order. For a search tree this is ascending.
pub fn in_order_traversal(root: Option<&BinaryNode>) -> Vec<i32> {
    let mut keys = Vec::new();
    let mut pending: Vec<&BinaryNode> = Vec::new();
    let mut current = root;

    loop {
        while let Some(node) = current {
            pending.push(node);
            current = node.left();
        }
        let Some(node) = pending.pop() else {
            break;
        };
        keys.push(node.key);
        current = node.right();
    }

    keys
}

/// Finds the node holding `key` by descending left or right, in `O(height)`.
pub fn search_node(root: Option<&BinaryNode>, key: i32) -> Option<&BinaryNode> {
    let mut current = root;
    while let Some(node) = current {
        current = match key.cmp(&node.key) {
            std::cmp::Ordering::Less => node.left(),
            std::cmp::Ordering::Equal => return Some(node),
            std::cmp::Ordering::Greater => node.right(),
        };
    }
    None
}

/// Whether every key is strictly greater than all keys to its left and strictly smaller than all
/// keys to its right.
pub fn is_search_tree(root: Option<&BinaryNode>) -> bool {
    let mut pending: Vec<(&BinaryNode, Option<i32>, Option<i32>)> =
        root.map(|root| (root, None, None)).into_iter().collect();

    while let Some((node, lower, upper)) = pending.pop() {
        if lower.map_or(false, |lower| node.key <= lower)
            || upper.map_or(false, |upper| node.key >= upper)
        {
            return false;
        }
        pending.extend(node.left().map(|left| (left, lower, Some(node.key))));
        pending.extend(node.right().map(|right| (right, Some(node.key), upper)));
    }

    true
}

/// Whether every node's stored height is `1 + max(child heights)` and its children's heights
/// differ by at most one.
pub fn is_height_balanced(root: Option<&BinaryNode>) -> bool {
    Nodes::new(root).all(|(node, _)| {
        let left = node.left().map_or(0, BinaryNode::height);
        let right = node.right().map_or(0, BinaryNode::height);
        node.height == left.max(right) + 1 && left.abs_diff(right) <= 1
    })
}

/// Number of keys stored in the tree.
pub fn calculate_size_db(root: Option<&MultiwayNode>) -> usize {
    root.map_or(0, |node| {
        node.keys.len() + node.children().map(|child| calculate_size_db(Some(child))).sum::<usize>()
    })
}

/// Number of nodes in the tree.
pub fn calculate_node_count_db(root: Option<&MultiwayNode>) -> usize {
    root.map_or(0, |node| {
        1 + node
            .children()
            .map(|child| calculate_node_count_db(Some(child)))
            .sum::<usize>()
    })
}

/// Number of levels from the root down to the leaves.
pub fn calculate_height_db(root: Option<&MultiwayNode>) -> usize {
    root.map_or(0, |node| {
        1 + node
            .children()
            .map(|child| calculate_height_db(Some(child)))
            .max()
            .unwrap_or(0)
    })
}

/// Sum of all keys.
pub fn calculate_check_sum_db(root: Option<&MultiwayNode>) -> i64 {
    root.map_or(0, |node| {
        node.keys.iter().copied().map(i64::from).sum::<i64>()
            + node
                .children()
                .map(|child| calculate_check_sum_db(Some(child)))
                .sum::<i64>()
    })
}

/// Mean depth of the leaves, with the root at depth 0. In a B-tree all leaves share one depth.
pub fn calculate_average_height_db(root: Option<&MultiwayNode>) -> f64 {
    fn accumulate(node: &MultiwayNode, depth: usize, total_depth: &mut usize, leaves: &mut usize) {
        if node.is_leaf() {
            *total_depth += depth;
            *leaves += 1;
            return;
        }
        for child in node.children() {
            accumulate(child, depth + 1, total_depth, leaves);
        }
    }

    let Some(root) = root else {
        return 0.0;
    };
    let (mut total_depth, mut leaves) = (0, 0);
    accumulate(root, 0, &mut total_depth, &mut leaves);
    total_depth as f64 / leaves as f64
}

/// Sum, over every key, of the depth of the node holding it (the root is at depth 0). Divided by
/// [`calculate_size_db`] it gives the mean depth of a key.
pub fn calculate_levels_db(root: Option<&MultiwayNode>) -> usize {
    fn levels(node: &MultiwayNode, depth: usize) -> usize {
        depth * node.keys.len()
            + node
                .children()
                .map(|child| levels(child, depth + 1))
                .sum::<usize>()
    }

    root.map_or(0, |root| levels(root, 0))
}

/// Keys in ascending order: each child's keys come before the separating key that follows it.
pub fn in_order_traversal_db(root: Option<&MultiwayNode>) -> Vec<i32> {
    fn walk(node: &MultiwayNode, keys: &mut Vec<i32>) {
        if node.is_leaf() {
            keys.extend_from_slice(&node.keys);
            return;
        }
        for (child, &key) in node.children().zip(&node.keys) {
            walk(child, keys);
            keys.push(key);
        }
        if let Some(last) = node.children.last() {
            walk(last, keys);
        }
    }

    let mut keys = Vec::new();
    if let Some(root) = root {
        walk(root, &mut keys);
    }
    keys
}

/// Finds the node holding `key` and the key's index inside it. Each node is scanned linearly,
/// so this costs `O(height * t)`.
pub fn search_node_db(root: Option<&MultiwayNode>, key: i32) -> Option<(&MultiwayNode, usize)> {
    let mut current = root;
    while let Some(node) = current {
        let index = node.keys.iter().take_while(|&&k| k < key).count();
        if node.keys.get(index) == Some(&key) {
            return Some((node, index));
        }
        current = node.children.get(index).map(|child| &**child);
    }
    None
}
