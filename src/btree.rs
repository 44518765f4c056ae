//! A B-tree of minimum degree `t`.
//!
//! Every node keeps its keys sorted and holds at most `2t - 1` of them. Keys are always added to
//! a leaf. A node that reaches `2t` keys is split around its median: the median moves up into the
//! parent and the keys above it move into a new right sibling. When the root itself overflows a
//! new root is put on top of it, which is the only way the tree grows taller, so every leaf stays
//! at the same depth.
//!
//! # Examples
//!
//! ```
//! use search_trees::btree::build_db_tree;
//! use search_trees::properties::in_order_traversal_db;
//!
//! let tree = build_db_tree(&[10, 20, 5, 6, 12, 30, 7, 17], 2).unwrap();
//!
//! assert_eq!(in_order_traversal_db(tree.root()), vec![5, 6, 7, 10, 12, 17, 20, 30]);
//! assert!(tree.root().unwrap().keys().len() <= 3);
//! ```

use crate::error::Error;
use crate::node::MultiwayNode;
use crate::tree::MultiwayTree;

/// The smallest minimum degree a B-tree can have.
pub const MIN_DEGREE: usize = 2;

/// Builds a B-tree of minimum degree `min_degree` by inserting every key of `data` in order.
///
/// # Errors
///
/// Returns [`Error::InvalidMinDegree`] when `min_degree` is below [`MIN_DEGREE`].
pub fn build_db_tree(data: &[i32], min_degree: usize) -> Result<MultiwayTree, Error> {
    let mut tree = MultiwayTree::new(min_degree)?;
    for &key in data {
        tree.insert(key);
    }
    tracing::debug!(size = data.len(), min_degree, "built B-tree");
    Ok(tree)
}

/// Inserts `key` into the tree rooted at `root` and returns the (possibly new) root. A key that
/// is already present is ignored.
///
/// `min_degree` must be at least [`MIN_DEGREE`]; [`MultiwayTree`] checks this once on creation.
pub fn insert_db_node(
    root: Option<Box<MultiwayNode>>,
    key: i32,
    min_degree: usize,
) -> Box<MultiwayNode> {
    let Some(mut root) = root else {
        return MultiwayNode::new_leaf(key);
    };

    insert_into(&mut root, key, min_degree);
    if !root.is_overfull(min_degree) {
        return root;
    }

    // The old root becomes the only child of a new root and is then split like any other child.
    let level = root.level + 1;
    let mut new_root = Box::new(MultiwayNode {
        keys: Vec::with_capacity(2 * min_degree),
        children: vec![root],
        level,
    });
    split_child(&mut new_root, 0, min_degree);
    tracing::debug!(levels = level + 1, "B-tree grew a new root");
    new_root
}

/// Inserts `key` below `node`. On return every node below `node` holds at most `2t - 1` keys;
/// `node` itself may hold `2t` and is left for its caller to split.
fn insert_into(node: &mut MultiwayNode, key: i32, min_degree: usize) {
    let mut index = match node.keys.binary_search(&key) {
        Ok(_) => return,
        Err(index) => index,
    };

    if node.is_leaf() {
        node.keys.insert(index, key);
        return;
    }

    // A full child is split before descending, then the promoted median decides which half
    // `key` belongs to.
    if node.children[index].is_overfull(min_degree) {
        split_child(node, index, min_degree);
        match key.cmp(&node.keys[index]) {
            std::cmp::Ordering::Less => {}
            std::cmp::Ordering::Equal => return,
            std::cmp::Ordering::Greater => index += 1,
        }
    }

    let Some(child) = node.children.get_mut(index) else {
        return;
    };
    insert_into(child, key, min_degree);
    if child.is_overfull(min_degree) {
        split_child(node, index, min_degree);
    }
}

/// Splits the overfull child at `parent.children[index]` around its median key.
///
/// The child keeps its lowest `t` keys (and `t + 1` children), the median at index `t` moves into
/// `parent.keys[index]`, and everything above it moves into a new sibling placed at
/// `parent.children[index + 1]`. Costs `O(t)` regardless of the size of the tree.
pub fn split_child(parent: &mut MultiwayNode, index: usize, min_degree: usize) {
    let Some(child) = parent.children.get_mut(index) else {
        return;
    };
    if child.keys.len() <= min_degree {
        return;
    }

    let upper_keys = child.keys.split_off(min_degree + 1);
    let upper_children = if child.is_leaf() {
        Vec::new()
    } else {
        child.children.split_off(min_degree + 1)
    };
    let Some(median) = child.keys.pop() else {
        return;
    };
    let sibling = Box::new(MultiwayNode {
        keys: upper_keys,
        children: upper_children,
        level: child.level,
    });
    tracing::trace!(median, level = sibling.level, "split B-tree node");

    parent.keys.insert(index, median);
    parent.children.insert(index + 1, sibling);
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::properties::{in_order_traversal_db, search_node_db};
    use crate::test::quick::Op;

    /// Applies a set of operations to a B-tree and a set, checking that no node ever holds more
    /// than `2t - 1` keys and that all leaves stay at one depth.
    fn do_ops(ops: &[Op<i16>], tree: &mut MultiwayTree, set: &mut BTreeSet<i32>) -> bool {
        ops.iter().all(|op| match *op {
            Op::Insert(k) => {
                tree.insert(i32::from(k));
                set.insert(i32::from(k));
                tree.root().map_or(true, |root| leaf_depth(root, tree.min_degree()).is_some())
            }
            Op::Search(k) => {
                search_node_db(tree.root(), i32::from(k)).is_some() == set.contains(&i32::from(k))
            }
            Op::InOrder => {
                in_order_traversal_db(tree.root()) == set.iter().copied().collect::<Vec<_>>()
            }
        })
    }

    /// Depth of the leaves below `node`, or `None` if a node is too full or leaves sit at
    /// different depths.
    fn leaf_depth(node: &MultiwayNode, min_degree: usize) -> Option<usize> {
        if node.keys().is_empty() || node.keys().len() > 2 * min_degree - 1 {
            return None;
        }
        if node.is_leaf() {
            return Some(0);
        }
        let mut depths = node.children().map(|child| leaf_depth(child, min_degree));
        let first = depths.next()??;
        depths
            .all(|depth| depth == Some(first))
            .then_some(first + 1)
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i16(ops: Vec<Op<i16>>, t: u8) -> bool {
            let min_degree = usize::from(t % 4) + MIN_DEGREE;
            let Ok(mut tree) = MultiwayTree::new(min_degree) else {
                return false;
            };
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set)
                && in_order_traversal_db(tree.root()) == set.into_iter().collect::<Vec<_>>()
        }
    }
}
