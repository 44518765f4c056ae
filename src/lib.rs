//! This crate builds several kinds of search trees over the same integer keys so their shapes
//! can be compared, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is defined recursively using the notion of a `Node`. A `Node` stores a
//! key and has up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`, so how tall a tree gets for `N` keys is what this crate is about:
//!
//! - [`balanced`] builds the shortest possible tree from sorted keys.
//! - [`random`] inserts keys as they come and never rebalances.
//! - [`avl`] rotates after every insertion to keep both sides of every node within one level.
//! - [`btree`] stores up to `2t - 1` keys per node and splits full nodes, which keeps every leaf
//!   at the same depth.
//!
//! [`properties`] measures the results; [`theory`] has the closed-form estimates to compare
//! them against.
//!
//! # Examples
//!
//! ```
//! use search_trees::properties::TreeProperties;
//! use search_trees::{avl, balanced, btree, random};
//!
//! let keys = [5, 3, 8, 1, 4, 9];
//! let mut sorted = keys.to_vec();
//! sorted.sort();
//!
//! let balanced = balanced::build_perfectly_balanced_tree(&sorted);
//! let random = random::build_random_search_tree(&keys);
//! let avl = avl::build_avl_tree(&keys);
//! let btree = btree::build_db_tree(&keys, 2).unwrap();
//!
//! assert_eq!(random.in_order(), sorted);
//! assert_eq!(btree.in_order(), sorted);
//! assert_eq!(balanced.check_sum(), avl.check_sum());
//! assert!(btree.contains(4));
//! ```

#![deny(missing_docs)]

pub mod avl;
pub mod balanced;
pub mod btree;
pub mod config;
pub mod error;
pub mod generator;
pub mod node;
pub mod properties;
pub mod random;
pub mod report;
pub mod theory;
pub mod tree;

pub use error::Error;
pub use node::{BinaryNode, MultiwayNode};
pub use tree::{BinaryTree, MultiwayTree};
