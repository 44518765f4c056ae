//! The two node shapes every tree in this crate is made of.
//!
//! A [`BinaryNode`] backs the perfectly-balanced tree, the naive BST and the AVL tree. A
//! [`MultiwayNode`] backs the B-tree. Children are owned through `Box`es so rotations and splits
//! can move whole subtrees between fields without copying them.

use std::fmt;

/// An owned, possibly empty, binary subtree.
pub type Link = Option<Box<BinaryNode>>;

/// A node of a binary search tree.
pub struct BinaryNode {
    pub(crate) key: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl fmt::Debug for BinaryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryNode")
            .field("key", &self.key)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl BinaryNode {
    /// Construct a new leaf `BinaryNode` holding `key`.
    pub(crate) fn new_boxed(key: i32) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// The left subtree, holding only keys smaller than [`key`][Self::key].
    pub fn left(&self) -> Option<&BinaryNode> {
        self.left.as_deref()
    }

    /// The right subtree, holding only keys greater than [`key`][Self::key].
    pub fn right(&self) -> Option<&BinaryNode> {
        self.right.as_deref()
    }

    /// The number of levels in the subtree rooted at this node.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// `height(left) - height(right)`. Positive when the left side is taller.
    pub fn balance_factor(&self) -> isize {
        height_of(&self.left) as isize - height_of(&self.right) as isize
    }

    /// Recomputes `height` from the children's stored heights.
    pub(crate) fn fix_height(&mut self) {
        self.height = height_of(&self.left).max(height_of(&self.right)) + 1;
    }
}

/// Height of a possibly empty subtree. An empty subtree has a height of 0.
pub(crate) fn height_of(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// A node of a B-tree.
///
/// Keys are kept in ascending order. An internal node with `n` keys has exactly `n + 1` children
/// and `children[i]` holds only keys strictly between `keys[i - 1]` and `keys[i]`.
pub struct MultiwayNode {
    pub(crate) keys: Vec<i32>,
    pub(crate) children: Vec<Box<MultiwayNode>>,

    /// Height above the leaf layer. Leaves are at level 0.
    pub(crate) level: usize,
}

impl fmt::Debug for MultiwayNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiwayNode")
            .field("keys", &self.keys)
            .field("level", &self.level)
            .field("children", &self.children)
            .finish()
    }
}

impl MultiwayNode {
    /// Construct a new leaf holding the single key `key`.
    pub(crate) fn new_leaf(key: i32) -> Box<Self> {
        Box::new(Self {
            keys: vec![key],
            children: Vec::new(),
            level: 0,
        })
    }

    /// The keys of this node, in ascending order.
    pub fn keys(&self) -> &[i32] {
        &self.keys
    }

    /// The children of this node. Empty for a leaf.
    pub fn children(&self) -> impl ExactSizeIterator<Item = &MultiwayNode> + '_ {
        self.children.iter().map(|child| &**child)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Height of this node above the leaf layer.
    pub fn level(&self) -> usize {
        self.level
    }

    /// A node is overfull once it holds one key more than the `2t - 1` a node of minimum degree
    /// `t` may keep. Keys arrive one at a time, so it never gets past `2t`.
    pub(crate) fn is_overfull(&self, min_degree: usize) -> bool {
        self.keys.len() == 2 * min_degree
    }
}
