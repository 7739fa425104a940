//! A recursive BST where every `Node` owns its children. This is the classic
//! textbook tree: each operation compares against the current node and hands
//! itself off to whichever child could hold the key.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::owned::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.find(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.find(&1));
//!
//! // Inserting the same key again is rejected.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//! ```

use std::cmp::Ordering;
use std::iter::FromIterator;

use crate::OrderedSet;

/// An unbalanced Binary Search Tree holding unique keys. This can be used for
/// inserting and finding keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<K> {
    root: Root<K>,
    len: usize,
}

/// Whether the tree has a root yet. A tree only ever moves from `Empty` to
/// `Populated`, on its first insert.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Root<K> {
    Empty,
    Populated(Node<K>),
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Root::Empty,
            len: 0,
        }
    }

    /// Inserts the given key into the tree. Returns `false`, without touching
    /// the tree, when the key is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::owned::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(8));
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(8));
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = match &mut self.root {
            Root::Populated(root) => root.insert(key),
            Root::Empty => {
                tracing::trace!("populating empty tree with its root");
                self.root = Root::Populated(Node::leaf(key));
                true
            }
        };

        if inserted {
            self.len += 1;
        } else {
            tracing::trace!(len = self.len, "rejected duplicate key");
        }
        inserted
    }

    /// Returns whether the tree contains the given key. This never modifies
    /// the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::owned::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.find(&1));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, key: &K) -> bool
    where
        K: Ord,
    {
        match &self.root {
            Root::Empty => false,
            Root::Populated(root) => root.find(key),
        }
    }

    /// How many keys are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        matches!(self.root, Root::Empty)
    }

    /// Gets the height of this tree. A lone root has a height of 1 and an
    /// empty tree a height of 0.
    pub fn height(&self) -> usize {
        match &self.root {
            Root::Empty => 0,
            Root::Populated(root) => root.height(),
        }
    }
}

impl<K: Ord> OrderedSet<K> for Tree<K> {
    fn insert(&mut self, key: K) -> bool {
        Tree::insert(self, key)
    }

    fn find(&self, key: &K) -> bool {
        Tree::find(self, key)
    }

    fn len(&self) -> usize {
        Tree::len(self)
    }

    fn height(&self) -> usize {
        Tree::height(self)
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

type Child<K> = Option<Box<Node<K>>>;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Node<K> {
    key: K,
    left: Child<K>,
    right: Child<K>,
}

impl<K> Drop for Node<K> {
    // A degenerate tree is as deep as it is long. Descendants are detached onto a heap stack and
    // each popped node has no children left when it drops, so this never recurses.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Node<K> {
    fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = match key.cmp(&self.key) {
            Ordering::Less => Self::insert_into(&mut self.left, key),
            Ordering::Equal => false,
            Ordering::Greater => Self::insert_into(&mut self.right, key),
        };

        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(self.key > left.key);
            }
            if let Some(right) = self.right() {
                assert!(self.key < right.key);
            }
        }
        inserted
    }

    /// Inserts `key` below the given child slot, growing a new leaf there if the slot is empty.
    fn insert_into(slot: &mut Child<K>, key: K) -> bool
    where
        K: Ord,
    {
        match slot {
            Some(child) => child.insert(key),
            None => {
                *slot = Some(Box::new(Self::leaf(key)));
                true
            }
        }
    }

    fn find(&self, key: &K) -> bool
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().map_or(false, |n| n.find(key)),
            Ordering::Equal => true,
            Ordering::Greater => self.right().map_or(false, |n| n.find(key)),
        }
    }

    fn height(&self) -> usize {
        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);
        left_height.max(right_height) + 1
    }
}
