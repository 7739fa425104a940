//! A BST whose nodes all live in a single `Vec`. Children are indices into that `Vec` instead of
//! pointers, so a node can only ever be reached through the one slot that recorded its index.
//!
//! Nodes are never removed, which keeps every index valid for the life of the tree. Operations
//! walk down from the root in a loop rather than recursing, so a degenerate tree costs time but
//! never stack.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::arena::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(!tree.find(&1));
//!
//! assert!(tree.insert(1));
//! assert!(!tree.insert(1));
//! assert!(tree.find(&1));
//! ```

use std::cmp::Ordering;
use std::iter::FromIterator;

use crate::OrderedSet;

/// Position of a node in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(usize);

#[derive(Clone, Debug)]
struct Node<K> {
    key: K,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<K> Node<K> {
    fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

/// An unbalanced Binary Search Tree holding unique keys, stored in an arena.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    nodes: Vec<Node<K>>,
    // `None` until the first insert. Once set it never changes.
    root: Option<NodeId>,
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
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Generates a new, empty `Tree` with room for `capacity` keys before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// Inserts the given key into the tree. Returns `false`, without touching the tree, when the
    /// key is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::arena::Tree;
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
        let Some(mut current) = self.root else {
            tracing::trace!("populating empty tree with its root");
            self.root = Some(self.push(key));
            return true;
        };

        let new_id = NodeId(self.nodes.len());
        loop {
            let node = &mut self.nodes[current.0];
            let slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    tracing::trace!("rejected duplicate key");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };

            match *slot {
                Some(child) => current = child,
                None => {
                    *slot = Some(new_id);
                    self.push(key);
                    return true;
                }
            }
        }
    }

    /// Returns whether the tree contains the given key. This never modifies the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::arena::Tree;
    ///
    /// let tree: Tree<_> = [5, 2, 9].into_iter().collect();
    ///
    /// assert!(tree.find(&2));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return true,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// How many keys are stored in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the height of this tree. A lone root has a height of 1 and an empty tree a height
    /// of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(id);
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        height
    }

    fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.0]
    }

    fn push(&mut self, key: K) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::leaf(key));
        id
    }
}

/// Two trees are equal when they have the same shape and the same key in every position. Where
/// each node happens to sit in the arena does not matter.
impl<K: PartialEq> PartialEq for Tree<K> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut stack = vec![(self.root, other.root)];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    let (a, b) = (self.node(a), other.node(b));
                    if a.key != b.key {
                        return false;
                    }
                    stack.push((a.left, b.left));
                    stack.push((a.right, b.right));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<K: Eq> Eq for Tree<K> {}

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
