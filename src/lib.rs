//! This crate exposes an unbalanced Binary Search Tree (BST) used as an
//! ordered set of unique keys, in two flavors that share one contract.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores one key and will sometimes
//! have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The trees here never store a key twice: inserting a key that is already
//! present is rejected and reported with `false`. Nothing is ever removed
//! and nothing rebalances the tree, so its shape is decided entirely by the
//! order keys arrive in. Inserting keys in ascending order produces a tree
//! that is really a linked list, and `find` then costs `O(N)` instead of
//! `O(lg N)`. See [`OrderedSet::height`] to observe this.
//!
//! ## Flavors
//!
//! - [`owned`]: each `Node` owns its children through `Box`es and every
//!   operation recurses down the tree.
//! - [`arena`]: every `Node` lives in one `Vec` and children are indices into
//!   it. Operations loop instead of recursing.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::owned::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(!tree.find(&8));
//!
//! assert!(tree.insert(8));
//! assert!(tree.insert(3));
//! // Duplicates are rejected.
//! assert!(!tree.insert(3));
//!
//! assert!(tree.find(&3));
//! assert_eq!(tree.len(), 2);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod arena;
pub mod owned;
pub mod probe;
pub mod set;

pub use set::OrderedSet;
