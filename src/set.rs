//! The interface every tree in this crate implements.

/// The operations shared by every tree in this crate.
///
/// Implementors are ordered sets of unique keys: `insert` never stores a key
/// twice and `find` never changes the tree.
pub trait OrderedSet<K: Ord> {
    /// Adds `key` to the set. Returns `true` if the key was newly added and
    /// `false` if it was already present, in which case nothing changes.
    fn insert(&mut self, key: K) -> bool;

    /// Returns whether `key` is in the set.
    fn find(&self, key: &K) -> bool;

    /// How many keys are in the set.
    fn len(&self) -> usize;

    /// Number of nodes on the longest path from the root to a leaf. An empty
    /// set has a height of 0.
    fn height(&self) -> usize;

    /// Whether the set has no keys at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
