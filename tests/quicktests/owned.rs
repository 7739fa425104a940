use ordered_tree::owned::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and lookups both agree on every outcome and on the final set of keys.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(k) => bst.insert(k.clone()) == set.insert(k.clone()),
        Op::Find(k) => bst.find(k) == set.contains(k),
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && set.iter().all(|key| tree.find(key))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.find(x))
}

#[quickcheck]
fn second_insert_is_rejected(xs: Vec<i16>, key: i16) -> bool {
    let mut tree: Tree<i16> = xs.into_iter().collect();
    let len = tree.len();
    let already_in = tree.find(&key);

    let first = tree.insert(key);
    let len_after_first = tree.len();
    let second = tree.insert(key);

    first != already_in
        && !second
        && len_after_first == len + usize::from(first)
        && tree.len() == len_after_first
}

#[quickcheck]
fn find_is_pure(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();
    let before = tree.clone();

    let first: Vec<_> = probes.iter().map(|p| tree.find(p)).collect();
    let second: Vec<_> = probes.iter().map(|p| tree.find(p)).collect();

    first == second && tree == before && tree.height() == before.height()
}

#[quickcheck]
fn ascending_inserts_degenerate(n: u8) -> bool {
    let tree: Tree<u8> = (0..n).collect();
    tree.height() == usize::from(n) && tree.len() == usize::from(n)
}
