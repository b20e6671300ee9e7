use std::fmt;

use crate::types::height;
use crate::util::{find, first, in_order, last, pre_order, Iter};

use super::types::{AvlNode, Link};
use super::util::{assert_avl_tree, insert, print};

/// A set of keys indexed by an AVL tree.
///
/// Equal keys are stored once. Keys that are not comparable with themselves
/// (`NaN`) are rejected by [`insert`](Self::insert).
#[derive(Clone, Debug)]
pub struct BalancedTree<K = f64> {
    root: Link<K>,
    len: usize,
}

impl<K> BalancedTree<K> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn root(&self) -> Option<&AvlNode<K>> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root; `-1` for an empty tree.
    pub fn height(&self) -> i32 {
        height(self.root())
    }

    pub fn first(&self) -> Option<&K> {
        first(self.root()).map(|n| &n.k)
    }

    pub fn last(&self) -> Option<&K> {
        last(self.root()).map(|n| &n.k)
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_, AvlNode<K>> {
        Iter::new(self.root())
    }

    pub fn for_each<F: FnMut(&K)>(&self, mut f: F) {
        in_order(self.root(), &mut f);
    }
}

impl<K: PartialOrd + Copy> BalancedTree<K> {
    /// Inserts `key`, rebalancing on the way back to the root.
    ///
    /// Returns `false` when the key was already present or is not comparable
    /// with itself.
    pub fn insert(&mut self, key: K) -> bool {
        if key.partial_cmp(&key).is_none() {
            log::warn!("rejected key that is not comparable with itself");
            return false;
        }
        let mut inserted = false;
        self.root = Some(insert(self.root.take(), key, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub fn contains(&self, key: &K) -> bool {
        find(self.root(), key).is_some()
    }

    /// Keys in pre-order (node, left, right).
    pub fn preorder(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.len);
        pre_order(self.root(), &mut |k: &K| out.push(*k));
        out
    }

    pub fn to_vec(&self) -> Vec<K> {
        self.iter().copied().collect()
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        let count = assert_avl_tree(self.root())?;
        if count != self.len {
            return Err(format!("Size mismatch: expected {}, got {count}", self.len));
        }
        Ok(())
    }
}

impl<K: fmt::Display> BalancedTree<K> {
    pub fn print(&self, tab: &str) -> String {
        format!(
            "BalancedTree\n{tab}└─ {}",
            print(self.root(), &format!("{tab}   "))
        )
    }
}

impl<K> Default for BalancedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Display> fmt::Display for BalancedTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print(""))
    }
}

impl<K: PartialOrd + Copy> Extend<K> for BalancedTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: PartialOrd + Copy> FromIterator<K> for BalancedTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a BalancedTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, AvlNode<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
