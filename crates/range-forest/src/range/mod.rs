//! One-dimensional range queries over a [`BalancedTree`].
//!
//! A query first locates the split node, the node where the search paths for
//! `lo` and `hi` diverge. Below it, [`follow_lower`] walks the left subtree
//! towards `lo` and [`follow_upper`] walks the right subtree towards `hi`;
//! every subtree hanging off those paths on the inner side lies fully inside
//! the range and is reported whole by [`collect_subtree`]. Each path node does
//! constant extra work and reported subtrees are disjoint, so a query costs
//! `O(log n + k)`.
//!
//! Results come back unordered. Sorting for presentation is left to the
//! caller.

use std::fmt::Debug;

use crate::avl::{AvlNode, BalancedTree};
use crate::error::RangeError;

pub mod util;

pub use util::{collect_subtree, find_split_node, follow_lower, follow_upper};

/// Bookkeeping of a single query.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryStats<K> {
    /// Key of the split node; `None` for point queries and when no split
    /// node exists.
    pub split: Option<K>,
    /// Nodes visited while searching for the split node.
    pub split_walk: usize,
    /// Nodes visited along the two boundary paths below the split node.
    pub boundary_walk: usize,
    /// Keys reported through bulk subtree collection.
    pub collected: usize,
}

/// Counters of one [`follow_lower`] / [`follow_upper`] walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryWalk {
    pub visited: usize,
    pub collected: usize,
}

impl<K: PartialOrd + Copy> BalancedTree<K> {
    pub fn find_split_node(&self, lo: &K, hi: &K) -> Option<&AvlNode<K>> {
        find_split_node(self.root(), lo, hi)
    }

    /// Keys in `[lo, hi]`, unordered.
    ///
    /// The caller guarantees `lo <= hi`; use [`try_query`](Self::try_query)
    /// for unchecked input. `lo == hi` is answered with a point lookup.
    pub fn query(&self, lo: &K, hi: &K) -> Vec<K> {
        util::query(self.root(), lo, hi)
    }

    pub fn query_with_stats(&self, lo: &K, hi: &K) -> (Vec<K>, QueryStats<K>) {
        util::query_with_stats(self.root(), lo, hi)
    }

    /// [`query`](Self::query) with the bounds validated first.
    pub fn try_query(&self, lo: &K, hi: &K) -> Result<Vec<K>, RangeError>
    where
        K: Debug,
    {
        check_bounds(lo, hi)?;
        Ok(self.query(lo, hi))
    }
}

/// Fails unless both bounds are comparable and `lo <= hi`.
pub fn check_bounds<K: PartialOrd + Debug>(lo: &K, hi: &K) -> Result<(), RangeError> {
    for bound in [lo, hi] {
        if bound.partial_cmp(bound).is_none() {
            return Err(RangeError::IncomparableBound(format!("{bound:?}")));
        }
    }
    if lo > hi {
        return Err(RangeError::InvertedRange {
            lo: format!("{lo:?}"),
            hi: format!("{hi:?}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bounds() {
        assert_eq!(check_bounds(&1.0, &2.0), Ok(()));
        assert_eq!(check_bounds(&2.0, &2.0), Ok(()));
        assert_eq!(
            check_bounds(&3.0, &2.0),
            Err(RangeError::InvertedRange {
                lo: "3.0".to_string(),
                hi: "2.0".to_string()
            })
        );
        assert_eq!(
            check_bounds(&f64::NAN, &2.0),
            Err(RangeError::IncomparableBound("NaN".to_string()))
        );
    }

    #[test]
    fn test_try_query() {
        let tree: BalancedTree = [1.0, 2.0, 3.0].into_iter().collect();
        let mut found = tree.try_query(&1.5, &3.0).unwrap();
        found.sort_by(f64::total_cmp);
        assert_eq!(found, vec![2.0, 3.0]);
        assert!(tree.try_query(&3.0, &1.0).is_err());
        assert_eq!(
            tree.try_query(&0.0, &f64::NAN).unwrap_err().to_string(),
            "invalid range: bound NaN is not comparable"
        );
    }
}
