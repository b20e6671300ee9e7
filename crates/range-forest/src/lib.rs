//! Height-balanced binary search tree with one-dimensional range queries.
//!
//! Keys live in an AVL tree of exclusively owned nodes (`Option<Box<_>>`
//! children, no parent links). A range query locates the split node where
//! the search paths for both bounds diverge, then follows each boundary down
//! and bulk-reports every subtree that lies fully inside the range, which
//! gives `O(log n + k)` for `k` reported keys.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`HeightNode`] traits |
//! [`avl`] | [`BalancedTree`], [`AvlNode`], insertion and rotations |
//! [`range`] | split-node search, boundary following, [`QueryStats`] |
//! [`util`] | `find`, `first`, `last`, in-order / pre-order traversal |
//! [`error`] | [`RangeError`] |
//!
//! # Example
//!
//! ```
//! use range_forest::BalancedTree;
//!
//! let tree: BalancedTree = [5.0, 3.0, 8.0, 1.0, 4.0, 7.0, 9.0].into_iter().collect();
//! let mut found = tree.query(&4.0, &8.0);
//! found.sort_by(|a, b| a.total_cmp(b));
//! assert_eq!(found, vec![4.0, 5.0, 7.0, 8.0]);
//! ```

pub mod avl;
pub mod error;
pub mod range;
pub mod types;
pub mod util;

pub use avl::{AvlNode, BalancedTree, Link};
pub use error::RangeError;
pub use range::{
    check_bounds, collect_subtree, find_split_node, follow_lower, follow_upper, BoundaryWalk,
    QueryStats,
};
pub use types::{HeightNode, Node};
