//! AVL-balanced binary search tree of owned nodes.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::BalancedTree;
pub use types::{AvlNode, Link};
