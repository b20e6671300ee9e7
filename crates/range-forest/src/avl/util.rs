use std::fmt::Display;

use crate::types::{height, HeightNode};

use super::types::{AvlNode, Link};

/// Inserts `k` below `link` and returns the new owner of the subtree.
///
/// `inserted` is set when a node was created. An equal key leaves the shape
/// untouched; only the matched node's height is recomputed.
pub fn insert<K: PartialOrd + Copy>(link: Link<K>, k: K, inserted: &mut bool) -> Box<AvlNode<K>> {
    let Some(mut t) = link else {
        *inserted = true;
        return Box::new(AvlNode::new(k));
    };

    if k < t.k {
        t.l = Some(insert(t.l.take(), k, inserted));
        if height(t.l.as_deref()) - height(t.r.as_deref()) == 2 {
            t = if t.l.as_ref().is_some_and(|l| k < l.k) {
                rotate_with_left_child(t)
            } else {
                double_rotate_with_left_child(t)
            };
        }
    } else if k > t.k {
        t.r = Some(insert(t.r.take(), k, inserted));
        if height(t.r.as_deref()) - height(t.l.as_deref()) == 2 {
            t = if t.r.as_ref().is_some_and(|r| k > r.k) {
                rotate_with_right_child(t)
            } else {
                double_rotate_with_right_child(t)
            };
        }
    }

    t.update_height();
    t
}

/// Promotes the left child of `k2`. `k2` adopts the child's right subtree.
///
/// Heights are recomputed bottom-up: the demoted node first, then the
/// promoted one.
pub fn rotate_with_left_child<K>(mut k2: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut k1) = k2.l.take() else {
        return k2;
    };
    k2.l = k1.r.take();
    k2.update_height();
    k1.r = Some(k2);
    k1.update_height();
    log::trace!("rotate_with_left_child: subtree height {}", k1.h);
    k1
}

/// Mirror of [`rotate_with_left_child`].
pub fn rotate_with_right_child<K>(mut k2: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut k1) = k2.r.take() else {
        return k2;
    };
    k2.r = k1.l.take();
    k2.update_height();
    k1.l = Some(k2);
    k1.update_height();
    log::trace!("rotate_with_right_child: subtree height {}", k1.h);
    k1
}

/// Left-right case: rotates the left child with its right child, then `k3`
/// with its new left child.
pub fn double_rotate_with_left_child<K>(mut k3: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    if let Some(l) = k3.l.take() {
        k3.l = Some(rotate_with_right_child(l));
    }
    rotate_with_left_child(k3)
}

/// Right-left case: rotates the right child with its left child, then `k3`
/// with its new right child.
pub fn double_rotate_with_right_child<K>(mut k3: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    if let Some(r) = k3.r.take() {
        k3.r = Some(rotate_with_left_child(r));
    }
    rotate_with_right_child(k3)
}

/// Checks heights, balance and key order of the tree rooted at `root`.
///
/// Returns the number of nodes on success.
pub fn assert_avl_tree<N>(root: Option<&N>) -> Result<usize, String>
where
    N: HeightNode,
    N::Key: PartialOrd,
{
    fn validate<'a, N>(
        node: Option<&'a N>,
        prev: &mut Option<&'a N::Key>,
        count: &mut usize,
    ) -> Result<i32, String>
    where
        N: HeightNode,
        N::Key: PartialOrd,
    {
        let Some(n) = node else {
            return Ok(-1);
        };

        let lh = validate(n.l(), prev, count)?;
        if let Some(p) = *prev {
            if !(p < n.key()) {
                return Err("Node order violated".to_string());
            }
        }
        *prev = Some(n.key());
        *count += 1;
        let rh = validate(n.r(), prev, count)?;

        let expected = 1 + lh.max(rh);
        if n.height() != expected {
            return Err(format!(
                "Height mismatch: expected {expected}, got {}",
                n.height()
            ));
        }
        if (lh - rh).abs() > 1 {
            return Err(format!("AVL balance violated: bf={}", lh - rh));
        }
        Ok(expected)
    }

    let mut prev = None;
    let mut count = 0;
    validate(root, &mut prev, &mut count)?;
    Ok(count)
}

/// Debug printer for AVL trees.
///
/// Every node is labelled with its key and cached height. Internal nodes draw
/// both children as `├─` / `└─` branches, an absent child as `∅`. `tab` is
/// the prefix of the lines below the node.
pub fn print<N>(node: Option<&N>, tab: &str) -> String
where
    N: HeightNode,
    N::Key: Display,
{
    let Some(n) = node else {
        return "∅".to_string();
    };
    let label = format!("{} [h={}]", n.key(), n.height());
    if n.is_leaf() {
        return label;
    }
    format!(
        "{label}\n{tab}├─ {}\n{tab}└─ {}",
        print(n.l(), &format!("{tab}│  ")),
        print(n.r(), &format!("{tab}   ")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &[i32]) -> Link<i32> {
        let mut root = None;
        for &k in keys {
            let mut inserted = false;
            root = Some(insert(root, k, &mut inserted));
        }
        root
    }

    #[test]
    fn test_single_right_rotation() {
        let root = build(&[3, 2, 1]).unwrap();
        assert_eq!(root.k, 2);
        assert_eq!(root.l.as_ref().map(|n| n.k), Some(1));
        assert_eq!(root.r.as_ref().map(|n| n.k), Some(3));
        assert_eq!(root.h, 1);
    }

    #[test]
    fn test_single_left_rotation() {
        let root = build(&[1, 2, 3]).unwrap();
        assert_eq!(root.k, 2);
        assert_eq!(root.h, 1);
        assert_eq!(assert_avl_tree(Some(&*root)), Ok(3));
    }

    #[test]
    fn test_left_right_double_rotation() {
        let root = build(&[3, 1, 2]).unwrap();
        assert_eq!(root.k, 2);
        assert_eq!(root.l.as_ref().map(|n| n.k), Some(1));
        assert_eq!(root.r.as_ref().map(|n| n.k), Some(3));
    }

    #[test]
    fn test_right_left_double_rotation() {
        let root = build(&[1, 3, 2]).unwrap();
        assert_eq!(root.k, 2);
        assert_eq!(root.l.as_ref().map(|n| n.k), Some(1));
        assert_eq!(root.r.as_ref().map(|n| n.k), Some(3));
    }

    #[test]
    fn test_equal_key_is_not_inserted() {
        let mut root = build(&[2, 1, 3]);
        let mut inserted = false;
        root = Some(insert(root, 1, &mut inserted));
        assert!(!inserted);
        assert_eq!(assert_avl_tree(root.as_deref()), Ok(3));
    }

    #[test]
    fn test_rotation_without_child_is_identity() {
        let n = Box::new(AvlNode::new(7));
        let n = rotate_with_left_child(n);
        let n = rotate_with_right_child(n);
        assert_eq!(n.k, 7);
        assert_eq!(n.h, 0);
    }

    #[test]
    fn test_assert_avl_tree_detects_stale_height() {
        let mut root = build(&[2, 1, 3]).unwrap();
        root.h = 5;
        assert!(assert_avl_tree(Some(&*root))
            .unwrap_err()
            .starts_with("Height mismatch"));
    }

    #[test]
    fn test_assert_avl_tree_detects_imbalance() {
        let mut root = Box::new(AvlNode::new(3));
        let mut l = Box::new(AvlNode::new(2));
        l.l = Some(Box::new(AvlNode::new(1)));
        l.update_height();
        root.l = Some(l);
        root.update_height();
        assert!(assert_avl_tree(Some(&*root))
            .unwrap_err()
            .starts_with("AVL balance violated"));
    }

    #[test]
    fn test_assert_avl_tree_detects_order_violation() {
        let mut root = build(&[2, 1, 3]).unwrap();
        if let Some(l) = root.l.as_mut() {
            l.k = 9;
        }
        assert_eq!(
            assert_avl_tree(Some(&*root)),
            Err("Node order violated".to_string())
        );
    }

    #[test]
    fn test_print() {
        let root = build(&[2, 1, 3]);
        assert_eq!(
            print(root.as_deref(), ""),
            "2 [h=1]\n├─ 1 [h=0]\n└─ 3 [h=0]"
        );
        assert_eq!(print::<AvlNode<i32>>(None, ""), "∅");
    }

    #[test]
    fn test_print_nested() {
        let root = build(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(
            print(root.as_deref(), ""),
            "4 [h=2]\n\
             ├─ 2 [h=1]\n\
             │  ├─ 1 [h=0]\n\
             │  └─ 3 [h=0]\n\
             └─ 6 [h=1]\n   \
             ├─ 5 [h=0]\n   \
             └─ 7 [h=0]"
        );
    }

    #[test]
    fn test_print_one_child() {
        let root = build(&[1, 2]);
        assert_eq!(print(root.as_deref(), "  "), "1 [h=1]\n  ├─ ∅\n  └─ 2 [h=0]");
    }
}
