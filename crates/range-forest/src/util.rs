//! Search and traversal over any [`Node`] tree.

use std::cmp::Ordering;

use crate::types::Node;

/// Node holding `key`, found by plain descent. A key that does not compare
/// with a visited key is never found.
pub fn find<'a, N>(root: Option<&'a N>, key: &N::Key) -> Option<&'a N>
where
    N: Node,
    N::Key: PartialOrd,
{
    let mut curr = root;
    while let Some(n) = curr {
        curr = match key.partial_cmp(n.key())? {
            Ordering::Less => n.l(),
            Ordering::Greater => n.r(),
            Ordering::Equal => return Some(n),
        };
    }
    None
}

/// Leftmost node.
pub fn first<N: Node>(root: Option<&N>) -> Option<&N> {
    let mut curr = root?;
    while let Some(l) = curr.l() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node.
pub fn last<N: Node>(root: Option<&N>) -> Option<&N> {
    let mut curr = root?;
    while let Some(r) = curr.r() {
        curr = r;
    }
    Some(curr)
}

/// Visits keys in order: left subtree, node, right subtree.
pub fn in_order<N: Node, F: FnMut(&N::Key)>(node: Option<&N>, f: &mut F) {
    if let Some(n) = node {
        in_order(n.l(), f);
        f(n.key());
        in_order(n.r(), f);
    }
}

/// Visits keys in pre-order: node, left subtree, right subtree.
pub fn pre_order<N: Node, F: FnMut(&N::Key)>(node: Option<&N>, f: &mut F) {
    if let Some(n) = node {
        f(n.key());
        pre_order(n.l(), f);
        pre_order(n.r(), f);
    }
}

/// In-order iterator over the keys of a subtree.
pub struct Iter<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: Node> Iter<'a, N> {
    pub fn new(root: Option<&'a N>) -> Self {
        let mut it = Self { stack: Vec::new() };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut node: Option<&'a N>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.l();
        }
    }
}

impl<'a, N: Node> Iterator for Iter<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        self.push_left_spine(n.r());
        Some(n.key())
    }
}
