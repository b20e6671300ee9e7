//! Node trait definitions.
//!
//! Nodes own their children directly; there are no parent links and no
//! shared references, so every tree is a strict tree. Traversal helpers in
//! [`crate::util`] and the range walks in [`crate::range`] are written
//! against these traits rather than a concrete node type.

/// Read access to a node's key and child links.
pub trait Node: Sized {
    type Key;

    fn key(&self) -> &Self::Key;
    fn l(&self) -> Option<&Self>;
    fn r(&self) -> Option<&Self>;

    /// `true` when the node has neither child.
    fn is_leaf(&self) -> bool {
        self.l().is_none() && self.r().is_none()
    }
}

/// Nodes that cache the height of their subtree.
pub trait HeightNode: Node {
    fn height(&self) -> i32;
}

/// Cached height of an optional subtree. An absent subtree has height `-1`,
/// so a leaf has height `0`.
#[inline]
pub fn height<N: HeightNode>(node: Option<&N>) -> i32 {
    node.map_or(-1, HeightNode::height)
}
