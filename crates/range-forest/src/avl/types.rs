use crate::types::{height, HeightNode, Node};

/// Owned link to a subtree; `None` is the empty subtree.
pub type Link<K> = Option<Box<AvlNode<K>>>;

/// One stored key of a [`BalancedTree`](super::BalancedTree).
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub k: K,
    /// Cached height of the subtree rooted here.
    pub h: i32,
    pub l: Link<K>,
    pub r: Link<K>,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            k,
            h: 0,
            l: None,
            r: None,
        }
    }

    /// Recomputes `h` from the children's cached heights.
    #[inline]
    pub fn update_height(&mut self) {
        self.h = 1 + height(self.l.as_deref()).max(height(self.r.as_deref()));
    }

    /// `height(left) - height(right)`.
    #[inline]
    pub fn balance(&self) -> i32 {
        height(self.l.as_deref()) - height(self.r.as_deref())
    }
}

impl<K> Node for AvlNode<K> {
    type Key = K;

    fn key(&self) -> &K {
        &self.k
    }

    fn l(&self) -> Option<&Self> {
        self.l.as_deref()
    }

    fn r(&self) -> Option<&Self> {
        self.r.as_deref()
    }
}

impl<K> HeightNode for AvlNode<K> {
    fn height(&self) -> i32 {
        self.h
    }
}
