use crate::types::Node;
use crate::util::{find, in_order};

use super::{BoundaryWalk, QueryStats};

/// Walks from `root` towards `[lo, hi]` and returns the split node together
/// with the number of nodes visited.
fn split_walk<'a, N>(root: Option<&'a N>, lo: &N::Key, hi: &N::Key) -> (Option<&'a N>, usize)
where
    N: Node,
    N::Key: PartialOrd,
{
    let mut visited = 0;
    let mut curr = root;
    while let Some(n) = curr {
        visited += 1;
        if hi < n.key() {
            if n.is_leaf() {
                return (Some(n), visited);
            }
            curr = n.l();
        } else if lo > n.key() {
            if n.is_leaf() {
                return (Some(n), visited);
            }
            curr = n.r();
        } else {
            return (Some(n), visited);
        }
    }
    (None, visited)
}

/// Node where the search paths for `lo` and `hi` diverge.
///
/// The walk stops at the first node with `lo <= key <= hi`, or at a leaf
/// when the whole range lies on one side of every node on the path. `None`
/// for an empty tree, or when the walk steps off a node that has only the
/// child on the other side; no key can match in either case.
pub fn find_split_node<'a, N>(root: Option<&'a N>, lo: &N::Key, hi: &N::Key) -> Option<&'a N>
where
    N: Node,
    N::Key: PartialOrd,
{
    split_walk(root, lo, hi).0
}

/// Reports every key of `split`'s left subtree that is `>= lo`.
///
/// Follows the search path for `lo`. Where the path turns left, the node and
/// its whole right subtree lie inside the range.
pub fn follow_lower<N>(lo: &N::Key, split: &N, out: &mut Vec<N::Key>) -> BoundaryWalk
where
    N: Node,
    N::Key: PartialOrd + Copy,
{
    let mut walk = BoundaryWalk::default();
    let mut curr = split.l();
    while let Some(n) = curr {
        walk.visited += 1;
        if lo <= n.key() {
            out.push(*n.key());
            walk.collected += collect_counted(n.r(), out);
            curr = n.l();
        } else {
            curr = n.r();
        }
    }
    walk
}

/// Reports every key of `split`'s right subtree that is `<= hi`.
///
/// Mirror of [`follow_lower`].
pub fn follow_upper<N>(hi: &N::Key, split: &N, out: &mut Vec<N::Key>) -> BoundaryWalk
where
    N: Node,
    N::Key: PartialOrd + Copy,
{
    let mut walk = BoundaryWalk::default();
    let mut curr = split.r();
    while let Some(n) = curr {
        walk.visited += 1;
        if n.key() <= hi {
            out.push(*n.key());
            walk.collected += collect_counted(n.l(), out);
            curr = n.r();
        } else {
            curr = n.l();
        }
    }
    walk
}

fn collect_counted<N>(node: Option<&N>, out: &mut Vec<N::Key>) -> usize
where
    N: Node,
    N::Key: Copy,
{
    let before = out.len();
    collect_subtree(node, out);
    out.len() - before
}

/// Reports every key of the subtree, in order.
pub fn collect_subtree<N>(node: Option<&N>, out: &mut Vec<N::Key>)
where
    N: Node,
    N::Key: Copy,
{
    in_order(node, &mut |k: &N::Key| out.push(*k));
}

/// Keys in `[lo, hi]`, in no particular order.
///
/// The caller guarantees `lo <= hi`.
pub fn query<N>(root: Option<&N>, lo: &N::Key, hi: &N::Key) -> Vec<N::Key>
where
    N: Node,
    N::Key: PartialOrd + Copy,
{
    query_with_stats(root, lo, hi).0
}

/// [`query`] plus the split key and walk counters, see [`QueryStats`].
pub fn query_with_stats<N>(
    root: Option<&N>,
    lo: &N::Key,
    hi: &N::Key,
) -> (Vec<N::Key>, QueryStats<N::Key>)
where
    N: Node,
    N::Key: PartialOrd + Copy,
{
    debug_assert!(lo <= hi, "query bounds must satisfy lo <= hi");

    let mut out = Vec::new();
    let mut stats = QueryStats {
        split: None,
        split_walk: 0,
        boundary_walk: 0,
        collected: 0,
    };

    if lo == hi {
        out.extend(find(root, lo).map(|n| *n.key()));
        return (out, stats);
    }

    let (split, visited) = split_walk(root, lo, hi);
    stats.split_walk = visited;
    let Some(split) = split else {
        log::debug!("query: no split node after {visited} nodes");
        return (out, stats);
    };
    stats.split = Some(*split.key());

    if split.is_leaf() {
        if lo <= split.key() && split.key() <= hi {
            out.push(*split.key());
        }
    } else {
        out.push(*split.key());
        for walk in [
            follow_lower(lo, split, &mut out),
            follow_upper(hi, split, &mut out),
        ] {
            stats.boundary_walk += walk.visited;
            stats.collected += walk.collected;
        }
    }

    log::debug!(
        "query: {} keys reported ({} in bulk), {} + {} nodes walked",
        out.len(),
        stats.collected,
        stats.split_walk,
        stats.boundary_walk
    );
    (out, stats)
}
