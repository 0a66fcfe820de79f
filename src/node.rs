use crate::arena::{Arena, NodeRef};

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an absent child is treated as height 0.
    ///
    /// A u8 holds a maximum value of 255, far beyond the height of any AVL
    /// tree that fits in memory.
    pub(crate) height: u8,

    /// Non-owning back link, [`None`] for the root.
    pub(crate) parent: Option<NodeRef>,

    /// Child links. A child is owned by this node by virtue of being reachable
    /// through it.
    pub(crate) left: Option<NodeRef>,
    pub(crate) right: Option<NodeRef>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K, parent: Option<NodeRef>) -> Self {
        Self {
            key,
            height: 1,
            parent,
            left: None,
            right: None,
        }
    }
}

pub(crate) fn height<K>(nodes: &Arena<Node<K>>, n: Option<NodeRef>) -> u8 {
    n.map(|v| nodes[v].height).unwrap_or_default()
}

/// Recompute the height of `n` from its children.
///
/// The children's heights must already be current.
pub(crate) fn update_height<K>(nodes: &mut Arena<Node<K>>, n: NodeRef) {
    let node = &nodes[n];
    let h = 1 + height(nodes, node.left).max(height(nodes, node.right));
    nodes[n].height = h;
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<K>(nodes: &Arena<Node<K>>, n: NodeRef) -> i16 {
    let node = &nodes[n];
    height(nodes, node.left) as i16 - height(nodes, node.right) as i16
}

/// Descend the left edge of the subtree rooted at `n`, returning the node with
/// the minimum key.
pub(crate) fn leftmost<K>(nodes: &Arena<Node<K>>, mut n: NodeRef) -> NodeRef {
    while let Some(left) = nodes[n].left {
        n = left;
    }
    n
}

/// Descend the right edge of the subtree rooted at `n`, returning the node with
/// the maximum key.
pub(crate) fn rightmost<K>(nodes: &Arena<Node<K>>, mut n: NodeRef) -> NodeRef {
    while let Some(right) = nodes[n].right {
        n = right;
    }
    n
}

/// Return the node that follows `n` in an in-order traversal.
///
/// If `n` has a right subtree this is its minimum. Otherwise it is the nearest
/// ancestor reached by walking up a left-child edge, or [`None`] if `n` holds
/// the maximum key.
pub(crate) fn successor<K>(nodes: &Arena<Node<K>>, n: NodeRef) -> Option<NodeRef> {
    if let Some(right) = nodes[n].right {
        return Some(leftmost(nodes, right));
    }

    let mut child = n;
    let mut parent = nodes[n].parent;
    while let Some(p) = parent {
        if nodes[p].left == Some(child) {
            return Some(p);
        }
        child = p;
        parent = nodes[p].parent;
    }

    None
}

/// Return the node that precedes `n` in an in-order traversal.
///
/// Mirror of [`successor()`].
pub(crate) fn predecessor<K>(nodes: &Arena<Node<K>>, n: NodeRef) -> Option<NodeRef> {
    if let Some(left) = nodes[n].left {
        return Some(rightmost(nodes, left));
    }

    let mut child = n;
    let mut parent = nodes[n].parent;
    while let Some(p) = parent {
        if nodes[p].right == Some(child) {
            return Some(p);
        }
        child = p;
        parent = nodes[p].parent;
    }

    None
}
