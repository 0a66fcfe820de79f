use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
};

use tracing::debug;

use crate::{
    arena::{Arena, NodeRef},
    config::{Config, DuplicateKeys},
    error::{Error, Result},
    iter::Iter,
    node::{self, Node},
};

/// A height-balanced (AVL) binary search tree of ordered keys.
///
/// Nodes are stored in an arena and addressed by [`NodeRef`] handles. Every
/// node records its parent, allowing [`successor()`] and [`predecessor()`]
/// walks to start from any node without a search from the root.
///
/// Equal keys are stored as distinct nodes by default, see [`DuplicateKeys`].
///
/// [`successor()`]: AvlTree::successor
/// [`predecessor()`]: AvlTree::predecessor
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    pub(crate) nodes: Arena<Node<K>>,
    pub(crate) root: Option<NodeRef>,
    config: Config,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<K> AvlTree<K> {
    /// Construct an empty tree with the default [`Config`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty tree using the provided [`Config`].
    pub fn with_config(config: Config) -> Self {
        Self {
            nodes: Arena::with_capacity(config.initial_capacity),
            root: None,
            config,
        }
    }

    /// The number of keys stored in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the tree, where a single node has a height of 1 and an
    /// empty tree a height of 0.
    pub fn height(&self) -> usize {
        node::height(&self.nodes, self.root) as usize
    }

    /// Remove all keys, invalidating every outstanding [`NodeRef`].
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Resolve `node` to the key it holds, or [`None`] if the node has been
    /// removed.
    pub fn key(&self, node: NodeRef) -> Option<&K> {
        self.nodes.get(node).map(|v| &v.key)
    }

    /// The node holding the minimum key, if any.
    pub fn first(&self) -> Option<NodeRef> {
        self.root.map(|v| node::leftmost(&self.nodes, v))
    }

    /// The node holding the maximum key, if any.
    pub fn last(&self) -> Option<NodeRef> {
        self.root.map(|v| node::rightmost(&self.nodes, v))
    }

    /// Return the node holding the next key in ascending order after the key
    /// in `node`, or [`None`] if `node` holds the maximum key.
    pub fn successor(&self, node: NodeRef) -> Result<Option<NodeRef>> {
        self.check_live(node)?;
        Ok(node::successor(&self.nodes, node))
    }

    /// Return the node holding the previous key in ascending order before the
    /// key in `node`, or [`None`] if `node` holds the minimum key.
    pub fn predecessor(&self, node: NodeRef) -> Result<Option<NodeRef>> {
        self.check_live(node)?;
        Ok(node::predecessor(&self.nodes, node))
    }

    /// Iterate over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.nodes, self.root)
    }

    fn check_live(&self, node: NodeRef) -> Result<()> {
        if self.nodes.contains(node) {
            Ok(())
        } else {
            Err(Error::StaleHandle(node))
        }
    }
}

impl<K> AvlTree<K>
where
    K: Ord,
{
    /// Insert `key` into the tree, returning the handle of the node holding
    /// it.
    ///
    /// Keys equal to one already present are placed in the right subtree of
    /// the existing key, unless the tree was configured with
    /// [`DuplicateKeys::KeepFirst`], in which case the handle of the existing
    /// node is returned and `key` is dropped.
    ///
    /// The returned handle remains valid until the node is removed; rotations
    /// never move keys between nodes.
    pub fn insert(&mut self, key: K) -> NodeRef {
        // Descend to the empty child slot the key belongs in.
        let mut parent = None;
        let mut go_left = false;
        let mut cursor = self.root;
        while let Some(n) = cursor {
            let node = &self.nodes[n];
            match key.cmp(&node.key) {
                Ordering::Less => go_left = true,
                Ordering::Equal if self.config.duplicates == DuplicateKeys::KeepFirst => {
                    return n;
                }
                Ordering::Equal | Ordering::Greater => go_left = false,
            }

            parent = Some(n);
            cursor = if go_left { node.left } else { node.right };
        }

        let new = self.nodes.alloc(Node::new(key, parent));
        match parent {
            None => self.root = Some(new),
            Some(p) if go_left => self.nodes[p].left = Some(new),
            Some(p) => self.nodes[p].right = Some(new),
        }
        debug!(node = %new, len = self.len(), "inserted node");

        // Walk back up to the root, restoring the AVL invariant.
        self.retrace(Some(new));

        new
    }

    /// Find a node holding `key`.
    ///
    /// If the tree contains multiple equal keys, any one of them may be
    /// returned.
    pub fn search(&self, key: &K) -> Option<NodeRef> {
        let mut cursor = self.root;
        while let Some(n) = cursor {
            let node = &self.nodes[n];
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(n),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Remove one instance of `key` from the tree, returning the removed key.
    ///
    /// Returns [`Error::NotFound`] and leaves the tree untouched if `key` is
    /// not present.
    ///
    /// When the node holding `key` has two children, it is not freed: the key
    /// of its in-order successor is moved into it, and the successor node is
    /// removed instead. The handle of that successor node becomes stale.
    pub fn remove(&mut self, key: &K) -> Result<K> {
        let Some(target) = self.search(key) else {
            debug!("remove of missing key");
            return Err(Error::NotFound);
        };

        Ok(self.remove_node(target))
    }

    fn remove_node(&mut self, target: NodeRef) -> K {
        // This node may have 0, 1 or 2 child node(s):
        //
        //                          +----------+
        //                          |  parent  |
        //                          +----------+
        //                                |
        //                                v
        //                          +----------+
        //                     +----|  target  |----+
        //                     |    +----------+    |
        //                     |                    |
        //                     v                    v
        //               +-----------+       +------------+
        //               |   left    |       |   right    |
        //               +-----------+       +------------+
        //
        // With two children, the minimum node of the right subtree (the
        // in-order successor) has no left child. It is unlinked in place of
        // the target, and its key moved into the target.
        let target_node = &self.nodes[target];
        if let (Some(_), Some(right)) = (target_node.left, target_node.right) {
            let successor = node::leftmost(&self.nodes, right);
            let successor_key = self.unlink(successor);
            return std::mem::replace(&mut self.nodes[target].key, successor_key);
        }

        self.unlink(target)
    }

    /// Splice out `n`, which must have at most one child, free it, and
    /// rebalance the ancestors of the removed node.
    fn unlink(&mut self, n: NodeRef) -> K {
        let node = &self.nodes[n];
        debug_assert!(node.left.is_none() || node.right.is_none());

        let parent = node.parent;
        let child = node.left.or(node.right);
        self.replace_child(parent, n, child);

        let removed = self.nodes.take(n);
        debug!(node = %n, len = self.len(), "removed node");

        // Every ancestor of the removed node may now be unbalanced.
        self.retrace(parent);

        removed.key
    }
}

impl<K> Display for AvlTree<K>
where
    K: Display,
{
    /// Render the keys in ascending order, separated by a single space.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Extend<K> for AvlTree<K>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}
