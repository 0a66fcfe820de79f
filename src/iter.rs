use std::iter::FusedIterator;

use crate::{
    arena::{Arena, NodeRef},
    node::Node,
};

/// An in-order iterator over the keys of an [`AvlTree`], yielding keys in
/// ascending order.
///
/// [`AvlTree`]: crate::AvlTree
#[derive(Debug, Clone)]
pub struct Iter<'a, K> {
    nodes: &'a Arena<Node<K>>,
    stack: Vec<NodeRef>,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(nodes: &'a Arena<Node<K>>, root: Option<NodeRef>) -> Self {
        let mut this = Self {
            nodes,
            stack: vec![],
        };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: Option<NodeRef>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = self.nodes[v].left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;
        let nodes = self.nodes;
        let node = &nodes[v];

        // Descend down the left side of the right hand child of this node, if
        // any.
        self.push_subtree(node.right);

        Some(&node.key)
    }
}

impl<K> FusedIterator for Iter<'_, K> {}
