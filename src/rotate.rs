use tracing::trace;

use crate::{
    arena::NodeRef,
    node::{balance, update_height},
    AvlTree,
};

impl<K> AvlTree<K> {
    /// Point the link that referenced `old` (either a child slot of `parent`,
    /// or the tree root when `parent` is [`None`]) at `new`, and set the parent
    /// link of `new` accordingly.
    pub(crate) fn replace_child(
        &mut self,
        parent: Option<NodeRef>,
        old: NodeRef,
        new: Option<NodeRef>,
    ) {
        match parent {
            None => self.root = new,
            Some(p) if self.nodes[p].left == Some(old) => self.nodes[p].left = new,
            Some(p) => {
                debug_assert_eq!(self.nodes[p].right, Some(old));
                self.nodes[p].right = new;
            }
        }

        if let Some(n) = new {
            self.nodes[n].parent = parent;
        }
    }

    /// Left rotate the subtree rooted at `x` around the pivot point `P`,
    /// returning the new subtree root `P`.
    ///
    /// ```text
    ///
    ///      x
    ///     / \                               P
    ///    1   P         Rotate Left        /   \
    ///       / \      --------------->    x     y
    ///      2   y                        / \   / \
    ///         / \                      1   2 3   4
    ///        3   4
    /// ```
    ///
    /// Only the heights of `x` and `P` change.
    ///
    /// # Panics
    ///
    /// Panics if `x` has no right child (cannot be rotated).
    pub(crate) fn rotate_left(&mut self, x: NodeRef) -> NodeRef {
        let p = self.nodes[x]
            .right
            .expect("left rotation requires a right child");
        trace!(pivot = %x, "rotate left");

        // P takes the position of x under its former parent (or the root).
        let parent = self.nodes[x].parent;
        self.replace_child(parent, x, Some(p));

        // The inner subtree "2" moves across from P to x.
        let inner = self.nodes[p].left;
        self.nodes[x].right = inner;
        if let Some(v) = inner {
            self.nodes[v].parent = Some(x);
        }

        self.nodes[p].left = Some(x);
        self.nodes[x].parent = Some(p);

        // x is now a child of P, so it must be updated first.
        update_height(&mut self.nodes, x);
        update_height(&mut self.nodes, p);

        p
    }

    /// Right rotate the subtree rooted at `y` around the pivot point `P`,
    /// returning the new subtree root `P`.
    ///
    /// ```text
    ///          y
    ///         / \                           P
    ///        P   4     Rotate Right       /   \
    ///       / \      --------------->    x     y
    ///      x   3                        / \   / \
    ///     / \                          1   2 3   4
    ///    1   2
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `y` has no left child (cannot be rotated).
    pub(crate) fn rotate_right(&mut self, y: NodeRef) -> NodeRef {
        let p = self.nodes[y]
            .left
            .expect("right rotation requires a left child");
        trace!(pivot = %y, "rotate right");

        let parent = self.nodes[y].parent;
        self.replace_child(parent, y, Some(p));

        let inner = self.nodes[p].right;
        self.nodes[y].left = inner;
        if let Some(v) = inner {
            self.nodes[v].parent = Some(y);
        }

        self.nodes[p].right = Some(y);
        self.nodes[y].parent = Some(p);

        update_height(&mut self.nodes, y);
        update_height(&mut self.nodes, p);

        p
    }

    /// Left-right case: left rotate the left child of `n`, then right rotate
    /// `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` has no left child, or the left child has no right child.
    pub(crate) fn double_right_rotate(&mut self, n: NodeRef) -> NodeRef {
        let left = self.nodes[n]
            .left
            .expect("double right rotation requires a left child");
        self.rotate_left(left);
        self.rotate_right(n)
    }

    /// Right-left case: right rotate the right child of `n`, then left rotate
    /// `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` has no right child, or the right child has no left child.
    pub(crate) fn double_left_rotate(&mut self, n: NodeRef) -> NodeRef {
        let right = self.nodes[n]
            .right
            .expect("double left rotation requires a right child");
        self.rotate_right(right);
        self.rotate_left(n)
    }

    /// Restore the AVL invariant at `n`, returning the root of the (possibly
    /// rotated) subtree that now occupies the position of `n`.
    ///
    /// The height of `n` must be current.
    pub(crate) fn rebalance(&mut self, n: NodeRef) -> NodeRef {
        let node = &self.nodes[n];
        match (balance(&self.nodes, n), node.left, node.right) {
            // Left-heavy, with the left child leaning right.
            (2.., Some(l), _) if balance(&self.nodes, l) < 0 => self.double_right_rotate(n),
            (2.., Some(_), _) => self.rotate_right(n),

            // Right-heavy, with the right child leaning left.
            (..=-2, _, Some(r)) if balance(&self.nodes, r) > 0 => self.double_left_rotate(n),
            (..=-2, _, Some(_)) => self.rotate_left(n),

            // A skew of 2 or more on one side implies a child on that side.
            _ => n,
        }
    }

    /// Walk from `from` up to the root, recomputing the height of, and
    /// rebalancing, every node on the path.
    pub(crate) fn retrace(&mut self, from: Option<NodeRef>) {
        let mut cursor = from;
        while let Some(n) = cursor {
            update_height(&mut self.nodes, n);
            let subtree_root = self.rebalance(n);

            // Invariant: the absolute difference between tree heights
            // ("balance factor") cannot exceed 1 after rebalancing.
            debug_assert!(balance(&self.nodes, subtree_root).abs() <= 1);

            cursor = self.nodes[subtree_root].parent;
        }
    }
}
