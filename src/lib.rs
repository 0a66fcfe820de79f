//! A height-balanced (AVL) binary search tree of ordered keys.
//!
//! [`AvlTree`] stores keys in an arena of nodes linked by [`NodeRef`] handles.
//! Each node tracks its parent as well as its children, so in-order
//! [`successor()`] and [`predecessor()`] walks can start from any node handle.
//!
//! After every insert and remove, the tree walks from the point of the
//! structural change back up to the root, recomputing node heights and
//! applying single or double rotations wherever the height of the two subtrees
//! of a node differs by more than one. This bounds the height of a tree of `n`
//! keys to at most `1.44·log2(n+2)`, and every operation to `O(log n)`.
//!
//! ```
//! use avltree::AvlTree;
//!
//! let mut t = AvlTree::new();
//! for v in [10, 20, 30] {
//!     t.insert(v);
//! }
//!
//! // Ascending inserts rotate 20 into the root.
//! assert_eq!(t.height(), 2);
//! assert_eq!(t.to_string(), "10 20 30");
//!
//! let twenty = t.search(&20).unwrap();
//! let next = t.successor(twenty).unwrap().unwrap();
//! assert_eq!(t.key(next), Some(&30));
//!
//! assert_eq!(t.remove(&20), Ok(20));
//! assert!(t.remove(&20).is_err());
//! ```
//!
//! [`successor()`]: AvlTree::successor
//! [`predecessor()`]: AvlTree::predecessor

mod arena;
mod config;
mod dot;
mod error;
mod iter;
mod node;
mod rotate;
mod tree;


pub use arena::NodeRef;
pub use config::{Config, DuplicateKeys};
pub use error::{Error, Result};
pub use iter::Iter;
pub use tree::AvlTree;
