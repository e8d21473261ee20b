//! This crate exposes a plain binary tree whose shape is chosen by the caller, along with the
//! three classical depth-first traversals.
//!
//! ## Anchored insertion
//!
//! Unlike a Binary Search Tree, nothing here compares values to decide where they go. A `Tree`
//! starts with a root and every other value is attached as the left or right child of an existing
//! node, the "anchor", which is looked up by value. Attaching to a slot that is already taken
//! replaces that child's value and leaves its own children alone.
//!
//! > Values don't have to be unique. When several nodes hold the anchor value, the first one found
//! > checking a node, then its right subtree, then its left subtree is used.
//!
//! ## Traversals
//!
//! A traversal visits every node in one of three orders:
//!
//! 1. Preorder: a node, then its left subtree, then its right subtree.
//! 2. Inorder: the left subtree, then the node, then the right subtree.
//! 3. Postorder: the left subtree, then the right subtree, then the node.
//!
//! Traversals borrow the tree, so the tree can't be modified or dropped while one is alive.
//!
//! # Examples
//!
//! ```
//! use anchortree::{Order, Tree};
//!
//! let mut tree = Tree::new();
//! tree.add_root(1)
//!     .add_left(&1, 2)?
//!     .add_right(&1, 3)?
//!     .add_left(&2, 4)?;
//!
//! let inorder: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(inorder, [4, 2, 1, 3]);
//!
//! let postorder: Vec<_> = tree.traverse(Order::Postorder).copied().collect();
//! assert_eq!(postorder, [4, 2, 3, 1]);
//! # Ok::<(), anchortree::TreeError>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
mod node;
pub mod tree;

pub use error::{Side, TreeError};
pub use iter::{Order, Traversal, TraversalMut};
pub use tree::Tree;
