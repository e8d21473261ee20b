//! Depth-first traversals over a [`Tree`](crate::Tree).
//!
//! A traversal is built eagerly: on construction the whole visitation order of the subtree is
//! pushed onto an explicit stack such that popping it yields the requested [`Order`]. Advancing is
//! then just a `pop`. This costs `O(n)` time and memory up front, where `n` is the number of nodes
//! being traversed, and nothing afterwards.
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
//! let preorder: Vec<_> = tree.traverse(Order::Preorder).copied().collect();
//! assert_eq!(preorder, [1, 2, 4, 3]);
//!
//! // Cursor style: `begin_*` is positioned on the first value, `end_*` is exhausted.
//! let mut cursor = tree.begin_postorder();
//! assert_eq!(cursor.get(), Some(&4));
//! cursor.advance().advance().advance().advance();
//! assert!(cursor == tree.end_postorder());
//! # Ok::<(), anchortree::TreeError>(())
//! ```

use std::iter::FusedIterator;
use std::{fmt, ptr};

use crate::node::Node;

/// The order in which a traversal visits nodes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Preorder,
    /// Left subtree, then node, then right subtree.
    #[default]
    Inorder,
    /// Left subtree, then right subtree, then node.
    Postorder,
}

/// A forward-only, single-pass traversal of a tree in a fixed [`Order`].
///
/// This works both as a cursor (see [`advance`](Self::advance) and [`get`](Self::get)) and as an
/// [`Iterator`]. Two traversals compare equal when both are exhausted or when both are positioned
/// on the very same node; equal values held by different nodes are *not* the same position.
pub struct Traversal<'a, T> {
    pending: Vec<&'a Node<T>>,
    current: Option<&'a Node<T>>,
    order: Order,
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        let mut traversal = Self::end(order);
        if let Some(root) = root {
            traversal.pending.reserve(root.len());
        }
        traversal.push_subtree(root);
        log::trace!(
            "built {:?} traversal over {} nodes",
            order,
            traversal.pending.len()
        );

        traversal.current = traversal.pending.pop();
        traversal
    }

    /// An exhausted traversal, the counterpart of C++'s `end()` iterator.
    pub(crate) fn end(order: Order) -> Self {
        Self {
            pending: Vec::new(),
            current: None,
            order,
        }
    }

    /// Pushes `node`'s subtree so that popping yields it in `self.order`. Since the stack is LIFO,
    /// each order pushes its parts backwards.
    fn push_subtree(&mut self, node: Option<&'a Node<T>>) {
        let Some(node) = node else {
            return;
        };
        match self.order {
            Order::Preorder => {
                self.push_subtree(node.right());
                self.push_subtree(node.left());
                self.pending.push(node);
            }
            Order::Inorder => {
                self.push_subtree(node.right());
                self.pending.push(node);
                self.push_subtree(node.left());
            }
            Order::Postorder => {
                self.pending.push(node);
                self.push_subtree(node.right());
                self.push_subtree(node.left());
            }
        }
    }

    /// Moves to the next node. Advancing an exhausted traversal leaves it exhausted.
    pub fn advance(&mut self) -> &mut Self {
        self.current = self.pending.pop();
        self
    }

    /// The value at the current position or `None` once exhausted.
    pub fn get(&self) -> Option<&'a T> {
        self.current.map(|n| &n.value)
    }

    /// The value at the current position.
    ///
    /// ## Panics
    ///
    /// When the traversal is exhausted. Use [`get`](Self::get) if that is a possibility.
    pub fn value(&self) -> &'a T {
        self.get().expect("dereferenced an exhausted traversal")
    }

    /// Whether every node has been visited.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    /// The order this traversal was built with.
    pub fn order(&self) -> Order {
        self.order
    }
}

impl<'a, T> Clone for Traversal<'a, T> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
            current: self.current,
            order: self.order,
        }
    }
}

impl<'a, T> PartialEq for Traversal<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (None, None) => true,
            (Some(a), Some(b)) => ptr::eq(a, b),
            _ => false,
        }
    }
}

impl<'a, T> Eq for Traversal<'a, T> {}

impl<'a, T> fmt::Debug for Traversal<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("order", &self.order)
            .field("current", &self.get())
            .field("remaining", &self.pending.len())
            .finish()
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    /// Yields the current value and then advances.
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.get()?;
        self.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, T> ExactSizeIterator for Traversal<'a, T> {
    fn len(&self) -> usize {
        self.pending.len() + usize::from(self.current.is_some())
    }
}

impl<'a, T> FusedIterator for Traversal<'a, T> {}

/// Like [`Traversal`] but hands out mutable references to the values so they can be edited in
/// place. The shape of the tree can't change through it.
pub struct TraversalMut<'a, T> {
    pending: Vec<&'a mut T>,
    current: Option<&'a mut T>,
    order: Order,
}

impl<'a, T> TraversalMut<'a, T> {
    pub(crate) fn new(root: Option<&'a mut Node<T>>, order: Order) -> Self {
        let mut traversal = Self {
            pending: Vec::new(),
            current: None,
            order,
        };
        traversal.push_subtree(root);
        log::trace!(
            "built mutable {:?} traversal over {} nodes",
            order,
            traversal.pending.len()
        );

        traversal.current = traversal.pending.pop();
        traversal
    }

    /// Same push order as [`Traversal`], but splitting each node into disjoint borrows of its
    /// value and children.
    fn push_subtree(&mut self, node: Option<&'a mut Node<T>>) {
        let Some(Node { value, left, right }) = node else {
            return;
        };
        let left = Option::as_deref_mut(left);
        let right = Option::as_deref_mut(right);
        match self.order {
            Order::Preorder => {
                self.push_subtree(right);
                self.push_subtree(left);
                self.pending.push(value);
            }
            Order::Inorder => {
                self.push_subtree(right);
                self.pending.push(value);
                self.push_subtree(left);
            }
            Order::Postorder => {
                self.pending.push(value);
                self.push_subtree(right);
                self.push_subtree(left);
            }
        }
    }

    /// Moves to the next value. Advancing an exhausted traversal leaves it exhausted.
    pub fn advance(&mut self) -> &mut Self {
        self.current = self.pending.pop();
        self
    }

    /// The value at the current position or `None` once exhausted.
    pub fn get(&self) -> Option<&T> {
        self.current.as_deref()
    }

    /// Mutable access to the value at the current position or `None` once exhausted.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.current.as_deref_mut()
    }

    /// Whether every value has been visited.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    /// The order this traversal was built with.
    pub fn order(&self) -> Order {
        self.order
    }
}

impl<'a, T> fmt::Debug for TraversalMut<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraversalMut")
            .field("order", &self.order)
            .field("current", &self.get())
            .field("remaining", &self.pending.len())
            .finish()
    }
}

impl<'a, T> Iterator for TraversalMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current.take()?;
        self.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, T> ExactSizeIterator for TraversalMut<'a, T> {
    fn len(&self) -> usize {
        self.pending.len() + usize::from(self.current.is_some())
    }
}

impl<'a, T> FusedIterator for TraversalMut<'a, T> {}
