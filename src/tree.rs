//! A binary tree whose shape is dictated by the caller. Nodes are attached next to an existing
//! "anchor" node found by value rather than placed by comparing keys.
//!
//! # Examples
//!
//! ```
//! use anchortree::{Side, Tree, TreeError};
//!
//! let mut tree = Tree::new();
//! tree.add_root(1)
//!     .add_left(&1, 2)?
//!     .add_right(&1, 3)?;
//!
//! // Attaching to an occupied slot overwrites the child's value.
//! tree.add_left(&1, 20)?;
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [20, 1, 3]);
//!
//! // Anchors must exist.
//! assert_eq!(
//!     tree.add_right(&42, 4).unwrap_err(),
//!     TreeError::MissingAnchor { side: Side::Right }
//! );
//! # Ok::<(), TreeError>(())
//! ```

use std::{fmt, mem};

use crate::error::{Side, TreeError};
use crate::iter::{Order, Traversal, TraversalMut};
use crate::node::Node;

/// A binary tree that exclusively owns its nodes.
///
/// `Clone` makes an independent deep copy. Moving a `Tree` (or calling [`Tree::take`]) transfers
/// the nodes without copying. Equality is structural: two trees are equal when they have the same
/// shape and equal values at every position.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

/// Placeholder for pretty printing. Writes nothing; use `{:?}` to inspect a tree.
impl<T> fmt::Display for Tree<T> {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Sets the value of the root node, creating it if the tree is empty. The root's children are
    /// kept as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchortree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add_root(1).add_root(2);
    ///
    /// assert_eq!(tree.root(), Some(&2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add_root(&mut self, value: T) -> &mut Self {
        match self.root.as_deref_mut() {
            Some(root) => {
                log::trace!("overwriting root value");
                root.value = value;
            }
            None => {
                log::trace!("creating root");
                self.root = Some(Node::new_boxed(value));
            }
        }
        self
    }

    /// Attaches `value` as the left child of the node holding `anchor`. If that node already has
    /// a left child, only the child's value is replaced.
    ///
    /// When several nodes hold `anchor`, the one chosen is the first found checking a node, then
    /// its right subtree, then its left subtree, starting from the root.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingAnchor`] if no node holds `anchor`. The tree isn't modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchortree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add_root(1).add_left(&1, 2)?.add_left(&2, 3)?;
    ///
    /// assert_eq!(tree.begin_preorder().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// assert!(tree.add_left(&4, 5).is_err());
    /// # Ok::<(), anchortree::TreeError>(())
    /// ```
    pub fn add_left(&mut self, anchor: &T, value: T) -> Result<&mut Self, TreeError>
    where
        T: PartialEq,
    {
        self.attach(anchor, value, Side::Left)
    }

    /// Attaches `value` as the right child of the node holding `anchor`. See
    /// [`Tree::add_left`] for how the anchor is chosen and how occupied slots are handled.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingAnchor`] if no node holds `anchor`. The tree isn't modified.
    pub fn add_right(&mut self, anchor: &T, value: T) -> Result<&mut Self, TreeError>
    where
        T: PartialEq,
    {
        self.attach(anchor, value, Side::Right)
    }

    fn attach(&mut self, anchor: &T, value: T, side: Side) -> Result<&mut Self, TreeError>
    where
        T: PartialEq,
    {
        let Some(node) = self.root.as_deref_mut().and_then(|n| n.search_mut(anchor)) else {
            log::debug!("no anchor for new {} child", side);
            return Err(TreeError::MissingAnchor { side });
        };
        let slot = node.child_mut(side);
        match slot {
            Some(child) => {
                log::trace!("overwriting {} child", side);
                child.value = value;
            }
            None => {
                log::trace!("attaching {} child", side);
                *slot = Some(Node::new_boxed(value));
            }
        }
        Ok(self)
    }

    /// Whether any node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.root.as_deref().and_then(|n| n.search(value)).is_some()
    }

    /// The root's value, if there is a root.
    pub fn root(&self) -> Option<&T> {
        self.root.as_deref().map(|n| &n.value)
    }

    /// Number of nodes in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.root.as_deref().map_or(0, Node::len)
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node, leaving the tree empty.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Moves every node out into a new `Tree`, leaving this one empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchortree::Tree;
    ///
    /// let mut a = Tree::new();
    /// a.add_root(1);
    /// let b = a.take();
    ///
    /// assert!(a.is_empty());
    /// assert!(a.begin() == a.end());
    /// assert_eq!(b.root(), Some(&1));
    /// ```
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// A traversal of the whole tree in the given order.
    pub fn traverse(&self, order: Order) -> Traversal<'_, T> {
        Traversal::new(self.root.as_deref(), order)
    }

    /// A traversal of the whole tree in the given order that allows editing values in place.
    pub fn traverse_mut(&mut self, order: Order) -> TraversalMut<'_, T> {
        TraversalMut::new(self.root.as_deref_mut(), order)
    }

    /// Iterates the values in [`Order::Inorder`].
    pub fn iter(&self) -> Traversal<'_, T> {
        self.traverse(Order::Inorder)
    }

    /// Mutably iterates the values in [`Order::Inorder`].
    pub fn iter_mut(&mut self) -> TraversalMut<'_, T> {
        self.traverse_mut(Order::Inorder)
    }

    /// A preorder traversal positioned on the root.
    pub fn begin_preorder(&self) -> Traversal<'_, T> {
        self.traverse(Order::Preorder)
    }

    /// The exhausted preorder traversal.
    pub fn end_preorder(&self) -> Traversal<'_, T> {
        Traversal::end(Order::Preorder)
    }

    /// An inorder traversal positioned on the leftmost node.
    pub fn begin_inorder(&self) -> Traversal<'_, T> {
        self.traverse(Order::Inorder)
    }

    /// The exhausted inorder traversal.
    pub fn end_inorder(&self) -> Traversal<'_, T> {
        Traversal::end(Order::Inorder)
    }

    /// A postorder traversal positioned on its first node.
    pub fn begin_postorder(&self) -> Traversal<'_, T> {
        self.traverse(Order::Postorder)
    }

    /// The exhausted postorder traversal.
    pub fn end_postorder(&self) -> Traversal<'_, T> {
        Traversal::end(Order::Postorder)
    }

    /// Same as [`Tree::begin_inorder`].
    pub fn begin(&self) -> Traversal<'_, T> {
        self.begin_inorder()
    }

    /// Same as [`Tree::end_inorder`].
    pub fn end(&self) -> Traversal<'_, T> {
        self.end_inorder()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Tree<T> {
    type Item = &'a mut T;
    type IntoIter = TraversalMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
