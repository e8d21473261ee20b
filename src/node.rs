use std::fmt;

use crate::error::Side;

/// A single cell of a [`Tree`](crate::Tree). Every `Node` exclusively owns its children so the
/// whole structure is a strict tree: cloning a `Node` deep-copies its subtree and dropping it
/// releases every descendant.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<Box<Self>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Number of nodes in the subtree rooted at this node.
    pub(crate) fn len(&self) -> usize {
        1 + self.left().map_or(0, Self::len) + self.right().map_or(0, Self::len)
    }

    /// Finds the node holding `target` in this subtree.
    ///
    /// When several nodes hold `target` the tie is broken deterministically: this node wins if it
    /// matches, otherwise a match anywhere in the right subtree beats a match in the left subtree.
    /// The same rule applies at every level, so the result is the first match found walking
    /// "self, then right, then left" recursively.
    pub(crate) fn search(&self, target: &T) -> Option<&Self>
    where
        T: PartialEq,
    {
        if self.value == *target {
            return Some(self);
        }
        self.right()
            .and_then(|n| n.search(target))
            .or_else(|| self.left().and_then(|n| n.search(target)))
    }

    /// Mutable counterpart of [`Node::search`] with the exact same tie-break.
    pub(crate) fn search_mut(&mut self, target: &T) -> Option<&mut Self>
    where
        T: PartialEq,
    {
        if self.value == *target {
            return Some(self);
        }
        // NB the right and left slots are disjoint fields, so returning a borrow of the right
        // subtree doesn't stop us from searching the left one.
        if let Some(found) = self.right.as_deref_mut().and_then(|n| n.search_mut(target)) {
            return Some(found);
        }
        self.left.as_deref_mut().and_then(|n| n.search_mut(target))
    }
}
