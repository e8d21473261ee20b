use std::fmt;

use thiserror::Error;

/// Which child slot of an anchor node an insertion targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Errors returned when inserting into a [`Tree`](crate::Tree).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// No node in the tree holds the anchor value, so the new `side` child had nowhere to go.
    /// The tree is left untouched.
    #[error("no node holds the anchor value for the new {side} child")]
    MissingAnchor {
        /// The slot the caller tried to fill.
        side: Side,
    },
}
