//! Property tests comparing [`anchortree::Tree`] against a simple arena-backed model.

use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Set (or create) the root value
    AddRoot(u8),
    /// Attach the second value left of the node holding the first
    AddLeft(u8, u8),
    /// Attach the second value right of the node holding the first
    AddRight(u8, u8),
}

/// Values are kept in `0..8` so that anchors are regularly found and duplicates are common.
fn small(g: &mut Gen) -> u8 {
    u8::arbitrary(g) % 8
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 1, 1, 2, 2, 2]).unwrap() {
            0 => Op::AddRoot(small(g)),
            1 => Op::AddLeft(small(g), small(g)),
            2 => Op::AddRight(small(g), small(g)),
            _ => unreachable!(),
        }
    }
}
