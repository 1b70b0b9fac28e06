//! Packed per-square masks.
//!
//! A [`Bitboard`] stores one bit per board location. Bit `n` is the square with
//! row-major index `n`, so bit 0 is the upper-left corner (A1) and bit 63 is the
//! lower-right corner (H8). Popping the lowest set bit therefore visits squares in
//! row-major scan order.

use crate::Location;
use derive_more::BitOrAssign;

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, BitOrAssign)]
pub struct Bitboard(u64);

impl From<Location> for Bitboard {
    fn from(loc: Location) -> Self {
        Self(1 << loc.to_index())
    }
}

impl Bitboard {
    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns whether the bit for `loc` is set.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0 & Self::from(loc).0 != 0
    }

    /// Remove and return the set location with the lowest row-major index.
    #[inline]
    pub fn pop_first(&mut self) -> Option<Location> {
        if self.is_empty() {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Location::from_index(index)
    }
}
