//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

/// A location on the Othello board, stored as its row-major index.
/// Always in range: row and column are both in `0..8`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location(u8);

/// One of the eight compass directions a capture line can run in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

/// A list of legal moves out of a position, stored as a [`Bitboard`] mask.
/// Iterating yields the locations in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MoveList(Bitboard);

impl Location {
    /// Convert from a row-major square index: 0 for A1, 63 for H8.
    /// Returns None if the index is off the board.
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < NUM_SPACES {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0
    }

    /// Construct a Location from 0-indexed row and column coordinates.
    /// Returns None if the coordinates provided are not valid.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            None
        } else {
            Some(Self((row * EDGE_LENGTH + col) as u8))
        }
    }

    /// Get the row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    #[inline]
    pub fn row(self) -> usize {
        self.0 as usize / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.0 as usize % EDGE_LENGTH
    }

    /// The neighbouring location one step in `direction`, or None off the edge.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let row = self.row() as i8 + direction.d_row;
        let col = self.col() as i8 + direction.d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::from_coords(row as usize, col as usize)
    }

    /// Every location on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Location)
    }
}

impl Direction {
    pub const NORTH: Self = Self::new(-1, 0);
    pub const NORTH_EAST: Self = Self::new(-1, 1);
    pub const EAST: Self = Self::new(0, 1);
    pub const SOUTH_EAST: Self = Self::new(1, 1);
    pub const SOUTH: Self = Self::new(1, 0);
    pub const SOUTH_WEST: Self = Self::new(1, -1);
    pub const WEST: Self = Self::new(0, -1);
    pub const NORTH_WEST: Self = Self::new(-1, -1);

    /// All eight directions, excluding `(0, 0)`.
    pub const ALL: [Self; 8] = [
        Self::NORTH_WEST,
        Self::NORTH,
        Self::NORTH_EAST,
        Self::WEST,
        Self::EAST,
        Self::SOUTH_WEST,
        Self::SOUTH,
        Self::SOUTH_EAST,
    ];

    const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }
}

/// Convert this [`Location`] into string notation ("D3": column letter, then row number).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("D3", case-insensitive).
/// Surrounding whitespace is ignored.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseLocationError)
    }
}

impl MoveList {
    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0.contains(loc)
    }

    /// Returns whether the move list is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub(crate) fn insert(&mut self, loc: Location) {
        self.0 |= Bitboard::from(loc);
    }
}

impl Iterator for MoveList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        self.0.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for MoveList {}

impl FromIterator<Location> for MoveList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut moves = MoveList::default();
        for loc in iter {
            moves.insert(loc);
        }
        moves
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_index() {
        assert_eq!(Location::from_index(0), Some(Location(0)));
        assert_eq!(Location::from_index(63), Some(Location(63)));
        assert_eq!(Location::from_index(64), None);
    }

    #[test]
    fn location_from_coords() {
        assert_eq!(Location::from_coords(0, 0), Some(Location(0)));
        assert_eq!(Location::from_coords(2, 3), Some(Location(19)));
        assert_eq!(Location::from_coords(7, 7), Some(Location(63)));
        assert_eq!(Location::from_coords(0, 8), None);
        assert_eq!(Location::from_coords(8, 0), None);
    }

    #[test]
    fn location_to_coords() {
        assert_eq!(Location(0).to_coords(), (0, 0));
        assert_eq!(Location(19).to_coords(), (2, 3));
        assert_eq!(Location(63).to_coords(), (7, 7));
    }

    #[test]
    fn location_step() {
        let a1 = Location::from_coords(0, 0).unwrap();
        assert_eq!(a1.step(Direction::NORTH), None);
        assert_eq!(a1.step(Direction::WEST), None);
        assert_eq!(a1.step(Direction::SOUTH_EAST), Location::from_coords(1, 1));

        let h8 = Location::from_coords(7, 7).unwrap();
        assert_eq!(h8.step(Direction::EAST), None);
        assert_eq!(h8.step(Direction::SOUTH), None);
        assert_eq!(h8.step(Direction::NORTH_WEST), Location::from_coords(6, 6));
    }

    #[test]
    fn directions_are_distinct_unit_steps() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            assert!(a.d_row.abs() <= 1 && a.d_col.abs() <= 1);
            assert!((a.d_row, a.d_col) != (0, 0));
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn location_all_is_row_major() {
        let all: Vec<Location> = Location::all().collect();
        assert_eq!(all.len(), NUM_SPACES);
        assert_eq!(all[1].to_coords(), (0, 1));
        assert_eq!(all[8].to_coords(), (1, 0));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location(0)));
        assert_eq!(Location::from_str("h8"), Ok(Location(63)));
        assert_eq!(Location::from_str(" d3\n"), Ok(Location(19)));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location(0).to_string(), "A1");
        assert_eq!(Location(63).to_string(), "H8");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Location::from_str("F6").unwrap().to_string(), "F6");
    }

    #[test]
    fn move_list_iterates_in_row_major_order() {
        let late = Location::from_coords(5, 4).unwrap();
        let early = Location::from_coords(2, 3).unwrap();
        let moves: MoveList = vec![late, early].into_iter().collect();

        assert_eq!(moves.len(), 2);
        assert!(moves.contains(early));
        assert!(!moves.contains(Location(0)));
        assert_eq!(moves.collect::<Vec<_>>(), vec![early, late]);
    }

    #[test]
    fn move_list_to_str() {
        let moves: MoveList = ["D3", "C4"]
            .iter()
            .map(|s| Location::from_str(s).unwrap())
            .collect();
        assert_eq!(moves.to_string(), "[D3, C4]");
        assert_eq!(MoveList::default().to_string(), "[]");
    }
}
