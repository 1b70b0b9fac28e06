//! The 8x8 grid of cells and its starting position.
//!
//! By convention, row 0 is the top of the board and column 0 is the left edge;
//! cells are stored in row-major order. Capture rules live in [`rules.rs`].

use crate::game::Player;
use crate::{utils, Location, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The contents of a single square.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl Cell {
    /// The player whose piece occupies this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => '#',
            Cell::White => 'O',
        }
    }
}

/// A complete Othello position: every cell on the 8x8 grid.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the starting board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The classical starting position: White on D4 and E5, Black on E4 and D5.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;
        Self { cells }
    }

    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        self.cells[loc.row()][loc.col()]
    }

    /// Overwrite a single cell. Skips all rule checks; meant for setting up positions.
    #[inline]
    pub fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.row()][loc.col()] = cell;
    }

    /// The rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; EDGE_LENGTH]> {
        self.cells.iter()
    }

    /// Count the locations holding `cell`.
    pub fn count(&self, cell: Cell) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&other| other == cell)
            .count() as u8
    }

    /// Piece counts as `(black, white)`.
    pub fn counts(&self) -> (u8, u8) {
        (self.count(Cell::Black), self.count(Cell::White))
    }

    /// Number of pieces on the board for either player.
    pub fn occupied(&self) -> u8 {
        NUM_SPACES as u8 - self.count(Cell::Empty)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells.iter().flatten().map(|cell| cell.to_char()), f)
    }
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "unrecognized board character {:?}", _0)]
    BadCharacter(#[error(not(source))] char),
    #[display(fmt = "expected 64 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
}

/// Parse a board from 64 squares in row-major order.
/// `X`, `#` or `B` is Black, `O` or `W` is White, `.` or `-` is empty.
/// Whitespace is ignored, so the grid may be laid out over several lines.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut squares = 0;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c.to_ascii_uppercase() {
                'X' | '#' | 'B' => Cell::Black,
                'O' | 'W' => Cell::White,
                '.' | '-' => Cell::Empty,
                _ => return Err(ParseBoardError::BadCharacter(c)),
            };

            if let Some(loc) = Location::from_index(squares as u8) {
                board.set(loc, cell);
            }
            squares += 1;
        }

        if squares != NUM_SPACES {
            return Err(ParseBoardError::WrongLength(squares));
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> Location {
        Location::from_coords(row, col).unwrap()
    }

    #[test]
    fn starting_board_has_center_cross() {
        let board = Board::new();
        assert_eq!(board.get(loc(3, 3)), Cell::White);
        assert_eq!(board.get(loc(3, 4)), Cell::Black);
        assert_eq!(board.get(loc(4, 3)), Cell::Black);
        assert_eq!(board.get(loc(4, 4)), Cell::White);
        assert_eq!(board.occupied(), 4);
        assert_eq!(board.counts(), (2, 2));
        assert_eq!(board.count(Cell::Empty), 60);
    }

    #[test]
    fn empty_board() {
        let board = Board::empty();
        assert!(board.rows().flatten().all(|&cell| cell == Cell::Empty));
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn board_from_str_round_trips_start() {
        let parsed: Board = "
            ........
            ........
            ........
            ...OX...
            ...XO...
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert_eq!(parsed, Board::new());
    }

    #[test]
    fn board_from_str_fail() {
        assert_eq!("".parse::<Board>(), Err(ParseBoardError::WrongLength(0)));
        assert_eq!(
            "-".repeat(65).parse::<Board>(),
            Err(ParseBoardError::WrongLength(65))
        );
        assert_eq!(
            format!("{}?", "-".repeat(63)).parse::<Board>(),
            Err(ParseBoardError::BadCharacter('?'))
        );
    }

    #[test]
    fn board_display() {
        let rendered = Board::new().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "   A B C D E F G H");
        assert_eq!(lines[4], " 4 . . . O # . . . ");
        assert_eq!(lines[5], " 5 . . . # O . . . ");
    }

    #[test]
    fn cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::from(Player::Black).owner(), Some(Player::Black));
        assert_eq!(Cell::from(Player::White).owner(), Some(Player::White));
    }
}
