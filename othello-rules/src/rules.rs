//! Capture rules: which moves are legal, and what a move flips.
//!
//! Legality checks and move application walk the board the same way, so both
//! are built on [`Board::scan_line`].

use crate::board::{Board, Cell};
use crate::game::Player;
use crate::location::{Direction, Location, MoveList};
use derive_more::{Display, Error};

/// Returned when asked to apply a move that captures nothing or lands on an occupied cell.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "{} cannot play {}", player, location)]
pub struct IllegalMoveError {
    pub location: Location,
    pub player: Player,
}

impl Board {
    /// Walk outward from `origin` along `direction` looking for a capture line for `player`.
    ///
    /// The first cell must hold an opponent piece. The walk then continues over opponent
    /// pieces and stops at the first cell that is not one: if that cell holds one of
    /// `player`'s pieces it is returned, and every cell strictly between it and `origin`
    /// would be captured. Running off the board or onto an empty cell yields None.
    /// The contents of `origin` itself are never examined.
    pub fn scan_line(
        &self,
        origin: Location,
        direction: Direction,
        player: Player,
    ) -> Option<Location> {
        let own = Cell::from(player);
        let opponent = Cell::from(!player);

        let mut cursor = origin.step(direction)?;
        if self.get(cursor) != opponent {
            return None;
        }

        loop {
            cursor = cursor.step(direction)?;
            match self.get(cursor) {
                cell if cell == own => return Some(cursor),
                cell if cell == opponent => continue,
                _ => return None,
            }
        }
    }

    /// Returns whether `player` may place a piece at `loc`: the cell is empty and at
    /// least one direction forms a capture line.
    pub fn is_legal_move(&self, loc: Location, player: Player) -> bool {
        if self.get(loc) != Cell::Empty {
            return false;
        }

        Direction::ALL
            .iter()
            .any(|&dir| self.scan_line(loc, dir, player).is_some())
    }

    /// Get the list of legal moves for `player`, scanning the board in row-major order.
    pub fn legal_moves(&self, player: Player) -> MoveList {
        Location::all()
            .filter(|&loc| self.is_legal_move(loc, player))
            .collect()
    }

    /// Place a piece for `player` at `loc` and flip every captured line.
    /// Returns the number of opponent pieces flipped.
    ///
    /// If the move is not legal the board is left untouched.
    pub fn apply_move(&mut self, loc: Location, player: Player) -> Result<u8, IllegalMoveError> {
        if !self.is_legal_move(loc, player) {
            return Err(IllegalMoveError {
                location: loc,
                player,
            });
        }

        Ok(self.apply_move_unchecked(loc, player))
    }

    /// Apply a move that the caller has already validated with [`Board::is_legal_move`].
    /// Legality is only asserted in debug builds; an illegal move leaves the board in a
    /// state no game could reach.
    pub fn apply_move_unchecked(&mut self, loc: Location, player: Player) -> u8 {
        debug_assert!(
            self.is_legal_move(loc, player),
            "{} is not a legal move for {}",
            loc,
            player
        );

        let own = Cell::from(player);
        let mut flipped = 0;

        for &direction in Direction::ALL.iter() {
            let terminal = match self.scan_line(loc, direction, player) {
                Some(terminal) => terminal,
                None => continue,
            };

            let mut cursor = loc;
            while let Some(next) = cursor.step(direction) {
                if next == terminal {
                    break;
                }
                self.set(next, own);
                flipped += 1;
                cursor = next;
            }
        }

        self.set(loc, own);
        flipped
    }
}

/// Check a move given as raw grid coordinates. Coordinates off the board are never legal.
pub fn is_legal_move(board: &Board, row: usize, col: usize, player: Player) -> bool {
    Location::from_coords(row, col)
        .map_or(false, |loc| board.is_legal_move(loc, player))
}

/// Every legal move for `player`, in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> MoveList {
    board.legal_moves(player)
}
