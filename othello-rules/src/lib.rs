//! `othello-rules` implements the rules of Othello for two players sharing one board.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains a packed one-bit-per-square mask, used for move lists.
//!  - [`Board`] owns the 8x8 grid and implements the capture rules: legality checks
//!    and move application share a single line-scanning primitive ([`Board::scan_line`]).
//!  - [`Game`] is the turn controller. It validates selections, switches players,
//!    handles passes and reports the final [`Outcome`].
//!
//! The crate does no I/O; frontends feed it resolved grid coordinates and read back
//! the board and the current list of legal moves.

pub mod bitboard;
pub mod test_utils;

mod board;
mod game;
mod location;
mod rules;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;
pub use rules::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
