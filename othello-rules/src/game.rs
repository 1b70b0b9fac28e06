//! Implements game-level Othello logic: whose turn it is, passes, and the final result.
//!
//! [`Game`] is the only writer of its [`Board`]. Frontends read the board and the
//! current legal moves, and report selected cells back through [`Game::select`].

use crate::board::Board;
use crate::location::{Location, MoveList};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Tie,
}

impl Outcome {
    /// Decide the result from final piece counts. Empty squares are not scored.
    pub fn from_counts(black: u8, white: u8) -> Self {
        if black > white {
            Outcome::BlackWins
        } else if white > black {
            Outcome::WhiteWins
        } else {
            Outcome::Tie
        }
    }

    pub fn from_board(board: &Board) -> Self {
        let (black, white) = board.counts();
        Self::from_counts(black, white)
    }

    /// The winning player, or None for a tie.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::BlackWins => Some(Player::Black),
            Outcome::WhiteWins => Some(Player::White),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(player) => write!(f, "{} wins", player),
            None => f.write_str("Tie game"),
        }
    }
}

/// Where the game stands between inputs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GameStatus {
    AwaitingMove(Player),
    GameOver(Outcome),
}

/// A state change that happens without input from the players.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Advance {
    /// The named player had no legal moves and was skipped.
    Pass(Player),
    /// Neither player could move; the game is over.
    Finished(Outcome),
}

/// Summary of a committed move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Turn {
    pub player: Player,
    pub location: Location,
    pub flipped: u8,
    /// A pass or game end that followed immediately from this move.
    pub advance: Option<Advance>,
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Default for Game {
    /// Gets the starting position with Black to move.
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::default())
    }

    /// Start from an arbitrary position with `active` to move.
    /// Passes and game end are resolved on the next [`Game::tick`] or move.
    pub fn from_board(board: Board, active: Player) -> Self {
        Self {
            board,
            status: GameStatus::AwaitingMove(active),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player to move, or None once the game is over.
    pub fn active_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::AwaitingMove(player) => Some(player),
            GameStatus::GameOver(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::AwaitingMove(_) => None,
            GameStatus::GameOver(outcome) => Some(outcome),
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Get the list of moves available for the active player. Empty once the game is over.
    pub fn legal_moves(&self) -> MoveList {
        match self.active_player() {
            Some(player) => self.board.legal_moves(player),
            None => MoveList::default(),
        }
    }

    /// Handle a selected cell from the active player.
    ///
    /// Selections that are off the board, occupied, capture nothing, or arrive after the
    /// game is over are ignored: nothing changes and None is returned.
    pub fn select(&mut self, row: usize, col: usize) -> Option<Turn> {
        Location::from_coords(row, col)
            .and_then(|loc| self.play(loc))
    }

    /// Like [`Game::select`], for a location that is already known to be on the board.
    pub fn play(&mut self, loc: Location) -> Option<Turn> {
        let player = self.active_player()?;
        if !self.board.is_legal_move(loc, player) {
            return None;
        }

        let flipped = self.board.apply_move_unchecked(loc, player);
        self.status = GameStatus::AwaitingMove(!player);
        let advance = self.resolve();

        Some(Turn {
            player,
            location: loc,
            flipped,
            advance,
        })
    }

    /// Apply the pass rule. Called once per frame by the session driver.
    ///
    /// Returns what changed, if anything. Calling this again without a move in between
    /// always returns None.
    pub fn tick(&mut self) -> Option<Advance> {
        self.resolve()
    }

    fn resolve(&mut self) -> Option<Advance> {
        let active = self.active_player()?;
        if !self.board.legal_moves(active).is_empty() {
            return None;
        }

        if !self.board.legal_moves(!active).is_empty() {
            self.status = GameStatus::AwaitingMove(!active);
            return Some(Advance::Pass(active));
        }

        let outcome = Outcome::from_board(&self.board);
        self.status = GameStatus::GameOver(outcome);
        Some(Advance::Finished(outcome))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        let (black, white) = self.board.counts();
        match self.status {
            GameStatus::AwaitingMove(player) => {
                write!(f, "{} to move (Black: {}, White: {})", player, black, white)
            }
            GameStatus::GameOver(outcome) => write!(f, "Winner: {} ({}-{})", outcome, black, white),
        }
    }
}
