use std::io;
use std::time::{Duration, Instant};

use othello_rules::{Game, MoveList};

/// Something the players asked for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Input {
    /// A board square, already resolved from whatever the player pointed at.
    /// The coordinates may still be off the board; the game ignores those.
    Select { row: usize, col: usize },
    /// Leave the session.
    Quit,
}

/// Everything a connector needs to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    pub game: &'a Game,
    /// Legal moves for the side to move; empty once the game is over.
    pub legal_moves: MoveList,
    /// A one-line message about the last pass or the result.
    pub notice: Option<&'a str>,
    pub show_hints: bool,
}

/// A player-facing interface between a hotseat session and "the outside world."
/// Both players share the same connector.
pub trait Connector {
    /// Draw the current state of the game.
    fn render(&mut self, scene: &Scene<'_>) -> io::Result<()>;

    /// Wait up to `timeout` for the next input. Returns None if nothing usable arrived.
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Input>>;

    /// Keep the final frame up for `hold`, or until the players quit.
    fn linger(&mut self, hold: Duration) -> io::Result<()> {
        let deadline = Instant::now() + hold;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(());
            }
            if let Some(Input::Quit) = self.poll_input(remaining)? {
                return Ok(());
            }
        }
    }
}
