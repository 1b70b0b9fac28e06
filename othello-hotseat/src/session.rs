//! The fixed-tick game loop.
//!
//! Every frame the session applies the pass rule, redraws, and then waits up to one
//! tick for input. It is the only code that mutates the [`Game`]; connectors only
//! see it through a [`Scene`].

use std::io;

use othello_rules::{Advance, Game, Outcome};
use tracing::{debug, info, trace};

use crate::config::SessionConfig;
use crate::connectors::{Connector, Input, Scene};

pub struct Session<C: Connector> {
    game: Game,
    connector: C,
    config: SessionConfig,
    notice: Option<String>,
}

impl<C: Connector> Session<C> {
    /// A session starting from the standard opening position.
    pub fn new(connector: C, config: SessionConfig) -> Self {
        Self::with_game(connector, config, Game::new())
    }

    pub fn with_game(connector: C, config: SessionConfig, game: Game) -> Self {
        Self {
            game,
            connector,
            config,
            notice: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The message currently shown under the board.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub fn into_connector(self) -> C {
        self.connector
    }

    /// Run until the game ends or the players quit.
    ///
    /// Returns the outcome of a finished game, or None if the players left early.
    /// Once the game is over the result stays on screen for the configured hold time.
    pub fn run(&mut self) -> io::Result<Option<Outcome>> {
        info!(fps = self.config.fps, "session started");
        let tick = self.config.tick_duration();

        loop {
            if let Some(advance) = self.game.tick() {
                self.report(advance);
            }
            self.draw()?;

            if let Some(outcome) = self.game.outcome() {
                self.connector.linger(self.config.result_hold())?;
                return Ok(Some(outcome));
            }

            match self.connector.poll_input(tick)? {
                Some(Input::Select { row, col }) => self.select(row, col),
                Some(Input::Quit) => {
                    info!("players quit before the game ended");
                    return Ok(None);
                }
                None => {}
            }
        }
    }

    fn select(&mut self, row: usize, col: usize) {
        let turn = match self.game.select(row, col) {
            Some(turn) => turn,
            None => {
                trace!(row, col, "ignored selection");
                return;
            }
        };

        debug!(
            player = %turn.player,
            location = %turn.location,
            flipped = turn.flipped,
            "move played"
        );
        self.notice = None;
        if let Some(advance) = turn.advance {
            self.report(advance);
        }
    }

    fn report(&mut self, advance: Advance) {
        match advance {
            Advance::Pass(player) => {
                info!(%player, "no legal moves, passing");
                self.notice = Some(format!("{} has no legal moves and passes.", player));
            }
            Advance::Finished(outcome) => {
                let (black, white) = self.game.board().counts();
                info!(%outcome, black, white, "game over");
                self.notice = Some(format!("Winner: {}", outcome));
            }
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let scene = Scene {
            game: &self.game,
            legal_moves: self.game.legal_moves(),
            notice: self.notice.as_deref(),
            show_hints: self.config.show_hints,
        };
        self.connector.render(&scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_rules::{Board, Player};
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Replays a fixed list of inputs and records what it was shown.
    #[derive(Default)]
    struct Scripted {
        inputs: VecDeque<Input>,
        frames: Vec<(Game, Option<String>)>,
        lingered: Option<Duration>,
    }

    impl Scripted {
        fn new(inputs: Vec<Input>) -> Self {
            Self {
                inputs: inputs.into(),
                ..Self::default()
            }
        }
    }

    impl Connector for Scripted {
        fn render(&mut self, scene: &Scene<'_>) -> io::Result<()> {
            assert_eq!(scene.legal_moves, scene.game.legal_moves());
            self.frames
                .push((*scene.game, scene.notice.map(str::to_string)));
            Ok(())
        }

        fn poll_input(&mut self, _timeout: Duration) -> io::Result<Option<Input>> {
            Ok(Some(self.inputs.pop_front().unwrap_or(Input::Quit)))
        }

        fn linger(&mut self, hold: Duration) -> io::Result<()> {
            self.lingered = Some(hold);
            Ok(())
        }
    }

    fn select(row: usize, col: usize) -> Input {
        Input::Select { row, col }
    }

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn quitting_returns_no_outcome() {
        let connector = Scripted::new(vec![select(2, 3), Input::Quit]);
        let mut session = Session::new(connector, SessionConfig::default());

        assert_eq!(session.run().unwrap(), None);
        assert_eq!(session.game().active_player(), Some(Player::White));
        assert_eq!(session.game().board().counts(), (4, 1));

        let connector = session.into_connector();
        assert_eq!(connector.frames.len(), 2);
        assert_eq!(connector.frames[0].0, Game::new());
        assert_eq!(connector.lingered, None);
    }

    #[test]
    fn illegal_selections_change_nothing() {
        let inputs = vec![select(0, 0), select(3, 3), select(8, 8), select(99, 0)];
        let mut session = Session::new(Scripted::new(inputs), SessionConfig::default());

        assert_eq!(session.run().unwrap(), None);
        assert_eq!(*session.game(), Game::new());
        assert!(session
            .connector()
            .frames
            .iter()
            .all(|(game, notice)| *game == Game::new() && notice.is_none()));
    }

    #[test]
    fn finished_game_lingers_and_reports_outcome() {
        let game = Game::from_board(
            board(
                "
                XO......
                ........
                ........
                ........
                ........
                ........
                ........
                ........",
            ),
            Player::Black,
        );
        let config = SessionConfig {
            result_hold_ms: 1500,
            ..SessionConfig::default()
        };
        let mut session = Session::with_game(Scripted::new(vec![select(0, 2)]), config, game);

        assert_eq!(session.run().unwrap(), Some(Outcome::BlackWins));
        assert_eq!(session.notice(), Some("Winner: Black wins"));

        let connector = session.into_connector();
        assert_eq!(connector.lingered, Some(Duration::from_millis(1500)));
        let (last, notice) = connector.frames.last().unwrap();
        assert!(last.is_finished());
        assert_eq!(notice.as_deref(), Some("Winner: Black wins"));
    }

    #[test]
    fn pass_is_announced_until_next_move() {
        // Black has no move here; White does.
        let game = Game::from_board(
            board(
                "
                OOOOOOOO
                OOOOOOOO
                OOOOOOOO
                OOOOOOOO
                XXXXXXXX
                XXXXXXXX
                XXXXXXXX
                XXXXXXX.",
            ),
            Player::Black,
        );
        let mut session = Session::with_game(Scripted::new(vec![]), SessionConfig::default(), game);

        assert_eq!(session.run().unwrap(), None);
        assert_eq!(session.game().active_player(), Some(Player::White));
        assert_eq!(
            session.notice(),
            Some("Black has no legal moves and passes.")
        );

        let connector = session.into_connector();
        assert_eq!(connector.frames.len(), 1);
        assert_eq!(
            connector.frames[0].1.as_deref(),
            Some("Black has no legal moves and passes.")
        );
    }

    #[test]
    fn game_played_to_the_end() {
        // Black wipes White out in nine moves.
        let moves = ["e6", "f4", "e3", "f6", "g5", "d6", "e7", "f5", "c5"];
        let inputs = moves
            .iter()
            .map(|mv| {
                let (row, col) = mv.parse::<othello_rules::Location>().unwrap().to_coords();
                select(row, col)
            })
            .collect();
        let mut session = Session::new(Scripted::new(inputs), SessionConfig::default());

        assert_eq!(session.run().unwrap(), Some(Outcome::BlackWins));
        assert_eq!(session.game().board().counts(), (13, 0));
        assert_eq!(session.connector().frames.len(), moves.len() + 1);
    }
}
