//! [`Connector`] for playing over plain lines of text, e.g. in a pipe or a dumb terminal.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use othello_rules::Location;
use tracing::debug;

use super::{Connector, Input, Scene};

/// Prints the board after every change and reads one move per line.
///
/// A move is either board notation (`d3`) or a zero-indexed `row col` pair (`2 3`).
/// `quit`, `q` or end of input leaves the session.
pub struct TextConnector<R, W> {
    input: R,
    output: W,
    last_frame: Option<String>,
}

impl TextConnector<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TextConnector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            last_frame: None,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn frame(scene: &Scene<'_>) -> String {
        let mut frame = format!("{}\n", scene.game);
        // A finished game's display already ends with the result.
        if scene.game.is_finished() {
            return frame;
        }

        if let Some(notice) = scene.notice {
            frame.push_str(notice);
            frame.push('\n');
        }
        if scene.show_hints {
            let hints = format!("Legal moves: {}\n", scene.legal_moves);
            frame.push_str(&hints);
        }
        frame
    }
}

/// Parse one line of player input. Returns None if the line is not a move or a command.
fn parse_line(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return Some(Input::Quit);
    }

    if let Ok(loc) = line.parse::<Location>() {
        let (row, col) = loc.to_coords();
        return Some(Input::Select { row, col });
    }

    let mut segments = line.split_whitespace();
    let row = segments.next()?.parse().ok()?;
    let col = segments.next()?.parse().ok()?;
    if segments.next().is_some() {
        return None;
    }
    Some(Input::Select { row, col })
}

impl<R: BufRead, W: Write> Connector for TextConnector<R, W> {
    fn render(&mut self, scene: &Scene<'_>) -> io::Result<()> {
        // The session redraws every frame; only print when something changed.
        let frame = Self::frame(scene);
        if self.last_frame.as_deref() != Some(frame.as_str()) {
            write!(self.output, "\n{}", frame)?;
            self.last_frame = Some(frame);
        }
        if !scene.game.is_finished() {
            write!(self.output, "> ")?;
        }
        self.output.flush()
    }

    /// Blocks until a full line arrives; there is no clock to honor between keystrokes.
    fn poll_input(&mut self, _timeout: Duration) -> io::Result<Option<Input>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Ok(Some(Input::Quit));
        }

        let input = parse_line(&line);
        if input.is_none() && !line.trim().is_empty() {
            writeln!(
                self.output,
                "Could not read {:?}: enter a square like d3, or quit.",
                line.trim()
            )?;
        }
        Ok(input)
    }

    /// The result is already on screen and nobody is waiting to read it.
    fn linger(&mut self, _hold: Duration) -> io::Result<()> {
        Ok(())
    }
}
