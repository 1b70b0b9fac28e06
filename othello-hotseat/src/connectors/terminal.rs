//! Full-screen [`Connector`] drawn with ratatui, taking input from the mouse or keyboard.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use othello_rules::{Game, Location, Player, EDGE_LENGTH};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::warn;

use super::{Connector, Input, Scene};
use crate::config::SessionConfig;

const BOARD_LIGHT: Color = Color::Green;
const BOARD_DARK: Color = Color::Rgb(0, 100, 0);
const CURSOR: Color = Color::LightGreen;

/// Raw mode, the alternate screen and mouse capture, held for as long as the guard lives.
///
/// Dropping the guard restores the terminal, so every early return after
/// [`TerminalGuard::enter`] leaves the shell usable.
pub struct TerminalGuard<W: Write> {
    writer: W,
    active: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(writer: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            writer,
            active: true,
        };
        execute!(guard.writer, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    /// Leave the alternate screen and raw mode. Does nothing the second time.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let screen = execute!(
            self.writer,
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        );
        let raw_mode = disable_raw_mode();
        screen.and(raw_mode)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(%err, "failed to restore terminal");
        }
    }
}

/// Where the board was last drawn, in terminal cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoardGeometry {
    pub x: u16,
    pub y: u16,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl BoardGeometry {
    /// Map a terminal position to the board square under it, as `(row, col)`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let col = column.checked_sub(self.x)?.checked_div(self.cell_width)? as usize;
        let row = row.checked_sub(self.y)?.checked_div(self.cell_height)? as usize;
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Some((row, col))
        } else {
            None
        }
    }

    pub fn width(&self) -> u16 {
        self.cell_width.saturating_mul(EDGE_LENGTH as u16)
    }

    pub fn height(&self) -> u16 {
        self.cell_height.saturating_mul(EDGE_LENGTH as u16)
    }
}

/// Draws the game into a ratatui [`Terminal`] and reads crossterm events.
///
/// Setting the terminal up (raw mode, alternate screen, mouse capture) is left to the caller.
pub struct TerminalConnector<B: Backend> {
    terminal: Terminal<B>,
    cell_width: u16,
    cell_height: u16,
    cursor: (usize, usize),
    geometry: Option<BoardGeometry>,
}

impl<B: Backend> TerminalConnector<B> {
    pub fn new(terminal: Terminal<B>, config: &SessionConfig) -> Self {
        Self {
            terminal,
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            cursor: (2, 3),
            geometry: None,
        }
    }

    /// Where the board was drawn in the last frame, if one has been drawn.
    pub fn geometry(&self) -> Option<BoardGeometry> {
        self.geometry
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Input> {
        let last = EDGE_LENGTH - 1;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Input::Quit)
            }
            KeyCode::Up => {
                self.cursor.0 = self.cursor.0.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.cursor.0 = (self.cursor.0 + 1).min(last);
                None
            }
            KeyCode::Left => {
                self.cursor.1 = self.cursor.1.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor.1 = (self.cursor.1 + 1).min(last);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let (row, col) = self.cursor;
                Some(Input::Select { row, col })
            }
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Input> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let (row, col) = self.geometry?.cell_at(mouse.column, mouse.row)?;
        self.cursor = (row, col);
        Some(Input::Select { row, col })
    }
}

impl<B: Backend> Connector for TerminalConnector<B> {
    fn render(&mut self, scene: &Scene<'_>) -> io::Result<()> {
        let cursor = self.cursor;
        let cell_size = (self.cell_width, self.cell_height);
        let mut geometry = None;

        self.terminal.draw(|frame| {
            geometry = Some(draw_scene(frame, scene, cursor, cell_size));
        })?;
        self.geometry = geometry;
        Ok(())
    }

    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => None,
        })
    }
}

/// Draw one frame and report where the board landed.
fn draw_scene(
    frame: &mut Frame,
    scene: &Scene<'_>,
    cursor: (usize, usize),
    (cell_width, cell_height): (u16, u16),
) -> BoardGeometry {
    let board_height = cell_height.saturating_mul(EDGE_LENGTH as u16);
    let [header, body, message, controls] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(board_height.saturating_add(2)),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    render_header(frame, scene.game, header);
    let geometry = render_board(frame, scene, cursor, (cell_width, cell_height), body);
    render_message(frame, scene, message);
    render_controls(frame, controls);
    geometry
}

fn render_header(frame: &mut Frame, game: &Game, area: Rect) {
    let (black, white) = game.board().counts();
    let (status, color) = match game.active_player() {
        Some(player) => (format!("{} to move", player), Color::Cyan),
        None => ("Game Over".to_string(), Color::Yellow),
    };

    let text = format!("{}  |  Black: {}  White: {}", status, black, white);
    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Othello"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    scene: &Scene<'_>,
    cursor: (usize, usize),
    (cell_width, cell_height): (u16, u16),
    area: Rect,
) -> BoardGeometry {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut geometry = BoardGeometry {
        x: inner.x,
        y: inner.y,
        cell_width,
        cell_height,
    };
    geometry.x += inner.width.saturating_sub(geometry.width()) / 2;
    geometry.y += inner.height.saturating_sub(geometry.height()) / 2;

    let mut lines = Vec::with_capacity(geometry.height() as usize);
    for row in 0..EDGE_LENGTH {
        for line in 0..cell_height {
            let middle = line == cell_height / 2;
            let spans: Vec<Span> = (0..EDGE_LENGTH)
                .map(|col| {
                    let selected = cursor == (row, col) && !scene.game.is_finished();
                    square(scene, row, col, middle, selected, cell_width)
                })
                .collect();
            lines.push(Line::from(spans));
        }
    }

    let board_area = Rect::new(
        geometry.x,
        geometry.y,
        geometry.width().min(inner.width),
        geometry.height().min(inner.height),
    );
    frame.render_widget(Paragraph::new(lines), board_area);
    geometry
}

/// One line of one board square. Pieces and hints are only drawn on the middle line.
fn square(
    scene: &Scene<'_>,
    row: usize,
    col: usize,
    middle: bool,
    selected: bool,
    width: u16,
) -> Span<'static> {
    let background = if selected {
        CURSOR
    } else if (row + col) % 2 == 0 {
        BOARD_LIGHT
    } else {
        BOARD_DARK
    };

    let (glyph, foreground) = match Location::from_coords(row, col) {
        Some(loc) if middle => match scene.game.board().get(loc).owner() {
            Some(Player::Black) => ('\u{25cf}', Color::Black),
            Some(Player::White) => ('\u{25cf}', Color::White),
            None if scene.show_hints && scene.legal_moves.contains(loc) => {
                ('\u{00b7}', Color::Yellow)
            }
            None => (' ', Color::Reset),
        },
        _ => (' ', Color::Reset),
    };

    let left = (width as usize).saturating_sub(1) / 2;
    let right = (width as usize).saturating_sub(1) - left;
    Span::styled(
        format!("{}{}{}", " ".repeat(left), glyph, " ".repeat(right)),
        Style::default()
            .fg(foreground)
            .bg(background)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_message(frame: &mut Frame, scene: &Scene<'_>, area: Rect) {
    let text = scene.notice.unwrap_or("");
    let style = if scene.game.is_finished() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(message, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("Click a square, or ←↑↓→ + Enter: Place  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
