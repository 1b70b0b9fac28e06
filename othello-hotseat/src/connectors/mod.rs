//! Connectors let the players see the board and pick squares through different interfaces.

mod connector;
mod terminal;
mod text;

pub use connector::{Connector, Input, Scene};
pub use terminal::{BoardGeometry, TerminalConnector, TerminalGuard};
pub use text::TextConnector;
