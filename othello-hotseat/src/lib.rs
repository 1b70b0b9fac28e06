//! `othello-hotseat` runs a game of Othello for two players sharing one terminal.
//!
//! The rules live in `othello-rules`; this crate supplies everything around them:
//!
//!  - [`session`] is the fixed-tick game loop. It owns the [`othello_rules::Game`] and is
//!    its only writer.
//!  - [`connectors`] render the game and turn player input into grid coordinates, either
//!    through a full-screen terminal UI or a plain line-based prompt.
//!  - [`config`], [`error`] and [`logging`] hold the ambient setup used by the binary.

pub mod config;
pub mod connectors;
pub mod error;
pub mod logging;
pub mod session;

pub use config::SessionConfig;
pub use session::Session;
