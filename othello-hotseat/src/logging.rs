//! Log setup for the binary.
//!
//! The full-screen UI owns stdout and stderr while it runs, so logs go to a file when
//! one is given. The line-based frontend can share stderr with the game.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
/// With no file and `stderr_ok` false, logging stays disabled.
pub fn init(level: &str, log_file: Option<&Path>, stderr_ok: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level {:?}", level))?,
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|err| anyhow!("installing log subscriber: {}", err))
        }
        None if stderr_ok => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
            .map_err(|err| anyhow!("installing log subscriber: {}", err)),
        None => Ok(()),
    }
}
