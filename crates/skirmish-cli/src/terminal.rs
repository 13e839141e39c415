//! Scoped raw-mode acquisition
//!
//! Raw mode disables canonical line buffering and local echo so every
//! keystroke reaches the program immediately. The guard restores the
//! previous mode when dropped, so restoration happens on every exit path,
//! including panics unwinding out of the loop.

use crossterm::terminal;

use crate::error::Result;

/// Holds the terminal in raw mode for its lifetime
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Switch the terminal into raw mode
    pub fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        log::debug!("terminal switched to raw mode");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("failed to restore terminal mode: {err}");
        }
    }
}
