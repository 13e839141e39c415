//! Non-blocking console input
//!
//! The game loop must never wait for a keypress, so readiness is checked
//! with a zero-timeout `event::poll` before anything is read. Raw mode means
//! the OS no longer echoes keystrokes; the poller echoes them back itself so
//! the player can see what they are typing.

use std::io::Write;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::error::Result;

/// Accumulates typed characters until a line is completed
///
/// The line terminator is never stored; `complete` hands back exactly what
/// was typed before Enter.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: String,
}

impl LineBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one typed character
    pub fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    /// Remove the last character; returns whether one was removed
    pub fn backspace(&mut self) -> bool {
        self.buf.pop().is_some()
    }

    /// Take the completed line, leaving the buffer empty
    pub fn complete(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

/// Drain pending key events into `line`, echoing them to `out`.
///
/// Returns the completed line once Enter is seen, `None` otherwise. Never
/// blocks: the readiness check uses a zero timeout and returns immediately
/// when nothing is pending. A failed poll or read (for example a closed
/// console stream) counts as "no input this cycle" - the combat clock keeps
/// running.
pub fn poll_line(line: &mut LineBuffer, out: &mut impl Write) -> Result<Option<String>> {
    loop {
        match event::poll(Duration::ZERO) {
            Ok(true) => {}
            Ok(false) => return Ok(None),
            Err(err) => {
                log::debug!("console poll failed, treating as no input: {err}");
                return Ok(None);
            }
        }

        let ev = match event::read() {
            Ok(ev) => ev,
            Err(err) => {
                log::debug!("console read failed, treating as no input: {err}");
                return Ok(None);
            }
        };
        let Event::Key(KeyEvent { code, kind, .. }) = ev else {
            continue;
        };
        if kind == KeyEventKind::Release {
            continue;
        }

        match code {
            KeyCode::Char(c) => {
                line.push(c);
                write!(out, "{c}")?;
                out.flush()?;
            }
            KeyCode::Backspace => {
                // Erase on screen only if there was something to erase
                if line.backspace() {
                    write!(out, "\u{8} \u{8}")?;
                    out.flush()?;
                }
            }
            KeyCode::Enter => {
                write!(out, "\r\n")?;
                out.flush()?;
                return Ok(Some(line.complete()));
            }
            _ => {}
        }
    }
}
