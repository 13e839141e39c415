//! Error types for the terminal front end

use thiserror::Error;

/// Front-end error type
///
/// The battle logic itself is infallible; everything that can fail here is
/// terminal or console stream I/O.
#[derive(Error, Debug)]
pub enum Error {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
