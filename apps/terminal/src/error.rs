//! # App Error Type
//!
//! Errors that end a session early. Everything else (bad input, unknown
//! item codes, failed saves) is reported on screen and the menu carries on.

use thiserror::Error;

/// Terminal application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input ended before the user chose Save & Exit.
    ///
    /// Treated like Ctrl-C: nothing is saved.
    #[error("session interrupted")]
    Interrupted,

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for terminal operations.
pub type AppResult<T> = Result<T, AppError>;
