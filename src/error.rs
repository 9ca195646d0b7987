use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// Failure while reading or writing a deck file.
#[derive(Debug, Error)]
pub enum DeckFileError {
    #[error(transparent)]
    IOError(#[from] io::Error),

    #[error("line {line}: expected term, definition and mistakes separated by \"&&\"")]
    MissingField { line: usize },

    #[error("line {line}: invalid mistake count {value:?}: {source}")]
    ParseError {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: dangling escape character")]
    DanglingEscape { line: usize },
}

impl DeckFileError {
    /// Whether the file itself could not be opened, as opposed to being malformed.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, DeckFileError::IOError(_))
    }
}

/// Failure of the interactive session itself.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console error: {0}")]
    IOError(#[from] io::Error),

    #[error("standard input was closed")]
    InputClosed,
}
