//! Error types for corpus loading and format operations
//!
//! Parsing itself never fails; these cover everything around it.

use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the requested operation
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Errors raised while resolving a book to its text.
///
/// All of these happen before the parser runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// The index or corpus file could not be read
    Io { path: String, message: String },
    /// No index row for this book name
    BookNotFound(String),
    /// The index row's range is not `start-end`
    InvalidRange { book: String, range: String },
    /// The range does not fit inside the corpus
    RangeOutOfBounds {
        book: String,
        start: usize,
        end: usize,
        line_count: usize,
    },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Io { path, message } => write!(f, "Could not read '{path}': {message}"),
            CorpusError::BookNotFound(book) => write!(f, "Book '{book}' not found in index"),
            CorpusError::InvalidRange { book, range } => {
                write!(f, "Book '{book}' has an invalid range '{range}'")
            }
            CorpusError::RangeOutOfBounds {
                book,
                start,
                end,
                line_count,
            } => write!(
                f,
                "Range {start}-{end} of book '{book}' does not fit a corpus of {line_count} lines"
            ),
        }
    }
}

impl std::error::Error for CorpusError {}
