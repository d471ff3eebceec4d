//! Line-range extraction from the flat corpus text.

use crate::corpus::index::{BookIndex, LineRange};
use crate::corpus::read_file;
use crate::error::CorpusError;
use crate::ir::nodes::BookDocument;
use crate::parser::parse_book;
use std::path::Path;

/// The whole text, split on `\n`.
///
/// A trailing newline leaves a final empty line, matching how the range
/// index counts lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    lines: Vec<String>,
}

impl Corpus {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let corpus = Self::from_text(&read_file(path)?);
        tracing::debug!(path = %path.display(), lines = corpus.line_count(), "Loaded corpus");
        Ok(corpus)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines `start..=end` (1-indexed) joined with `\n`.
    ///
    /// `book` only labels the error.
    pub fn extract(&self, book: &str, range: LineRange) -> Result<String, CorpusError> {
        let LineRange { start, end } = range;
        if start == 0 || start > end || end > self.line_count() {
            return Err(CorpusError::RangeOutOfBounds {
                book: book.to_string(),
                start,
                end,
                line_count: self.line_count(),
            });
        }
        Ok(self.lines[start - 1..end].join("\n"))
    }

    /// Resolve a book through the index, extract its lines and parse them.
    pub fn read_book(&self, index: &BookIndex, book: &str) -> Result<BookDocument, CorpusError> {
        let range = index.resolve(book)?;
        let text = self.extract(book, range)?;
        tracing::debug!(book, start = range.start, end = range.end, "Parsing book");
        Ok(parse_book(&text, book))
    }
}
