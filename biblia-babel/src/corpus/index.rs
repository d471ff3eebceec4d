//! Range index: the markdown table mapping book names to line ranges.
//!
//! ```text
//! | Livro   | Linhas  |
//! |---------|---------|
//! | Gênesis | 12-2080 |
//! | Êxodo   | 2081-3600 |
//! ```
//!
//! The first two lines are the table header and separator and are always
//! skipped. A later line is a row when, trimmed, it starts and ends with `|`
//! and its book and range cells are non-empty, the book is not `---`, and the
//! range contains a hyphen. Anything else is ignored.

use crate::corpus::read_file;
use crate::error::CorpusError;
use serde::Serialize;
use std::path::Path;

/// Books of the New Testament, spelled as they appear in the index.
pub const NEW_TESTAMENT_BOOKS: [&str; 27] = [
    "Evangelho Segundo São Mateus",
    "Evangelho Segundo São Marcos",
    "Evangelho Segundo São Lucas",
    "Evangelho Segundo São João",
    "Atos Dos Apóstolos",
    "Epístola Aos Romanos",
    "Primeira Epístola Aos Coríntios",
    "Segunda Epístola Aos Coríntios",
    "Epístola Aos Gálatas",
    "Epístola Aos Efésios",
    "Epístola Aos Filipenses",
    "Epístola Aos Colossenses",
    "Primeira Epístola Aos Tessalonicenses",
    "Segunda Epístola Aos Tessalonicenses",
    "Primeira Epístola A Timóteo",
    "Segunda Epístola A Timóteo",
    "Epístola A Tito",
    "Epístola A Filemon",
    "Epístola Aos Hebreus",
    "Epístola De São Tiago",
    "Primeira Epístola De São Pedro",
    "Segunda Epístola De São Pedro",
    "Primeira Epistola De Sao João",
    "Segunda Epístola De São João",
    "Terceira Epístola De São João",
    "Epístola De São Judas",
    "Apocalipse",
];

/// Index rows that are kept for lookup but never listed as books.
const UNLISTED_ENTRIES: [&str; 3] = ["---", ":---", "Introdução"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// Every book not in [`NEW_TESTAMENT_BOOKS`] is Old Testament.
    pub fn of(book: &str) -> Self {
        if NEW_TESTAMENT_BOOKS.contains(&book) {
            Testament::New
        } else {
            Testament::Old
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "old" | "at" => Some(Testament::Old),
            "new" | "nt" => Some(Testament::New),
            _ => None,
        }
    }
}

/// A closed, 1-indexed line interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Parse `start-end`. Cells are trimmed; anything after a second hyphen is
    /// ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split('-').map(str::trim);
        let start = parts.next()?.parse().ok()?;
        let end = parts.next()?.parse().ok()?;
        Some(Self { start, end })
    }
}

/// One row of the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookEntry {
    pub name: String,
    /// The range cell as written; parsed on lookup.
    pub range: String,
    pub testament: Testament,
}

impl BookEntry {
    /// Whether the row names a readable book rather than a table artifact or
    /// the introduction.
    pub fn is_listed(&self) -> bool {
        !UNLISTED_ENTRIES.contains(&self.name.as_str())
    }
}

/// Book rows in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookIndex {
    entries: Vec<BookEntry>,
}

impl BookIndex {
    /// Parse index text. Never fails; rows that do not fit are skipped.
    pub fn parse(text: &str) -> Self {
        let mut index = BookIndex::default();
        for line in text.split('\n').skip(2) {
            if let Some((book, range)) = parse_row(line) {
                index.insert(book, range);
            }
        }
        index
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let index = Self::parse(&read_file(path)?);
        tracing::debug!(path = %path.display(), books = index.len(), "Loaded range index");
        Ok(index)
    }

    /// Add a row. A book already present keeps its position and takes the new range.
    pub fn insert(&mut self, book: &str, range: &str) {
        match self.entries.iter_mut().find(|entry| entry.name == book) {
            Some(entry) => entry.range = range.to_string(),
            None => self.entries.push(BookEntry {
                name: book.to_string(),
                range: range.to_string(),
                testament: Testament::of(book),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All rows, including unlisted ones.
    pub fn entries(&self) -> &[BookEntry] {
        &self.entries
    }

    pub fn get(&self, book: &str) -> Option<&BookEntry> {
        self.entries.iter().find(|entry| entry.name == book)
    }

    /// Look up a book and parse its range.
    pub fn resolve(&self, book: &str) -> Result<LineRange, CorpusError> {
        let entry = self
            .get(book)
            .ok_or_else(|| CorpusError::BookNotFound(book.to_string()))?;
        LineRange::parse(&entry.range).ok_or_else(|| CorpusError::InvalidRange {
            book: book.to_string(),
            range: entry.range.clone(),
        })
    }

    /// Readable books in index order.
    pub fn listed_books(&self) -> impl Iterator<Item = &BookEntry> {
        self.entries.iter().filter(|entry| entry.is_listed())
    }

    pub fn by_testament(&self, testament: Testament) -> impl Iterator<Item = &BookEntry> {
        self.listed_books()
            .filter(move |entry| entry.testament == testament)
    }

    /// Listed books whose name contains `term`, ignoring case. An empty term
    /// matches every book.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a BookEntry> + 'a {
        let term = term.to_lowercase();
        self.listed_books()
            .filter(move |entry| entry.name.to_lowercase().contains(&term))
    }
}

/// Book and range cells of a table row.
fn parse_row(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if !(line.starts_with('|') && line.ends_with('|')) {
        return None;
    }

    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    if parts.len() < 3 {
        return None;
    }
    let (book, range) = (parts[1], parts[2]);
    if book.is_empty() || range.is_empty() || book == "---" || !range.contains('-') {
        return None;
    }
    Some((book, range))
}
