//! Defines the flat event stream representation of a book.

/// Represents a single event in the book stream.
///
/// Renderers that build a tree (DOM, comrak AST) consume this stream so that
/// every open element has an explicit matching close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    StartDocument { title: String },
    EndDocument,
    ChapterTitle(String),
    SectionTitle(String),
    StartVerseList,
    EndVerseList,
    Verse(String),
    Paragraph(String),
}
