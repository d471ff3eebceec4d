//! Core data structures for the Intermediate Representation (IR).

use serde::{Deserialize, Serialize};

/// Text of a single verse.
///
/// The verse number found in the source only marks where one verse ends and
/// the next begins; it is not kept. Position inside the owning
/// [`Block::VerseList`] is the only ordering information.
pub type VerseText = String;

/// One unit of parser output.
///
/// Blocks form a flat sequence: there is no nesting, and a verse list never
/// holds anything other than verse text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// A `## ` chapter header.
    ChapterTitle { text: String },
    /// A subtitle, either standalone (`Title -`) or inline (`Title - 1 ...`).
    SectionTitle { text: String },
    /// A run of verses. Never empty.
    VerseList { verses: Vec<VerseText> },
    /// Any other non-empty line, verbatim.
    Paragraph { text: String },
}

impl Block {
    pub fn chapter_title(text: impl Into<String>) -> Self {
        Block::ChapterTitle { text: text.into() }
    }

    pub fn section_title(text: impl Into<String>) -> Self {
        Block::SectionTitle { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    pub fn verse_list<I, S>(verses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::VerseList {
            verses: verses.into_iter().map(Into::into).collect(),
        }
    }

    /// Name of the variant, used by the tree visualizations and inspect output.
    pub fn node_type(&self) -> &'static str {
        match self {
            Block::ChapterTitle { .. } => "ChapterTitle",
            Block::SectionTitle { .. } => "SectionTitle",
            Block::VerseList { .. } => "VerseList",
            Block::Paragraph { .. } => "Paragraph",
        }
    }

    /// Short human readable label for the block.
    pub fn display_label(&self) -> String {
        match self {
            Block::ChapterTitle { text }
            | Block::SectionTitle { text }
            | Block::Paragraph { text } => text.clone(),
            Block::VerseList { verses } => match verses.len() {
                1 => "1 verse".to_string(),
                n => format!("{n} verses"),
            },
        }
    }
}

/// A parsed book: the externally supplied display title plus its blocks.
///
/// The title is not a [`Block`]; it comes from the range index, not from the
/// body text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDocument {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl BookDocument {
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            blocks,
        }
    }

    /// Total number of verses across every verse list.
    pub fn verse_count(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::VerseList { verses } => verses.len(),
                _ => 0,
            })
            .sum()
    }
}
