//! Markdown format implementation
//!
//! Export only: a parsed book becomes CommonMark Markdown.
//!
//! # Library Choice
//!
//! We use the `comrak` crate to build a Markdown AST and serialize it, so
//! escaping and list layout follow CommonMark without hand formatting.
//!
//! # Element Mapping Table
//!
//! | Block          | Markdown Equivalent     |
//! |----------------|-------------------------|
//! | Book title     | `# Title`               |
//! | ChapterTitle   | `## Heading`            |
//! | SectionTitle   | `### Heading`           |
//! | VerseList      | Tight ordered list      |
//! | Paragraph      | Paragraph               |
//!
//! Verse numbers are not kept by the parser, so list numbering restarts at 1
//! for every verse list.

pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::BookDocument;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &BookDocument) -> Result<String, FormatError> {
        serializer::serialize_to_markdown(doc)
    }
}
