//! Block parser for the biblia text format.
//!
//! The format is a narrow, line-oriented convention:
//!
//! ```text
//! <!-- comments are skipped -->
//! ## Capítulo 1
//! A criação - 1 No princípio criou Deus os céus e a terra. 2 A terra era sem forma
//! 3 E disse Deus: Haja luz.
//! Uma nota de rodapé -
//! Um parágrafo qualquer.
//! ```
//!
//! Parsing runs in three steps, one module each:
//!
//! - [`classifier`]: what kind of line is this (pure predicates).
//! - [`splitter`]: where do the verses of a verse-bearing line start and end.
//! - [`assembler`]: fold lines into [`Block`]s, tracking whether a verse list is open.
//!
//! Parsing is total. Any text produces a block sequence; lines that fit no
//! other rule become paragraphs.

pub mod assembler;
pub mod classifier;
pub mod splitter;

pub use assembler::{BlockAssembler, ListState};
pub use classifier::{classify_line, LineType};
pub use splitter::split_verses;

use crate::ir::nodes::{Block, BookDocument};

/// Parse a block of book text into blocks.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut assembler = BlockAssembler::new();
    for line in text.lines() {
        assembler.push_line(classify_line(line));
    }
    assembler.finish()
}

/// Parse a book's text and pair it with its display title.
pub fn parse_book(text: &str, title: &str) -> BookDocument {
    BookDocument::new(title, parse_blocks(text))
}

/// Classify every line, keeping 1-based line numbers. Used by inspect output.
pub fn classify_lines(text: &str) -> Vec<(usize, LineType<'_>)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, classify_line(line)))
        .collect()
}
