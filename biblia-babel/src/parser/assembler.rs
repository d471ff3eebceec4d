//! Block Assembler
//!
//! Folds classified lines into blocks. The only carried state is whether a
//! verse list is open:
//!
//! | line                    | OutsideList                   | InsideList                        |
//! |-------------------------|-------------------------------|-----------------------------------|
//! | blank / comment         | stay                          | stay                              |
//! | chapter header          | emit title                    | close list, emit title            |
//! | verses                  | open list, append             | append                            |
//! | subtitle + verses       | emit section, open list       | close, emit section, open list    |
//! | standalone subtitle     | emit section                  | close list, emit section          |
//! | paragraph               | emit paragraph                | close list, emit paragraph        |
//!
//! A list only opens once it has a verse to hold, so no empty `VerseList` is
//! ever emitted. End of input closes an open list.

use crate::ir::nodes::{Block, VerseText};
use crate::parser::classifier::LineType;
use crate::parser::splitter::split_verses;
use std::mem;

/// Whether the assembler is inside a verse list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    OutsideList,
    /// The verses of the list being accumulated.
    InsideList(Vec<VerseText>),
}

/// Single-pass state machine turning classified lines into blocks.
#[derive(Debug, Default)]
pub struct BlockAssembler {
    blocks: Vec<Block>,
    state: ListState,
}

impl BlockAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Blocks emitted so far. An open verse list is not included until it closes.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Feed one classified line.
    pub fn push_line(&mut self, line: LineType<'_>) {
        match line {
            LineType::Blank | LineType::Comment => {}
            LineType::ChapterHeader(text) => {
                self.close_list();
                self.blocks.push(Block::chapter_title(text));
            }
            LineType::Verses {
                subtitle: None,
                content,
            } => {
                self.append_verses(split_verses(content));
            }
            LineType::Verses {
                subtitle: Some(subtitle),
                content,
            } => {
                self.close_list();
                self.blocks.push(Block::section_title(subtitle));
                self.append_verses(split_verses(content));
            }
            LineType::Subtitle(text) => {
                self.close_list();
                self.blocks.push(Block::section_title(text));
            }
            LineType::Paragraph(text) => {
                self.close_list();
                self.blocks.push(Block::paragraph(text));
            }
        }
    }

    /// Close any open list and return every block in source order.
    pub fn finish(mut self) -> Vec<Block> {
        self.close_list();
        self.blocks
    }

    fn append_verses(&mut self, verses: Vec<VerseText>) {
        if verses.is_empty() {
            return;
        }
        match &mut self.state {
            ListState::InsideList(open) => open.extend(verses),
            ListState::OutsideList => self.state = ListState::InsideList(verses),
        }
    }

    fn close_list(&mut self) {
        if let ListState::InsideList(verses) = mem::take(&mut self.state) {
            if !verses.is_empty() {
                self.blocks.push(Block::VerseList { verses });
            }
        }
    }
}
