//! Converts a [`BookDocument`] into the flat [`Event`] stream.

use crate::ir::events::Event;
use crate::ir::nodes::{Block, BookDocument};

/// Flatten a book into events, bracketing each verse list.
pub fn document_to_events(doc: &BookDocument) -> Vec<Event> {
    let mut events = vec![Event::StartDocument {
        title: doc.title.clone(),
    }];

    for block in &doc.blocks {
        match block {
            Block::ChapterTitle { text } => events.push(Event::ChapterTitle(text.clone())),
            Block::SectionTitle { text } => events.push(Event::SectionTitle(text.clone())),
            Block::Paragraph { text } => events.push(Event::Paragraph(text.clone())),
            Block::VerseList { verses } => {
                events.push(Event::StartVerseList);
                events.extend(verses.iter().cloned().map(Event::Verse));
                events.push(Event::EndVerseList);
            }
        }
    }

    events.push(Event::EndDocument);
    events
}
