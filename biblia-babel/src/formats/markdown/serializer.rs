//! Markdown serialization
//!
//! Pipeline: BookDocument → Events → Comrak AST → Markdown string

use crate::error::FormatError;
use crate::ir::events::Event;
use crate::ir::nodes::BookDocument;
use crate::ir::to_events::document_to_events;
use comrak::nodes::{Ast, AstNode, ListDelimType, ListType, NodeHeading, NodeList, NodeValue};
use comrak::{format_commonmark, Arena, ComrakOptions};
use std::cell::RefCell;

/// Serialize a parsed book to Markdown
pub fn serialize_to_markdown(doc: &BookDocument) -> Result<String, FormatError> {
    let events = document_to_events(doc);

    let arena = Arena::new();
    let root = build_comrak_ast(&arena, &events)?;

    let mut output = Vec::new();
    let options = ComrakOptions::default();
    format_commonmark(root, &options, &mut output).map_err(|e| {
        FormatError::SerializationError(format!("Comrak serialization failed: {e}"))
    })?;

    // Adjacent lists keep comrak's `<!-- end list -->` separator
    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}

fn new_node<'a>(arena: &'a Arena<AstNode<'a>>, value: NodeValue) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(value, (0, 0).into()))))
}

fn list_attrs() -> NodeList {
    NodeList {
        list_type: ListType::Ordered,
        marker_offset: 0,
        padding: 0,
        start: 1,
        delimiter: ListDelimType::Period,
        bullet_char: b'-',
        tight: true,
    }
}

fn append_heading<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    level: u8,
    text: &str,
) {
    let heading = new_node(
        arena,
        NodeValue::Heading(NodeHeading {
            level,
            setext: false,
        }),
    );
    heading.append(new_node(arena, NodeValue::Text(text.to_string())));
    parent.append(heading);
}

fn append_paragraph<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, text: &str) {
    let para = new_node(arena, NodeValue::Paragraph);
    para.append(new_node(arena, NodeValue::Text(text.to_string())));
    parent.append(para);
}

/// Build a Comrak AST from IR events
fn build_comrak_ast<'a>(
    arena: &'a Arena<AstNode<'a>>,
    events: &[Event],
) -> Result<&'a AstNode<'a>, FormatError> {
    let root = new_node(arena, NodeValue::Document);

    let mut current_parent: &'a AstNode<'a> = root;
    let mut parent_stack: Vec<&'a AstNode<'a>> = vec![];

    for event in events {
        match event {
            Event::StartDocument { title } => {
                if !title.is_empty() {
                    append_heading(arena, root, 1, title);
                }
            }

            Event::EndDocument => {}

            Event::ChapterTitle(text) => append_heading(arena, current_parent, 2, text),

            Event::SectionTitle(text) => append_heading(arena, current_parent, 3, text),

            Event::StartVerseList => {
                let list_node = new_node(arena, NodeValue::List(list_attrs()));
                current_parent.append(list_node);
                parent_stack.push(current_parent);
                current_parent = list_node;
            }

            Event::EndVerseList => {
                current_parent = parent_stack.pop().ok_or_else(|| {
                    FormatError::SerializationError("Unbalanced verse list end".to_string())
                })?;
            }

            Event::Verse(text) => {
                let item_node = new_node(arena, NodeValue::Item(list_attrs()));
                append_paragraph(arena, item_node, text);
                current_parent.append(item_node);
            }

            Event::Paragraph(text) => append_paragraph(arena, current_parent, text),
        }
    }

    Ok(root)
}
