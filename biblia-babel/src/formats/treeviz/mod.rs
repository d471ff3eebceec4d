//! Treeviz formatter for parsed books
//!
//! Treeviz is a visual representation of the block sequence. The document
//! is the root, blocks are its children and verse lists carry their verses
//! as a further level.
//!
//! So the format is :
//! <prefix><connector> <icon><space><label> (truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ Gênesis (3 blocks, 3 verses)
//! ├─ § Capítulo 1
//! ├─ ⊤ A criação
//! └─ ☰ 3 verses
//!   ├─ • No princípio criou Deus os cé…
//!   ├─ • E a terra era sem forma e vaz…
//!   └─ • E disse Deus: Haja luz; e hou…
//!
//! Icons
//!     Document: ⧉
//!     ChapterTitle: §
//!     SectionTitle: ⊤
//!     VerseList: ☰
//!     Verse: •
//!     Paragraph: ¶

use super::icons::get_icon;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{Block, BookDocument};
use std::collections::HashMap;

/// Labels longer than this are cut and end with an ellipsis.
pub const MAX_LABEL_CHARS: usize = 30;

pub(crate) fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        return label.to_string();
    }
    let mut truncated: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
    truncated.push('…');
    truncated
}

fn format_block(block: &Block, is_last: bool, show_verses: bool) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    let mut output = format!(
        "{} {} {}\n",
        connector,
        get_icon(block.node_type()),
        truncate_label(&block.display_label())
    );

    if let Block::VerseList { verses } = block {
        if show_verses {
            let child_prefix = if is_last { "  " } else { "│ " };
            let icon = get_icon("Verse");
            for (i, verse) in verses.iter().enumerate() {
                let connector = if i == verses.len() - 1 { "└─" } else { "├─" };
                output.push_str(&format!(
                    "{child_prefix}{connector} {icon} {}\n",
                    truncate_label(verse)
                ));
            }
        }
    }

    output
}

pub fn to_treeviz_str(doc: &BookDocument) -> String {
    to_treeviz_str_with_params(doc, &HashMap::new())
}

/// Convert a book to treeviz string with optional parameters
///
/// # Parameters
///
/// - `"hide-verses"`: When set to `"true"`, verse lists are shown as a single
///   line without their verses.
pub fn to_treeviz_str_with_params(doc: &BookDocument, params: &HashMap<String, String>) -> String {
    let hide_verses = params
        .get("hide-verses")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false);

    let mut output = format!(
        "{} {} ({} blocks, {} verses)\n",
        get_icon("Document"),
        doc.title,
        doc.blocks.len(),
        doc.verse_count()
    );

    let count = doc.blocks.len();
    for (i, block) in doc.blocks.iter().enumerate() {
        output.push_str(&format_block(block, i == count - 1, !hide_verses));
    }
    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &BookDocument) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &BookDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_params(doc, options))
    }
}
