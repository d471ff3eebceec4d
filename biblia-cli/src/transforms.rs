//! CLI-specific transforms
//!
//! This module defines the views available to `biblia inspect`. Each one runs
//! part of the parsing pipeline on a standalone text file and prints the
//! intermediate result.
//!
//! ## Transforms
//!
//! - `lines-classify`: one row per source line with the line kind the
//!   classifier picked and what it extracted.
//! - `blocks-treeviz`: the assembled blocks as a tree (default).
//! - `blocks-json`: the assembled blocks as JSON.
//!
//! ## Extra Parameters
//!
//! - `hide-verses`: When set to "true", `blocks-treeviz` prints verse lists
//!   without their verses.
//!
//! Example: `biblia inspect rute.md blocks-treeviz --extra-hide-verses`

use biblia_babel::formats::treeviz::to_treeviz_str_with_params;
use biblia_babel::parser::{classify_lines, parse_book, split_verses, LineType};
use std::collections::HashMap;

/// All available inspect transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["blocks-treeviz", "blocks-json", "lines-classify"];

/// Transform used when none is named.
pub const DEFAULT_TRANSFORM: &str = "blocks-treeviz";

/// Execute a named transform on a source text.
///
/// `title` names the book in block output; line output ignores it.
pub fn execute_transform(
    source: &str,
    title: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    match transform_name {
        "blocks-treeviz" => {
            let doc = parse_book(source, title);
            Ok(to_treeviz_str_with_params(&doc, extra_params))
        }
        "blocks-json" => {
            let doc = parse_book(source, title);
            serde_json::to_string_pretty(&doc)
                .map(|json| json + "\n")
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "lines-classify" => Ok(lines_to_table(source)),
        _ => Err(format!(
            "Unknown transform '{transform_name}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

fn lines_to_table(source: &str) -> String {
    let mut output = String::new();
    for (number, line) in classify_lines(source) {
        let row = format!("{number:>4}  {:<16}  {}", line.kind_name(), line_detail(&line));
        output.push_str(row.trim_end());
        output.push('\n');
    }
    output
}

fn line_detail(line: &LineType<'_>) -> String {
    match line {
        LineType::Blank | LineType::Comment => String::new(),
        LineType::ChapterHeader(text) | LineType::Subtitle(text) | LineType::Paragraph(text) => {
            text.to_string()
        }
        LineType::Verses { subtitle, content } => {
            let count = verse_count_label(split_verses(content).len());
            match subtitle {
                Some(subtitle) => format!("{subtitle} | {count}"),
                None => count,
            }
        }
    }
}

fn verse_count_label(count: usize) -> String {
    match count {
        1 => "1 verse".to_string(),
        n => format!("{n} verses"),
    }
}
