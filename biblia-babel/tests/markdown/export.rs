//! Export tests for the Markdown format

use crate::common::rute_document;
use biblia_babel::format::Format;
use biblia_babel::formats::MarkdownFormat;
use biblia_babel::{Block, BookDocument};

fn to_markdown(doc: &BookDocument) -> String {
    MarkdownFormat.serialize(doc).unwrap()
}

fn headings(markdown: &str) -> Vec<&str> {
    markdown
        .lines()
        .filter(|line| line.starts_with('#'))
        .collect()
}

#[test]
fn test_heading_levels() {
    let md = to_markdown(&rute_document());
    assert_eq!(
        headings(&md),
        vec![
            "# Rute",
            "## Capítulo 1",
            "### Noemi e Rute",
            "### Rute decide ficar",
            "## Capítulo 2",
        ]
    );
}

#[test]
fn test_every_verse_is_a_list_item() {
    let md = to_markdown(&rute_document());
    let items = md
        .lines()
        .filter(|line| line.split_once(". ").is_some_and(|(n, _)| n.parse::<u32>().is_ok()))
        .count();
    assert_eq!(items, 6);
}

#[test]
fn test_list_numbering_restarts_per_list() {
    let doc = BookDocument::new(
        "Teste",
        vec![
            Block::verse_list(["Um", "Dois"]),
            Block::paragraph("entre"),
            Block::verse_list(["Tres"]),
        ],
    );
    let md = to_markdown(&doc);
    let numbers: Vec<&str> = md
        .lines()
        .filter_map(|line| line.split_once(". ").map(|(n, _)| n))
        .filter(|n| n.parse::<u32>().is_ok())
        .collect();
    assert_eq!(numbers, vec!["1", "2", "1"]);
}

#[test]
fn test_paragraph_text_survives() {
    let md = to_markdown(&rute_document());
    assert!(md.contains("Notas do tradutor sobre o capítulo."));
}
