//! Worked examples of the block parser.

use crate::common::{rute_blocks, RUTE};
use biblia_babel::parser::{classify_lines, parse_blocks, parse_book};
use biblia_babel::Block;

#[test]
fn test_chapter_then_verses() {
    let blocks = parse_blocks("## Capítulo 1\n1 No princípio 2 Era a terra");
    assert_eq!(
        blocks,
        vec![
            Block::chapter_title("Capítulo 1"),
            Block::verse_list(["No princípio", "Era a terra"]),
        ]
    );
}

#[test]
fn test_inline_subtitle() {
    let blocks = parse_blocks("Introdução - 1 Texto do versículo");
    assert_eq!(
        blocks,
        vec![
            Block::section_title("Introdução"),
            Block::verse_list(["Texto do versículo"]),
        ]
    );
}

#[test]
fn test_standalone_subtitle() {
    let blocks = parse_blocks("Uma nota de rodapé -");
    assert_eq!(blocks, vec![Block::section_title("Uma nota de rodapé")]);
}

#[test]
fn test_plain_paragraph() {
    let blocks = parse_blocks("Apenas um parágrafo comum.");
    assert_eq!(blocks, vec![Block::paragraph("Apenas um parágrafo comum.")]);
}

#[test]
fn test_paragraph_splits_verse_lists() {
    let blocks = parse_blocks("1 Primeiro versículo\nUm parágrafo.\n2 Segundo versículo");
    assert_eq!(
        blocks,
        vec![
            Block::verse_list(["Primeiro versículo"]),
            Block::paragraph("Um parágrafo."),
            Block::verse_list(["Segundo versículo"]),
        ]
    );
}

#[test]
fn test_standalone_subtitle_closes_open_list() {
    let blocks = parse_blocks("1 Antes do título\nNovo trecho -\n2 Depois do título");
    assert_eq!(
        blocks,
        vec![
            Block::verse_list(["Antes do título"]),
            Block::section_title("Novo trecho"),
            Block::verse_list(["Depois do título"]),
        ]
    );
}

#[test]
fn test_blank_and_comment_lines_do_not_close_a_list() {
    let blocks = parse_blocks("1 Primeiro\n\n<!-- nota -->\n   \n2 Segundo");
    assert_eq!(blocks, vec![Block::verse_list(["Primeiro", "Segundo"])]);
}

#[test]
fn test_whole_book() {
    let doc = parse_book(RUTE, "Rute");
    assert_eq!(doc.title, "Rute");
    assert_eq!(doc.blocks, rute_blocks());
    assert_eq!(doc.verse_count(), 6);
}

#[test]
fn test_classify_lines_keeps_every_line() {
    let kinds: Vec<(usize, &str)> = classify_lines(RUTE)
        .iter()
        .map(|(n, line)| (*n, line.kind_name()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (1, "comment"),
            (2, "chapter-header"),
            (3, "subtitled-verses"),
            (4, "verses"),
            (5, "blank"),
            (6, "subtitle"),
            (7, "verses"),
            (8, "paragraph"),
            (9, "verses"),
            (10, "chapter-header"),
            (11, "verses"),
        ]
    );
}

#[test]
fn test_crlf_input() {
    let blocks = parse_blocks("## Capítulo 3\r\n1 Era um homem\r\n");
    assert_eq!(
        blocks,
        vec![
            Block::chapter_title("Capítulo 3"),
            Block::verse_list(["Era um homem"]),
        ]
    );
}
