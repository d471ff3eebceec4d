//! Reading books out of a corpus and range index on disk.

use crate::common::{rute_blocks, RUTE};
use biblia_babel::{BookIndex, Corpus, CorpusError, Testament};
use std::fs;
use tempfile::tempdir;

const INDEX: &str = "\
| Livro | Linhas |
|-------|--------|
| :--- | :--- |
| Introdução | 1-2 |
| Rute | 3-13 |
| Apocalipse | 14-15 |
| Fantasma | 400-500 |
";

fn corpus_text() -> String {
    format!("# Bíblia\nTexto introdutório.\n{RUTE}## Capítulo 1\n1 A revelação de Jesus Cristo\n")
}

#[test]
fn test_read_book_from_files() {
    let dir = tempdir().unwrap();
    let index_path = dir.path().join("range.md");
    let corpus_path = dir.path().join("biblia.md");
    fs::write(&index_path, INDEX).unwrap();
    fs::write(&corpus_path, corpus_text()).unwrap();

    let index = BookIndex::load(&index_path).unwrap();
    let corpus = Corpus::load(&corpus_path).unwrap();

    let doc = corpus.read_book(&index, "Rute").unwrap();
    assert_eq!(doc.title, "Rute");
    assert_eq!(doc.blocks, rute_blocks());

    let apocalipse = corpus.read_book(&index, "Apocalipse").unwrap();
    assert_eq!(apocalipse.verse_count(), 1);
}

#[test]
fn test_listing_skips_table_artifacts_and_introduction() {
    let index = BookIndex::parse(INDEX);
    let names: Vec<&str> = index.listed_books().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Rute", "Apocalipse", "Fantasma"]);

    let new: Vec<&str> = index
        .by_testament(Testament::New)
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(new, vec!["Apocalipse"]);
}

#[test]
fn test_introduction_is_still_readable() {
    let index = BookIndex::parse(INDEX);
    let corpus = Corpus::from_text(&corpus_text());
    let doc = corpus.read_book(&index, "Introdução").unwrap();
    assert_eq!(doc.blocks.len(), 2);
}

#[test]
fn test_missing_book() {
    let index = BookIndex::parse(INDEX);
    let corpus = Corpus::from_text(&corpus_text());
    assert_eq!(
        corpus.read_book(&index, "Tobias"),
        Err(CorpusError::BookNotFound("Tobias".to_string()))
    );
}

#[test]
fn test_range_past_the_corpus() {
    let index = BookIndex::parse(INDEX);
    let corpus = Corpus::from_text(&corpus_text());
    let err = corpus.read_book(&index, "Fantasma").unwrap_err();
    assert!(matches!(
        err,
        CorpusError::RangeOutOfBounds {
            start: 400,
            end: 500,
            ..
        }
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = Corpus::load(dir.path().join("nada.md")).unwrap_err();
    assert!(matches!(err, CorpusError::Io { .. }));
}
