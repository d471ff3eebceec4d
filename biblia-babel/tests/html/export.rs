//! Export tests for the HTML format
//!
//! These tests check the structure of the exported page: the block markup
//! inside the text container and the head around it.

use crate::common::rute_document;
use biblia_babel::format::Format;
use biblia_babel::formats::html::{HtmlFormat, HtmlTheme};
use biblia_babel::{Block, BookDocument};
use insta::assert_snapshot;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

fn to_html(doc: &BookDocument, theme: HtmlTheme) -> String {
    HtmlFormat::new(theme).serialize(doc).unwrap()
}

/// The markup inside `<div class="bible-text">`, without the page around it.
fn text_body(html: &str) -> String {
    static BODY_REGEX: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"(?s)<div class="bible-text">\n(.*?)</div>"#)
            .expect("valid regex for the text container")
    });
    BODY_REGEX
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .expect("text container present")
}

fn count_matches(pattern: &str, html: &str) -> usize {
    Regex::new(pattern).unwrap().find_iter(html).count()
}

#[test]
fn test_small_book_markup() {
    let doc = BookDocument::new(
        "Judas",
        vec![
            Block::chapter_title("Capítulo 1"),
            Block::section_title("Saudação"),
            Block::verse_list(["Judas, servo", "Misericórdia"]),
            Block::paragraph("Fim da epístola."),
        ],
    );
    let html = to_html(&doc, HtmlTheme::Light);

    assert_snapshot!(text_body(&html), @r###"
    <h1 class="book-title">Judas</h1>
    <h2 class="chapter-title">Capítulo 1</h2>
    <h3 class="section-title">Saudação</h3>
    <ol class="verse-list"><li class="verse-item">Judas, servo</li><li class="verse-item">Misericórdia</li></ol>
    <p>Fim da epístola.</p>
    "###);
}

#[test]
fn test_block_counts_follow_the_document() {
    let html = to_html(&rute_document(), HtmlTheme::Light);

    assert_eq!(count_matches(r#"<h2 class="chapter-title">"#, &html), 2);
    assert_eq!(count_matches(r#"<h3 class="section-title">"#, &html), 2);
    assert_eq!(count_matches(r#"<ol class="verse-list">"#, &html), 4);
    assert_eq!(count_matches(r#"<li class="verse-item">"#, &html), 6);
    assert_eq!(count_matches(r"<p>", &html), 1);
}

#[test]
fn test_page_head() {
    let html = to_html(&rute_document(), HtmlTheme::Light);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<html lang="pt-BR">"#));
    assert!(html.contains("<title>Rute</title>"));
    assert!(html.contains("--base-font-size: 20px;"));
    assert!(html.contains(".verse-list"));
}

#[test]
fn test_text_is_escaped() {
    let doc = BookDocument::new("Teste", vec![Block::paragraph("a < b & c")]);
    let html = to_html(&doc, HtmlTheme::Light);
    assert!(html.contains("<p>a &lt; b &amp; c</p>"));
}

#[test]
fn test_theme_option() {
    let mut options = HashMap::new();
    options.insert("theme".to_string(), "dark".to_string());
    let html = HtmlFormat::default()
        .serialize_with_options(&rute_document(), &options)
        .unwrap();
    assert!(html.contains(r#"<body data-theme="dark">"#));
}

#[test]
fn test_font_size_option_is_clamped() {
    let mut options = HashMap::new();
    options.insert("font-size".to_string(), "64".to_string());
    let html = HtmlFormat::default()
        .serialize_with_options(&rute_document(), &options)
        .unwrap();
    assert!(html.contains("--base-font-size: 28px;"));
}

#[test]
fn test_invalid_font_size_is_an_error() {
    let mut options = HashMap::new();
    options.insert("font-size".to_string(), "grande".to_string());
    let result = HtmlFormat::default().serialize_with_options(&rute_document(), &options);
    assert!(result.is_err());
}

#[test]
fn test_css_path_option() {
    let dir = tempfile::tempdir().unwrap();
    let css_path = dir.path().join("extra.css");
    std::fs::write(&css_path, ".verse-item { color: purple; }").unwrap();

    let mut options = HashMap::new();
    options.insert(
        "css-path".to_string(),
        css_path.to_string_lossy().into_owned(),
    );
    let html = HtmlFormat::default()
        .serialize_with_options(&rute_document(), &options)
        .unwrap();
    assert!(html.contains(".verse-item { color: purple; }"));
}
