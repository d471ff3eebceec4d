//! Property tests for the block parser.

use biblia_babel::parser::{parse_blocks, split_verses};
use biblia_babel::Block;
use proptest::prelude::*;

fn ignored_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{1,4}",
        "<!--[a-zA-Z0-9 ]{0,12}(-->)?",
        "[ \t]{0,2}<!-- [a-z]{1,8} -->",
    ]
}

fn verse_text() -> impl Strategy<Value = String> {
    "[A-ZÁÉÍÓÚÇ][a-zçãé]{1,6}( [a-zçãé]{1,6}){0,4}"
}

fn title_text() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}( [a-z]{1,8}){0,2}"
}

/// One source line of a known shape.
#[derive(Debug, Clone)]
enum SourceLine {
    Chapter(String),
    Subtitle(String),
    Verses(Vec<String>),
    SubtitledVerses(String, Vec<String>),
    Paragraph(String),
}

fn source_line() -> impl Strategy<Value = SourceLine> {
    prop_oneof![
        title_text().prop_map(SourceLine::Chapter),
        title_text().prop_map(SourceLine::Subtitle),
        prop::collection::vec(verse_text(), 1..4).prop_map(SourceLine::Verses),
        (title_text(), prop::collection::vec(verse_text(), 1..4))
            .prop_map(|(title, verses)| SourceLine::SubtitledVerses(title, verses)),
        "[a-z][a-z ]{0,20}\\.".prop_map(SourceLine::Paragraph),
    ]
}

fn numbered(verses: &[String]) -> String {
    verses
        .iter()
        .enumerate()
        .map(|(i, verse)| format!("{} {}", i + 1, verse))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_line(line: &SourceLine) -> String {
    match line {
        SourceLine::Chapter(text) => format!("## {text}"),
        SourceLine::Subtitle(text) => format!("{text} -"),
        SourceLine::Verses(verses) => numbered(verses),
        SourceLine::SubtitledVerses(title, verses) => format!("{title} - {}", numbered(verses)),
        SourceLine::Paragraph(text) => text.clone(),
    }
}

/// Plain text form of a block sequence, one line per block.
fn reconstruct(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Block::ChapterTitle { text } => format!("## {text}"),
            Block::SectionTitle { text } => format!("{text} -"),
            Block::VerseList { verses } => numbered(verses),
            Block::Paragraph { text } => text.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

proptest! {
    #[test]
    fn only_ignored_lines_parse_to_nothing(lines in prop::collection::vec(ignored_line(), 0..12)) {
        prop_assert!(parse_blocks(&lines.join("\n")).is_empty());
    }

    #[test]
    fn splitter_yields_one_verse_per_marker(verses in prop::collection::vec(verse_text(), 1..8)) {
        let line = numbered(&verses);
        let split = split_verses(&line);

        prop_assert_eq!(split.len(), verses.len());

        let rebuilt = words(&split.join(" "));
        let original = words(&verses.join(" "));
        prop_assert_eq!(rebuilt, original);
    }

    #[test]
    fn parsing_is_total(text in "\\PC{0,200}") {
        let blocks = parse_blocks(&text);
        for block in &blocks {
            if let Block::VerseList { verses } = block {
                prop_assert!(!verses.is_empty());
                prop_assert!(verses.iter().all(|verse| !verse.trim().is_empty()));
            }
        }
    }

    #[test]
    fn verse_lists_are_never_adjacent(lines in prop::collection::vec(source_line(), 0..20)) {
        let text = lines.iter().map(render_line).collect::<Vec<_>>().join("\n");
        let blocks = parse_blocks(&text);
        for pair in blocks.windows(2) {
            let both_lists = matches!(pair[0], Block::VerseList { .. })
                && matches!(pair[1], Block::VerseList { .. });
            prop_assert!(!both_lists);
        }
    }

    #[test]
    fn reparsing_the_reconstruction_is_stable(lines in prop::collection::vec(source_line(), 0..20)) {
        let text = lines.iter().map(render_line).collect::<Vec<_>>().join("\n");
        let first = parse_blocks(&text);
        let second = parse_blocks(&reconstruct(&first));
        prop_assert_eq!(first, second);
    }
}
