//! Line Classification
//!
//! Decides what a single source line is. Every heuristic of the format lives in
//! its own predicate so its edge cases can be tested in isolation;
//! [`classify_line`] only fixes the order in which they are tried:
//!
//!     blank → comment → chapter header → verse-bearing (with optional inline
//!     subtitle) → standalone subtitle → paragraph
//!
//! A line that is verse-bearing is never a standalone subtitle, even when it
//! also ends in ` -`.

/// Lines starting with this marker are ignored.
pub const COMMENT_MARKER: &str = "<!--";

/// Chapter headers start with this marker.
pub const CHAPTER_MARKER: &str = "## ";

/// Upper-case letters outside `A-Z` that may start a verse.
const ACCENTED_CAPITALS: [char; 12] = ['Á', 'À', 'Â', 'Ã', 'É', 'Ê', 'Í', 'Ó', 'Ô', 'Õ', 'Ú', 'Ç'];

/// The classification of one source line.
///
/// Borrowed slices point into the trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType<'a> {
    Blank,
    Comment,
    /// Header text with the `## ` marker removed.
    ChapterHeader(&'a str),
    /// A line carrying verses. `content` is what the splitter receives: the
    /// whole line, or the part after an inline subtitle.
    Verses {
        subtitle: Option<&'a str>,
        content: &'a str,
    },
    /// Standalone subtitle text with the trailing ` -` removed.
    Subtitle(&'a str),
    Paragraph(&'a str),
}

impl LineType<'_> {
    /// Stable kebab-case name, used by the inspect output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            LineType::Blank => "blank",
            LineType::Comment => "comment",
            LineType::ChapterHeader(_) => "chapter-header",
            LineType::Verses { subtitle: None, .. } => "verses",
            LineType::Verses {
                subtitle: Some(_), ..
            } => "subtitled-verses",
            LineType::Subtitle(_) => "subtitle",
            LineType::Paragraph(_) => "paragraph",
        }
    }
}

/// Classify a raw source line. Surrounding whitespace is trimmed first.
pub fn classify_line(raw: &str) -> LineType<'_> {
    let line = raw.trim();

    if line.is_empty() {
        return LineType::Blank;
    }
    if is_comment(line) {
        return LineType::Comment;
    }
    if let Some(text) = chapter_header_text(line) {
        return LineType::ChapterHeader(text);
    }
    if is_verse_bearing(line) {
        return match split_inline_subtitle(line) {
            Some((subtitle, content)) => LineType::Verses {
                subtitle: Some(subtitle),
                content,
            },
            None => LineType::Verses {
                subtitle: None,
                content: line,
            },
        };
    }
    if let Some(text) = standalone_subtitle_text(line) {
        return LineType::Subtitle(text);
    }
    LineType::Paragraph(line)
}

/// Whether a trimmed line opens with the comment marker.
pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_MARKER)
}

/// Header text of a `## ` line, re-trimmed after the marker.
pub fn chapter_header_text(line: &str) -> Option<&str> {
    line.strip_prefix(CHAPTER_MARKER).map(str::trim)
}

/// Whether `c` may be the first letter of a verse.
pub fn is_verse_capital(c: char) -> bool {
    c.is_ascii_uppercase() || ACCENTED_CAPITALS.contains(&c)
}

/// Whether the line contains a digit run followed by whitespace and a capital
/// letter anywhere.
///
/// This is the format's only signal for verse content: it assumes a verse
/// number is always followed by a capitalized word, and will also fire on an
/// ordinary sentence such as "comprou 3 Camelos".
pub fn is_verse_bearing(line: &str) -> bool {
    line.char_indices()
        .filter(|(_, c)| c.is_ascii_digit())
        .any(|(i, _)| {
            let rest = &line[i + 1..];
            let after_space = rest.trim_start_matches(char::is_whitespace);
            after_space.len() < rest.len() && after_space.chars().next().is_some_and(is_verse_capital)
        })
}

/// Whether `text` starts with a verse marker followed by more text: a digit
/// run, whitespace, and at least one more character.
pub fn starts_with_verse_marker(text: &str) -> bool {
    let digits = text.len() - text.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return false;
    }
    let mut rest = text[digits..].chars();
    rest.next().is_some_and(char::is_whitespace) && rest.next().is_some()
}

/// Split `Subtitle - 1 Verse ...` into the subtitle and the verse content.
///
/// The subtitle is the shortest non-empty prefix followed by
/// whitespace-hyphen-whitespace whose remainder starts with a verse marker, so
/// hyphens inside the subtitle survive when the first ` - ` is not followed by
/// a verse number.
pub fn split_inline_subtitle(line: &str) -> Option<(&str, &str)> {
    line.char_indices()
        .filter(|&(i, c)| i > 0 && c.is_whitespace())
        .find_map(|(i, _)| {
            let content = line[i..]
                .trim_start_matches(char::is_whitespace)
                .strip_prefix('-')?;
            let verses = content.trim_start_matches(char::is_whitespace);
            if verses.len() == content.len() || !starts_with_verse_marker(verses) {
                return None;
            }
            Some((&line[..i], verses))
        })
}

/// Text of a standalone subtitle line (`Title -`), with the whitespace and
/// hyphen suffix removed.
///
/// Expects a trimmed line. Requires at least one character before the
/// whitespace that precedes the hyphen.
pub fn standalone_subtitle_text(line: &str) -> Option<&str> {
    let before_hyphen = line.trim_end().strip_suffix('-')?;
    let title = before_hyphen.trim_end();
    if title.len() == before_hyphen.len() || before_hyphen.chars().nth(1).is_none() {
        return None;
    }
    Some(title)
}
