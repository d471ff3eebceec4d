//! Verse Splitter
//!
//! Cuts the content of a verse-bearing line into verse texts. Every maximal run
//! of ASCII digits immediately followed by whitespace is a marker; a verse is
//! the trimmed text between the end of one marker and the start of the next.
//! Text before the first marker belongs to no verse, and verses that trim to
//! nothing are dropped.
//!
//! Only digit runs followed by whitespace split, so "1:3," or "40dias" stay
//! inside the verse text. A bare number followed by a space still splits; the
//! format offers no way to tell it apart from a verse number.

use crate::ir::nodes::VerseText;

/// A verse number plus the whitespace after it, located in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseMarker {
    /// Byte offset of the first digit.
    pub start: usize,
    /// Byte length of the digits and the whole whitespace run that follows.
    pub len: usize,
}

impl VerseMarker {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Locate every verse marker in `line`, left to right, without overlap.
pub fn find_verse_markers(line: &str) -> Vec<VerseMarker> {
    let mut markers = Vec::new();
    let mut pos = 0;

    while let Some(c) = line[pos..].chars().next() {
        if !c.is_ascii_digit() {
            pos += c.len_utf8();
            continue;
        }

        let digits_end = pos + count_leading(&line[pos..], |c| c.is_ascii_digit());
        let space_end = digits_end + count_leading(&line[digits_end..], char::is_whitespace);
        if space_end > digits_end {
            markers.push(VerseMarker {
                start: pos,
                len: space_end - pos,
            });
            pos = space_end;
        } else {
            pos = digits_end;
        }
    }

    markers
}

/// Split a verse-bearing line (inline subtitle already removed) into verses.
pub fn split_verses(line: &str) -> Vec<VerseText> {
    let markers = find_verse_markers(line);

    markers
        .iter()
        .enumerate()
        .filter_map(|(i, marker)| {
            let end = markers.get(i + 1).map_or(line.len(), |next| next.start);
            let text = line[marker.end()..end].trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .collect()
}

/// Byte length of the prefix of `text` whose chars all satisfy `pred`.
fn count_leading(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.len() - text.trim_start_matches(pred).len()
}
