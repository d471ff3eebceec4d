//! Shared icon mapping for the tree visualizations (treeviz and the CLI
//! inspect transforms).

/// Get the Unicode icon for a given block node type
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "ChapterTitle" => "§",
        "SectionTitle" => "⊤",
        "VerseList" => "☰",
        "Verse" => "•",
        "Paragraph" => "¶",
        _ => "○",
    }
}
