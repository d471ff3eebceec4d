//! JSON output of the parsed block sequence
//!
//! Blocks are externally tagged, in snake case:
//!
//! ```text
//! { "title": "Rute", "blocks": [ { "chapter_title": { "text": "Capítulo 1" } } ] }
//! ```

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::BookDocument;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Parsed blocks as pretty-printed JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &BookDocument) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(format!("JSON serialization failed: {e}")))
    }
}
