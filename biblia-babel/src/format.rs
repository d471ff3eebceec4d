//! Format trait definition
//!
//! This module defines the Format trait that every output format implements.
//! Formats only serialize: the biblia text has a single input syntax, handled
//! by [`crate::parser`].

use crate::error::FormatError;
use crate::ir::nodes::BookDocument;
use std::collections::HashMap;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &BookDocument) -> Result<String, FormatError> {
///         Ok(doc.title.clone())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "markdown")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from output filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports serialization (BookDocument → text)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Serialize a book into text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &BookDocument) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a book, optionally using extra parameters.
    ///
    /// Formats without options can rely on the default implementation, which
    /// delegates to [`Format::serialize`] and rejects any parameter.
    fn serialize_with_options(
        &self,
        doc: &BookDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
