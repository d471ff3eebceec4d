//! Book publishing pipeline.
//!
//! One call from a parsed book to its rendered output: format lookup,
//! serialization, and an optional write to disk. The CLI `read` and
//! `convert` commands both go through here.
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::error::FormatError;
use crate::ir::nodes::BookDocument;
use crate::registry::FormatRegistry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Specifies how to publish a book.
///
/// ```ignore
/// let spec = PublishSpec::new(&book, "html")
///     .with_output_path("genesis.html")
///     .with_option("theme", "dark");
/// ```
///
/// Without an output path the rendered text is returned in memory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The parsed book to convert.
    pub document: &'a BookDocument,
    /// Target format name (e.g., "html", "markdown").
    pub format: &'a str,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    /// Format-specific options (e.g., theme, font size).
    pub options: HashMap<String, String>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(document: &'a BookDocument, format: &'a str) -> Self {
        Self {
            document,
            format,
            output: None,
            options: HashMap::new(),
        }
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_options(mut self, options: HashMap<String, String>) -> Self {
        self.options.extend(options);
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Rendered text, when no output path was given.
    InMemory(String),
    /// Path to the written file.
    File(PathBuf),
}

/// Publishes a book according to the specification.
///
/// # Errors
///
/// Returns [`FormatError`] if the format is unknown, serialization fails or
/// the output file cannot be written.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishArtifact, FormatError> {
    let registry = FormatRegistry::with_defaults();
    let text = registry.serialize_with_options(spec.document, spec.format, &spec.options)?;
    match spec.output {
        Some(path) => write_to_path(path, text).map(PublishArtifact::File),
        None => Ok(PublishArtifact::InMemory(text)),
    }
}

fn write_to_path(path: PathBuf, text: String) -> Result<PathBuf, FormatError> {
    fs::write(&path, text)
        .map(|_| path.clone())
        .map_err(|err| {
            FormatError::SerializationError(format!("Could not write '{}': {err}", path.display()))
        })
}
