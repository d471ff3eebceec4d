//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::BookDocument;
use std::collections::HashMap;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let html = registry.serialize(&doc, "html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    /// Serialize a book using the specified format
    pub fn serialize(&self, doc: &BookDocument, format: &str) -> Result<String, FormatError> {
        self.serialize_with_options(doc, format, &HashMap::new())
    }

    /// Serialize a book using the specified format and options
    pub fn serialize_with_options(
        &self,
        doc: &BookDocument,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        fmt.serialize_with_options(doc, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::html::HtmlFormat::default());
        registry.register(crate::formats::markdown::MarkdownFormat);
        registry.register(crate::formats::json::JsonFormat);
        registry.register(crate::formats::treeviz::TreevizFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::nodes::Block;

    // Test format
    struct TestFormat;
    impl Format for TestFormat {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test format"
        }
        fn file_extensions(&self) -> &[&str] {
            &["tst"]
        }
        fn supports_serialization(&self) -> bool {
            true
        }
        fn serialize(&self, _doc: &BookDocument) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
    }

    // Format that only has a name
    struct SilentFormat;
    impl Format for SilentFormat {
        fn name(&self) -> &str {
            "silent"
        }
    }

    fn sample_doc() -> BookDocument {
        BookDocument::new("Rute", vec![Block::paragraph("Hello")])
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formats.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
    }

    #[test]
    fn test_registry_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let format = registry.get("test");
        assert!(format.is_ok());
        assert_eq!(format.unwrap().name(), "test");
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        let result = registry.get("nonexistent");
        assert!(result.is_err());
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let result = registry.serialize(&sample_doc(), "test");
        assert_eq!(result.unwrap(), "test output");
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();

        let result = registry.serialize(&sample_doc(), "nonexistent");
        match result.unwrap_err() {
            FormatError::FormatNotFound(name) => assert_eq!(name, "nonexistent"),
            _ => panic!("Expected FormatNotFound error"),
        }
    }

    #[test]
    fn test_registry_serialize_unsupported() {
        let mut registry = FormatRegistry::new();
        registry.register(SilentFormat);

        let result = registry.serialize(&sample_doc(), "silent");
        assert!(matches!(result, Err(FormatError::NotSupported(_))));
    }

    #[test]
    fn test_registry_serialize_with_options_default_behavior() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let mut options = HashMap::new();
        options.insert("unused".to_string(), "true".to_string());

        let result = registry.serialize_with_options(&sample_doc(), "test", &options);
        assert!(result.is_err());
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec!["html", "json", "markdown", "treeviz"]
        );
    }

    #[test]
    fn test_registry_replace_format() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);
        registry.register(TestFormat);

        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_detect_format_from_filename() {
        let registry = FormatRegistry::with_defaults();

        assert_eq!(
            registry.detect_format_from_filename("genesis.html"),
            Some("html".to_string())
        );
        assert_eq!(
            registry.detect_format_from_filename("/tmp/out/genesis.md"),
            Some("markdown".to_string())
        );
        assert_eq!(
            registry.detect_format_from_filename("genesis.json"),
            Some("json".to_string())
        );
        assert_eq!(
            registry.detect_format_from_filename("genesis.tree"),
            Some("treeviz".to_string())
        );
        assert_eq!(registry.detect_format_from_filename("genesis.unknown"), None);
        assert_eq!(registry.detect_format_from_filename("genesis"), None);
    }
}
