//! HTML format implementation
//!
//! Exports a parsed book as a self-contained HTML5 page.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem: the body is built as
//! a DOM tree and serialized by html5ever, so verse text is always escaped and
//! the markup is always balanced.
//!
//! # Element Mapping Table
//!
//! | Block          | HTML                                   |
//! |----------------|----------------------------------------|
//! | (book title)   | `<h1 class="book-title">`              |
//! | ChapterTitle   | `<h2 class="chapter-title">`           |
//! | SectionTitle   | `<h3 class="section-title">`           |
//! | VerseList      | `<ol class="verse-list">`              |
//! |   verse        | `<li class="verse-item">`              |
//! | Paragraph      | `<p>`                                  |
//!
//! Everything sits inside `<div class="bible-text">`.
//!
//! # CSS and Theming
//!
//! - `css/baseline.css`: layout and typography (always included)
//! - `css/themes/theme-*.css`: color overrides for the light and dark themes
//!
//! The base font size is a CSS variable (`--base-font-size`) set from
//! [`HtmlOptions::font_size`], clamped to [`MIN_FONT_SIZE`]..=[`MAX_FONT_SIZE`].
//!
//! # Options
//!
//! `serialize_with_options` understands:
//! - `theme`: `light` / `dark` (unknown names fall back to light)
//! - `font-size`: base size in pixels
//! - `css-path`: a CSS file appended after the built-in styles

mod serializer;

pub use serializer::{
    get_default_css, serialize_to_html, serialize_to_html_with_options, HtmlOptions,
    DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE,
};

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::BookDocument;
use std::collections::HashMap;
use std::fs;

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    theme: HtmlTheme,
}

/// Available color themes for HTML export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HtmlTheme {
    #[default]
    Light,
    Dark,
}

impl HtmlTheme {
    /// Parse a theme name. Unknown names fall back to [`HtmlTheme::Light`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => HtmlTheme::Dark,
            _ => HtmlTheme::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HtmlTheme::Light => "light",
            HtmlTheme::Dark => "dark",
        }
    }
}

impl HtmlFormat {
    /// Create a new HTML format with the specified theme
    pub fn new(theme: HtmlTheme) -> Self {
        Self { theme }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 page with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &BookDocument) -> Result<String, FormatError> {
        serialize_to_html(doc, self.theme)
    }

    fn serialize_with_options(
        &self,
        doc: &BookDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut html_options = HtmlOptions::new(self.theme);

        if let Some(theme) = options.get("theme") {
            html_options.theme = HtmlTheme::from_name(theme);
        }

        if let Some(raw) = options.get("font-size") {
            let size = raw.trim().parse::<u32>().map_err(|_| {
                FormatError::SerializationError(format!("Invalid font size '{raw}'"))
            })?;
            html_options = html_options.with_font_size(size);
        }

        if let Some(path) = options.get("css-path") {
            let css = fs::read_to_string(path).map_err(|e| {
                FormatError::SerializationError(format!("Failed to read CSS file '{path}': {e}"))
            })?;
            html_options = html_options.with_custom_css(css);
        }

        serialize_to_html_with_options(doc, html_options)
    }
}
