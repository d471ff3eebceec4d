//! HTML serialization
//!
//! Pipeline: BookDocument → Events → RcDom → HTML string → full page with CSS

use crate::error::FormatError;
use crate::formats::html::HtmlTheme;
use crate::ir::events::Event;
use crate::ir::nodes::BookDocument;
use crate::ir::to_events::document_to_events;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

pub const DEFAULT_FONT_SIZE: u32 = 20;
pub const MIN_FONT_SIZE: u32 = 14;
pub const MAX_FONT_SIZE: u32 = 28;

const BASELINE_CSS: &str = include_str!("../../../css/baseline.css");

/// Options for HTML serialization
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    pub theme: HtmlTheme,
    /// Base font size in pixels, always within the allowed range
    pub font_size: u32,
    /// Optional custom CSS to append after the baseline and theme CSS
    pub custom_css: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new(HtmlTheme::default())
    }
}

impl HtmlOptions {
    pub fn new(theme: HtmlTheme) -> Self {
        Self {
            theme,
            font_size: DEFAULT_FONT_SIZE,
            custom_css: None,
        }
    }

    /// Set the base font size, clamped to `MIN_FONT_SIZE..=MAX_FONT_SIZE`.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// The stylesheet every export starts from.
pub fn get_default_css() -> &'static str {
    BASELINE_CSS
}

/// Serialize a book to HTML with the given theme
pub fn serialize_to_html(doc: &BookDocument, theme: HtmlTheme) -> Result<String, FormatError> {
    serialize_to_html_with_options(doc, HtmlOptions::new(theme))
}

/// Serialize a book to HTML with full options
pub fn serialize_to_html_with_options(
    doc: &BookDocument,
    options: HtmlOptions,
) -> Result<String, FormatError> {
    let events = document_to_events(doc);
    let dom = build_html_dom(&events)?;
    let body_html = serialize_dom(&dom)?;
    Ok(wrap_in_document(&body_html, &doc.title, &options))
}

/// Build an HTML DOM tree from IR events
fn build_html_dom(events: &[Event]) -> Result<RcDom, FormatError> {
    let dom = RcDom::default();
    let container = create_element("div", vec![("class", "bible-text")]);

    let mut current_parent: Handle = container.clone();
    let mut parent_stack: Vec<Handle> = vec![];

    for event in events {
        match event {
            Event::StartDocument { title } => {
                append_text_element(&current_parent, "h1", "book-title", title);
            }

            Event::EndDocument => {}

            Event::ChapterTitle(text) => {
                append_text_element(&current_parent, "h2", "chapter-title", text);
            }

            Event::SectionTitle(text) => {
                append_text_element(&current_parent, "h3", "section-title", text);
            }

            Event::StartVerseList => {
                let list = create_element("ol", vec![("class", "verse-list")]);
                current_parent.children.borrow_mut().push(list.clone());
                parent_stack.push(current_parent.clone());
                current_parent = list;
            }

            Event::EndVerseList => {
                current_parent = parent_stack.pop().ok_or_else(|| {
                    FormatError::SerializationError("Unbalanced verse list end".to_string())
                })?;
            }

            Event::Verse(text) => {
                append_text_element(&current_parent, "li", "verse-item", text);
            }

            Event::Paragraph(text) => {
                let para = create_element("p", vec![]);
                para.children.borrow_mut().push(create_text(text));
                current_parent.children.borrow_mut().push(para);
            }
        }
    }

    if !parent_stack.is_empty() {
        return Err(FormatError::SerializationError(
            "Unclosed verse list".to_string(),
        ));
    }

    dom.document.children.borrow_mut().push(container);
    Ok(dom)
}

fn append_text_element(parent: &Handle, tag: &str, class: &str, text: &str) {
    let element = create_element(tag, vec![("class", class)]);
    element.children.borrow_mut().push(create_text(text));
    parent.children.borrow_mut().push(element);
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize the children of the container element, one block per line
fn serialize_dom(dom: &RcDom) -> Result<String, FormatError> {
    let container = dom
        .document
        .children
        .borrow()
        .first()
        .ok_or_else(|| FormatError::SerializationError("Empty document".to_string()))?
        .clone();

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    let mut output = Vec::new();
    for child in container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            FormatError::SerializationError(format!("HTML serialization failed: {e}"))
        })?;
        output.push(b'\n');
    }

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(body_html: &str, title: &str, options: &HtmlOptions) -> String {
    let theme_css = match options.theme {
        HtmlTheme::Light => include_str!("../../../css/themes/theme-light.css"),
        HtmlTheme::Dark => include_str!("../../../css/themes/theme-dark.css"),
    };
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let font_size = options.font_size;
    let body_attrs = match options.theme {
        HtmlTheme::Dark => r#" data-theme="dark""#,
        HtmlTheme::Light => "",
    };
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="biblia-babel">
  <title>{escaped_title}</title>
  <style>
:root {{ --base-font-size: {font_size}px; }}
{BASELINE_CSS}
{theme_css}
{custom_css}
  </style>
</head>
<body{body_attrs}>
<div class="bible-text">
{body_html}</div>
</body>
</html>
"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
