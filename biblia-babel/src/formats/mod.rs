//! Format implementations
//!
//! Each format turns a parsed [`BookDocument`](crate::ir::nodes::BookDocument)
//! into a text representation.

pub mod html;
pub mod icons;
pub mod json;
pub mod markdown;
pub mod treeviz;

pub use html::{get_default_css, HtmlFormat, HtmlOptions, HtmlTheme};
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use treeviz::TreevizFormat;
