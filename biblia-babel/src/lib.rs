//! Parsing and rendering for the biblia text corpus
//!
//!     The corpus is one large Markdown-like file holding every book of the Bible, plus a
//!     range index mapping each book name to a span of lines in that file. This crate turns a
//!     book's lines into a flat sequence of blocks (chapter titles, section titles, verse lists
//!     and paragraphs) and renders that sequence to a handful of output formats.
//!
//!     This is a pure lib, that is, it powers biblia-cli but is shell agnostic: no code here
//!     should suppose a shell environment, be it printing to std, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # FormatError and CorpusError
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # registry + optional file output in one call
//!     ├── corpus                  # range index and line extraction
//!     ├── parser                  # classifier, verse splitter, block assembler
//!     ├── ir                      # blocks and the flat event stream
//!     └── formats
//!         └── <format>/mod.rs     # one module per output format
//!
//! Core Algorithm
//!
//!     Parsing is a single pass over the lines of a book. Each line is classified on its own
//!     (./parser/classifier.rs); verse-bearing lines are cut into verses at their numeric markers
//!     (./parser/splitter.rs); and a two-state machine folds consecutive verse lines into one
//!     verse list (./parser/assembler.rs). Every input parses; anything unrecognized becomes a
//!     paragraph.
//!
//! Formats
//!
//!     Formats implement the Format trait (./format.rs) and only serialize. They consume the
//!     event stream of ./ir/to_events.rs and hand it to the format's own library: html5ever's
//!     DOM for HTML, comrak's AST for Markdown, serde for JSON.
//!
pub mod corpus;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod parser;
pub mod publish;
pub mod registry;

pub use corpus::{BookEntry, BookIndex, Corpus, LineRange, Testament};
pub use error::{CorpusError, FormatError};
pub use format::Format;
pub use ir::nodes::{Block, BookDocument, VerseText};
pub use parser::{parse_blocks, parse_book};
pub use registry::FormatRegistry;
