//! Everything that happens before parsing: finding a book in the range index
//! and slicing its lines out of the corpus.
//!
//! ```ignore
//! let index = BookIndex::load("range.md")?;
//! let corpus = Corpus::load("biblia.md")?;
//! let doc = corpus.read_book(&index, "Gênesis")?;
//! ```

pub mod index;
pub mod text;

pub use index::{BookEntry, BookIndex, LineRange, Testament};
pub use text::Corpus;

use crate::error::CorpusError;
use std::fs;
use std::path::Path;

fn read_file(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
