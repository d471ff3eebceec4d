//! Markdown export tests

mod export;
