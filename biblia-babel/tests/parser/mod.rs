//! Parser tests over whole books.

mod examples;
mod properties;
