//! Intermediate Representation (IR) for parsed books.
//!
//! The parser produces [`nodes::Block`] values; renderers walk them either
//! directly or as the flat event stream defined in [`events`].

pub mod events;
pub mod nodes;
pub mod to_events;
