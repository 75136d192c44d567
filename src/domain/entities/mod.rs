//! Domain Entities
//!
//! Core data of the list engine.

mod list_item;

pub use list_item::{ItemContent, ListItem};

/// An ordered sequence of root items
pub type Tree = Vec<ListItem>;
