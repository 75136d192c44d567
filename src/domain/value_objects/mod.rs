//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod drop_location;
mod editing_style;
mod selection;

pub use drop_location::DropLocation;
pub use editing_style::{editing_style_is_multiple, EditingStyle};
pub use selection::Selection;
