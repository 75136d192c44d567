//! Move Use Case
//!
//! Relocates a block of dragged rows relative to a drop target.
//!
//! This module handles:
//! - The never-failing legacy move (`move_items_in_list`)
//! - Validated moves that reject duplicate ids, unknown targets and drops
//!   into the dragged block itself

mod options;
mod result;
mod use_case;

pub use options::MoveOptions;
pub use result::{MoveError, MoveRequest, MoveResult};
pub use use_case::{move_items_in_list, MoveItemsUseCase};
