//! Application Layer
//!
//! Use cases that orchestrate domain services.
//! This layer:
//! - Depends on the Domain layer
//! - Does NOT contain tree rules (those are in Domain)
//! - Applies configured policies and reports what happened
//!
//! ## Use Cases
//!
//! - `MoveItemsUseCase` - Validated drag-and-drop move
//! - `move_items_in_list` - Legacy move that never fails

pub mod move_items;

pub use move_items::{
    move_items_in_list, MoveError, MoveItemsUseCase, MoveOptions, MoveRequest, MoveResult,
};
