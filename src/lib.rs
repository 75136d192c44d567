//! rowshift - reordering and selection engine for hierarchical lists
//!
//! rowshift holds the logic behind dashboard list widgets whose rows can be
//! dragged and dropped and checked in nested selection modes. It consumes
//! and produces plain trees of [`ListItem`]s; rendering and pointer handling
//! belong to the caller.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    move_items_in_list, MoveError, MoveItemsUseCase, MoveOptions, MoveRequest, MoveResult,
};
pub use config::{Config, Verbosity};
pub use domain::entities::{ItemContent, ListItem, Tree};
pub use domain::policies::{DeselectPolicy, MissingTargetPolicy};
pub use domain::services::{
    collect_ids, compute_next_selection, compute_next_selection_with, contains_in_subtree,
    descendant_ids, find_item, find_items_by_ids, rebuild_tree_with_move, validate_unique_ids,
    visible_rows, Rebuilt, RowState, TreeError, VisibleRow,
};
pub use domain::value_objects::{editing_style_is_multiple, DropLocation, EditingStyle, Selection};
pub use error::{RowshiftError, RowshiftResult};
