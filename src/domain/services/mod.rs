//! Domain Services
//!
//! Pure, stateless operations over list trees.
//! These services have no I/O dependencies and are easily testable.

mod selection_engine;
mod tree_query;
mod tree_rebuild;
mod tree_search;
mod visible_rows;

pub use selection_engine::{compute_next_selection, compute_next_selection_with};
pub use tree_query::{
    collect_ids, contains_in_subtree, descendant_ids, find_item, validate_unique_ids, TreeError,
};
pub use tree_rebuild::{rebuild_tree_with_move, Rebuilt};
pub use tree_search::find_items_by_ids;
pub use visible_rows::{visible_rows, RowState, VisibleRow};
