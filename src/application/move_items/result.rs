//! Move request, result and error types

use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::ListItem;
use crate::domain::services::TreeError;
use crate::domain::value_objects::DropLocation;

/// A drag gesture as reported by the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub drag_ids: Vec<String>,
    pub drop_target_id: String,
    pub location: DropLocation,
}

impl MoveRequest {
    pub fn new<I, S>(drag_ids: I, drop_target_id: impl Into<String>, location: DropLocation) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            drag_ids: drag_ids.into_iter().map(Into::into).collect(),
            drop_target_id: drop_target_id.into(),
            location,
        }
    }
}

/// Result of a validated move
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveResult {
    /// The new tree
    pub tree: Vec<ListItem>,
    /// Ids of the top-level dragged items, in tree order
    pub moved: Vec<String>,
    /// Requested drag ids that are not in the tree
    pub missing_drag_ids: Vec<String>,
    /// Whether the drop target exists in the tree
    pub target_found: bool,
}

/// Reasons a validated move is refused
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("drop target '{target}' not found")]
    TargetNotFound { target: String },

    #[error("cannot drop on '{target}': it is inside the dragged items")]
    TargetInsideDragSet { target: String },
}
