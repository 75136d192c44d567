//! Move use case
//!
//! Composes tree search and tree rebuild into a single move.

use std::collections::HashSet;

use crate::domain::entities::ListItem;
use crate::domain::policies::MissingTargetPolicy;
use crate::domain::services::{
    collect_ids, contains_in_subtree, find_item, find_items_by_ids, rebuild_tree_with_move,
    validate_unique_ids,
};
use crate::domain::value_objects::DropLocation;

use super::options::MoveOptions;
use super::result::{MoveError, MoveRequest, MoveResult};

/// Move `drag_ids` relative to `drop_target_id`. Never fails.
///
/// Unknown drag ids are ignored. An unknown drop target removes the dragged
/// items without reinserting them. Use [`MoveItemsUseCase`] to reject those
/// cases instead.
pub fn move_items_in_list<S: AsRef<str>>(
    tree: &[ListItem],
    drag_ids: &[S],
    drop_target_id: &str,
    location: DropLocation,
) -> Vec<ListItem> {
    let dragged = find_items_by_ids(tree, drag_ids);
    rebuild_tree_with_move(tree, &dragged, drop_target_id, location).tree
}

/// Validated move
#[derive(Debug, Clone, Default)]
pub struct MoveItemsUseCase {
    options: MoveOptions,
}

impl MoveItemsUseCase {
    pub fn new(options: MoveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MoveOptions {
        &self.options
    }

    pub fn execute(
        &self,
        tree: &[ListItem],
        request: &MoveRequest,
    ) -> Result<MoveResult, MoveError> {
        if self.options.require_unique_ids {
            validate_unique_ids(tree)?;
        }

        let known: HashSet<String> = collect_ids(tree).into_iter().collect();
        let missing_drag_ids: Vec<String> = request
            .drag_ids
            .iter()
            .filter(|id| !known.contains(id.as_str()))
            .cloned()
            .collect();
        if !missing_drag_ids.is_empty() {
            tracing::debug!(?missing_drag_ids, "ignoring unknown drag ids");
        }

        let target = request.drop_target_id.as_str();
        let target_found = find_item(tree, target).is_some();
        let dragged = find_items_by_ids(tree, &request.drag_ids);

        let unchanged = |target_found| MoveResult {
            tree: tree.to_vec(),
            moved: Vec::new(),
            missing_drag_ids: missing_drag_ids.clone(),
            target_found,
        };

        if dragged.is_empty() {
            return Ok(unchanged(target_found));
        }

        if target_inside_drag_set(&dragged, target, request.location) {
            return Err(MoveError::TargetInsideDragSet {
                target: target.to_string(),
            });
        }

        if !target_found {
            match self.options.missing_target {
                MissingTargetPolicy::Reject => {
                    return Err(MoveError::TargetNotFound {
                        target: target.to_string(),
                    });
                }
                MissingTargetPolicy::Keep => return Ok(unchanged(false)),
                MissingTargetPolicy::Drop => {
                    tracing::warn!(target_id = target, "dropping dragged items with no target");
                }
            }
        }

        let moved = dragged.iter().map(|d| d.id.clone()).collect();
        let rebuilt = rebuild_tree_with_move(tree, &dragged, target, request.location);

        Ok(MoveResult {
            tree: rebuilt.tree,
            moved,
            missing_drag_ids,
            target_found,
        })
    }
}

/// A block cannot land inside itself. Dropping beside a dragged item is
/// fine; dropping into it or anywhere below it is not.
fn target_inside_drag_set(dragged: &[ListItem], target: &str, location: DropLocation) -> bool {
    dragged.iter().any(|item| {
        if location.is_sibling() {
            item.children
                .iter()
                .any(|child| contains_in_subtree(child, target))
        } else {
            contains_in_subtree(item, target)
        }
    })
}
