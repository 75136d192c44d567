//! Selection engine for multi/nested editing modes
//!
//! Selecting a row checks it and its whole subtree. Deselecting removes the
//! row and the parent id the click reported; what happens to the row's
//! descendants is decided by [`DeselectPolicy`].

use crate::domain::entities::ListItem;
use crate::domain::policies::DeselectPolicy;
use crate::domain::value_objects::Selection;

use super::tree_query::{descendant_ids, find_item};

/// Next selection after toggling `toggled_id`, using the legacy deselect policy
pub fn compute_next_selection(
    tree: &[ListItem],
    current: &Selection,
    toggled_id: &str,
    parent_id: Option<&str>,
) -> Selection {
    compute_next_selection_with(
        tree,
        current,
        toggled_id,
        parent_id,
        DeselectPolicy::default(),
    )
}

/// Next selection after toggling `toggled_id`.
///
/// When selecting, the result only holds ids found in `tree`: ids of
/// `current` that are not in the tree are dropped.
pub fn compute_next_selection_with(
    tree: &[ListItem],
    current: &Selection,
    toggled_id: &str,
    parent_id: Option<&str>,
    policy: DeselectPolicy,
) -> Selection {
    if current.contains(toggled_id) {
        let mut next = current.clone();
        next.remove(toggled_id);
        if let Some(parent) = parent_id {
            next.remove(parent);
        }
        if policy == DeselectPolicy::Cascade {
            if let Some(item) = find_item(tree, toggled_id) {
                for id in descendant_ids(item) {
                    next.remove(&id);
                }
            }
        }
        tracing::debug!(toggled_id, ?policy, remaining = next.len(), "deselected");
        return next;
    }

    let mut next = Selection::new();
    select_walk(tree, current, toggled_id, &mut next);
    tracing::debug!(toggled_id, selected = next.len(), "selected");
    next
}

fn select_walk(items: &[ListItem], current: &Selection, toggled_id: &str, next: &mut Selection) {
    for item in items {
        if item.id == toggled_id {
            next.insert(item.id.clone());
            next.extend(descendant_ids(item));
        }

        select_walk(&item.children, current, toggled_id, next);

        if current.contains(&item.id) {
            next.insert(item.id.clone());
        }
    }
}
