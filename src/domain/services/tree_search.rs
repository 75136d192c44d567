//! Tree search - extract items by id

use crate::domain::entities::ListItem;

/// Owned copies of every item whose id is in `ids`, in pre-order.
///
/// A matched item is returned with its whole subtree and its descendants are
/// not examined, so an id nested under another match is not returned twice.
pub fn find_items_by_ids<S: AsRef<str>>(tree: &[ListItem], ids: &[S]) -> Vec<ListItem> {
    let mut found = Vec::new();
    collect_matches(tree, ids, &mut found);
    tracing::debug!(requested = ids.len(), found = found.len(), "searched dragged items");
    found
}

fn collect_matches<S: AsRef<str>>(items: &[ListItem], ids: &[S], found: &mut Vec<ListItem>) {
    for item in items {
        if ids.iter().any(|id| id.as_ref() == item.id) {
            found.push(item.clone());
        } else {
            collect_matches(&item.children, ids, found);
        }
    }
}
