//! Read-only tree queries
//!
//! All walks are pre-order, depth-first, left-to-right.

use std::collections::HashSet;

use thiserror::Error;

use crate::domain::entities::ListItem;

/// Structural problems found in a tree
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("duplicate item id '{id}'")]
    DuplicateId { id: String },
}

/// Every id in the tree, in pre-order
pub fn collect_ids(tree: &[ListItem]) -> Vec<String> {
    let mut ids = Vec::new();
    for item in tree {
        ids.push(item.id.clone());
        ids.extend(collect_ids(&item.children));
    }
    ids
}

/// First item with `id` in pre-order
pub fn find_item<'a>(tree: &'a [ListItem], id: &str) -> Option<&'a ListItem> {
    for item in tree {
        if item.id == id {
            return Some(item);
        }
        if let Some(found) = find_item(&item.children, id) {
            return Some(found);
        }
    }
    None
}

/// Ids of every descendant of `item`, excluding the item itself
pub fn descendant_ids(item: &ListItem) -> Vec<String> {
    collect_ids(&item.children)
}

/// Returns true if `id` is `item` itself or anywhere below it
pub fn contains_in_subtree(item: &ListItem, id: &str) -> bool {
    item.id == id || item.children.iter().any(|c| contains_in_subtree(c, id))
}

/// Fail on the first id that appears twice (in pre-order)
pub fn validate_unique_ids(tree: &[ListItem]) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    for id in collect_ids(tree) {
        if !seen.insert(id.clone()) {
            return Err(TreeError::DuplicateId { id });
        }
    }
    Ok(())
}
