//! Tree reconstruction
//!
//! Rebuilds a tree with a block of dragged items removed from wherever they
//! sit and inserted once relative to a drop target:
//! - `Above`: before the target, as its siblings
//! - `Below`: after the target, as its siblings
//! - `Nested`: as the first children of the target

use std::collections::HashSet;

use crate::domain::entities::ListItem;
use crate::domain::value_objects::DropLocation;

/// Output of a rebuild
#[derive(Debug, Clone, PartialEq)]
pub struct Rebuilt {
    pub tree: Vec<ListItem>,
    /// False when the target id was never found. The dragged items are then
    /// absent from `tree`.
    pub inserted: bool,
}

struct Placement<'a> {
    dragged: &'a [ListItem],
    drag_ids: HashSet<&'a str>,
    target: &'a str,
    location: DropLocation,
}

/// Remove `dragged` from `tree` and insert them at `drop_target_id`.
///
/// The first occurrence of the target in pre-order receives the block. Every
/// node's children are traversed whether or not the node is kept.
pub fn rebuild_tree_with_move(
    tree: &[ListItem],
    dragged: &[ListItem],
    drop_target_id: &str,
    location: DropLocation,
) -> Rebuilt {
    let placement = Placement {
        dragged,
        drag_ids: dragged.iter().map(|d| d.id.as_str()).collect(),
        target: drop_target_id,
        location,
    };

    let mut inserted = false;
    let tree = rebuild_level(tree, &placement, &mut inserted);

    if inserted {
        tracing::debug!(
            target_id = drop_target_id,
            %location,
            count = dragged.len(),
            "inserted dragged block"
        );
    } else if !dragged.is_empty() {
        tracing::warn!(
            target_id = drop_target_id,
            count = dragged.len(),
            "drop target not found; dragged items were not reinserted"
        );
    }

    Rebuilt { tree, inserted }
}

fn rebuild_level(items: &[ListItem], p: &Placement<'_>, inserted: &mut bool) -> Vec<ListItem> {
    let mut out = Vec::with_capacity(items.len());

    for item in items {
        let claimed = !*inserted && item.id == p.target;
        if claimed {
            *inserted = true;
        }

        if claimed && p.location == DropLocation::Above {
            out.extend_from_slice(p.dragged);
        }

        let children = if claimed && p.location == DropLocation::Nested {
            let mut children = p.dragged.to_vec();
            children.extend(rebuild_level(&item.children, p, inserted));
            children
        } else {
            rebuild_level(&item.children, p, inserted)
        };

        if !p.drag_ids.contains(item.id.as_str()) {
            out.push(ListItem {
                id: item.id.clone(),
                content: item.content.clone(),
                children,
                is_selectable: item.is_selectable,
                is_category: item.is_category,
            });
        }

        if claimed && p.location == DropLocation::Below {
            out.extend_from_slice(p.dragged);
        }
    }

    out
}
