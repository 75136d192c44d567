//! Property tests for moving rows.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::Index;

use rowshift::{
    collect_ids, contains_in_subtree, find_item, find_items_by_ids, move_items_in_list, DropLocation,
    ListItem, MoveError, MoveItemsUseCase, MoveRequest,
};

use crate::strategies::{location, tree};

fn pick(ids: &[String], picks: &[Index]) -> Vec<String> {
    picks.iter().map(|i| i.get(ids).clone()).collect()
}

fn sorted(mut ids: Vec<String>) -> Vec<String> {
    ids.sort();
    ids
}

/// Sibling sequence holding `id`
fn siblings_of<'a>(tree: &'a [ListItem], id: &str) -> Option<&'a [ListItem]> {
    if tree.iter().any(|i| i.id == id) {
        return Some(tree);
    }
    tree.iter().find_map(|i| siblings_of(&i.children, id))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A valid move neither creates nor destroys items, and never duplicates one.
    #[test]
    fn property_move_conserves_ids(
        tree in tree(),
        drag_picks in prop::collection::vec(any::<Index>(), 1..4),
        target_pick in any::<Index>(),
        location in location(),
    ) {
        let all = collect_ids(&tree);
        let drag_ids = pick(&all, &drag_picks);
        let target = target_pick.get(&all).clone();

        let request = MoveRequest::new(drag_ids.clone(), target.clone(), location);
        match MoveItemsUseCase::default().execute(&tree, &request) {
            Ok(result) => {
                let after = collect_ids(&result.tree);
                let unique: HashSet<&String> = after.iter().collect();
                prop_assert_eq!(unique.len(), after.len(), "duplicated id in {:?}", after);
                prop_assert_eq!(sorted(after), sorted(all.clone()));

                // The legacy entry point agrees on every accepted move.
                let legacy = move_items_in_list(&tree, &drag_ids, &target, location);
                prop_assert_eq!(legacy, result.tree);
            }
            Err(MoveError::TargetInsideDragSet { .. }) => {
                let dragged = find_items_by_ids(&tree, &drag_ids);
                let inside = dragged.iter().any(|d| match location {
                    DropLocation::Nested => contains_in_subtree(d, &target),
                    _ => d.children.iter().any(|c| contains_in_subtree(c, &target)),
                });
                prop_assert!(inside, "rejected a drop outside the dragged block");
            }
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }

    /// PROPERTY: The dragged block lands contiguously, in source pre-order.
    #[test]
    fn property_dragged_block_is_contiguous_and_ordered(
        tree in tree(),
        drag_picks in prop::collection::vec(any::<Index>(), 1..4),
        target_pick in any::<Index>(),
        location in location(),
    ) {
        let all = collect_ids(&tree);
        let drag_ids = pick(&all, &drag_picks);
        let target = target_pick.get(&all).clone();

        let request = MoveRequest::new(drag_ids, target, location);
        let Ok(result) = MoveItemsUseCase::default().execute(&tree, &request) else {
            return Ok(());
        };

        // `moved` is reported in source pre-order.
        let order: Vec<&String> = all.iter().filter(|id| result.moved.contains(*id)).collect();
        prop_assert_eq!(order, result.moved.iter().collect::<Vec<_>>());

        let siblings = siblings_of(&result.tree, &result.moved[0]).expect("moved item present");
        let start = siblings.iter().position(|i| i.id == result.moved[0]).unwrap();
        let block: Vec<&str> = siblings[start..]
            .iter()
            .take(result.moved.len())
            .map(|i| i.id.as_str())
            .collect();
        prop_assert_eq!(block, result.moved.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// PROPERTY: Nested drops put the block first under the target, followed by
    /// the target's remaining children in their old order.
    #[test]
    fn property_nested_block_leads_target_children(
        tree in tree(),
        drag_pick in any::<Index>(),
        target_pick in any::<Index>(),
    ) {
        let all = collect_ids(&tree);
        let drag_id = drag_pick.get(&all).clone();
        let target = target_pick.get(&all).clone();

        let request = MoveRequest::new([drag_id.clone()], target.clone(), DropLocation::Nested);
        let Ok(result) = MoveItemsUseCase::default().execute(&tree, &request) else {
            return Ok(());
        };

        let before = find_item(&tree, &target).unwrap();
        let after = find_item(&result.tree, &target).unwrap();
        prop_assert_eq!(&after.children[0].id, &drag_id);

        let rest_before: Vec<&str> = before
            .children
            .iter()
            .map(|c| c.id.as_str())
            .filter(|id| *id != drag_id)
            .collect();
        let rest_after: Vec<&str> = after.children[1..].iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(rest_after, rest_before);
    }

    /// PROPERTY: Dropping a single item beside itself changes nothing.
    #[test]
    fn property_self_drop_is_noop(
        tree in tree(),
        pick_one in any::<Index>(),
        below in any::<bool>(),
    ) {
        let all = collect_ids(&tree);
        let id = pick_one.get(&all).clone();
        let location = if below { DropLocation::Below } else { DropLocation::Above };

        let out = move_items_in_list(&tree, &[id.clone()], &id, location);
        prop_assert_eq!(out, tree);
    }
}
