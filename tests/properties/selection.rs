//! Property tests for the selection engine.

use proptest::prelude::*;
use proptest::sample::Index;

use rowshift::{
    collect_ids, compute_next_selection, compute_next_selection_with, descendant_ids, find_item,
    DeselectPolicy, Selection,
};

use crate::strategies::tree;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Selecting from nothing checks exactly the row and its subtree.
    #[test]
    fn property_select_cascades_to_subtree(tree in tree(), pick in any::<Index>()) {
        let all = collect_ids(&tree);
        let id = pick.get(&all);

        let next = compute_next_selection(&tree, &Selection::new(), id, None);

        let mut expected: Selection = descendant_ids(find_item(&tree, id).unwrap())
            .into_iter()
            .collect();
        expected.insert(id.clone());
        prop_assert_eq!(next, expected);
    }

    /// PROPERTY: Selecting never forgets a checked row that is in the tree.
    #[test]
    fn property_select_keeps_current(
        tree in tree(),
        pick in any::<Index>(),
        current_picks in prop::collection::vec(any::<Index>(), 0..5),
    ) {
        let all = collect_ids(&tree);
        let current: Selection = current_picks.iter().map(|i| i.get(&all).clone()).collect();
        let id = pick.get(&all);
        prop_assume!(!current.contains(id));

        let next = compute_next_selection(&tree, &current, id, None);

        for kept in current.iter() {
            prop_assert!(next.contains(kept), "lost {kept}");
        }
        prop_assert!(next.contains(id));
    }

    /// PROPERTY: Legacy deselect removes only the row; cascade removes its subtree.
    #[test]
    fn property_deselect_policies(tree in tree(), pick in any::<Index>()) {
        let all = collect_ids(&tree);
        let id = pick.get(&all);
        let selected = compute_next_selection(&tree, &Selection::new(), id, None);

        let legacy = compute_next_selection_with(&tree, &selected, id, None, DeselectPolicy::Legacy);
        let mut expected = selected.clone();
        expected.remove(id);
        prop_assert_eq!(legacy, expected);

        let cascade =
            compute_next_selection_with(&tree, &selected, id, None, DeselectPolicy::Cascade);
        prop_assert!(cascade.is_empty(), "cascade left {:?}", cascade);
    }
}
