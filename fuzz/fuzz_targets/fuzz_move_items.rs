#![no_main]

use libfuzzer_sys::fuzz_target;
use rowshift::{collect_ids, DropLocation, MoveItemsUseCase, MoveRequest};

fuzz_target!(|data: &[u8]| {
    // First byte picks the location, the rest is a JSON tree
    let Some((&selector, json)) = data.split_first() else {
        return;
    };
    let Ok(tree) = rowshift::presentation::parse_tree(&String::from_utf8_lossy(json)) else {
        return;
    };

    let ids = collect_ids(&tree);
    if ids.is_empty() {
        return;
    }
    let location = match selector % 3 {
        0 => DropLocation::Above,
        1 => DropLocation::Below,
        _ => DropLocation::Nested,
    };
    let drag = ids[usize::from(selector) % ids.len()].clone();
    let target = ids[usize::from(selector / 3) % ids.len()].clone();

    // Moves must never panic, and accepted moves must keep every id
    let _ = rowshift::move_items_in_list(&tree, &[drag.clone()], &target, location);
    if let Ok(result) = MoveItemsUseCase::default()
        .execute(&tree, &MoveRequest::new([drag], target, location))
    {
        let mut before = ids;
        let mut after = collect_ids(&result.tree);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }
});
