//! Tree generators shared by property tests.

use proptest::prelude::*;
use rowshift::{DropLocation, ListItem};

/// Shape of a subtree; ids are assigned afterwards so they are unique.
#[derive(Debug, Clone)]
pub struct Shape(pub Vec<Shape>);

fn shape() -> impl Strategy<Value = Shape> {
    Just(Shape(Vec::new())).prop_recursive(4, 40, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Shape)
    })
}

/// Trees of 1..=40ish nodes with ids `n0`, `n1`, ... in pre-order
pub fn tree() -> impl Strategy<Value = Vec<ListItem>> {
    prop::collection::vec(shape(), 1..5).prop_map(|shapes| {
        let mut next = 0;
        build(&shapes, &mut next)
    })
}

fn build(shapes: &[Shape], next: &mut usize) -> Vec<ListItem> {
    shapes
        .iter()
        .map(|s| {
            let id = format!("n{}", *next);
            *next += 1;
            ListItem::new(id).with_children(build(&s.0, next))
        })
        .collect()
}

pub fn location() -> impl Strategy<Value = DropLocation> {
    prop_oneof![
        Just(DropLocation::Above),
        Just(DropLocation::Below),
        Just(DropLocation::Nested),
    ]
}
