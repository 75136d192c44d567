//! Common test utilities for rowshift integration tests.
//!
//! This module provides:
//! - Tree builders (`leaf`, `node`, `category`)
//! - Fixtures: reusable dashboard trees
//! - `ids` / `sibling_ids` helpers for assertions

#![allow(dead_code)]

use rowshift::{ItemContent, ListItem};

pub fn leaf(id: &str) -> ListItem {
    ListItem::new(id)
}

pub fn node(id: &str, children: Vec<ListItem>) -> ListItem {
    ListItem::new(id).with_children(children)
}

pub fn category(id: &str, children: Vec<ListItem>) -> ListItem {
    ListItem::new(id)
        .with_category(true)
        .with_selectable(false)
        .with_children(children)
}

/// `[{1:[1a,1b]},{2}]`
pub fn small_tree() -> Vec<ListItem> {
    vec![node("1", vec![leaf("1a"), leaf("1b")]), leaf("2")]
}

/// A device dashboard list with categories and content payloads
pub fn dashboard_tree() -> Vec<ListItem> {
    let sensor = |id: &str, value: &str| {
        ListItem::new(id).with_content(ItemContent {
            value: value.to_string(),
            secondary_value: Some("online".to_string()),
            tags: vec!["sensor".to_string()],
            ..ItemContent::default()
        })
    };

    vec![
        category(
            "floor-1",
            vec![
                sensor("temp-101", "Temperature 101"),
                node(
                    "room-102",
                    vec![sensor("hum-102", "Humidity 102"), sensor("co2-102", "CO2 102")],
                ),
            ],
        ),
        category("floor-2", vec![sensor("temp-201", "Temperature 201")]),
        leaf("unassigned"),
    ]
}

/// Ids of the given items, top level only
pub fn ids(items: &[ListItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

/// Ids of the sibling sequence that contains `id`
pub fn sibling_ids<'a>(tree: &'a [ListItem], id: &str) -> Option<Vec<&'a str>> {
    if tree.iter().any(|i| i.id == id) {
        return Some(ids(tree));
    }
    tree.iter().find_map(|i| sibling_ids(&i.children, id))
}
