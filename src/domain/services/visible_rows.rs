//! Visible row flattening
//!
//! Turns the tree into the ordered rows a renderer draws. Children of a row
//! are only emitted while that row is expanded.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::ListItem;
use crate::domain::value_objects::Selection;

/// Expansion and selection state of a rendered list
#[derive(Debug, Clone, Default)]
pub struct RowState {
    pub expanded_ids: HashSet<String>,
    /// Single-selection highlight
    pub selected_id: Option<String>,
    /// Multi-selection checks
    pub selected_ids: Selection,
}

impl RowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expanded<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_selected_id(mut self, id: Option<String>) -> Self {
        self.selected_id = id;
        self
    }

    pub fn with_selected_ids(mut self, ids: Selection) -> Self {
        self.selected_ids = ids;
        self
    }

    fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id) || self.selected_ids.contains(id)
    }
}

/// A flattened row ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleRow {
    pub id: String,
    /// Nesting level (0 = root)
    pub level: usize,
    pub value: String,
    pub is_expandable: bool,
    pub is_expanded: bool,
    pub is_selected: bool,
    pub is_selectable: bool,
    pub is_category: bool,
}

/// Flatten `tree` into visible rows, pre-order
pub fn visible_rows(tree: &[ListItem], state: &RowState) -> Vec<VisibleRow> {
    let mut rows = Vec::new();
    for item in tree {
        flatten_item(item, 0, state, &mut rows);
    }
    rows
}

fn flatten_item(item: &ListItem, level: usize, state: &RowState, rows: &mut Vec<VisibleRow>) {
    let is_expandable = item.has_children();
    let is_expanded = state.expanded_ids.contains(&item.id);

    rows.push(VisibleRow {
        id: item.id.clone(),
        level,
        value: item.content.value.clone(),
        is_expandable,
        is_expanded,
        is_selected: state.is_selected(&item.id),
        is_selectable: item.is_selectable,
        is_category: item.is_category,
    });

    if is_expandable && is_expanded {
        for child in &item.children {
            flatten_item(child, level + 1, state, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ListItem> {
        vec![
            ListItem::new("1").with_children(vec![
                ListItem::new("1a").with_children(vec![ListItem::new("1a-i")]),
                ListItem::new("1b"),
            ]),
            ListItem::new("2"),
        ]
    }

    fn ids(rows: &[VisibleRow]) -> Vec<(&str, usize)> {
        rows.iter().map(|r| (r.id.as_str(), r.level)).collect()
    }

    #[test]
    fn collapsed_tree_shows_roots_only() {
        let rows = visible_rows(&sample(), &RowState::new());
        assert_eq!(ids(&rows), vec![("1", 0), ("2", 0)]);
        assert!(rows[0].is_expandable);
        assert!(!rows[1].is_expandable);
    }

    #[test]
    fn expanded_rows_show_children_with_levels() {
        let state = RowState::new().with_expanded(["1", "1a"]);
        let rows = visible_rows(&sample(), &state);
        assert_eq!(
            ids(&rows),
            vec![("1", 0), ("1a", 1), ("1a-i", 2), ("1b", 1), ("2", 0)]
        );
    }

    #[test]
    fn hidden_ancestor_hides_expanded_descendant() {
        let state = RowState::new().with_expanded(["1a"]);
        let rows = visible_rows(&sample(), &state);
        assert_eq!(ids(&rows), vec![("1", 0), ("2", 0)]);
    }

    #[test]
    fn expanded_leaf_is_marked_but_not_expandable() {
        let state = RowState::new().with_expanded(["2"]);
        let rows = visible_rows(&sample(), &state);
        let two = rows.iter().find(|r| r.id == "2").unwrap();
        assert!(two.is_expanded);
        assert!(!two.is_expandable);
    }

    #[test]
    fn selected_from_single_or_multi_selection() {
        let state = RowState::new()
            .with_expanded(["1"])
            .with_selected_id(Some("2".to_string()))
            .with_selected_ids(["1b"].into_iter().collect());
        let rows = visible_rows(&sample(), &state);
        let selected: Vec<&str> = rows
            .iter()
            .filter(|r| r.is_selected)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(selected, vec!["1b", "2"]);
    }
}
