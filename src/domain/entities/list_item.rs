//! List item entity - one row of a hierarchical list
//!
//! Items are plain owned values. Cloning an item clones its whole subtree,
//! so an extracted copy never aliases the tree it came from.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Display payload of a row.
///
/// The engine never interprets this; it is carried through every operation
/// unchanged. Keys it does not model are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemContent {
    #[serde(default)]
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub row_actions: Vec<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemContent {
    /// Content with only a primary value
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }
}

/// A node in the list tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,

    #[serde(default)]
    pub content: ItemContent,

    /// Child rows. Missing and `null` both read as empty.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<ListItem>,

    #[serde(default)]
    pub is_selectable: bool,

    #[serde(default)]
    pub is_category: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ListItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ListItem>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ListItem {
    /// Create a leaf item whose display value is its id
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            content: ItemContent::new(id.clone()),
            id,
            children: Vec::new(),
            is_selectable: true,
            is_category: false,
        }
    }

    /// Builder: replace the content payload
    pub fn with_content(mut self, content: ItemContent) -> Self {
        self.content = content;
        self
    }

    /// Builder: set children
    pub fn with_children(mut self, children: Vec<ListItem>) -> Self {
        self.children = children;
        self
    }

    /// Builder: mark as a category row
    pub fn with_category(mut self, is_category: bool) -> Self {
        self.is_category = is_category;
        self
    }

    /// Builder: set whether the row can be checked
    pub fn with_selectable(mut self, is_selectable: bool) -> Self {
        self.is_selectable = is_selectable;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(ListItem::subtree_len).sum::<usize>()
    }
}
