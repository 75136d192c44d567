//! Tree input

use std::io::Read;
use std::path::Path;

use crate::domain::entities::ListItem;
use crate::error::RowshiftResult;

/// Parse a JSON array of list items
pub fn parse_tree(json: &str) -> RowshiftResult<Vec<ListItem>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a tree from `path`, or from stdin when `path` is `-`
pub fn read_tree(path: &Path) -> RowshiftResult<Vec<ListItem>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    let tree = parse_tree(&content)?;
    tracing::debug!(path = %path.display(), roots = tree.len(), "loaded tree");
    Ok(tree)
}
