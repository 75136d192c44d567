//! Check command handler

use std::path::Path;

use anyhow::{Context, Result};
use rowshift::presentation::read_tree;
use rowshift::{validate_unique_ids, ListItem};

pub fn cmd_check(tree_path: &Path) -> Result<()> {
    let tree = read_tree(tree_path)
        .with_context(|| format!("failed to read tree {}", tree_path.display()))?;

    validate_unique_ids(&tree)?;
    let count: usize = tree.iter().map(ListItem::subtree_len).sum();
    println!("✓ {} items, all ids unique", count);
    Ok(())
}
