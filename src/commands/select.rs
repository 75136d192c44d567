//! Select command handler

use std::path::Path;

use anyhow::{Context, Result};
use rowshift::presentation::{read_tree, write_json};
use rowshift::{compute_next_selection_with, DeselectPolicy, Selection};

use super::CommandContext;

pub fn cmd_select(
    ctx: &CommandContext,
    tree_path: &Path,
    selected: Vec<String>,
    toggle: &str,
    parent: Option<&str>,
    deselect: Option<DeselectPolicy>,
) -> Result<()> {
    let tree = read_tree(tree_path)
        .with_context(|| format!("failed to read tree {}", tree_path.display()))?;

    let current: Selection = selected.into_iter().collect();
    let policy = deselect.unwrap_or(ctx.config.selection.deselect);
    let next = compute_next_selection_with(&tree, &current, toggle, parent, policy);

    let mut out = std::io::stdout().lock();
    write_json(&mut out, &next, ctx.json)?;
    Ok(())
}
