//! Rows command handler

use std::path::Path;

use anyhow::{Context, Result};
use rowshift::presentation::{read_tree, write_json};
use rowshift::{visible_rows, RowState};

use super::CommandContext;

pub fn cmd_rows(
    ctx: &CommandContext,
    tree_path: &Path,
    expanded: Vec<String>,
    selected: Vec<String>,
    selected_id: Option<String>,
) -> Result<()> {
    let tree = read_tree(tree_path)
        .with_context(|| format!("failed to read tree {}", tree_path.display()))?;

    let state = RowState::new()
        .with_expanded(expanded)
        .with_selected_id(selected_id)
        .with_selected_ids(selected.into_iter().collect());
    let rows = visible_rows(&tree, &state);

    let mut out = std::io::stdout().lock();
    write_json(&mut out, &rows, ctx.json)?;
    Ok(())
}
