//! Move command handler

use std::path::Path;

use anyhow::{Context, Result};
use rowshift::presentation::{read_tree, render_outline_diff, write_json};
use rowshift::{DropLocation, MissingTargetPolicy, MoveItemsUseCase, MoveOptions, MoveRequest};

use super::CommandContext;

pub struct MoveArgs<'a> {
    pub tree: &'a Path,
    pub drag_ids: Vec<String>,
    pub target: String,
    pub location: DropLocation,
    pub missing_target: Option<MissingTargetPolicy>,
    pub allow_duplicates: bool,
    pub diff: bool,
}

pub fn cmd_move(ctx: &CommandContext, args: MoveArgs<'_>) -> Result<()> {
    let tree = read_tree(args.tree)
        .with_context(|| format!("failed to read tree {}", args.tree.display()))?;

    let mut options = MoveOptions::from(&ctx.config.moves);
    if let Some(policy) = args.missing_target {
        options = options.with_missing_target(policy);
    }
    if args.allow_duplicates {
        options = options.with_require_unique_ids(false);
    }

    let request = MoveRequest::new(args.drag_ids, args.target, args.location);
    let use_case = MoveItemsUseCase::new(options);
    let result = use_case.execute(&tree, &request)?;

    for id in &result.missing_drag_ids {
        eprintln!("⚠ Drag id '{}' is not in the tree", id);
    }
    if !result.target_found
        && !result.moved.is_empty()
        && use_case.options().missing_target.loses_items()
    {
        eprintln!(
            "⚠ Drop target '{}' not found; removed {} dragged item(s)",
            request.drop_target_id,
            result.moved.len()
        );
    }

    if args.diff {
        print!("{}", render_outline_diff(&tree, &result.tree));
        return Ok(());
    }

    let mut out = std::io::stdout().lock();
    write_json(&mut out, &result.tree, ctx.json)?;
    Ok(())
}
