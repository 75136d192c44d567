//! rowshift CLI - reorder and select rows of hierarchical list trees
//!
//! Usage: rowshift <COMMAND>
//!
//! Commands:
//!   move    Move rows relative to a drop target
//!   select  Toggle a row and print the next selection
//!   rows    Print the visible rows of a tree
//!   check   Validate id uniqueness

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::move_rows::MoveArgs;
use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = commands::load_config(cli.config.as_deref())?;
    init_logging(config.output.verbosity.raised_by(cli.verbose));

    let ctx = CommandContext::new(config, cli.compact);

    match cli.command {
        Commands::Move {
            tree,
            drag_ids,
            target,
            location,
            missing_target,
            allow_duplicates,
            diff,
        } => commands::move_rows::cmd_move(
            &ctx,
            MoveArgs {
                tree: &tree,
                drag_ids,
                target,
                location,
                missing_target,
                allow_duplicates,
                diff,
            },
        ),
        Commands::Select {
            tree,
            selected,
            toggle,
            parent,
            deselect,
        } => commands::select::cmd_select(
            &ctx,
            &tree,
            selected,
            &toggle,
            parent.as_deref(),
            deselect,
        ),
        Commands::Rows {
            tree,
            expanded,
            selected,
            selected_id,
        } => commands::rows::cmd_rows(&ctx, &tree, expanded, selected, selected_id),
        Commands::Check { tree } => commands::check::cmd_check(&tree),
    }
}

/// Log to stderr. `RUST_LOG` wins over the configured verbosity.
fn init_logging(verbosity: rowshift::Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rowshift={}", verbosity.log_filter())));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
