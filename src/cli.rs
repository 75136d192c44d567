use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rowshift::{DeselectPolicy, DropLocation, MissingTargetPolicy};

/// rowshift - reorder and select rows of hierarchical list trees
#[derive(Parser, Debug)]
#[command(name = "rowshift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./rowshift.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Move rows relative to a drop target and print the new tree
    Move {
        /// Tree JSON file ('-' for stdin)
        #[arg(long)]
        tree: PathBuf,

        /// Ids of the dragged rows
        #[arg(long = "drag", required = true, num_args = 1.., value_delimiter = ',')]
        drag_ids: Vec<String>,

        /// Id of the drop target
        #[arg(long)]
        target: String,

        /// Where the dragged rows land
        #[arg(long, value_enum)]
        location: DropLocation,

        /// Behavior when the target is not in the tree
        #[arg(long, value_enum)]
        missing_target: Option<MissingTargetPolicy>,

        /// Accept trees with repeated ids (first match wins)
        #[arg(long)]
        allow_duplicates: bool,

        /// Print an outline diff instead of the tree
        #[arg(long)]
        diff: bool,
    },

    /// Toggle a row and print the next selection
    Select {
        /// Tree JSON file ('-' for stdin)
        #[arg(long)]
        tree: PathBuf,

        /// Currently selected ids
        #[arg(long = "selected", num_args = 0.., value_delimiter = ',')]
        selected: Vec<String>,

        /// Id of the toggled row
        #[arg(long)]
        toggle: String,

        /// Parent id reported with the click
        #[arg(long)]
        parent: Option<String>,

        /// What deselecting does to descendants
        #[arg(long, value_enum)]
        deselect: Option<DeselectPolicy>,
    },

    /// Print the rows a renderer would draw
    Rows {
        /// Tree JSON file ('-' for stdin)
        #[arg(long)]
        tree: PathBuf,

        /// Expanded row ids
        #[arg(long = "expanded", num_args = 0.., value_delimiter = ',')]
        expanded: Vec<String>,

        /// Checked row ids (multiple-selection styles)
        #[arg(long = "selected", num_args = 0.., value_delimiter = ',')]
        selected: Vec<String>,

        /// Highlighted row id (single-selection styles)
        #[arg(long)]
        selected_id: Option<String>,
    },

    /// Validate that every id in the tree is unique
    Check {
        /// Tree JSON file ('-' for stdin)
        #[arg(long)]
        tree: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_move_with_comma_separated_ids() {
        let cli = Cli::try_parse_from([
            "rowshift",
            "move",
            "--tree",
            "t.json",
            "--drag",
            "a,b",
            "--target",
            "c",
            "--location",
            "nested",
        ])
        .unwrap();

        match cli.command {
            Commands::Move {
                drag_ids, location, ..
            } => {
                assert_eq!(drag_ids, vec!["a".to_string(), "b".to_string()]);
                assert_eq!(location, DropLocation::Nested);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn move_requires_location() {
        let err = Cli::try_parse_from([
            "rowshift", "move", "--tree", "t.json", "--drag", "a", "--target", "c",
        ]);
        assert!(err.is_err());
    }
}
