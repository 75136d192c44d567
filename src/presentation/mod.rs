//! Presentation Layer
//!
//! This layer handles:
//! - Reading tree files
//! - Output formatting (JSON, outlines, outline diffs)
//!
//! ## Structure
//!
//! - `input` - Tree loading from files or stdin
//! - `outline` - Indented id outline of a tree
//! - `diff` - Unified diff of two outlines
//! - `output` - JSON rendering

pub mod diff;
pub mod input;
pub mod outline;
pub mod output;

pub use diff::render_outline_diff;
pub use input::{parse_tree, read_tree};
pub use outline::render_outline;
pub use output::{to_json, write_json, JsonStyle};
