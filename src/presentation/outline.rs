//! Text outline of a tree
//!
//! One line per item, two spaces of indent per level:
//!
//! ```text
//! - 1
//!   - 1b
//! - 1a
//! - 2
//! ```

use crate::domain::entities::ListItem;

/// Render `tree` as an indented outline of ids
pub fn render_outline(tree: &[ListItem]) -> String {
    let mut lines = Vec::new();
    push_lines(tree, 0, &mut lines);
    lines.join("\n")
}

fn push_lines(items: &[ListItem], depth: usize, lines: &mut Vec<String>) {
    for item in items {
        let mut line = format!("{}- {}", "  ".repeat(depth), item.id);
        if item.is_category {
            line.push_str(" [category]");
        }
        lines.push(line);
        push_lines(&item.children, depth + 1, lines);
    }
}
