//! Outline diff between two trees

use similar::TextDiff;

use crate::domain::entities::ListItem;

use super::outline::render_outline;

/// Unified diff of the outlines of `before` and `after`.
///
/// Empty when the outlines are identical.
pub fn render_outline_diff(before: &[ListItem], after: &[ListItem]) -> String {
    let mut old = render_outline(before);
    let mut new = render_outline(after);
    if old == new {
        return String::new();
    }
    old.push('\n');
    new.push('\n');

    TextDiff::from_lines(&old, &new)
        .unified_diff()
        .context_radius(3)
        .header("a/tree", "b/tree")
        .to_string()
}
