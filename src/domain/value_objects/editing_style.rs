//! Editing style value object
//!
//! Governs whether toggling a row is exclusive (radio-style) or cumulative
//! (checkbox-style), and whether nested rows take part in selection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditingStyle {
    Single,
    Multiple,
    SingleNesting,
    MultipleNesting,
}

impl EditingStyle {
    /// Cumulative (checkbox) selection
    pub fn is_multiple(&self) -> bool {
        matches!(self, EditingStyle::Multiple | EditingStyle::MultipleNesting)
    }

    /// Nested rows participate in selection
    pub fn is_nesting(&self) -> bool {
        matches!(
            self,
            EditingStyle::SingleNesting | EditingStyle::MultipleNesting
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EditingStyle::Single => "single",
            EditingStyle::Multiple => "multiple",
            EditingStyle::SingleNesting => "single-nesting",
            EditingStyle::MultipleNesting => "multiple-nesting",
        }
    }
}

impl std::fmt::Display for EditingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// True iff `style` selects cumulatively (`Multiple` or `MultipleNesting`)
pub fn editing_style_is_multiple(style: EditingStyle) -> bool {
    style.is_multiple()
}
