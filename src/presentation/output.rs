//! Output Rendering
//!
//! JSON output for results written to stdout.

use std::io::Write;

use is_terminal::IsTerminal;
use serde::Serialize;

use crate::error::RowshiftResult;

/// JSON layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Indented when stdout is a terminal, compact otherwise
    #[default]
    Auto,
    Pretty,
    Compact,
}

impl JsonStyle {
    fn is_pretty(&self) -> bool {
        match self {
            JsonStyle::Auto => std::io::stdout().is_terminal(),
            JsonStyle::Pretty => true,
            JsonStyle::Compact => false,
        }
    }
}

/// Serialize `value` to a string in the given style
pub fn to_json<T: Serialize>(value: &T, style: JsonStyle) -> RowshiftResult<String> {
    let json = if style.is_pretty() {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Write `value` as one JSON document followed by a newline
pub fn write_json<W: Write, T: Serialize>(
    out: &mut W,
    value: &T,
    style: JsonStyle,
) -> RowshiftResult<()> {
    writeln!(out, "{}", to_json(value, style)?)?;
    Ok(())
}
