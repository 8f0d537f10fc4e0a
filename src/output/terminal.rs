//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use colored::{ColoredString, Colorize};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Red for overlapping blocks, green otherwise.
pub fn overlap_label(overlap: bool) -> ColoredString {
    if overlap {
        "overlap".red().bold()
    } else {
        "no overlap".green()
    }
}
