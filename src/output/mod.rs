//! Output formatting for CIDR results.
//!
//! This module handles formatting and printing:
//! - [`report`] - Overlap, octet range and rule output
//! - [`terminal`] - Terminal field formatting with colors

mod report;
mod terminal;

pub use report::{format_ranges, print_conflicts, print_overlap, print_ranges, print_rule};
pub use terminal::{format_field, overlap_label};
