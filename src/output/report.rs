//! Printing of overlap results, octet ranges and rules to stdout.

use super::terminal::{format_field, overlap_label};
use crate::models::{CidrBlock, CidrRanges, NetworkingRule};
use crate::processing::OverlapConflict;
use std::error::Error;

const FIELD_WIDTH: usize = 20;

/// One line per octet: position, first, last and value count.
pub fn format_ranges(cidr: &CidrBlock, ips: u64, ranges: &CidrRanges) -> Vec<String> {
    let mut lines = vec![format!(
        "{}{}{}",
        format_field(cidr, FIELD_WIDTH),
        format_field(format!("{ips} ips"), FIELD_WIDTH),
        format_field(format!("{} - {}", cidr.addr, cidr.last_addr()), 2 * FIELD_WIDTH),
    )];
    for (i, range) in ranges.iter().enumerate() {
        lines.push(format!(
            "{}{}{}{}",
            format_field(format!("octet {}", i + 1), FIELD_WIDTH),
            format_field(range.first, 8),
            format_field(range.last, 8),
            format_field(format!("{} values", range.len()), FIELD_WIDTH),
        ));
    }
    lines
}

pub fn print_ranges(cidr: &CidrBlock, ips: u64, ranges: &CidrRanges) {
    for line in format_ranges(cidr, ips, ranges) {
        println!("{line}");
    }
}

pub fn print_overlap(a: &str, b: &str, overlap: bool) {
    println!(
        "{}{} {}",
        format_field(a, FIELD_WIDTH),
        format_field(b, FIELD_WIDTH),
        overlap_label(overlap)
    );
}

pub fn print_conflicts(blocks: &[CidrBlock], conflicts: &[OverlapConflict]) {
    log::info!(
        "# Checked {} blocks, {} overlapping pair(s)",
        blocks.len(),
        conflicts.len()
    );
    for conflict in conflicts {
        print_overlap(&conflict.a.to_string(), &conflict.b.to_string(), true);
    }
}

pub fn print_rule(rule: &NetworkingRule) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(rule)?);
    Ok(())
}
