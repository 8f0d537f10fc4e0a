//! CIDR range and rule processing logic.
//!
//! This module contains the computations built on the domain models:
//! - [`ranges`] - Per-octet occupied ranges of a block
//! - [`overlap`] - Overlap test and pairwise overlap scan
//! - [`cidr_format`] - VPC zone/tier block layout
//! - [`rule`] - Network ACL and security group rule construction

mod cidr_format;
mod overlap;
mod ranges;
mod rule;

// Re-export public functions
pub use cidr_format::format_cidr_block;
pub use overlap::{
    cidr_overlap, cidr_overlap_ipv4, find_overlapping_blocks, log_overlapping_blocks,
    OverlapConflict,
};
pub use ranges::{
    get_cidr_ranges, get_first_octet_range, get_fourth_octet_range, get_second_octet_range,
    get_third_octet_range,
};
pub use rule::build_networking_rule;
