//! Overlapping CIDR block detection.
//!
//! Decides whether two blocks share addresses by comparing their per-octet
//! ranges from the most significant octet down, and scans lists of blocks
//! for conflicting pairs.

use crate::models::{CidrBlock, CidrRanges};
use crate::processing::get_cidr_ranges;
use itertools::Itertools;
use std::error::Error;

/// Blocks smaller than a `/7` sit inside a single leftmost octet value.
const FIRST_OCTET_LIMIT: u64 = 1 << 25;
/// Blocks smaller than a `/15` sit inside a single second octet value.
const SECOND_OCTET_LIMIT: u64 = 1 << 17;

/// Check whether two CIDR strings overlap.
///
/// A bare address is read as a `/32`.
///
/// # Examples
/// ```
/// use cidr_overlap::processing::cidr_overlap;
/// assert!(cidr_overlap("192.168.0.1/24", "192.168.0.1/18").unwrap());
/// assert!(!cidr_overlap("10.0.0.0/16", "192.168.0.1/24").unwrap());
/// ```
pub fn cidr_overlap(cidr_a: &str, cidr_b: &str) -> Result<bool, Box<dyn Error>> {
    if cidr_a.trim() == cidr_b.trim() {
        // don't check if same
        CidrBlock::new(cidr_a)?;
        return Ok(true);
    }
    let a = CidrBlock::new(cidr_a)?;
    let b = CidrBlock::new(cidr_b)?;
    Ok(cidr_overlap_ipv4(a, b))
}

/// Check whether two parsed [`CidrBlock`]s overlap.
pub fn cidr_overlap_ipv4(a: CidrBlock, b: CidrBlock) -> bool {
    if a == b {
        return true;
    }

    let a_ips = a.ip_count();
    let b_ips = b.ip_count();
    let a_octets = a.octets();
    let b_octets = b.octets();

    if a_ips < FIRST_OCTET_LIMIT && b_ips < FIRST_OCTET_LIMIT && a_octets[0] != b_octets[0] {
        log::trace!("{a} and {b} differ in the first octet");
        return false;
    }
    if a_ips < SECOND_OCTET_LIMIT && b_ips < SECOND_OCTET_LIMIT && a_octets[1] != b_octets[1] {
        log::trace!("{a} and {b} differ in the second octet");
        return false;
    }

    let a_ranges = get_cidr_ranges(&a, a_ips);
    let b_ranges = get_cidr_ranges(&b, b_ips);
    let overlap = ranges_overlap(&a_ranges, &b_ranges);
    log::debug!("cidr_overlap({a}, {b}) ranges {a_ranges} / {b_ranges} -> {overlap}");
    overlap
}

/// Walk the octets most significant first.
///
/// Single values must match (or fall inside the other block's range) for the
/// walk to go on; the first octet where both blocks span several values
/// decides.
fn ranges_overlap(a: &CidrRanges, b: &CidrRanges) -> bool {
    for (ra, rb) in a.iter().zip(b.iter()) {
        match (ra.is_degenerate(), rb.is_degenerate()) {
            (true, true) => {
                if ra.first != rb.first {
                    return false;
                }
            }
            (true, false) => {
                if !rb.contains(ra.first) {
                    return false;
                }
            }
            (false, true) => {
                if !ra.contains(rb.first) {
                    return false;
                }
            }
            (false, false) => return ra.intersects(rb),
        }
    }
    // every octet matched or nested
    true
}

/// A pair of blocks whose address ranges overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapConflict {
    pub a: CidrBlock,
    pub b: CidrBlock,
}

impl std::fmt::Display for OverlapConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} <-> {}", self.a, self.b)
    }
}

/// Find every overlapping pair in `blocks`.
///
/// # Arguments
/// * `blocks` - The blocks to compare, each against every later one
///
/// # Returns
/// The conflicting pairs in input order
pub fn find_overlapping_blocks(blocks: &[CidrBlock]) -> Vec<OverlapConflict> {
    blocks
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| cidr_overlap_ipv4(**a, **b))
        .map(|(a, b)| OverlapConflict { a: *a, b: *b })
        .collect()
}

/// Log overlapping CIDR conflicts as warnings.
pub fn log_overlapping_blocks(conflicts: &[OverlapConflict]) {
    if conflicts.is_empty() {
        log::info!("No overlapping CIDR blocks found.");
        return;
    }

    log::warn!("Found {} overlapping CIDR block pair(s):", conflicts.len());

    for conflict in conflicts {
        log::warn!(
            "  {} ({} - {}) overlaps {} ({} - {})",
            conflict.a,
            conflict.a.addr,
            conflict.a.last_addr(),
            conflict.b,
            conflict.b.addr,
            conflict.b.last_addr()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlap(a: &str, b: &str) -> bool {
        cidr_overlap(a, b).unwrap()
    }

    // the fast path compares literal first octets, even when a span carries past them
    #[test]
    fn test_first_octet_fast_path_uses_literal_octets() {
        assert!(!overlap("10.255.255.255/31", "11.0.0.0/32"));
        assert!(!overlap("11.0.0.0/32", "10.255.255.255/31"));
    }

    #[test]
    fn test_same_host_blocks() {
        assert!(overlap("10.10.10.10/32", "10.10.10.10/32"));
        assert!(!overlap("10.10.10.11/32", "10.10.10.10/32"));
    }

    #[test]
    fn test_first_octet_short_circuit() {
        assert!(!overlap("11.10.10.10/30", "10.10.10.10/32"));
        assert!(!overlap("10.0.0.0/16", "192.168.0.1/24"));
        assert!(!overlap("192.168.0.1/24", "10.0.0.0/16"));
    }

    #[test]
    fn test_second_octet_short_circuit() {
        assert!(!overlap("10.11.10.10/16", "10.10.10.10/16"));
    }

    #[test]
    fn test_small_blocks() {
        assert!(overlap("0.0.0.0/30", "0.0.0.2/30"));
        assert!(overlap("0.0.0.2/30", "0.0.0.0/30"));
        assert!(overlap("0.0.0.2/30", "0.0.0.3/30"));
        assert!(overlap("0.0.0.3/30", "0.0.0.2/30"));
        assert!(!overlap("0.0.0.15/30", "0.0.0.2/30"));
    }

    #[test]
    fn test_small_blocks_near_octet_end() {
        assert!(overlap("0.0.0.254/30", "0.0.0.255/30"));
        assert!(overlap("0.0.0.255/30", "0.0.0.254/30"));
        assert!(!overlap("0.0.0.250/30", "0.0.0.255/30"));
        assert!(overlap("0.0.255.254/30", "0.0.255.255/30"));
        assert!(overlap("0.0.255.255/30", "0.0.255.254/30"));
    }

    #[test]
    fn test_slash_23_blocks() {
        assert!(overlap("0.0.255.255/23", "0.0.255.254/23"));
        assert!(overlap("0.0.255.10/23", "0.0.255.19/23"));
        assert!(!overlap("0.0.100.10/23", "0.0.255.19/23"));
    }

    #[test]
    fn test_large_supernet() {
        assert!(overlap("0.0.255.0/16", "0.0.254.254/1"));
        assert!(overlap("0.0.254.254/1", "0.0.255.0/16"));
        assert!(overlap("0.0.0.0/0", "203.0.113.7/32"));
    }

    #[test]
    fn test_nested_blocks() {
        assert!(overlap("192.168.0.1/24", "192.168.0.1/18"));
        assert!(overlap("10.0.0.0/8", "10.5.0.0/16"));
        assert!(overlap("10.0.0.0/24", "10.0.0.5/32"));
        assert!(overlap("10.0.0.5/32", "10.0.0.0/24"));
        assert!(overlap("10.0.0.0/16", "10.0.0.5"));
    }

    #[test]
    fn test_disjoint_siblings() {
        assert!(!overlap("10.0.0.0/24", "10.0.1.0/24"));
        assert!(!overlap("10.0.0.0/30", "10.0.5.0/30"));
        assert!(!overlap("10.0.0.0/9", "10.128.0.0/9"));
        assert!(!overlap("10.0.0.0/24", "10.0.1.5/32"));
    }

    #[test]
    fn test_same_string_returns_true() {
        assert!(overlap("10.0.0.0/16", "10.0.0.0/16"));
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(cidr_overlap("10.0.0.0/33", "10.0.0.0/24").is_err());
        assert!(cidr_overlap("honk", "honk").is_err());
        assert!(cidr_overlap("10.0.0.0/24", "1.2.3").is_err());
    }

    #[test]
    fn test_find_overlapping_blocks() {
        let blocks: Vec<CidrBlock> = ["10.0.0.0/16", "10.0.5.0/24", "10.1.0.0/16", "10.1.255.0/24"]
            .iter()
            .map(|s| CidrBlock::new(s).unwrap())
            .collect();
        let conflicts = find_overlapping_blocks(&blocks);
        assert_eq!(
            conflicts,
            vec![
                OverlapConflict {
                    a: blocks[0],
                    b: blocks[1]
                },
                OverlapConflict {
                    a: blocks[2],
                    b: blocks[3]
                },
            ]
        );
        assert_eq!(conflicts[0].to_string(), "10.0.0.0/16 <-> 10.0.5.0/24");
        log_overlapping_blocks(&conflicts);
    }

    #[test]
    fn test_find_overlapping_blocks_none() {
        let blocks = vec![
            CidrBlock::new("10.0.0.0/24").unwrap(),
            CidrBlock::new("10.0.1.0/24").unwrap(),
        ];
        assert!(find_overlapping_blocks(&blocks).is_empty());
        assert!(find_overlapping_blocks(&[]).is_empty());
        log_overlapping_blocks(&[]);
    }
}
