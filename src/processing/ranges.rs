//! Per-octet occupied ranges of a CIDR block.
//!
//! A block covers `ips` addresses counted from its literal address. For each
//! octet position the range holds the values that octet takes across the
//! span, with wraparound at 256.

use crate::models::{CidrBlock, CidrRanges, OctetRange};

/// Bit shift of each octet in dotted-quad order.
const OCTET_SHIFTS: [u32; 4] = [24, 16, 8, 0];

/// Occupied range of the octet at `index` (0 = leftmost).
fn octet_range(start: u64, end: u64, index: usize) -> OctetRange {
    let shift = OCTET_SHIFTS[index];
    let first = ((start >> shift) & 0xff) as u8;
    // carries from the less significant octets across the span
    let spill = (end >> shift) - (start >> shift);
    let last = if spill >= 255 {
        first.wrapping_sub(1)
    } else {
        first.wrapping_add(spill as u8)
    };
    OctetRange::new(first, last)
}

fn span(cidr: &CidrBlock, ips: u64) -> (u64, u64) {
    let start = u32::from(cidr.addr) as u64;
    // counts past the address space cover every octet value
    let end = start.saturating_add(ips.max(1) - 1);
    (start, end)
}

/// All four octet ranges of `cidr` spanning `ips` addresses.
///
/// # Examples
/// ```
/// use cidr_overlap::models::{CidrBlock, OctetRange};
/// use cidr_overlap::processing::get_cidr_ranges;
/// let cidr = CidrBlock::new("10.0.0.255/31").unwrap();
/// let ranges = get_cidr_ranges(&cidr, cidr.ip_count());
/// assert_eq!(ranges.third(), OctetRange::new(0, 1));
/// assert_eq!(ranges.fourth(), OctetRange::new(255, 0));
/// ```
pub fn get_cidr_ranges(cidr: &CidrBlock, ips: u64) -> CidrRanges {
    let (start, end) = span(cidr, ips);
    CidrRanges {
        octets: [0, 1, 2, 3].map(|index| octet_range(start, end, index)),
    }
}

/// Range of the leftmost octet (`a` in `a.b.c.d`).
pub fn get_first_octet_range(cidr: &CidrBlock, ips: u64) -> OctetRange {
    let (start, end) = span(cidr, ips);
    octet_range(start, end, 0)
}

/// Range of the second octet (`b` in `a.b.c.d`).
pub fn get_second_octet_range(cidr: &CidrBlock, ips: u64) -> OctetRange {
    let (start, end) = span(cidr, ips);
    octet_range(start, end, 1)
}

/// Range of the third octet (`c` in `a.b.c.d`).
pub fn get_third_octet_range(cidr: &CidrBlock, ips: u64) -> OctetRange {
    let (start, end) = span(cidr, ips);
    octet_range(start, end, 2)
}

/// Range of the rightmost octet (`d` in `a.b.c.d`).
pub fn get_fourth_octet_range(cidr: &CidrBlock, ips: u64) -> OctetRange {
    let (start, end) = span(cidr, ips);
    octet_range(start, end, 3)
}
