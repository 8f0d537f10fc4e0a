//! Occupied value ranges within a single octet position.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Create a list of octet values from `first` to `last`, wrapping 255 -> 0.
///
/// # Examples
/// ```
/// use cidr_overlap::models::base256_list;
/// assert_eq!(base256_list(254, 1), vec![254, 255, 0, 1]);
/// assert_eq!(base256_list(7, 7), vec![7]);
/// ```
pub fn base256_list(first: u8, last: u8) -> Vec<u8> {
    let mut list = vec![first];
    let mut next = first;
    while next != last {
        next = next.wrapping_add(1);
        list.push(next);
    }
    list
}

/// Values of one octet occupied by a block.
///
/// `last` below `first` means the range wraps past 255 back to 0, so
/// `{first: 254, last: 1}` is the set {254, 255, 0, 1}.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OctetRange {
    pub first: u8,
    pub last: u8,
}

impl OctetRange {
    pub fn new(first: u8, last: u8) -> Self {
        OctetRange { first, last }
    }

    /// A range holding exactly one value.
    pub fn is_degenerate(&self) -> bool {
        self.first == self.last
    }

    /// Number of distinct values in the range (1..=256).
    pub fn len(&self) -> usize {
        self.last.wrapping_sub(self.first) as usize + 1
    }

    /// Ranges are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, value: u8) -> bool {
        base256_list(self.first, self.last).contains(&value)
    }

    /// True when the two ranges share at least one value.
    pub fn intersects(&self, other: &OctetRange) -> bool {
        let mine = base256_list(self.first, self.last);
        let theirs = base256_list(other.first, other.last);
        mine.contains(&other.first)
            || mine.contains(&other.last)
            || theirs.contains(&self.first)
            || theirs.contains(&self.last)
    }
}

impl std::fmt::Display for OctetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

/// The four octet ranges of a block in dotted-quad order.
///
/// Index 0 ("first") is the leftmost, most significant octet; index 3
/// ("fourth") the rightmost.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct CidrRanges {
    pub octets: [OctetRange; 4],
}

impl CidrRanges {
    pub fn first(&self) -> OctetRange {
        self.octets[0]
    }

    pub fn second(&self) -> OctetRange {
        self.octets[1]
    }

    pub fn third(&self) -> OctetRange {
        self.octets[2]
    }

    pub fn fourth(&self) -> OctetRange {
        self.octets[3]
    }

    pub fn iter(&self) -> impl Iterator<Item = &OctetRange> {
        self.octets.iter()
    }
}

impl Index<usize> for CidrRanges {
    type Output = OctetRange;

    fn index(&self, index: usize) -> &OctetRange {
        &self.octets[index]
    }
}

impl std::fmt::Display for CidrRanges {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.octets[0], self.octets[1], self.octets[2], self.octets[3]
        )
    }
}
