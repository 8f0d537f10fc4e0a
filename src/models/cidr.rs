//! IPv4 CIDR block parsing and address arithmetic.
//!
//! Provides [`CidrBlock`] for representing an IPv4 address with a prefix length,
//! along with utility functions for mask and address count calculations.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_overlap::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Number of addresses spanned by a prefix length, `2^(32 - len)`.
pub fn ip_count(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err(format!("Invalid prefix length /{len}").into())
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Number of addresses in a CIDR string.
///
/// Unlike [`CidrBlock::new`] this requires an explicit `/n` suffix.
///
/// # Examples
/// ```
/// use cidr_overlap::models::get_cidr_ips;
/// assert_eq!(get_cidr_ips("10.0.0.0/24").unwrap(), 256);
/// assert!(get_cidr_ips("10.0.0.0").is_err());
/// ```
pub fn get_cidr_ips(cidr: &str) -> Result<u64, Box<dyn Error>> {
    let (_, prefix) = cidr
        .trim()
        .split_once('/')
        .ok_or_else(|| format!("Invalid CIDR {cidr}: missing prefix length"))?;
    let len: u8 = prefix
        .parse()
        .map_err(|_| format!("Invalid CIDR {cidr}: bad prefix length {prefix}"))?;
    ip_count(len)
}

/// IPv4 CIDR block.
///
/// The address is kept as written; `10.0.0.3/31` starts at `10.0.0.3`, not at
/// the network address `10.0.0.2`.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::new(&s).map_err(|e| de::Error::custom(e.to_string()))
    }
}

impl FromStr for CidrBlock {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CidrBlock::new(s)
    }
}

impl CidrBlock {
    /// Create a new [`CidrBlock`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// A bare address (e.g., "10.0.0.1") is read as a `/32`.
    pub fn new(addr_cidr: &str) -> Result<CidrBlock, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = match addr_cidr.split_once('/') {
            Some((addr, mask)) => (addr, mask),
            None => (addr_cidr, "32"),
        };
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| format!("Invalid CIDR {addr_cidr}: bad address {addr}"))?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| format!("Invalid CIDR {addr_cidr}: bad prefix length {mask}"))?;
        if mask > MAX_LENGTH {
            return Err(format!("Invalid CIDR {addr_cidr}: network length is too long").into());
        }
        Ok(CidrBlock { addr, mask })
    }

    /// Number of addresses in the block.
    pub fn ip_count(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// The four octets in dotted-quad order.
    pub fn octets(&self) -> [u8; 4] {
        self.addr.octets()
    }

    /// The block moved down to its network address.
    pub fn network(&self) -> CidrBlock {
        let addr = cut_addr(self.addr, self.mask).unwrap_or(self.addr);
        CidrBlock {
            addr,
            mask: self.mask,
        }
    }

    /// Last address covered when counting `ip_count()` addresses from `addr`.
    ///
    /// Saturates at `255.255.255.255` for blocks whose span runs off the end
    /// of the address space.
    pub fn last_addr(&self) -> Ipv4Addr {
        let end = u32::from(self.addr) as u64 + self.ip_count() - 1;
        Ipv4Addr::from(end.min(u32::MAX as u64) as u32)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for CidrBlock {
    fn eq(&self, other: &CidrBlock) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for CidrBlock {
    fn partial_cmp(&self, other: &CidrBlock) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
