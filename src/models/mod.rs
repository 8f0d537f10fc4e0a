//! Domain models for CIDR range arithmetic.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`CidrBlock`] - IPv4 address with a prefix length
//! - [`OctetRange`] and [`CidrRanges`] - occupied values per octet
//! - [`NetworkingRule`] and [`RuleParams`] - ACL and security group rules

mod cidr;
mod octet_range;
mod rule;

// Re-export public types
pub use cidr::{cut_addr, get_cidr_ips, get_cidr_mask, ip_count, CidrBlock, MAX_LENGTH};
pub use octet_range::{base256_list, CidrRanges, OctetRange};
pub use rule::{
    Action, Direction, IcmpRule, NetworkingRule, PortRule, RuleFields, RuleParams, SourcePorts,
};
