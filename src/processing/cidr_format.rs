//! CIDR block layout for VPC zones and subnet tiers.

use std::error::Error;

/// Format the `/24` block of a subnet tier inside a VPC zone.
///
/// # Arguments
/// * `vpc` - Index of the VPC within the architecture
/// * `zone` - Zone, one of 1, 2 or 3
/// * `tier` - Index of the subnet tier
/// * `is_edge` - Edge networks use `10.{4 + zone}` as the second octet
///
/// # Examples
/// ```
/// use cidr_overlap::processing::format_cidr_block;
/// assert_eq!(format_cidr_block(0, 1, 0, false).unwrap(), "10.10.10.0/24");
/// assert_eq!(format_cidr_block(0, 1, 0, true).unwrap(), "10.5.10.0/24");
/// ```
pub fn format_cidr_block(
    vpc: u32,
    zone: u32,
    tier: u32,
    is_edge: bool,
) -> Result<String, Box<dyn Error>> {
    if !(1..=3).contains(&zone) {
        return Err("Zone must be 1, 2, or 3.".into());
    }
    let zone_octet = if is_edge {
        Some(4 + zone)
    } else {
        vpc.checked_mul(3)
            .and_then(|v| v.checked_add(zone))
            .and_then(|v| v.checked_mul(10))
    };
    let tier_octet = tier.checked_add(1).and_then(|t| t.checked_mul(10));
    let (zone_octet, tier_octet) = zone_octet
        .zip(tier_octet)
        .and_then(|(z, t)| Some((u8::try_from(z).ok()?, u8::try_from(t).ok()?)))
        .ok_or_else(|| {
            format!(
                "format_cidr_block vpc={vpc} zone={zone} tier={tier} does not fit in 10.0.0.0/8"
            )
        })?;
    let cidr = format!("10.{zone_octet}.{tier_octet}.0/24");
    log::debug!("format_cidr_block(vpc={vpc}, zone={zone}, tier={tier}, edge={is_edge}) = {cidr}");
    Ok(cidr)
}
