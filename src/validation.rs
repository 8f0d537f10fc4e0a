//! Input validation for addresses, ports and enumerated values.

use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;

/// Field names accepted by [`valid_port_range`].
pub const PORT_FIELDS: [&str; 6] = [
    "type",
    "code",
    "port_min",
    "port_max",
    "source_port_min",
    "source_port_max",
];

lazy_static! {
    static ref IPV4_CIDR_RE: Regex = Regex::new(
        r"^((25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(/(3[0-2]|[12]?\d))?$"
    )
    .expect("Invalid Regex?");
}

/// Test if a string is an IPv4 address or an IPv4 CIDR block.
pub fn is_ipv4_cidr_or_address(value: &str) -> bool {
    IPV4_CIDR_RE.is_match(value)
}

/// Fail with a descriptive error unless `value` is an IPv4 address or CIDR block.
pub fn valid_ipv4_test(component: &str, value: &str) -> Result<(), Box<dyn Error>> {
    if !is_ipv4_cidr_or_address(value) {
        return Err(
            format!("{component} expected valid ipv4 address or CIDR block, got {value}").into(),
        );
    }
    Ok(())
}

/// Check if `value` is within `min..=max`.
pub fn is_in_range(value: i64, min: i64, max: i64) -> Result<bool, Box<dyn Error>> {
    if min > max {
        return Err(
            format!("is_in_range expects min({min}) to be less than or equal to max({max}).")
                .into(),
        );
    }
    Ok(value >= min && value <= max)
}

/// Check a port or ICMP field for a valid value.
///
/// ICMP `type` accepts 0-254 and `code` 0-255; every port field accepts 1-65535.
/// Unknown field names and values that do not parse as integers are errors.
pub fn valid_port_range(name: &str, value: &str) -> Result<bool, Box<dyn Error>> {
    if !PORT_FIELDS.contains(&name) {
        return Err(format!(
            "Name must be one of the following: {} got {name}",
            serde_json::to_string(&PORT_FIELDS)?
        )
        .into());
    }
    let number: i64 = value.trim().parse().map_err(|_| {
        format!("valid_port_range expects an integer to be parsed from value. Got {value}.")
    })?;
    match name {
        "type" => is_in_range(number, 0, 254),
        "code" => is_in_range(number, 0, 255),
        _ => is_in_range(number, 1, 65535),
    }
}

/// Fail unless `value` is one of `allowed`.
pub fn contains_check(message: &str, allowed: &[&str], value: &str) -> Result<(), Box<dyn Error>> {
    if !allowed.contains(&value) {
        return Err(format!("{message} got {}", serde_json::to_string(value)?).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_cidr_or_address() {
        assert!(is_ipv4_cidr_or_address("10.0.0.0/8"));
        assert!(is_ipv4_cidr_or_address("1.2.3.4/5"));
        assert!(is_ipv4_cidr_or_address("192.168.200.255"));
        assert!(is_ipv4_cidr_or_address("0.0.0.0/0"));
        assert!(is_ipv4_cidr_or_address("255.255.255.255/32"));
    }

    #[test]
    fn test_ipv4_cidr_or_address_invalid() {
        assert!(!is_ipv4_cidr_or_address("310.0.0.0/8"));
        assert!(!is_ipv4_cidr_or_address("256.0.0.0"));
        assert!(!is_ipv4_cidr_or_address("10.0.0.0/33"));
        assert!(!is_ipv4_cidr_or_address("10.0.0/8"));
        assert!(!is_ipv4_cidr_or_address("01.0.0.0"));
        assert!(!is_ipv4_cidr_or_address("honk"));
        assert!(!is_ipv4_cidr_or_address(""));
    }

    #[test]
    fn test_valid_ipv4_test() {
        assert_eq!(
            valid_ipv4_test("test", "honk").unwrap_err().to_string(),
            "test expected valid ipv4 address or CIDR block, got honk"
        );
        assert!(valid_ipv4_test("test", "1.2.3.4/5").is_ok());
    }

    #[test]
    fn test_is_in_range() {
        assert!(is_in_range(1, 1, 2).unwrap());
        assert!(!is_in_range(3, 0, 1).unwrap());
        assert_eq!(
            is_in_range(1, 5, 1).unwrap_err().to_string(),
            "is_in_range expects min(5) to be less than or equal to max(1)."
        );
    }

    #[test]
    fn test_valid_port_range_bad_name() {
        assert_eq!(
            valid_port_range("frog", "1").unwrap_err().to_string(),
            r#"Name must be one of the following: ["type","code","port_min","port_max","source_port_min","source_port_max"] got frog"#
        );
    }

    #[test]
    fn test_valid_port_range_not_integer() {
        assert_eq!(
            valid_port_range("type", "string").unwrap_err().to_string(),
            "valid_port_range expects an integer to be parsed from value. Got string."
        );
    }

    #[test]
    fn test_valid_port_range_values() {
        assert!(valid_port_range("source_port_min", "2").unwrap());
        assert!(valid_port_range("type", "254").unwrap());
        assert!(!valid_port_range("type", "255").unwrap());
        assert!(valid_port_range("code", "255").unwrap());
        assert!(!valid_port_range("code", "256").unwrap());
        assert!(!valid_port_range("source_port_min", "0").unwrap());
        assert!(valid_port_range("port_max", "65535").unwrap());
        assert!(!valid_port_range("port_max", "65536").unwrap());
    }

    #[test]
    fn test_contains_check() {
        assert!(contains_check("expects rule type", &["icmp", "udp", "tcp"], "tcp").is_ok());
        assert_eq!(
            contains_check("expects rule type", &["icmp", "udp", "tcp"], "frog")
                .unwrap_err()
                .to_string(),
            r#"expects rule type got "frog""#
        );
    }
}
