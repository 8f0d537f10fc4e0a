//! Network ACL and security group rule construction.

use crate::models::{Action, Direction, IcmpRule, NetworkingRule, PortRule, RuleParams, SourcePorts};
use crate::validation::{contains_check, valid_ipv4_test, valid_port_range};
use std::error::Error;

const PROTOCOLS: [&str; 3] = ["icmp", "udp", "tcp"];

/// Build a networking rule.
///
/// # Arguments
/// * `params` - Rule name, action, direction, addresses and protocol values
/// * `is_acl` - `true` for a network ACL rule, `false` for a security group rule
///
/// # Returns
/// * `Ok(NetworkingRule)` - The rule, with every unset protocol field `None`
/// * `Err` - Invalid address, unknown protocol or out of range port
pub fn build_networking_rule(
    params: &RuleParams,
    is_acl: bool,
) -> Result<NetworkingRule, Box<dyn Error>> {
    valid_ipv4_test("build_networking_rule params.source", &params.source)?;

    let mut rule = NetworkingRule {
        name: params.name.clone(),
        action: None,
        direction: if params.inbound {
            Direction::Inbound
        } else {
            Direction::Outbound
        },
        icmp: IcmpRule::default(),
        tcp: PortRule::default(),
        udp: PortRule::default(),
        source: params.source.clone(),
        destination: None,
    };

    if is_acl {
        let destination = params.destination.as_deref().unwrap_or_default();
        valid_ipv4_test("build_networking_rule params.destination", destination)?;
        rule.action = Some(if params.allow { Action::Allow } else { Action::Deny });
        rule.destination = Some(destination.to_string());
        rule.tcp.source_ports = Some(SourcePorts::default());
        rule.udp.source_ports = Some(SourcePorts::default());
    }

    let protocol = match params.rule_protocol.as_deref() {
        None | Some("all") => return Ok(rule),
        Some(protocol) => protocol,
    };
    contains_check("build_networking_rule expects rule type", &PROTOCOLS, protocol)?;

    if protocol == "icmp" {
        rule.icmp.icmp_type = checked_field(params, "type")?;
        rule.icmp.code = checked_field(params, "code")?;
    } else {
        let mut fields = vec!["port_min", "port_max"];
        if is_acl {
            fields.extend(["source_port_min", "source_port_max"]);
        }
        let ports = if protocol == "tcp" {
            &mut rule.tcp
        } else {
            &mut rule.udp
        };
        for field in fields {
            ports.set(field, checked_field(params, field)?);
        }
    }

    log::debug!("build_networking_rule({}) protocol={protocol} acl={is_acl}", params.name);
    Ok(rule)
}

/// Read a rule field, failing when it is set to an out of range value.
fn checked_field(params: &RuleParams, name: &str) -> Result<Option<u32>, Box<dyn Error>> {
    match params.rule.get(name) {
        Some(value) => {
            if !valid_port_range(name, &value.to_string())? {
                return Err(format!(
                    "build_networking_rule {} {name} out of range: {value}",
                    params.name
                )
                .into());
            }
            Ok(Some(value))
        }
        None => Ok(None),
    }
}
