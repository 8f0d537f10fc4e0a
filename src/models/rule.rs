//! Network ACL and security group rule models.

use serde::{Deserialize, Serialize};

/// Input for [`crate::processing::build_networking_rule`].
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RuleParams {
    /// Name of the rule.
    pub name: String,
    /// `true` to allow, `false` to deny.
    pub allow: bool,
    /// `true` for inbound, `false` for outbound.
    pub inbound: bool,
    /// CIDR block or address.
    pub source: String,
    /// CIDR block or address, ACL rules only.
    #[serde(default)]
    pub destination: Option<String>,
    /// `icmp`, `tcp`, `udp` or `all`.
    #[serde(default, rename = "ruleProtocol", alias = "rule_protocol")]
    pub rule_protocol: Option<String>,
    #[serde(default)]
    pub rule: RuleFields,
}

/// Protocol specific values of a rule.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RuleFields {
    #[serde(default, rename = "type")]
    pub icmp_type: Option<u32>,
    #[serde(default)]
    pub code: Option<u32>,
    #[serde(default)]
    pub port_min: Option<u32>,
    #[serde(default)]
    pub port_max: Option<u32>,
    #[serde(default)]
    pub source_port_min: Option<u32>,
    #[serde(default)]
    pub source_port_max: Option<u32>,
}

impl RuleFields {
    /// Look a field up by its wire name.
    pub fn get(&self, name: &str) -> Option<u32> {
        match name {
            "type" => self.icmp_type,
            "code" => self.code,
            "port_min" => self.port_min,
            "port_max" => self.port_max,
            "source_port_min" => self.source_port_min,
            "source_port_max" => self.source_port_max,
            _ => None,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Allow,
    Deny,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IcmpRule {
    #[serde(rename = "type")]
    pub icmp_type: Option<u32>,
    pub code: Option<u32>,
}

/// Source port bounds, only present on ACL rules.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourcePorts {
    pub source_port_min: Option<u32>,
    pub source_port_max: Option<u32>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PortRule {
    pub port_min: Option<u32>,
    pub port_max: Option<u32>,
    #[serde(flatten)]
    pub source_ports: Option<SourcePorts>,
}

impl PortRule {
    pub(crate) fn set(&mut self, name: &str, value: Option<u32>) {
        match name {
            "port_min" => self.port_min = value,
            "port_max" => self.port_max = value,
            "source_port_min" => {
                self.source_ports.get_or_insert_with(Default::default).source_port_min = value
            }
            "source_port_max" => {
                self.source_ports.get_or_insert_with(Default::default).source_port_max = value
            }
            _ => {}
        }
    }
}

/// A network ACL rule, or a security group rule when `action` and
/// `destination` are absent.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkingRule {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    pub direction: Direction,
    pub icmp: IcmpRule,
    pub tcp: PortRule,
    pub udp: PortRule,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}
