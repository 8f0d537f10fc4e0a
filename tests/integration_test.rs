//! Integration tests for cidr-overlap
//!
//! These tests go through the public API from parsing to overlap scans and rules.

use cidr_overlap::{
    check_for_duplicate_blocks, get_sorted_blocks,
    models::{get_cidr_ips, CidrBlock, OctetRange, RuleParams},
    processing::{
        build_networking_rule, cidr_overlap, find_overlapping_blocks, format_cidr_block,
        get_cidr_ranges, get_fourth_octet_range,
    },
};

#[test]
fn test_host_blocks_are_single_points() {
    for cidr in ["10.0.0.0/32", "10.255.255.255/32", "0.0.0.0/32", "192.168.1.77/32"] {
        assert_eq!(get_cidr_ips(cidr).unwrap(), 1);
        let block = CidrBlock::new(cidr).unwrap();
        let ranges = get_cidr_ranges(&block, 1);
        for (range, octet) in ranges.iter().zip(block.octets()) {
            assert_eq!(*range, OctetRange::new(octet, octet), "{cidr}");
        }
    }
}

#[test]
fn test_documented_ranges() {
    let block = CidrBlock::new("10.0.0.255/31").unwrap();
    assert_eq!(get_fourth_octet_range(&block, 2), OctetRange::new(255, 0));
    let block = CidrBlock::new("10.0.0.0/24").unwrap();
    assert_eq!(get_fourth_octet_range(&block, 256), OctetRange::new(0, 255));
}

#[test]
fn test_documented_overlaps() {
    assert!(!cidr_overlap("11.10.10.10/30", "10.10.10.10/32").unwrap());
    assert!(cidr_overlap("0.0.0.0/30", "0.0.0.2/30").unwrap());
    assert!(!cidr_overlap("0.0.0.15/30", "0.0.0.2/30").unwrap());
    assert!(cidr_overlap("192.168.0.1/24", "192.168.0.1/18").unwrap());
    assert!(!cidr_overlap("10.0.0.0/16", "192.168.0.1/24").unwrap());
    assert!(cidr_overlap("10.0.0.0/16", "10.0.0.0/16").unwrap());
}

#[test]
fn test_vpc_layout_has_no_conflicts() {
    let mut cidrs = Vec::new();
    for vpc in 0..3 {
        for zone in 1..=3 {
            for tier in 0..4 {
                cidrs.push(format_cidr_block(vpc, zone, tier, false).unwrap());
            }
        }
    }
    let blocks = get_sorted_blocks(&cidrs).unwrap();
    assert_eq!(blocks.len(), 36);
    check_for_duplicate_blocks(&blocks).expect("Found unexpected duplicates");
    assert!(find_overlapping_blocks(&blocks).is_empty());

    // 10.50.0.0/16 covers every tier of vpc 1, zone 2
    let mut cidrs = cidrs.clone();
    cidrs.push("10.50.0.0/16".to_string());
    let blocks = get_sorted_blocks(&cidrs).unwrap();
    let conflicts = find_overlapping_blocks(&blocks);
    assert_eq!(conflicts.len(), 4);
    assert!(conflicts
        .iter()
        .all(|c| c.a.to_string() == "10.50.0.0/16" || c.b.to_string() == "10.50.0.0/16"));
}

#[test]
fn test_rule_from_json_params() {
    let params: RuleParams = serde_json::from_str(
        r#"{
            "name": "allow-ibm-inbound",
            "allow": true,
            "inbound": true,
            "source": "161.26.0.0/16",
            "destination": "10.0.0.0/8",
            "ruleProtocol": "tcp",
            "rule": { "port_min": 8080, "port_max": 8080 }
        }"#,
    )
    .unwrap();
    let rule = build_networking_rule(&params, true).expect("Failed to build rule");
    let json = serde_json::to_value(&rule).unwrap();
    assert_eq!(json["action"], "allow");
    assert_eq!(json["tcp"]["port_min"], 8080);
    assert!(json["tcp"]["source_port_min"].is_null());
    assert!(json["udp"]["port_max"].is_null());
}
