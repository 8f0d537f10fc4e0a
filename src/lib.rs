// cargo watch -x 'fmt' -x 'test'

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;
pub mod validation;

use cli::Commands;
use models::{CidrBlock, RuleParams};
use std::collections::HashSet;
use std::error::Error;

/// Largest address count of a block, the whole IPv4 space.
pub const MAX_IP_COUNT: u64 = 1 << 32;

/// Parse a list of CIDR strings, sorted by block.
pub fn get_sorted_blocks<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<CidrBlock>, Box<dyn Error>> {
    let mut blocks = cidrs
        .iter()
        .map(|s| CidrBlock::new(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    blocks.sort();
    Ok(blocks)
}

// return error if duplicate blocks found
pub fn check_for_duplicate_blocks(blocks: &[CidrBlock]) -> Result<(), Box<dyn Error>> {
    let mut seen = HashSet::new();

    for block in blocks.iter() {
        if !seen.insert(block) {
            return Err(format!("Duplicate found: {block}").into());
        }
    }
    Ok(())
}

/// Read rule params from a JSON file.
pub fn read_rule_params(path: &std::path::Path) -> Result<RuleParams, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading rule params {}: {e}", path.display()))?;
    let params =
        serde_json::from_str(&json).map_err(|e| format!("Error parsing rule params JSON: {e}"))?;
    Ok(params)
}

/// Run one command line subcommand, printing its result to stdout.
pub fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Overlap { cidr_a, cidr_b } => {
            let overlap = processing::cidr_overlap(&cidr_a, &cidr_b)?;
            output::print_overlap(&cidr_a, &cidr_b, overlap);
        }
        Commands::Ranges { cidr, ips } => {
            let block = CidrBlock::new(&cidr)?;
            let ips = ips.unwrap_or_else(|| block.ip_count());
            if ips > MAX_IP_COUNT {
                return Err(
                    format!("Invalid ip count {ips}, expected at most {MAX_IP_COUNT}").into(),
                );
            }
            let ranges = processing::get_cidr_ranges(&block, ips);
            output::print_ranges(&block, ips, &ranges);
        }
        Commands::Scan { cidrs } => {
            let blocks = get_sorted_blocks(&cidrs)?;
            if let Err(e) = check_for_duplicate_blocks(&blocks) {
                log::warn!("{e}");
            }
            let conflicts = processing::find_overlapping_blocks(&blocks);
            processing::log_overlapping_blocks(&conflicts);
            output::print_conflicts(&blocks, &conflicts);
        }
        Commands::Format {
            vpc,
            zone,
            tier,
            edge,
        } => {
            println!("{}", processing::format_cidr_block(vpc, zone, tier, edge)?);
        }
        Commands::Rule { params, acl } => {
            let params = read_rule_params(&params)?;
            let rule = processing::build_networking_rule(&params, acl)?;
            output::print_rule(&rule)?;
        }
    }
    Ok(())
}
