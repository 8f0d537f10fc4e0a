//! Command line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cidr-overlap")]
#[command(about = "IPv4 CIDR octet ranges and overlap checks.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether two CIDR blocks overlap
    #[command(alias = "o")]
    Overlap { cidr_a: String, cidr_b: String },
    /// Show the occupied range of each octet of a CIDR block
    #[command(alias = "r")]
    Ranges {
        cidr: String,
        /// Address count, defaults to the block size
        #[arg(long)]
        ips: Option<u64>,
    },
    /// Report every overlapping pair in a list of CIDR blocks
    #[command(alias = "s")]
    Scan {
        #[arg(required = true)]
        cidrs: Vec<String>,
    },
    /// Format the /24 block of a VPC zone tier
    Format {
        #[arg(long)]
        vpc: u32,
        #[arg(long)]
        zone: u32,
        #[arg(long)]
        tier: u32,
        #[arg(long)]
        edge: bool,
    },
    /// Build a networking rule from a JSON params file
    Rule {
        params: PathBuf,
        /// Build a network ACL rule instead of a security group rule
        #[arg(long)]
        acl: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
