//! Subnet plan produced by borrowing bits from the last octet of a /24.

use super::ipv4::{next_subnet_ipv4, Ipv4, MAX_LENGTH};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Prefix length every plan starts from.
pub const BASE_PREFIX: u8 = 24;

/// Most subnets the last octet can be split into (2^8).
pub const MAX_SUBNETS: u32 = 1 << (MAX_LENGTH - BASE_PREFIX);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetPlan {
    /// The /24 the subnets are carved from.
    pub base_network: Ipv4,
    pub required_subnets: u32,
    pub borrowed_bits: u8,
    pub new_prefix_length: u8,
    pub subnet_mask: Ipv4Addr,
    /// Last-octet increment between consecutive subnet bases.
    pub block_size: u32,
    /// Negative or zero once the prefix passes /30.
    pub usable_hosts: i64,
    pub derivation_steps: Vec<String>,
}

impl SubnetPlan {
    /// Prefix in `/26` notation.
    pub fn cidr(&self) -> String {
        format!("/{}", self.new_prefix_length)
    }

    /// Subnets actually created, 2^borrowed_bits (can exceed what was asked for).
    pub fn subnet_count(&self) -> u32 {
        1 << self.borrowed_bits
    }

    /// True when a subnet has no room for hosts.
    pub fn is_degenerate(&self) -> bool {
        self.usable_hosts <= 0
    }

    /// Every subnet of the base network, in address order.
    pub fn subnets(&self) -> Vec<SubnetRange> {
        let count = self.subnet_count() as usize;
        let mut ranges = Vec::with_capacity(count);
        let mut current = Some(Ipv4 {
            addr: self.base_network.lo(),
            mask: self.new_prefix_length,
        });

        for index in 0..count {
            let Some(network) = current else {
                break;
            };
            ranges.push(SubnetRange::new(index + 1, network));
            current = next_subnet_ipv4(network);
        }
        ranges
    }
}

/// One row of the subnet table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetRange {
    /// 1-based position in the table.
    pub index: usize,
    pub network: Ipv4,
    pub first_host: Option<Ipv4Addr>,
    pub last_host: Option<Ipv4Addr>,
    pub broadcast: Ipv4Addr,
}

impl SubnetRange {
    fn new(index: usize, network: Ipv4) -> Self {
        let lo = network.lo();
        let hi = network.hi();
        // /31 and /32 leave nothing between network and broadcast.
        let (first_host, last_host) = if network.size() > 2 {
            (
                Some(Ipv4Addr::from(u32::from(lo) + 1)),
                Some(Ipv4Addr::from(u32::from(hi) - 1)),
            )
        } else {
            (None, None)
        };

        SubnetRange {
            index,
            network: network.network(),
            first_host,
            last_host,
            broadcast: hi,
        }
    }
}
