//! IPv4 address and CIDR notation utilities.
//!
//! Provides strict dotted-decimal parsing, the [`Ipv4`] struct for an address
//! with a prefix length, and the mask/broadcast arithmetic the calculators
//! are built on.

use crate::error::AddressFault;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse a dotted-decimal string into an [`Ipv4Addr`], validating every octet.
///
/// Surrounding whitespace is ignored. Each of the four tokens must be plain
/// ASCII digits with a value of at most 255; leading zeros are read as
/// decimal (`"010"` is 10).
///
/// # Examples
/// ```
/// use uniguru_netcalc::models::parse_dotted_quad;
/// use std::net::Ipv4Addr;
/// assert_eq!(parse_dotted_quad("192.168.1.1").unwrap(), Ipv4Addr::new(192, 168, 1, 1));
/// assert!(parse_dotted_quad("10.999.-5.abc").is_err());
/// ```
pub fn parse_dotted_quad(input: &str) -> Result<Ipv4Addr, AddressFault> {
    let tokens: Vec<&str> = input.trim().split('.').collect();
    if tokens.len() != 4 {
        return Err(AddressFault::WrongOctetCount(tokens.len()));
    }

    let mut octets = [0u8; 4];
    for (i, token) in tokens.iter().enumerate() {
        octets[i] = parse_octet(i + 1, token)?;
    }
    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(position: usize, token: &str) -> Result<u8, AddressFault> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressFault::NotAnInteger {
            position,
            token: token.to_string(),
        });
    }
    // Digits only, so the only parse failure left is overflow.
    token
        .parse::<u8>()
        .map_err(|_| AddressFault::OutOfRange {
            position,
            token: token.to_string(),
        })
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths above [`MAX_LENGTH`] are treated as 32.
///
/// # Examples
/// ```
/// use uniguru_netcalc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Dotted-decimal form of a prefix length, e.g. 26 -> 255.255.255.192.
pub fn mask_addr(len: u8) -> Ipv4Addr {
    Ipv4Addr::from(get_cidr_mask(len))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & get_cidr_mask(len))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    let mask = get_cidr_mask(len);
    let network_bits = u32::from(addr) & mask;
    Ipv4Addr::from(network_bits | !mask)
}

/// Returns the IP address following the given subnet, or `None` past 255.255.255.255.
pub fn ip_after_subnet(addr: Ipv4Addr, len: u8) -> Option<Ipv4Addr> {
    let len = len.min(MAX_LENGTH);
    let subnet_size = 1u64 << (MAX_LENGTH - len);
    let network_bits = (u32::from(addr) & get_cidr_mask(len)) as u64;
    let next = network_bits + subnet_size;
    u32::try_from(next).ok().map(Ipv4Addr::from)
}

/// The next subnet of the same size after `ipv4`.
pub fn next_subnet_ipv4(ipv4: Ipv4) -> Option<Ipv4> {
    ip_after_subnet(ipv4.addr, ipv4.mask).map(|addr| Ipv4 {
        addr,
        mask: ipv4.mask,
    })
}

/// IPv4 address with CIDR notation support.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// The same prefix with host bits cleared.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
    }

    /// Number of addresses covered by the prefix.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask.min(MAX_LENGTH))
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
