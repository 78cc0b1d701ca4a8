//! Domain models for the address calculators.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`ClassificationResult`] - Outcome of classifying one address
//! - [`SubnetPlan`] and [`SubnetRange`] - Outcome of splitting a /24

mod classification;
mod ipv4;
mod plan;

// Re-export public types
pub use classification::{AddressClass, AddressType, ClassificationResult};
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, ip_after_subnet, mask_addr, next_subnet_ipv4,
    parse_dotted_quad, Ipv4, MAX_LENGTH,
};
pub use plan::{SubnetPlan, SubnetRange, BASE_PREFIX, MAX_SUBNETS};
