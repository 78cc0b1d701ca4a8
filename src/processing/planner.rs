//! Fixed-length subnetting of a /24 network.

use crate::error::PlanningError;
use crate::models::{mask_addr, parse_dotted_quad, Ipv4, SubnetPlan, BASE_PREFIX, MAX_SUBNETS};

/// Plan `required_subnets` equal subnets inside the /24 holding `base_network`.
///
/// Host bits in the base address are cleared, so `"192.168.1.77"` plans for
/// `192.168.1.0/24`. A plan whose subnets have no usable hosts is still
/// returned; check [`SubnetPlan::is_degenerate`].
///
/// # Examples
/// ```
/// use uniguru_netcalc::plan;
/// let plan = plan("192.168.1.0", 4).unwrap();
/// assert_eq!(plan.borrowed_bits, 2);
/// assert_eq!(plan.subnet_mask.to_string(), "255.255.255.192");
/// assert_eq!(plan.usable_hosts, 62);
/// ```
pub fn plan(base_network: &str, required_subnets: i64) -> Result<SubnetPlan, PlanningError> {
    if required_subnets < 1 {
        return Err(PlanningError::InvalidSubnetCount {
            input: required_subnets.to_string(),
        });
    }
    if required_subnets > MAX_SUBNETS as i64 {
        return Err(PlanningError::TooManySubnets {
            requested: required_subnets,
            max: MAX_SUBNETS,
        });
    }
    // Bounded to 1..=256 above.
    let required = required_subnets as u32;

    let addr = parse_dotted_quad(base_network).map_err(|fault| {
        PlanningError::MalformedAddress {
            input: base_network.to_string(),
            fault,
        }
    })?;
    let base = Ipv4 {
        addr,
        mask: BASE_PREFIX,
    }
    .network();
    if base.addr != addr {
        log::info!("Base address {addr} normalised to network {base}");
    }

    // ceil(log2(n)), exact for n >= 1.
    let borrowed_bits = required.next_power_of_two().trailing_zeros() as u8;
    let new_prefix_length = BASE_PREFIX + borrowed_bits;
    let block_size = 1u32 << (8 - borrowed_bits);
    let subnet_mask = mask_addr(new_prefix_length);
    let usable_hosts = block_size as i64 - 2;

    let derivation_steps = vec![
        format!(
            "Need {required} subnet(s): 2^{borrowed_bits} = {} >= {required}, so borrow {borrowed_bits} bit(s) from the host part",
            1u32 << borrowed_bits
        ),
        format!(
            "New prefix: /{BASE_PREFIX} + {borrowed_bits} = /{new_prefix_length}, subnet mask {subnet_mask}"
        ),
        format!(
            "Block size: 2^(8 - {borrowed_bits}) = {block_size}, last octet of the mask is 256 - {block_size} = {}",
            256 - block_size
        ),
        format!("Usable hosts per subnet: {block_size} - 2 = {usable_hosts}"),
    ];

    let plan = SubnetPlan {
        base_network: base,
        required_subnets: required,
        borrowed_bits,
        new_prefix_length,
        subnet_mask,
        block_size,
        usable_hosts,
        derivation_steps,
    };

    if plan.is_degenerate() {
        log::warn!(
            "Plan for {required} subnets of {base} leaves {usable_hosts} usable hosts per /{new_prefix_length}"
        );
    }
    log::debug!(
        "plan({base_network}, {required_subnets}) -> /{new_prefix_length} block {block_size}"
    );
    Ok(plan)
}

/// Read a subnet count typed into a form field or passed on the command line.
pub fn parse_subnet_count(raw: &str) -> Result<i64, PlanningError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| PlanningError::InvalidSubnetCount {
            input: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_borrowed_bits() {
        let expected: [(i64, u8); 10] = [
            (1, 0),
            (2, 1),
            (3, 2),
            (4, 2),
            (5, 3),
            (8, 3),
            (9, 4),
            (128, 7),
            (129, 8),
            (256, 8),
        ];
        for (n, bits) in expected {
            assert_eq!(
                plan("10.0.0.0", n).unwrap().borrowed_bits,
                bits,
                "wrong bits for {n} subnets"
            );
        }
    }

    #[test]
    fn test_worked_example() {
        let plan = plan("192.168.1.0", 4).unwrap();
        assert_eq!(plan.required_subnets, 4);
        assert_eq!(plan.borrowed_bits, 2);
        assert_eq!(plan.new_prefix_length, 26);
        assert_eq!(plan.cidr(), "/26");
        assert_eq!(plan.subnet_mask, Ipv4Addr::new(255, 255, 255, 192));
        assert_eq!(plan.block_size, 64);
        assert_eq!(plan.usable_hosts, 62);
        assert!(!plan.is_degenerate());
        assert_eq!(plan.base_network.to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_derivation_steps_mention_numbers() {
        let plan = plan("192.168.1.0", 5).unwrap();
        assert_eq!(plan.derivation_steps.len(), 4);
        assert!(plan.derivation_steps[0].contains("Need 5 subnet(s)"));
        assert!(plan.derivation_steps[0].contains("borrow 3 bit(s)"));
        assert!(plan.derivation_steps[1].contains("/27"));
        assert!(plan.derivation_steps[1].contains("255.255.255.224"));
        assert!(plan.derivation_steps[2].contains("= 32"));
        assert_eq!(
            plan.derivation_steps[3],
            "Usable hosts per subnet: 32 - 2 = 30"
        );
    }

    #[test]
    fn test_single_subnet() {
        let plan = plan("10.0.0.0", 1).unwrap();
        assert_eq!(plan.borrowed_bits, 0);
        assert_eq!(plan.new_prefix_length, 24);
        assert_eq!(plan.subnet_mask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(plan.block_size, 256);
        assert_eq!(plan.usable_hosts, 254);
    }

    #[test]
    fn test_degenerate_plans() {
        let plan128 = plan("10.0.0.0", 128).unwrap();
        assert_eq!(plan128.new_prefix_length, 31);
        assert_eq!(plan128.usable_hosts, 0);
        assert!(plan128.is_degenerate());

        let plan256 = plan("10.0.0.0", 256).unwrap();
        assert_eq!(plan256.new_prefix_length, 32);
        assert_eq!(plan256.block_size, 1);
        assert_eq!(plan256.subnet_mask, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(plan256.usable_hosts, -1);
    }

    #[test]
    fn test_base_is_normalised() {
        let plan = plan("192.168.1.77", 2).unwrap();
        assert_eq!(plan.base_network.to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_invalid_counts() {
        assert_eq!(
            plan("192.168.1.0", 0),
            Err(PlanningError::InvalidSubnetCount {
                input: "0".to_string()
            })
        );
        assert_eq!(
            plan("192.168.1.0", -3),
            Err(PlanningError::InvalidSubnetCount {
                input: "-3".to_string()
            })
        );
        assert_eq!(
            plan("192.168.1.0", 257),
            Err(PlanningError::TooManySubnets {
                requested: 257,
                max: 256
            })
        );
    }

    #[test]
    fn test_count_checked_before_address() {
        assert!(matches!(
            plan("not-an-ip", 0),
            Err(PlanningError::InvalidSubnetCount { .. })
        ));
    }

    #[test]
    fn test_malformed_base() {
        assert!(matches!(
            plan("192.168.1", 4),
            Err(PlanningError::MalformedAddress { .. })
        ));
        assert!(matches!(
            plan("192.168.1.300", 4),
            Err(PlanningError::MalformedAddress { .. })
        ));
    }

    #[test]
    fn test_parse_subnet_count() {
        assert_eq!(parse_subnet_count("4"), Ok(4));
        assert_eq!(parse_subnet_count(" 12 "), Ok(12));
        assert_eq!(parse_subnet_count("-3"), Ok(-3));
        assert_eq!(
            parse_subnet_count("3.5"),
            Err(PlanningError::InvalidSubnetCount {
                input: "3.5".to_string()
            })
        );
        assert!(parse_subnet_count("abc").is_err());
        assert!(parse_subnet_count("").is_err());
    }
}
