//! Terminal output utilities.
//!
//! Renders calculator results as aligned, coloured text panels.

use crate::models::{AddressType, ClassificationResult, SubnetPlan, SubnetRange};
use colored::Colorize;
use itertools::Itertools;
use std::net::Ipv4Addr;

const LABEL_WIDTH: usize = 16;

/// Format a value as a right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A right-aligned string, never truncated
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:>width$}")
    }
}

fn line(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<LABEL_WIDTH$}{value}", format!("{label}:").bright_black())
}

/// Result panel for one classified address.
pub fn render_classification(result: &ClassificationResult) -> String {
    let address_type = match result.address_type {
        AddressType::Private => result.address_type.to_string().green(),
        AddressType::Public => result.address_type.to_string().yellow(),
    };
    let mut lines = vec![
        line("IP address", result.address.to_string().blue().bold()),
        line(
            "Class",
            format!(
                "{} ({})",
                result.address_class.to_string().magenta().bold(),
                result.address_class.description()
            ),
        ),
        line("Default mask", result.default_mask_text().blue()),
    ];
    if let Some(range) = result.range {
        lines.push(line("Range", range));
    }
    lines.push(line("Type", address_type));
    lines.join("\n")
}

/// Result panel for a subnet plan, including the numbered derivation.
pub fn render_plan(plan: &SubnetPlan) -> String {
    let mut lines = vec![
        line("Base network", plan.base_network.to_string().blue().bold()),
        line("Subnets needed", plan.required_subnets),
        line("Subnets made", plan.subnet_count()),
        line("Borrowed bits", plan.borrowed_bits),
        line("New prefix", plan.cidr().magenta().bold()),
        line("Subnet mask", plan.subnet_mask.to_string().blue()),
        line("Block size", plan.block_size),
        line("Usable hosts", plan.usable_hosts),
        "Steps:".bright_black().to_string(),
    ];
    lines.extend(
        plan.derivation_steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("  {}. {step}", i + 1)),
    );
    if plan.is_degenerate() {
        lines.push(format!(
            "{} /{} leaves no usable hosts in each subnet",
            "WARNING".on_red(),
            plan.new_prefix_length
        ));
    }
    lines.join("\n")
}

/// Table of every subnet in a plan.
pub fn render_subnet_table(ranges: &[SubnetRange]) -> String {
    let header = format!(
        "{} {} {} {} {}",
        format_field("#", 4),
        format_field("network", 19),
        format_field("first host", 16),
        format_field("last host", 16),
        format_field("broadcast", 16),
    );
    let rows = ranges.iter().map(|r| {
        format!(
            "{} {} {} {} {}",
            format_field(r.index, 4),
            format_field(r.network, 19),
            format_field(host_or_dash(r.first_host), 16),
            format_field(host_or_dash(r.last_host), 16),
            format_field(r.broadcast, 16),
        )
    });
    std::iter::once(header.bright_black().to_string())
        .chain(rows)
        .join("\n")
}

fn host_or_dash(host: Option<Ipv4Addr>) -> String {
    host.map(|h| h.to_string()).unwrap_or_else(|| "-".to_string())
}
