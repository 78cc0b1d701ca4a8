//! IPv4 classification and /24 subnet planning for the UniGuru CNDC lectures.
//!
//! The two calculators are pure functions:
//! - [`classify`] - class, default mask, range and public/private type of an address
//! - [`plan`] - borrowed bits, mask, block size and usable hosts for N subnets of a /24
//!
//! Everything else (config, CLI, output, logging) serves the `uniguru-netcalc` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{AddressFault, ClassificationError, PlanningError};
pub use processing::{classify, parse_subnet_count, plan};
