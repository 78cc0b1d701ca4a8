//! Calculator logic.
//!
//! This module contains the two calculators behind the course's interactive panels:
//! - [`classifier`] - Classful classification of a single address
//! - [`planner`] - Fixed-length subnetting of a /24

mod classifier;
mod planner;

// Re-export public functions
pub use classifier::classify;
pub use planner::{parse_subnet_count, plan};
