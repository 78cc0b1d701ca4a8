//! Output formatting for calculator results.
//!
//! This module handles formatting results for display:
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::{classification_json, error_json, plan_json, PlanReport};
pub use terminal::{format_field, render_classification, render_plan, render_subnet_table};
