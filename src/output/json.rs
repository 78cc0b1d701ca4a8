//! JSON output for calculator results.

use crate::models::{ClassificationResult, SubnetPlan, SubnetRange};
use serde::Serialize;

/// A plan plus the values derived from it, as sent to JSON consumers.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    #[serde(flatten)]
    pub plan: &'a SubnetPlan,
    pub cidr: String,
    pub subnet_count: u32,
    pub degenerate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<SubnetRange>>,
}

impl<'a> PlanReport<'a> {
    pub fn new(plan: &'a SubnetPlan, with_table: bool) -> Self {
        PlanReport {
            plan,
            cidr: plan.cidr(),
            subnet_count: plan.subnet_count(),
            degenerate: plan.is_degenerate(),
            subnets: with_table.then(|| plan.subnets()),
        }
    }
}

pub fn classification_json(result: &ClassificationResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

pub fn plan_json(plan: &SubnetPlan, with_table: bool) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&PlanReport::new(plan, with_table))
}

/// Error object `{"error": "..."}` for JSON mode.
pub fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
