//! Typed startup profile shared by every prompt template.

use serde::Deserialize;

/// Startup profile submitted by the frontend with every generation request.
///
/// Founders fill these fields in incrementally, so every one is optional.
/// Templates resolve absent fields through [`field_or`], each with its own
/// documented default ("Early stage", "Pre-revenue", "N/A", ...), because the
/// default wording is part of the rendered prompt and affects model output.
///
/// The profile is read-only for the duration of a request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectProfile {
    pub startup_name: Option<String>,
    pub one_liner: Option<String>,
    pub problem_statement: Option<String>,
    pub solution_description: Option<String>,
    pub target_users: Option<String>,
    pub why_now: Option<String>,
    pub differentiation: Option<String>,
    pub traction_users: Option<String>,
    pub traction_revenue: Option<String>,
    pub traction_growth: Option<String>,
    pub business_model: Option<String>,
    pub ask_amount: Option<String>,
    pub use_of_funds: Option<String>,
    pub category: Option<String>,
    pub stage: Option<String>,
    pub go_to_market: Option<String>,
}

/// Resolves an optional profile field against a per-template default.
///
/// A field that is present but empty stays empty; only absent fields take
/// the default.
pub fn field_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}
