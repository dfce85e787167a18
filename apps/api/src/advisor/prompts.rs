//! Prompt catalog for the AI advisor endpoints.
//!
//! Every advisor template embeds a literal JSON example schema and instructs
//! the model to return ONLY valid JSON. The matching fallback objects in
//! [`AdvisorType::fallback`] are what the frontend receives when the model
//! ignores that instruction and parsing fails — their shapes are part of the
//! response contract.

use serde_json::{json, Value};

use crate::models::project::{field_or, ProjectProfile};

/// The five advisor report kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorType {
    SmartGuidance,
    CompetitorAnalysis,
    InvestorMatching,
    FinancialModel,
    MarketingStrategy,
}

impl AdvisorType {
    /// Parses the wire selector. `None` for anything outside the fixed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "smart_guidance" => Some(Self::SmartGuidance),
            "competitor_analysis" => Some(Self::CompetitorAnalysis),
            "investor_matching" => Some(Self::InvestorMatching),
            "financial_model" => Some(Self::FinancialModel),
            "marketing_strategy" => Some(Self::MarketingStrategy),
            _ => None,
        }
    }

    /// Fixed fallback object substituted when the model's output cannot be
    /// parsed as JSON.
    pub fn fallback(&self) -> Value {
        match self {
            Self::SmartGuidance => json!({
                "recommended_ask": {
                    "amount": "Please try again",
                    "reasoning": "Unable to generate"
                }
            }),
            Self::CompetitorAnalysis => json!({
                "direct_competitors": [],
                "indirect_competitors": []
            }),
            Self::InvestorMatching => json!({
                "tier1_investors": [],
                "tier2_investors": [],
                "accelerators": []
            }),
            Self::FinancialModel => json!({
                "funding_summary": { "recommended_raise": "TBD" }
            }),
            Self::MarketingStrategy => json!({
                "target_segments": [],
                "acquisition_channels": []
            }),
        }
    }
}

const SMART_GUIDANCE_PROMPT: &str = r#"Based on stage and market, suggest fundraising guidance for this startup:

Startup: {startup_name}
Category: {category}
Stage: {stage}
One-liner: {one_liner}
Problem: {problem_statement}
Solution: {solution_description}
Current Ask: {ask_amount}
Business Model: {business_model}
Traction: Users: {traction_users}, Revenue: {traction_revenue}

Suggest:
- reasonable funding ask range
- equity dilution range
- valuation logic
- runway estimate

Return ONLY valid JSON in this format:
{
  "recommended_ask": {
    "amount": "specific dollar range",
    "reasoning": "why this range makes sense"
  },
  "equity_guidance": {
    "range": "percentage range to give up",
    "reasoning": "based on stage and traction"
  },
  "use_of_funds_breakdown": [
    {"category": "Engineering", "percentage": 40, "reasoning": "build core product"},
    {"category": "Sales & Marketing", "percentage": 30, "reasoning": "customer acquisition"},
    {"category": "Operations", "percentage": 20, "reasoning": "infrastructure"},
    {"category": "Buffer", "percentage": 10, "reasoning": "contingency"}
  ],
  "valuation_estimate": {
    "range": "valuation range",
    "method": "how calculated"
  },
  "runway_recommendation": {
    "months": 18,
    "reasoning": "why this timeline"
  }
}"#;

const COMPETITOR_ANALYSIS_PROMPT: &str = r#"List direct and indirect competitors and explain differentiation for this startup:

Startup: {startup_name}
Category: {category}
One-liner: {one_liner}
Problem: {problem_statement}
Solution: {solution_description}
Target Users: {target_users}
Differentiation: {differentiation}

Return a comparison table as valid JSON:
{
  "direct_competitors": [
    {
      "name": "Competitor Name",
      "description": "What they do",
      "funding": "Funding stage/amount if known",
      "strengths": ["strength 1", "strength 2"],
      "weaknesses": ["weakness 1", "weakness 2"],
      "your_advantage": "How you differentiate"
    }
  ],
  "indirect_competitors": [
    {
      "name": "Indirect Competitor",
      "description": "How they compete indirectly",
      "threat_level": "low/medium/high"
    }
  ],
  "market_positioning": {
    "your_niche": "Where you fit",
    "blue_ocean_opportunities": ["opportunity 1", "opportunity 2"],
    "key_differentiators": ["differentiator 1", "differentiator 2"]
  },
  "competitive_moat": {
    "current_moat": "What protects you now",
    "moat_to_build": "What to develop"
  }
}"#;

const INVESTOR_MATCHING_PROMPT: &str = r#"Suggest relevant investor types, sample firms, and accelerators based on this startup profile:

Startup: {startup_name}
Category: {category}
Stage: {stage}
Ask Amount: {ask_amount}
One-liner: {one_liner}
Business Model: {business_model}
Traction: Users: {traction_users}, Revenue: {traction_revenue}

Explain why each is a fit. Return ONLY valid JSON:
{
  "tier1_investors": [
    {
      "name": "VC/Angel Name",
      "firm": "Firm name if applicable",
      "type": "VC/Angel/Accelerator",
      "check_size": "$X - $Y",
      "thesis_match": "Why they'd be interested",
      "portfolio_examples": ["Similar company 1", "Similar company 2"],
      "approach_tip": "How to reach out"
    }
  ],
  "tier2_investors": [
    {
      "name": "Investor Name",
      "firm": "Firm",
      "type": "VC/Angel",
      "check_size": "$X - $Y",
      "thesis_match": "Why relevant"
    }
  ],
  "accelerators": [
    {
      "name": "Accelerator Name",
      "investment": "Terms if known",
      "why_apply": "Why good fit",
      "deadline_hint": "Application timing"
    }
  ],
  "outreach_strategy": {
    "warm_intro_sources": ["Source 1", "Source 2"],
    "cold_outreach_tips": ["Tip 1", "Tip 2"],
    "timing_advice": "When to reach out"
  }
}"#;

const FINANCIAL_MODEL_PROMPT: &str = r#"Create financial projections for this startup:

Startup: {startup_name}
Category: {category}
Stage: {stage}
Ask Amount: {ask_amount}
Business Model: {business_model}
Current Traction: Users: {traction_users}, Revenue: {traction_revenue}, Growth: {traction_growth}

If information is missing, say so explicitly. Return ONLY valid JSON:
{
  "funding_summary": {
    "recommended_raise": "$X",
    "pre_money_valuation": "$X - $Y range",
    "dilution": "X% - Y%",
    "runway_months": 18
  },
  "monthly_burn_projection": {
    "current": "$X",
    "month_6": "$X",
    "month_12": "$X",
    "month_18": "$X"
  },
  "revenue_projections": {
    "year_1": { "revenue": "$X", "users": "X", "assumptions": "key assumption" },
    "year_2": { "revenue": "$X", "users": "X", "assumptions": "key assumption" },
    "year_3": { "revenue": "$X", "users": "X", "assumptions": "key assumption" }
  },
  "unit_economics": {
    "cac_estimate": "$X",
    "ltv_estimate": "$X",
    "ltv_cac_ratio": "X:1",
    "payback_period": "X months"
  },
  "use_of_funds": [
    { "category": "Product/Engineering", "amount": "$X", "percentage": 40 },
    { "category": "Sales/Marketing", "amount": "$X", "percentage": 30 },
    { "category": "Operations", "amount": "$X", "percentage": 20 },
    { "category": "Buffer", "amount": "$X", "percentage": 10 }
  ],
  "key_milestones": [
    { "month": 6, "milestone": "Milestone description", "metric": "Target metric" },
    { "month": 12, "milestone": "Milestone description", "metric": "Target metric" },
    { "month": 18, "milestone": "Milestone description", "metric": "Target metric" }
  ],
  "risk_factors": ["Risk 1", "Risk 2", "Risk 3"]
}"#;

const MARKETING_STRATEGY_PROMPT: &str = r#"Create a marketing strategy for this startup:

Startup: {startup_name}
Category: {category}
Target Users: {target_users}
One-liner: {one_liner}
Solution: {solution_description}
Go-to-Market Notes: {go_to_market}
Business Model: {business_model}

Return ONLY valid JSON:
{
  "target_segments": [
    {
      "segment": "Segment name",
      "description": "Who they are",
      "pain_points": ["pain 1", "pain 2"],
      "channels": ["channel 1", "channel 2"],
      "messaging": "Key message for this segment"
    }
  ],
  "acquisition_channels": [
    {
      "channel": "Channel name",
      "priority": "high/medium/low",
      "estimated_cac": "$X - $Y",
      "tactics": ["tactic 1", "tactic 2"],
      "timeline": "When to start"
    }
  ],
  "content_strategy": {
    "themes": ["theme 1", "theme 2"],
    "formats": ["format 1", "format 2"],
    "distribution": ["platform 1", "platform 2"]
  },
  "launch_playbook": {
    "pre_launch": ["action 1", "action 2"],
    "launch_week": ["action 1", "action 2"],
    "post_launch": ["action 1", "action 2"]
  },
  "metrics_to_track": ["metric 1", "metric 2", "metric 3"],
  "budget_allocation": {
    "paid": 30,
    "organic": 40,
    "partnerships": 20,
    "events": 10
  }
}"#;

/// Renders the user prompt for `advisor` from the project profile.
pub fn render(advisor: AdvisorType, project: &ProjectProfile) -> String {
    match advisor {
        AdvisorType::SmartGuidance => SMART_GUIDANCE_PROMPT
            .replace("{startup_name}", field_or(&project.startup_name, ""))
            .replace("{category}", field_or(&project.category, ""))
            .replace("{stage}", field_or(&project.stage, ""))
            .replace("{one_liner}", field_or(&project.one_liner, ""))
            .replace(
                "{problem_statement}",
                field_or(&project.problem_statement, ""),
            )
            .replace(
                "{solution_description}",
                field_or(&project.solution_description, ""),
            )
            .replace(
                "{ask_amount}",
                field_or(&project.ask_amount, "Not specified"),
            )
            .replace("{business_model}", field_or(&project.business_model, ""))
            .replace("{traction_users}", field_or(&project.traction_users, "N/A"))
            .replace(
                "{traction_revenue}",
                field_or(&project.traction_revenue, "N/A"),
            ),

        AdvisorType::CompetitorAnalysis => COMPETITOR_ANALYSIS_PROMPT
            .replace("{startup_name}", field_or(&project.startup_name, ""))
            .replace("{category}", field_or(&project.category, ""))
            .replace("{one_liner}", field_or(&project.one_liner, ""))
            .replace(
                "{problem_statement}",
                field_or(&project.problem_statement, ""),
            )
            .replace(
                "{solution_description}",
                field_or(&project.solution_description, ""),
            )
            .replace("{target_users}", field_or(&project.target_users, ""))
            .replace(
                "{differentiation}",
                field_or(&project.differentiation, "Not specified"),
            ),

        AdvisorType::InvestorMatching => INVESTOR_MATCHING_PROMPT
            .replace("{startup_name}", field_or(&project.startup_name, ""))
            .replace("{category}", field_or(&project.category, ""))
            .replace("{stage}", field_or(&project.stage, ""))
            .replace("{ask_amount}", field_or(&project.ask_amount, ""))
            .replace("{one_liner}", field_or(&project.one_liner, ""))
            .replace("{business_model}", field_or(&project.business_model, ""))
            .replace(
                "{traction_users}",
                field_or(&project.traction_users, "Early"),
            )
            .replace(
                "{traction_revenue}",
                field_or(&project.traction_revenue, "Pre-revenue"),
            ),

        AdvisorType::FinancialModel => FINANCIAL_MODEL_PROMPT
            .replace("{startup_name}", field_or(&project.startup_name, ""))
            .replace("{category}", field_or(&project.category, ""))
            .replace("{stage}", field_or(&project.stage, ""))
            .replace("{ask_amount}", field_or(&project.ask_amount, ""))
            .replace("{business_model}", field_or(&project.business_model, ""))
            .replace("{traction_users}", field_or(&project.traction_users, "0"))
            .replace(
                "{traction_revenue}",
                field_or(&project.traction_revenue, "$0"),
            )
            .replace(
                "{traction_growth}",
                field_or(&project.traction_growth, "N/A"),
            ),

        AdvisorType::MarketingStrategy => MARKETING_STRATEGY_PROMPT
            .replace("{startup_name}", field_or(&project.startup_name, ""))
            .replace("{category}", field_or(&project.category, ""))
            .replace("{target_users}", field_or(&project.target_users, ""))
            .replace("{one_liner}", field_or(&project.one_liner, ""))
            .replace(
                "{solution_description}",
                field_or(&project.solution_description, ""),
            )
            .replace(
                "{go_to_market}",
                field_or(&project.go_to_market, "Not specified"),
            )
            .replace("{business_model}", field_or(&project.business_model, "")),
    }
}
