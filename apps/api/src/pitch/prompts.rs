//! Prompt catalog for pitch assets.
//!
//! Templates are `const` strings with `{placeholder}` slots filled by
//! `render`. Per-template defaults ("Early stage", "Pre-revenue", "N/A", ...)
//! are deliberate and differ between templates — they are part of the prompt
//! text the model sees, so keep them stable.

use crate::models::project::{field_or, ProjectProfile};

/// The six pitch assets the catalog can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    Tagline,
    ThirtySec,
    TwoMin,
    DeckOutline,
    ColdEmail,
    LinkedinIntro,
}

impl AssetType {
    /// Parses the wire selector. `None` for anything outside the fixed set —
    /// the handler turns that into a 400 before any upstream call.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "tagline" => Some(Self::Tagline),
            "30sec" => Some(Self::ThirtySec),
            "2min" => Some(Self::TwoMin),
            "deck_outline" => Some(Self::DeckOutline),
            "cold_email" => Some(Self::ColdEmail),
            "linkedin_intro" => Some(Self::LinkedinIntro),
            _ => None,
        }
    }
}

const TAGLINE_PROMPT: &str = r#"Rewrite the following startup description into a crisp, investor-ready one-liner (under 15 words):

Startup: {startup_name}
One-liner: {one_liner}
Problem: {problem_statement}
Solution: {solution_description}
Category: {category}

Return ONLY the tagline, nothing else."#;

const THIRTY_SEC_PROMPT: &str = r#"Generate a 30-second spoken pitch suitable for a first investor meeting (about 80-100 words):

Startup: {startup_name}
One-liner: {one_liner}
Problem: {problem_statement}
Solution: {solution_description}
Target Users: {target_users}
Traction: {traction_users} users, {traction_revenue}
Ask: {ask_amount}

The pitch should hook attention, state the problem, present the solution, mention traction, and end with the ask. Return ONLY the pitch text."#;

const TWO_MIN_PROMPT: &str = r#"Generate a structured 2-minute pitch with problem, solution, market, traction, and ask (about 300-350 words):

Startup: {startup_name}
One-liner: {one_liner}
Problem: {problem_statement}
Solution: {solution_description}
Target Users: {target_users}
Why Now: {why_now}
Differentiation: {differentiation}
Traction: Users: {traction_users}, Revenue: {traction_revenue}, Growth: {traction_growth}
Business Model: {business_model}
Ask: {ask_amount}
Use of Funds: {use_of_funds}

Structure: Opening hook, problem deep-dive, solution explanation, market opportunity, traction proof, business model, team credibility (brief), and clear ask. Return ONLY the pitch text."#;

const DECK_OUTLINE_PROMPT: &str = r#"Generate a 6-slide pitch deck outline. Return JSON:
[
  { "slide": 1, "title": "string", "bullets": ["string"] }
]

Startup: {startup_name}
One-liner: {one_liner}
Problem: {problem_statement}
Solution: {solution_description}
Target Users: {target_users}
Traction: {traction_users} users, {traction_revenue} revenue
Business Model: {business_model}
Ask: {ask_amount}
Use of Funds: {use_of_funds}

Cover: Title/Hook, Problem, Solution, Traction/Market, Business Model, Ask. Return ONLY valid JSON."#;

const COLD_EMAIL_PROMPT: &str = r#"Write a concise investor cold email (≤120 words). No hype. Professional tone.

Startup: {startup_name}
One-liner: {one_liner}
Problem: {problem_statement}
Solution: {solution_description}
Traction: {traction_users} users, {traction_revenue}
Ask: {ask_amount}
Category: {category}
Stage: {stage}

Include subject line. Format as:

Subject: [subject]

[email body]"#;

const LINKEDIN_INTRO_PROMPT: &str = r#"Write a short, polite LinkedIn intro request. Non-salesy. Keep under 280 characters (LinkedIn limit).

Startup: {startup_name}
One-liner: {one_liner}
Category: {category}
Traction: {traction_users}
Ask: {ask_amount}

Be personal, mention why you're reaching out, and hint at your traction."#;

/// Renders the user prompt for `asset` from the project profile.
pub fn render(asset: AssetType, project: &ProjectProfile) -> String {
    match asset {
        AssetType::Tagline => TAGLINE_PROMPT
            .replace("{startup_name}", field_or(&project.startup_name, ""))
            .replace("{one_liner}", field_or(&project.one_liner, ""))
            .replace(
                "{problem_statement}",
                field_or(&project.problem_statement, ""),
            )
            .replace(
                "{solution_description}",
                field_or(&project.solution_description, ""),
            )
            .replace("{category}", field_or(&project.category, "")),

        AssetType::ThirtySec => THIRTY_SEC_PROMPT
            .replace("{startup_name}", field_or(&project.startup_name, ""))
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
                "{traction_users}",
                field_or(&project.traction_users, "Early stage"),
            )
            .replace(
                "{traction_revenue}",
                field_or(&project.traction_revenue, "Pre-revenue"),
            )
            .replace("{ask_amount}", field_or(&project.ask_amount, "")),

        AssetType::TwoMin => TWO_MIN_PROMPT
            .replace("{startup_name}", field_or(&project.startup_name, ""))
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
                "{why_now}",
                field_or(&project.why_now, "Market timing is right"),
            )
            .replace(
                "{differentiation}",
                field_or(&project.differentiation, "Unique approach"),
            )
            .replace(
                "{traction_users}",
                field_or(&project.traction_users, "Early stage"),
            )
            .replace(
                "{traction_revenue}",
                field_or(&project.traction_revenue, "Pre-revenue"),
            )
            .replace(
                "{traction_growth}",
                field_or(&project.traction_growth, "Growing"),
            )
            .replace("{business_model}", field_or(&project.business_model, ""))
            .replace("{ask_amount}", field_or(&project.ask_amount, ""))
            .replace("{use_of_funds}", field_or(&project.use_of_funds, "")),

        AssetType::DeckOutline => DECK_OUTLINE_PROMPT
            .replace("{startup_name}", field_or(&project.startup_name, ""))
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
            .replace("{traction_users}", field_or(&project.traction_users, "N/A"))
            .replace(
                "{traction_revenue}",
                field_or(&project.traction_revenue, "N/A"),
            )
            .replace("{business_model}", field_or(&project.business_model, ""))
            .replace("{ask_amount}", field_or(&project.ask_amount, ""))
            .replace("{use_of_funds}", field_or(&project.use_of_funds, "")),

        AssetType::ColdEmail => COLD_EMAIL_PROMPT
            .replace("{startup_name}", field_or(&project.startup_name, ""))
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
                "{traction_users}",
                field_or(&project.traction_users, "Early"),
            )
            .replace(
                "{traction_revenue}",
                field_or(&project.traction_revenue, "Pre-revenue"),
            )
            .replace("{ask_amount}", field_or(&project.ask_amount, ""))
            .replace("{category}", field_or(&project.category, ""))
            .replace("{stage}", field_or(&project.stage, "")),

        AssetType::LinkedinIntro => LINKEDIN_INTRO_PROMPT
            .replace("{startup_name}", field_or(&project.startup_name, ""))
            .replace("{one_liner}", field_or(&project.one_liner, ""))
            .replace("{category}", field_or(&project.category, ""))
            .replace(
                "{traction_users}",
                field_or(&project.traction_users, "Early stage"),
            )
            .replace("{ask_amount}", field_or(&project.ask_amount, "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ASSETS: [AssetType; 6] = [
        AssetType::Tagline,
        AssetType::ThirtySec,
        AssetType::TwoMin,
        AssetType::DeckOutline,
        AssetType::ColdEmail,
        AssetType::LinkedinIntro,
    ];

    fn sample_profile() -> ProjectProfile {
        ProjectProfile {
            startup_name: Some("Nemofund".to_string()),
            one_liner: Some("Fundraising copilot for founders".to_string()),
            problem_statement: Some("Raising a seed round takes months".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_accepts_all_known_selectors() {
        for selector in [
            "tagline",
            "30sec",
            "2min",
            "deck_outline",
            "cold_email",
            "linkedin_intro",
        ] {
            assert!(AssetType::parse(selector).is_some(), "rejected {selector}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown_selector() {
        assert_eq!(AssetType::parse("haiku"), None);
        assert_eq!(AssetType::parse(""), None);
        assert_eq!(AssetType::parse("Tagline"), None);
    }

    #[test]
    fn test_every_template_renders_with_startup_name() {
        let profile = sample_profile();
        for asset in ALL_ASSETS {
            let prompt = render(asset, &profile);
            assert!(!prompt.is_empty());
            assert!(prompt.contains("Nemofund"), "{asset:?} lost the name");
            assert!(!prompt.contains('{') || asset == AssetType::DeckOutline);
        }
    }

    #[test]
    fn test_empty_profile_takes_per_template_traction_defaults() {
        let empty = ProjectProfile::default();

        let thirty = render(AssetType::ThirtySec, &empty);
        assert!(thirty.contains("Traction: Early stage users, Pre-revenue"));

        let deck = render(AssetType::DeckOutline, &empty);
        assert!(deck.contains("Traction: N/A users, N/A revenue"));

        let email = render(AssetType::ColdEmail, &empty);
        assert!(email.contains("Traction: Early users, Pre-revenue"));
    }

    #[test]
    fn test_two_min_fills_why_now_and_differentiation_defaults() {
        let prompt = render(AssetType::TwoMin, &ProjectProfile::default());
        assert!(prompt.contains("Why Now: Market timing is right"));
        assert!(prompt.contains("Differentiation: Unique approach"));
        assert!(prompt.contains("Users: Early stage, Revenue: Pre-revenue, Growth: Growing"));
    }

    #[test]
    fn test_profile_values_override_defaults() {
        let profile = ProjectProfile {
            traction_users: Some("5k".to_string()),
            traction_revenue: Some("$12k MRR".to_string()),
            ..Default::default()
        };
        let prompt = render(AssetType::ThirtySec, &profile);
        assert!(prompt.contains("Traction: 5k users, $12k MRR"));
    }

    #[test]
    fn test_deck_outline_keeps_its_json_schema_example() {
        let prompt = render(AssetType::DeckOutline, &ProjectProfile::default());
        assert!(prompt.contains(r#"{ "slide": 1, "title": "string", "bullets": ["string"] }"#));
        assert!(prompt.contains("Return ONLY valid JSON."));
    }

    #[test]
    fn test_cold_email_requests_subject_line() {
        let prompt = render(AssetType::ColdEmail, &ProjectProfile::default());
        assert!(prompt.contains("Subject: [subject]"));
        assert!(prompt.contains("≤120 words"));
    }
}
