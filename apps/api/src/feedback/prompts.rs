//! Prompt for scoring a founder's pitch attempt.

use crate::models::project::{field_or, ProjectProfile};

const FEEDBACK_PROMPT: &str = r#"Score this pitch on clarity, credibility, and conciseness (1–10).

Company context:
- Name: {startup_name}
- One-liner: {one_liner}
- Problem: {problem_statement}
- Solution: {solution_description}
- Target users: {target_users}
- Traction: {traction_users} users, {traction_revenue} revenue
- Ask: {ask_amount}

Pitch type: {pitch_type}

User's pitch attempt:
"""
{user_pitch}
"""

Return ONLY valid JSON in this exact format:
{
  "score": number,
  "strengths": ["strength 1", "strength 2"],
  "weaknesses": ["weakness 1", "weakness 2"],
  "rewrite_suggestion": "improved version of the pitch",
  "feedback": [
    {"category": "Clarity", "score": "good", "feedback": "1-2 sentences of specific advice"},
    {"category": "Hook", "score": "needs_work", "feedback": "1-2 sentences"},
    {"category": "Specificity", "score": "good", "feedback": "1-2 sentences"},
    {"category": "Traction", "score": "needs_work", "feedback": "1-2 sentences"},
    {"category": "Ask", "score": "missing", "feedback": "1-2 sentences"}
  ]
}"#;

/// Renders the feedback prompt from the profile plus the founder's own pitch
/// text and the pitch type they practiced.
pub fn render(project: &ProjectProfile, pitch_type: &str, user_pitch: &str) -> String {
    FEEDBACK_PROMPT
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
            field_or(&project.traction_users, "Not specified"),
        )
        .replace(
            "{traction_revenue}",
            field_or(&project.traction_revenue, "Not specified"),
        )
        .replace("{ask_amount}", field_or(&project.ask_amount, ""))
        .replace("{pitch_type}", pitch_type)
        .replace("{user_pitch}", user_pitch)
}
