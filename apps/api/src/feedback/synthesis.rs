//! Reshapes raw model output into the fixed feedback-entry array.
//!
//! The model is asked for a per-category `feedback` array but does not always
//! comply. When it returns only top-level `score` / `strengths` / `weaknesses`
//! / `rewrite_suggestion` fields, a 4-entry array is synthesized from those.
//! This module never fails; unparseable output becomes a single retry entry.

use serde_json::{json, Value};

use crate::normalize;

/// Numeric score at or above which the overall entry reads "good".
const GOOD_SCORE_THRESHOLD: f64 = 7.0;

/// Normalizes raw model output into the feedback array returned to the client.
pub fn normalize_feedback(raw: &str) -> Value {
    let Some(parsed) = normalize::parse_json(raw) else {
        return fallback_entries();
    };

    // The model followed instructions: pass its per-category entries through.
    if let Some(feedback) = parsed.get("feedback") {
        return feedback.clone();
    }

    synthesize_entries(&parsed)
}

fn synthesize_entries(parsed: &Value) -> Value {
    let score = parsed.get("score").and_then(Value::as_f64).unwrap_or(0.0);
    let score_label = if score >= GOOD_SCORE_THRESHOLD {
        "good"
    } else {
        "needs_work"
    };

    json!([
        {
            "category": "Overall Score",
            "score": score_label,
            "feedback": format!("Score: {}/10", display_score(parsed.get("score"))),
        },
        {
            "category": "Strengths",
            "score": "good",
            "feedback": join_list(parsed.get("strengths")),
        },
        {
            "category": "Areas to Improve",
            "score": "needs_work",
            "feedback": join_list(parsed.get("weaknesses")),
        },
        {
            "category": "Suggested Rewrite",
            "score": "good",
            "feedback": parsed
                .get("rewrite_suggestion")
                .and_then(Value::as_str)
                .unwrap_or("No rewrite provided"),
        },
    ])
}

fn display_score(score: Option<&Value>) -> String {
    match score {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => "N/A".to_string(),
    }
}

/// Joins a JSON string array with ". "; anything else joins to empty.
fn join_list(items: Option<&Value>) -> String {
    items
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(". ")
        })
        .unwrap_or_default()
}

fn fallback_entries() -> Value {
    json!([{
        "category": "Overall",
        "score": "needs_work",
        "feedback": "Unable to parse feedback. Please try again.",
    }])
}
