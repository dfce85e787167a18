//! Best-effort JSON extraction from model output.
//!
//! Models wrap JSON in markdown fences and pad it with prose often enough that
//! strict parsing of the raw completion is a losing game. Extraction here is
//! deliberately forgiving and never errors; callers substitute an
//! endpoint-specific fallback when parsing still fails.

use serde_json::Value;

/// Removes every literal ```json / ``` fence marker and trims the result.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Returns the span from the first `{` to the last `}`, or the input unchanged
/// when no such span exists.
///
/// The scan is greedy, not balance-aware: prose between valid JSON and a stray
/// trailing brace is captured too. Consumers depend on this exact behavior —
/// do not swap in a bracket-matching parser.
pub fn extract_braced(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Fence-strips, brace-extracts, and strictly parses model output.
/// `None` when the candidate still is not valid JSON.
pub fn parse_json(raw: &str) -> Option<Value> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(extract_braced(&cleaned)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_code_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_fenced_json_parses_same_as_bare_json() {
        let bare = r#"{"direct_competitors": [{"name": "Acme"}]}"#;
        let fenced = format!("Here is the analysis:\n```json\n{bare}\n```\nLet me know!");
        assert_eq!(parse_json(bare), parse_json(&fenced));
        assert_eq!(
            parse_json(bare),
            Some(json!({"direct_competitors": [{"name": "Acme"}]}))
        );
    }

    #[test]
    fn test_extract_braced_drops_surrounding_prose() {
        let input = r#"Sure thing: {"a": 1} Hope that helps!"#;
        assert_eq!(extract_braced(input), r#"{"a": 1}"#);
    }

    #[test]
    fn test_extract_braced_is_greedy_to_last_brace() {
        // A stray closing brace after the object extends the candidate and
        // breaks the parse — the documented greedy-scan behavior.
        let input = r#"{"a": 1} and one more }"#;
        assert_eq!(extract_braced(input), input);
        assert_eq!(parse_json(input), None);
    }

    #[test]
    fn test_extract_braced_without_braces_returns_input() {
        assert_eq!(extract_braced("no json here"), "no json here");
    }

    #[test]
    fn test_parse_json_plain_prose_is_none() {
        assert_eq!(parse_json("I could not produce an answer."), None);
    }

    #[test]
    fn test_parse_json_truncated_object_is_none() {
        assert_eq!(parse_json(r#"{"direct_competitors": ["#), None);
    }
}
