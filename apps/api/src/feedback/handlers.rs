//! Axum route handler for pitch feedback.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::feedback::{prompts, synthesis};
use crate::models::project::ProjectProfile;
use crate::state::AppState;

/// Token ceiling for feedback completions.
const MAX_TOKENS: u32 = 1000;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackRequest {
    pub project: ProjectProfile,
    pub prompt_type: String,
    pub user_pitch: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: Value,
}

/// POST /pitch-feedback
///
/// Scores the founder's own pitch attempt. Model output is reshaped into the
/// fixed feedback-entry array; parse failure becomes a retry entry, not an
/// error.
pub async fn handle_pitch_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    info!("Scoring pitch attempt (type: {})", request.prompt_type);

    let prompt = prompts::render(&request.project, &request.prompt_type, &request.user_pitch);
    let raw = state.llm.complete(&prompt, MAX_TOKENS).await?;

    let feedback = synthesis::normalize_feedback(&raw);

    Ok(Json(FeedbackResponse { feedback }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{CompletionModel, LlmError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    struct StubModel {
        reply: &'static str,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CompletionModel for StubModel {
        async fn complete(&self, prompt: &str, _max_tokens: u32) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.to_string())
        }
    }

    fn state_with(reply: &'static str) -> (AppState, Arc<StubModel>) {
        let stub = Arc::new(StubModel {
            reply,
            prompts: Mutex::new(Vec::new()),
        });
        (AppState { llm: stub.clone() }, stub)
    }

    #[tokio::test]
    async fn test_feedback_array_is_returned_verbatim() {
        let (state, stub) = state_with(
            r#"{"feedback": [{"category": "Hook", "score": "good", "feedback": "Strong open."}]}"#,
        );
        let request = FeedbackRequest {
            project: ProjectProfile {
                startup_name: Some("Nemofund".to_string()),
                ..Default::default()
            },
            prompt_type: "30sec".to_string(),
            user_pitch: "We are Nemofund and we fix fundraising.".to_string(),
        };

        let response = handle_pitch_feedback(State(state), Json(request))
            .await
            .unwrap();

        assert_eq!(
            response.0.feedback,
            json!([{"category": "Hook", "score": "good", "feedback": "Strong open."}])
        );

        let prompts = stub.prompts.lock().unwrap();
        assert!(prompts[0].contains("We are Nemofund and we fix fundraising."));
        assert!(prompts[0].contains("Pitch type: 30sec"));
    }

    #[tokio::test]
    async fn test_synthesized_feedback_when_model_skips_array() {
        let (state, _) =
            state_with(r#"{"score": 9, "strengths": ["sharp"], "weaknesses": ["long"]}"#);
        let response = handle_pitch_feedback(State(state), Json(FeedbackRequest::default()))
            .await
            .unwrap();

        let entries = response.0.feedback.as_array().unwrap().clone();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0]["feedback"], "Score: 9/10");
    }

    #[tokio::test]
    async fn test_garbage_output_yields_retry_entry() {
        let (state, _) = state_with("total nonsense");
        let response = handle_pitch_feedback(State(state), Json(FeedbackRequest::default()))
            .await
            .unwrap();

        assert_eq!(
            response.0.feedback[0]["feedback"],
            "Unable to parse feedback. Please try again."
        );
    }
}
