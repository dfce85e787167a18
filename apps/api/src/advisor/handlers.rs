//! Axum route handler for the AI advisor endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::advisor::prompts::{self, AdvisorType};
use crate::errors::AppError;
use crate::models::project::ProjectProfile;
use crate::normalize;
use crate::state::AppState;

/// Token ceiling for advisor completions — the JSON reports run long.
const MAX_TOKENS: u32 = 1500;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvisorRequest {
    pub project: ProjectProfile,
    pub advisor_type: String,
}

#[derive(Debug, Serialize)]
pub struct AdvisorResponse {
    pub data: Value,
}

/// POST /ai-advisor
///
/// Renders the selected advisor template, then best-effort parses the model
/// output as JSON. Parse failure is an expected branch — the advisor's fixed
/// fallback object goes out with a 200, never an error.
pub async fn handle_ai_advisor(
    State(state): State<AppState>,
    Json(request): Json<AdvisorRequest>,
) -> Result<Json<AdvisorResponse>, AppError> {
    let advisor = AdvisorType::parse(&request.advisor_type)
        .ok_or_else(|| AppError::UnknownAdvisorType(request.advisor_type.clone()))?;

    info!("Generating advisor report {advisor:?}");

    let prompt = prompts::render(advisor, &request.project);
    let raw = state.llm.complete(&prompt, MAX_TOKENS).await?;

    let data = normalize::parse_json(&raw).unwrap_or_else(|| {
        warn!("Advisor {advisor:?} output was not valid JSON; substituting fallback");
        advisor.fallback()
    });

    Ok(Json(AdvisorResponse { data }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{CompletionModel, LlmError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct StubModel {
        reply: &'static str,
        calls: AtomicU32,
    }

    #[async_trait]
    impl CompletionModel for StubModel {
        async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }
    }

    fn state_with(reply: &'static str) -> (AppState, Arc<StubModel>) {
        let stub = Arc::new(StubModel {
            reply,
            calls: AtomicU32::new(0),
        });
        (AppState { llm: stub.clone() }, stub)
    }

    fn request(advisor_type: &str) -> AdvisorRequest {
        AdvisorRequest {
            project: ProjectProfile::default(),
            advisor_type: advisor_type.to_string(),
        }
    }

    #[tokio::test]
    async fn test_fenced_json_is_normalized_into_data() {
        let (state, _) = state_with(
            "Here is the analysis:\n```json\n{\"direct_competitors\": [], \"indirect_competitors\": []}\n```",
        );
        let response = handle_ai_advisor(State(state), Json(request("competitor_analysis")))
            .await
            .unwrap();

        assert_eq!(
            response.0.data,
            json!({"direct_competitors": [], "indirect_competitors": []})
        );
    }

    #[tokio::test]
    async fn test_unparseable_output_substitutes_advisor_fallback() {
        let (state, _) = state_with("I'm sorry, I can't produce JSON today.");
        let response = handle_ai_advisor(State(state), Json(request("competitor_analysis")))
            .await
            .unwrap();

        assert_eq!(
            response.0.data,
            json!({"direct_competitors": [], "indirect_competitors": []})
        );
    }

    #[tokio::test]
    async fn test_unknown_advisor_is_rejected_without_upstream_call() {
        let (state, stub) = state_with("unused");
        let err = handle_ai_advisor(State(state), Json(request("tarot")))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UnknownAdvisorType(ref v) if v == "tarot"));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_auth_error_propagates_unmodified() {
        struct AuthFailModel;

        #[async_trait]
        impl CompletionModel for AuthFailModel {
            async fn complete(&self, _: &str, _: u32) -> Result<String, LlmError> {
                Err(LlmError::Auth)
            }
        }

        let state = AppState {
            llm: Arc::new(AuthFailModel),
        };
        let err = handle_ai_advisor(State(state), Json(request("smart_guidance")))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Llm(LlmError::Auth)));
    }
}
